//! Shopfloor prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    app::{App, AppError},
    assortment::{Assortment, AssortmentError, StockEntry},
    cart::{CartError, CartLine, Invoice, InvoiceLine, ShoppingCart},
    errlog::ErrorLog,
    fixtures::{CATEGORIES, empty_assortments, sample_assortments},
    payment::{Order, PaymentError, PaymentMethod},
    prices::Price,
    stock::{merge_stock, presence_counts, reorder_candidates},
};
