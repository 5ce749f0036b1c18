//! Shopfloor
//!
//! Shopfloor is a small retail inventory and order workflow engine:
//! per-category product assortments, a shopping cart with checkout
//! reconciliation, delivery intake, stock aggregation and flat-file
//! reporting.

pub mod app;
pub mod assortment;
pub mod cart;
pub mod errlog;
pub mod fixtures;
pub mod payment;
pub mod prelude;
pub mod prices;
pub mod reports;
pub mod stock;
