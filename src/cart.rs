//! Shopping cart

use std::io;

use rust_decimal::Decimal;
use smallvec::SmallVec;
use tabled::{builder::Builder, settings::Style};
use thiserror::Error;

use crate::assortment::Assortment;

/// Errors from cart mutation.
#[derive(Debug, Error)]
pub enum CartError {
    /// No cart line with this product name exists.
    #[error("product {0} is not in the cart")]
    LineNotFound(String),
}

/// One line in the shopping cart.
///
/// The price fields are independent of any assortment's catalog price;
/// checkout matches lines to stock by name only.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Product name, used for first-match lookups
    pub name: String,

    /// Requested quantity
    pub quantity: u32,

    /// Net price
    pub net_price: Decimal,

    /// Tax amount
    pub tax: Decimal,

    /// Gross price
    pub gross_price: Decimal,
}

/// A single fulfilled-item record on an invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceLine {
    /// Product name
    pub name: String,

    /// Number of matching stock removals performed during checkout.
    ///
    /// This is the fulfilled count, not the requested quantity; the two can
    /// diverge when stock runs short or the name is stocked in several
    /// assortments.
    pub quantity: u32,
}

/// The transient result of a checkout, serialized to the invoice file and
/// not retained afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Invoice {
    lines: Vec<InvoiceLine>,
}

impl Invoice {
    /// The fulfilled lines, in cart order.
    #[must_use]
    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    /// Check if the invoice has no fulfilled lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Credit `fulfilled` removals to `name`, aggregating into an existing
    /// line when two cart lines share a name.
    fn credit(&mut self, name: &str, fulfilled: u32) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.name == name) {
            line.quantity += fulfilled;
        } else {
            self.lines.push(InvoiceLine {
                name: name.to_owned(),
                quantity: fulfilled,
            });
        }
    }
}

/// The shopping cart: an ordered list of cart lines.
#[derive(Debug, Default)]
pub struct ShoppingCart {
    lines: Vec<CartLine>,
}

impl ShoppingCart {
    /// Create a new, empty cart.
    #[must_use]
    pub fn new() -> Self {
        ShoppingCart { lines: Vec::new() }
    }

    /// Append a line to the cart.
    pub fn add_line(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    /// Remove the first line matching the given product name.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] when no line matches.
    pub fn remove_line(&mut self, name: &str) -> Result<CartLine, CartError> {
        let index = self.position_of(name)?;

        Ok(self.lines.remove(index))
    }

    /// Set the quantity of the first line matching the given product name.
    ///
    /// Locate-then-mutate: the line is found by index and its quantity field
    /// is updated in place.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] when no line matches.
    pub fn change_quantity(&mut self, name: &str, quantity: u32) -> Result<(), CartError> {
        let index = self.position_of(name)?;

        if let Some(line) = self.lines.get_mut(index) {
            line.quantity = quantity;
        }

        Ok(())
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Reconcile the cart against the assortments, in their given order.
    ///
    /// For each line, for each unit of its requested quantity, every
    /// assortment still stocking the name loses its first matching entry
    /// (at most one removal per assortment per unit). A line with any
    /// removal at all is fulfilled: it leaves the cart and appears on the
    /// invoice with its total removal count. Lines with no removals stay in
    /// the cart untouched.
    ///
    /// The fulfilled count can exceed the requested quantity (the name is
    /// stocked in several assortments) or fall short of it (stock ran out);
    /// no reconciliation between the two is attempted.
    pub fn checkout(&mut self, assortments: &mut [Assortment]) -> Invoice {
        let mut invoice = Invoice::default();
        let mut fulfilled_lines: SmallVec<[usize; 10]> = SmallVec::new();

        for (index, line) in self.lines.iter().enumerate() {
            let mut fulfilled = 0u32;

            for _unit in 0..line.quantity {
                for assortment in assortments.iter_mut() {
                    if assortment.take_first(&line.name).is_some() {
                        fulfilled += 1;
                    }
                }
            }

            if fulfilled > 0 {
                fulfilled_lines.push(index);
                invoice.credit(&line.name, fulfilled);
            }
        }

        for index in fulfilled_lines.iter().rev() {
            self.lines.remove(*index);
        }

        invoice
    }

    /// Write a table listing of the cart contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be written to `out`.
    pub fn write_listing(&self, mut out: impl io::Write) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "The shopping cart is empty");
        }

        let mut builder = Builder::default();
        builder.push_record(["Product", "Quantity", "Net Price", "Tax", "Gross Price"]);

        for line in &self.lines {
            builder.push_record([
                line.name.clone(),
                line.quantity.to_string(),
                line.net_price.to_string(),
                line.tax.to_string(),
                line.gross_price.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());

        writeln!(out, "Shopping cart:\n{table}")
    }

    fn position_of(&self, name: &str) -> Result<usize, CartError> {
        self.lines
            .iter()
            .position(|line| line.name == name)
            .ok_or_else(|| CartError::LineNotFound(name.to_owned()))
    }
}
