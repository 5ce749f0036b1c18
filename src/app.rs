//! Application state
//!
//! [`App`] owns every long-lived piece of a run: the five assortments, the
//! shopping cart and the error log. It is constructed eagerly before the
//! menu loop starts and passed by reference to the console driver; there
//! is no hidden global state.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::assortment::{Assortment, AssortmentError};
use crate::cart::{CartError, Invoice, ShoppingCart};
use crate::errlog::ErrorLog;
use crate::payment::PaymentError;
use crate::prices::Price;
use crate::{reports, stock};

/// Errors from application-level operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// An I/O failure around a report writer or the console.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A soft assortment error, reported to the user.
    #[error(transparent)]
    Assortment(#[from] AssortmentError),

    /// A soft cart error, reported to the user.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// A soft payment error, reported to the user.
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// A delivery or lookup addressed an assortment position that does not
    /// exist.
    #[error("no assortment at position {0}")]
    UnknownAssortment(usize),
}

/// Top-level application state.
#[derive(Debug)]
pub struct App {
    assortments: Vec<Assortment>,
    cart: ShoppingCart,
    error_log: ErrorLog,
    reports_dir: PathBuf,
}

impl App {
    /// Build the application state around the given assortments, writing
    /// reports and the error log under `reports_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error when the error log cannot be opened; startup does
    /// not proceed in that case.
    pub fn new(assortments: Vec<Assortment>, reports_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let reports_dir = reports_dir.into();
        let error_log = ErrorLog::open(&reports_dir)?;

        Ok(App {
            assortments,
            cart: ShoppingCart::new(),
            error_log,
            reports_dir,
        })
    }

    /// The assortments, in their fixed checkout scan order.
    #[must_use]
    pub fn assortments(&self) -> &[Assortment] {
        &self.assortments
    }

    /// Mutable access to the assortment at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownAssortment`] when the position is out of
    /// range.
    pub fn assortment_mut(&mut self, position: usize) -> Result<&mut Assortment, AppError> {
        self.assortments
            .get_mut(position)
            .ok_or(AppError::UnknownAssortment(position))
    }

    /// The shopping cart.
    #[must_use]
    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    /// Mutable access to the shopping cart.
    pub fn cart_mut(&mut self) -> &mut ShoppingCart {
        &mut self.cart
    }

    /// The failure journal.
    #[must_use]
    pub fn error_log(&self) -> &ErrorLog {
        &self.error_log
    }

    /// Delivery intake: stock `quantity` units of `(name, price)` into the
    /// assortment at `position` and overwrite the delivery report.
    ///
    /// # Errors
    ///
    /// Returns an error when the position is out of range or the report
    /// cannot be written; the stock mutation stands even if the report
    /// write fails afterwards.
    pub fn receive_delivery(
        &mut self,
        position: usize,
        name: &str,
        quantity: u32,
        price: Price,
    ) -> Result<PathBuf, AppError> {
        self.assortment_mut(position)?
            .receive_delivery(name, quantity, price);

        let path = reports::write_delivery(&self.reports_dir, name, quantity)?;

        Ok(path)
    }

    /// Check out the cart against all assortments and overwrite the invoice
    /// file with the fulfilled lines.
    ///
    /// # Errors
    ///
    /// Returns an error when the invoice file cannot be written; the cart
    /// and assortment mutations stand regardless.
    pub fn checkout(&mut self) -> Result<Invoice, AppError> {
        let invoice = self.cart.checkout(&mut self.assortments);

        reports::write_invoice(&self.reports_dir, &invoice)?;

        Ok(invoice)
    }

    /// Merge all stock and overwrite the dated stock-on-hand report.
    ///
    /// # Errors
    ///
    /// Returns an error when the report cannot be written.
    pub fn generate_stock_file(&self) -> Result<PathBuf, AppError> {
        let merged = stock::merge_stock(&self.assortments);

        Ok(reports::write_stock(&self.reports_dir, &merged)?)
    }

    /// Overwrite the reorder request with every item name present in at
    /// least `threshold` assortments.
    ///
    /// # Errors
    ///
    /// Returns an error when the report cannot be written.
    pub fn place_order(&self, threshold: usize) -> Result<(PathBuf, Vec<(String, usize)>), AppError> {
        let candidates = stock::reorder_candidates(&self.assortments, threshold);

        let path = reports::write_order_request(&self.reports_dir, &candidates)?;

        Ok((path, candidates))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use testresult::TestResult;

    use crate::fixtures;

    use super::*;

    fn app_in(dir: &std::path::Path) -> io::Result<App> {
        App::new(fixtures::empty_assortments(), dir)
    }

    #[test]
    fn delivery_stocks_the_assortment_and_writes_the_report() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut app = app_in(dir.path())?;

        let path = app.receive_delivery(0, "Runner M1", 3, Price::new(15))?;

        let first = app.assortments().first();
        assert_eq!(first.map(|a| a.count_of("Runner M1")), Some(3));
        assert_eq!(fs::read_to_string(path)?, "Runner M1 3");

        Ok(())
    }

    #[test]
    fn delivery_to_an_unknown_position_errors() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut app = app_in(dir.path())?;

        let err = app.receive_delivery(9, "Runner M1", 3, Price::new(15));

        assert!(matches!(err, Err(AppError::UnknownAssortment(9))));

        Ok(())
    }

    #[test]
    fn place_order_writes_only_candidates_at_threshold() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut app = app_in(dir.path())?;

        // X present in three assortments, Y in two.
        for position in 0..3 {
            app.assortment_mut(position)?.receive_delivery("X", 1, Price::new(5));
        }
        for position in 0..2 {
            app.assortment_mut(position)?.receive_delivery("Y", 1, Price::new(5));
        }

        let (path, candidates) = app.place_order(3)?;

        assert_eq!(candidates, vec![("X".to_owned(), 3)]);
        assert_eq!(fs::read_to_string(path)?, "Item: X, Count: 3\n");

        Ok(())
    }

    #[test]
    fn stock_file_covers_every_distinct_name() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut app = app_in(dir.path())?;

        app.assortment_mut(0)?.receive_delivery("Runner M1", 2, Price::new(15));
        app.assortment_mut(1)?.receive_delivery("Tee M2", 1, Price::new(7));

        let path = app.generate_stock_file()?;

        assert_eq!(
            fs::read_to_string(path)?,
            "Product: Runner M1, Price: 15\nProduct: Tee M2, Price: 7\n"
        );

        Ok(())
    }
}
