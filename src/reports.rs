//! Report files
//!
//! Every report is a flat, human-readable text file written relative to a
//! base directory (the process working directory in the console driver).
//! All writers here truncate and replace their target, so only the latest
//! report is ever on disk; the append-only error log lives in
//! [`crate::errlog`].

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::assortment::StockEntry;
use crate::cart::Invoice;

/// File name with a `_<yyyymmdd>` date suffix.
fn dated(prefix: &str) -> String {
    format!("{prefix}_{}.txt", Local::now().format("%Y%m%d"))
}

/// Overwrite the dated delivery report with the latest received delivery.
///
/// The file holds a single line, `"<name> <quantity>"`; prior deliveries
/// are replaced, not appended.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_delivery(dir: &Path, name: &str, quantity: u32) -> io::Result<PathBuf> {
    let path = dir.join(dated("Deliveries"));

    let mut file = File::create(&path)?;
    write!(file, "{name} {quantity}")?;

    Ok(path)
}

/// Overwrite `Invoices.txt` with one line per fulfilled invoice line.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_invoice(dir: &Path, invoice: &Invoice) -> io::Result<PathBuf> {
    let path = dir.join("Invoices.txt");

    let mut file = File::create(&path)?;
    for line in invoice.lines() {
        writeln!(file, "Item sold: {}, Quantity {}", line.name, line.quantity)?;
    }

    Ok(path)
}

/// Overwrite the dated stock-on-hand report with the merged stock list.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_stock(dir: &Path, merged: &[StockEntry]) -> io::Result<PathBuf> {
    let path = dir.join(dated("StockOnHand"));

    let mut file = File::create(&path)?;
    for entry in merged {
        writeln!(file, "Product: {}, Price: {}", entry.name, entry.price)?;
    }

    Ok(path)
}

/// Overwrite `PlaceAnOrder.txt` with the reorder candidates and their
/// presence counts.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_order_request(dir: &Path, candidates: &[(String, usize)]) -> io::Result<PathBuf> {
    let path = dir.join("PlaceAnOrder.txt");

    let mut file = File::create(&path)?;
    for (name, count) in candidates {
        writeln!(file, "Item: {name}, Count: {count}")?;
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use testresult::TestResult;

    use crate::assortment::Assortment;
    use crate::cart::{CartLine, ShoppingCart};
    use crate::prices::Price;

    use super::*;

    #[test]
    fn delivery_report_holds_only_the_latest_delivery() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_delivery(dir.path(), "Runner M1", 3)?;
        let path = write_delivery(dir.path(), "Boot M2", 5)?;

        assert_eq!(fs::read_to_string(path)?, "Boot M2 5");

        Ok(())
    }

    #[test]
    fn delivery_report_name_carries_the_date() -> TestResult {
        let dir = tempfile::tempdir()?;

        let path = write_delivery(dir.path(), "Runner M1", 3)?;

        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        assert!(
            file_name.starts_with("Deliveries_") && file_name.ends_with(".txt"),
            "unexpected file name: {file_name}"
        );
        assert_eq!(file_name.len(), "Deliveries_20240101.txt".len());

        Ok(())
    }

    #[test]
    fn invoice_file_lists_each_fulfilled_line() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut cart = ShoppingCart::new();
        cart.add_line(CartLine {
            name: "Runner M1".to_owned(),
            quantity: 2,
            net_price: rust_decimal::Decimal::from(20),
            tax: rust_decimal::Decimal::from(5),
            gross_price: rust_decimal::Decimal::from(25),
        });
        let mut shoes = Assortment::new("Shoes");
        shoes.receive_delivery("Runner M1", 2, Price::new(15));
        let invoice = cart.checkout(std::slice::from_mut(&mut shoes));

        let path = write_invoice(dir.path(), &invoice)?;

        assert_eq!(fs::read_to_string(path)?, "Item sold: Runner M1, Quantity 2\n");

        Ok(())
    }

    #[test]
    fn invoice_file_is_overwritten_per_checkout() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_invoice(dir.path(), &Invoice::default())?;
        let path = write_invoice(dir.path(), &Invoice::default())?;

        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("Invoices.txt"));
        assert_eq!(fs::read_to_string(path)?, "");

        Ok(())
    }

    #[test]
    fn stock_file_lists_each_merged_entry() -> TestResult {
        let dir = tempfile::tempdir()?;
        let merged = vec![
            StockEntry {
                name: "Runner M1".to_owned(),
                price: Price::new(15),
            },
            StockEntry {
                name: "Chino M3".to_owned(),
                price: Price::new(13),
            },
        ];

        let path = write_stock(dir.path(), &merged)?;

        assert_eq!(
            fs::read_to_string(path)?,
            "Product: Runner M1, Price: 15\nProduct: Chino M3, Price: 13\n"
        );

        Ok(())
    }

    #[test]
    fn order_request_lists_each_candidate_with_count() -> TestResult {
        let dir = tempfile::tempdir()?;
        let candidates = vec![("Belt M5".to_owned(), 3)];

        let path = write_order_request(dir.path(), &candidates)?;

        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("PlaceAnOrder.txt"));
        assert_eq!(fs::read_to_string(path)?, "Item: Belt M5, Count: 3\n");

        Ok(())
    }
}
