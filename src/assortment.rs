//! Assortments

use std::io;

use tabled::{builder::Builder, settings::Style};
use thiserror::Error;

use crate::prices::Price;

/// Errors from assortment mutation.
///
/// These are soft errors: the caller reports them and carries on, the
/// assortment itself is left unchanged.
#[derive(Debug, Error)]
pub enum AssortmentError {
    /// An entry with this name is already stocked in the assortment.
    #[error("item {0} is already stocked")]
    Duplicate(String),

    /// No entry with this name exists in the assortment.
    #[error("item {0} not found")]
    NotFound(String),
}

/// A single stocked item: a name and its catalog price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockEntry {
    /// Item name
    pub name: String,

    /// Catalog price
    pub price: Price,
}

/// A product category's mutable catalog of stock entries.
///
/// Duplicate names model on-hand quantity: receiving a delivery of N units
/// pushes N separate entries rather than bumping a count field.
#[derive(Debug)]
pub struct Assortment {
    category: String,
    entries: Vec<StockEntry>,
}

impl Assortment {
    /// Create a new, empty assortment for the given category.
    #[must_use]
    pub fn new(category: impl Into<String>) -> Self {
        Assortment {
            category: category.into(),
            entries: Vec::new(),
        }
    }

    /// The category this assortment stocks.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Insert one entry.
    ///
    /// # Errors
    ///
    /// Returns [`AssortmentError::Duplicate`] when an entry with the same
    /// name is already stocked; nothing is inserted in that case.
    pub fn add_entry(&mut self, name: impl Into<String>, price: Price) -> Result<(), AssortmentError> {
        let name = name.into();

        if self.contains(&name) {
            return Err(AssortmentError::Duplicate(name));
        }

        self.entries.push(StockEntry { name, price });

        Ok(())
    }

    /// Remove the first entry with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`AssortmentError::NotFound`] when no entry matches; the
    /// assortment is unchanged in that case.
    pub fn remove_entry(&mut self, name: &str) -> Result<(), AssortmentError> {
        match self.take_first(name) {
            Some(_) => Ok(()),
            None => Err(AssortmentError::NotFound(name.to_owned())),
        }
    }

    /// Append `quantity` duplicate entries of `(name, price)`.
    ///
    /// Quantity is modelled as repeated entries, so a delivery of 3 units
    /// leaves 3 more entries with this name than before.
    pub fn receive_delivery(&mut self, name: &str, quantity: u32, price: Price) {
        for _ in 0..quantity {
            self.entries.push(StockEntry {
                name: name.to_owned(),
                price,
            });
        }
    }

    /// Remove and return the first entry with the given name, if any.
    pub fn take_first(&mut self, name: &str) -> Option<StockEntry> {
        let index = self.entries.iter().position(|entry| entry.name == name)?;

        Some(self.entries.remove(index))
    }

    /// Whether at least one entry with the given name is stocked.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Number of entries stocked under the given name.
    #[must_use]
    pub fn count_of(&self, name: &str) -> usize {
        self.entries.iter().filter(|entry| entry.name == name).count()
    }

    /// The stocked entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[StockEntry] {
        &self.entries
    }

    /// Get the number of entries in the assortment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the assortment is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write a read-only table listing of the assortment.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be written to `out`.
    pub fn write_listing(&self, mut out: impl io::Write) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "There are no items in the {} assortment", self.category);
        }

        let mut builder = Builder::default();
        builder.push_record(["Item", "Price"]);

        for entry in &self.entries {
            builder.push_record([entry.name.clone(), entry.price.to_string()]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());

        writeln!(out, "Items in the {} assortment:\n{table}", self.category)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn stocked() -> Assortment {
        let mut assortment = Assortment::new("Shoes");
        assortment.receive_delivery("Runner M1", 2, Price::new(15));
        assortment.receive_delivery("Boot M2", 1, Price::new(21));
        assortment
    }

    #[test]
    fn add_entry_inserts_once() -> TestResult {
        let mut assortment = Assortment::new("Shoes");

        assortment.add_entry("Runner M1", Price::new(15))?;

        assert_eq!(assortment.len(), 1);
        assert_eq!(assortment.count_of("Runner M1"), 1);

        Ok(())
    }

    #[test]
    fn add_entry_rejects_duplicate_name() -> TestResult {
        let mut assortment = Assortment::new("Shoes");
        assortment.add_entry("Runner M1", Price::new(15))?;

        let err = assortment.add_entry("Runner M1", Price::new(18));

        assert!(matches!(err, Err(AssortmentError::Duplicate(name)) if name == "Runner M1"));
        assert_eq!(assortment.len(), 1);

        Ok(())
    }

    #[test]
    fn remove_entry_removes_first_match_only() -> TestResult {
        let mut assortment = stocked();

        assortment.remove_entry("Runner M1")?;

        assert_eq!(assortment.count_of("Runner M1"), 1);
        assert_eq!(assortment.len(), 2);

        Ok(())
    }

    #[test]
    fn remove_absent_entry_is_a_reported_no_op() {
        let mut assortment = stocked();

        let err = assortment.remove_entry("Sandal M9");

        assert!(matches!(err, Err(AssortmentError::NotFound(name)) if name == "Sandal M9"));
        assert_eq!(assortment.len(), 3);
    }

    #[test]
    fn add_remove_sequences_leave_net_effect() -> TestResult {
        let mut assortment = Assortment::new("Pants");

        assortment.add_entry("Chino M3", Price::new(13))?;
        assortment.add_entry("Cargo M4", Price::new(7))?;
        assortment.remove_entry("Chino M3")?;

        assert_eq!(assortment.len(), 1);
        assert!(assortment.contains("Cargo M4"));
        assert!(!assortment.contains("Chino M3"));

        Ok(())
    }

    #[test]
    fn receive_delivery_appends_quantity_entries() {
        let mut assortment = stocked();

        assortment.receive_delivery("Runner M1", 3, Price::new(15));

        assert_eq!(assortment.count_of("Runner M1"), 5);
    }

    #[test]
    fn take_first_removes_one_occurrence() {
        let mut assortment = stocked();

        let taken = assortment.take_first("Runner M1");

        assert_eq!(taken.map(|entry| entry.name), Some("Runner M1".to_owned()));
        assert_eq!(assortment.count_of("Runner M1"), 1);
    }

    #[test]
    fn take_first_on_absent_name_changes_nothing() {
        let mut assortment = stocked();

        assert!(assortment.take_first("Sandal M9").is_none());
        assert_eq!(assortment.len(), 3);
    }

    #[test]
    fn listing_of_empty_assortment_reports_no_items() -> TestResult {
        let assortment = Assortment::new("Accessories");
        let mut out = Vec::new();

        assortment.write_listing(&mut out)?;

        let rendered = String::from_utf8(out)?;
        assert!(
            rendered.contains("no items"),
            "expected empty listing message, got: {rendered}"
        );

        Ok(())
    }

    #[test]
    fn listing_contains_every_entry() -> TestResult {
        let assortment = stocked();
        let mut out = Vec::new();

        assortment.write_listing(&mut out)?;

        let rendered = String::from_utf8(out)?;
        assert!(rendered.contains("Runner M1"), "missing entry in: {rendered}");
        assert!(rendered.contains("Boot M2"), "missing entry in: {rendered}");

        Ok(())
    }
}
