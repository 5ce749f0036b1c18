//! Stock aggregation

use rustc_hash::{FxHashMap, FxHashSet};

use crate::assortment::{Assortment, StockEntry};

/// Union the assortments' entries into one merged stock list.
///
/// Scans the assortments in their given order; the first entry seen for a
/// name wins and later occurrences of the same name (within or across
/// assortments) are silently dropped.
#[must_use]
pub fn merge_stock(assortments: &[Assortment]) -> Vec<StockEntry> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut merged = Vec::new();

    for assortment in assortments {
        for entry in assortment.entries() {
            if seen.insert(&entry.name) {
                merged.push(entry.clone());
            }
        }
    }

    merged
}

/// Count, per item name, how many assortments stock at least one occurrence.
///
/// This is a presence count across categories, not a quantity on hand:
/// repeated entries within one assortment count once. Names appear in
/// first-seen scan order.
#[must_use]
pub fn presence_counts(assortments: &[Assortment]) -> Vec<(String, usize)> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();

    for assortment in assortments {
        let mut counted_here: FxHashSet<&str> = FxHashSet::default();

        for entry in assortment.entries() {
            if !counted_here.insert(&entry.name) {
                continue;
            }

            if let Some(count) = counts.get_mut(entry.name.as_str()) {
                *count += 1;
            } else {
                counts.insert(&entry.name, 1);
                order.push(&entry.name);
            }
        }
    }

    order
        .into_iter()
        .map(|name| {
            let count = counts.get(name).copied().unwrap_or(0);
            (name.to_owned(), count)
        })
        .collect()
}

/// Names present in at least `threshold` assortments, with their presence
/// counts, in first-seen scan order.
#[must_use]
pub fn reorder_candidates(assortments: &[Assortment], threshold: usize) -> Vec<(String, usize)> {
    presence_counts(assortments)
        .into_iter()
        .filter(|(_, count)| *count >= threshold)
        .collect()
}
