//! Sample catalog data
//!
//! Random startup population for the five product categories, seedable for
//! reproducible runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::assortment::Assortment;
use crate::prices::Price;

/// The five product categories created at startup.
pub const CATEGORIES: [&str; 5] = ["Shoes", "T-Shirt", "Pants", "Pyjama", "Accessories"];

const BRANDS: [&str; 6] = ["NIKE", "ADIDAS", "UNDER ARMOUR", "PIERONE", "GUCCI", "GUESS"];
const STYLES: [&str; 6] = ["BAGGY", "SHORT", "SHOES", "JACKET", "SHIRT", "PANTS"];
const MODELS: [&str; 6] = ["M1", "M2", "M3", "M4", "M5", "M6"];
const PRICES: [u64; 8] = [1, 3, 5, 7, 13, 15, 18, 21];

/// The five startup assortments, empty.
#[must_use]
pub fn empty_assortments() -> Vec<Assortment> {
    CATEGORIES.into_iter().map(Assortment::new).collect()
}

/// The five startup assortments, each populated with `per_category`
/// uniquely named random items.
///
/// Generated names draw from a finite brand/style/model pool, so
/// `per_category` is capped at the pool size.
///
/// A fixed `seed` makes the generated catalog reproducible; `None` seeds
/// from entropy.
#[must_use]
pub fn sample_assortments(per_category: usize, seed: Option<u64>) -> Vec<Assortment> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut assortments = empty_assortments();

    for assortment in &mut assortments {
        populate(assortment, per_category, &mut rng);
    }

    assortments
}

fn populate(assortment: &mut Assortment, count: usize, rng: &mut StdRng) {
    let category = assortment.category().to_uppercase();

    // The unique-name retry below only terminates while unused names remain.
    let count = count.min(BRANDS.len() * STYLES.len() * MODELS.len());

    for _ in 0..count {
        let name = loop {
            let candidate = format!(
                "{} {} {} {}",
                pick(&BRANDS, rng),
                pick(&STYLES, rng),
                pick(&MODELS, rng),
                category
            );

            if !assortment.contains(&candidate) {
                break candidate;
            }
        };

        let price = Price::new(*pick(&PRICES, rng));

        if let Err(error) = assortment.add_entry(name, price) {
            tracing::debug!(%error, "skipped generated sample item");
        }
    }
}

fn pick<'a, T>(values: &'a [T], rng: &mut StdRng) -> &'a T {
    &values[rng.gen_range(0..values.len())]
}
