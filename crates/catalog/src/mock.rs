//! Generated demo catalog.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use storefront_core::ProductId;

use crate::product::{CATEGORIES, Price, Product, Rating};

/// Generate `count` products (`prod-1` ..= `prod-{count}`), in id order.
///
/// The same `seed` always yields the same catalog.
pub fn generate(count: usize, seed: u64) -> Vec<Product> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count).map(|n| generate_one(&mut rng, n)).collect()
}

fn generate_one(rng: &mut impl Rng, n: usize) -> Product {
    let category = CATEGORIES[rng.random_range(0..CATEGORIES.len())];

    // 10.00 ..= 510.00
    let price = Price::from_cents(1000 + rng.random_range(0..=50_000));
    // 3.0 ..= 5.0, one decimal.
    let rating = Rating::clamped(f64::from(rng.random_range(30u8..=50)) / 10.0);

    Product {
        id: ProductId::sequential(n),
        name: format!("Product {n}"),
        description: format!(
            "This is a high-quality {} product with excellent features and great value for money.",
            category.to_lowercase()
        ),
        price,
        category: category.to_string(),
        image_url: format!("https://placehold.co/300x300?text=Product+{n}"),
        in_stock: rng.random_bool(0.8),
        rating,
        review_count: rng.random_range(0..500),
    }
}
