//! Catalog products with banded stock levels and low-skewed prices.

use dashboard_seed_core::{Price, ProductId};
use rand::Rng;
use rand::seq::IndexedRandom;

use super::{GenerateError, pick};
use crate::models::{Product, Timestamps};
use crate::reference::CATALOG;

/// Highest price a product can get, in cents.
pub const MAX_PRICE_CENTS: u32 = 5_000;

/// A stock range and how often it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockBand {
    pub weight: u32,
    pub min: u32,
    pub max: u32,
}

/// Low (20%), moderate (60%) and high (20%) stock.
pub const STOCK_BANDS: [StockBand; 3] = [
    StockBand {
        weight: 20,
        min: 0,
        max: 20,
    },
    StockBand {
        weight: 60,
        min: 21,
        max: 100,
    },
    StockBand {
        weight: 20,
        min: 101,
        max: 250,
    },
];

/// Draw a stock level: pick a band by weight, then a value within it.
///
/// # Errors
///
/// Returns `GenerateError::Weights` if the band weights are unusable.
pub fn stock<R: Rng + ?Sized>(rng: &mut R) -> Result<u32, GenerateError> {
    let band = STOCK_BANDS
        .choose_weighted(rng, |band| band.weight)
        .map_err(|e| GenerateError::Weights(e.to_string()))?;
    Ok(rng.random_range(band.min..=band.max))
}

/// Draw a price from Beta(2, 5) scaled to 50.00, rounded to cents and at
/// least 0.01.
///
/// Beta(2, 5) is the second-smallest of six uniform draws.
pub fn price<R: Rng + ?Sized>(rng: &mut R) -> Price {
    let mut draws: [f64; 6] = std::array::from_fn(|_| rng.random::<f64>());
    draws.sort_by(f64::total_cmp);
    let beta = draws.get(1).copied().unwrap_or_default();

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )] // beta is in [0, 1), so the product fits in u32
    let cents = (beta * f64::from(MAX_PRICE_CENTS)).round() as u32;
    Price::from_cents(cents.clamp(1, MAX_PRICE_CENTS))
}

/// Generate `count` products sharing one image.
///
/// # Errors
///
/// Returns `GenerateError` if a reference table is empty or the stock
/// weights are invalid.
pub fn generate_products<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    image: &str,
) -> Result<Vec<Product>, GenerateError> {
    (0..count)
        .map(|_| {
            let category = pick(rng, CATALOG, "CATALOG")?;
            let item = pick(rng, category.items, category.name)?;
            Ok(Product {
                id: ProductId::generate(),
                name: item.name.to_string(),
                category: category.name.to_string(),
                price: price(rng),
                stock: stock(rng)?,
                description: item.description.to_string(),
                image: image.to_string(),
                timestamps: Timestamps::now(),
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_generate_products() {
        let mut rng = StdRng::seed_from_u64(21);
        let products = generate_products(&mut rng, 300, "data:image/jpeg;base64,AA==").unwrap();

        assert_eq!(products.len(), 300);
        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 300);

        for product in &products {
            let category = CATALOG.iter().find(|c| c.name == product.category).unwrap();
            let item = category.items.iter().find(|i| i.name == product.name).unwrap();
            assert_eq!(product.description, item.description);
            assert_eq!(product.image, "data:image/jpeg;base64,AA==");
            assert!(product.stock <= 250);
        }
    }

    #[test]
    fn test_prices_in_range_and_skewed_low() {
        let mut rng = StdRng::seed_from_u64(5);
        let prices: Vec<Price> = (0..2_000).map(|_| price(&mut rng)).collect();

        let min = Price::from_cents(1);
        let max = Price::from_cents(MAX_PRICE_CENTS);
        for p in &prices {
            assert!(*p >= min && *p <= max, "{p}");
            assert!(p.amount().scale() <= 2, "{p}");
        }

        // Beta(2, 5) has mean 2/7, so the average sits near 14.29
        let total: Decimal = prices.iter().map(Price::amount).sum();
        let mean = total / Decimal::from(prices.len());
        assert!(mean > Decimal::from(11) && mean < Decimal::from(18), "{mean}");
    }

    #[test]
    fn test_stock_bands() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut counts = [0usize; 3];
        for _ in 0..5_000 {
            let stock = stock(&mut rng).unwrap();
            let band = STOCK_BANDS
                .iter()
                .position(|b| (b.min..=b.max).contains(&stock))
                .unwrap();
            counts[band] += 1;
        }

        // 20/60/20 split with generous tolerance
        assert!((800..1_200).contains(&counts[0]), "{counts:?}");
        assert!((2_700..3_300).contains(&counts[1]), "{counts:?}");
        assert!((800..1_200).contains(&counts[2]), "{counts:?}");
    }

    #[test]
    fn test_zero_products() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_products(&mut rng, 0, "x").unwrap().is_empty());
    }
}
