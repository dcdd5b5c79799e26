//! Orders spread across a month window.
//!
//! Generation runs in two phases. First `target` orders are dated in random
//! months of the window. Then, while any month has fewer than
//! `min_per_month` orders, more orders are drawn from those months only.
//! The batch therefore holds at least `target` orders, every month meets the
//! minimum, and at most `target + months * min_per_month` orders are made.

use std::collections::HashMap;

use chrono::NaiveDate;
use dashboard_seed_core::{OrderId, OrderStatus};
use rand::Rng;
use rand::seq::SliceRandom;

use super::window::{OrderWindow, YearMonth};
use super::{GenerateError, person, pick};
use crate::models::{Order, OrderLine, ProductRef, Timestamps};

/// Largest quantity on an order line.
pub const MAX_QUANTITY: u32 = 5;

/// Largest batch a plan may produce.
pub const MAX_BATCH: usize = 1_000_000;

/// How many orders to make and where to date them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderPlan {
    /// Orders to make before only per-month top-ups are drawn
    pub target: usize,
    /// Orders every month of the window must end up with
    pub min_per_month: usize,
    pub window: OrderWindow,
}

impl OrderPlan {
    /// Upper bound on the batch size, `None` if it overflows `usize`.
    #[must_use]
    pub fn max_orders(&self) -> Option<usize> {
        self.window
            .len()
            .checked_mul(self.min_per_month)?
            .checked_add(self.target)
    }

    /// The upper bound, checked against [`MAX_BATCH`].
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::PlanTooLarge` if the bound overflows or
    /// exceeds [`MAX_BATCH`].
    pub fn checked_max_orders(&self) -> Result<usize, GenerateError> {
        self.max_orders()
            .filter(|max| *max <= MAX_BATCH)
            .ok_or(GenerateError::PlanTooLarge { limit: MAX_BATCH })
    }
}

impl Default for OrderPlan {
    fn default() -> Self {
        Self {
            target: 1_000,
            min_per_month: 30,
            window: OrderWindow::default(),
        }
    }
}

/// A random day within `month`.
///
/// # Errors
///
/// Returns `GenerateError::InvalidDate` if the drawn day doesn't exist.
pub fn date_in<R: Rng + ?Sized>(rng: &mut R, month: YearMonth) -> Result<NaiveDate, GenerateError> {
    let day = rng.random_range(1..=month.days());
    month.day(day).ok_or(GenerateError::InvalidDate { month, day })
}

/// One order for a random product, dated in `month`.
///
/// # Errors
///
/// Returns `GenerateError` if `products` is empty.
pub fn random_order<R: Rng + ?Sized>(
    rng: &mut R,
    products: &[ProductRef],
    month: YearMonth,
) -> Result<Order, GenerateError> {
    let product = pick(rng, products, "products").map_err(|_| GenerateError::NoProducts)?;
    let quantity = rng.random_range(1..=MAX_QUANTITY);

    Ok(Order {
        id: OrderId::generate(),
        customer: person::customer_name(rng)?,
        date: date_in(rng, month)?,
        total: product.price.times(quantity),
        status: *pick(rng, &OrderStatus::ALL, "OrderStatus::ALL")?,
        products: vec![OrderLine {
            product_name: product.name.clone(),
            product_id: product.id.clone(),
            product_quantity: quantity,
        }],
        timestamps: Timestamps::now(),
    })
}

/// Generate orders for `products` according to `plan`.
///
/// The result is shuffled so top-up orders aren't grouped at the end.
///
/// # Errors
///
/// Returns `GenerateError::NoProducts` if `products` is empty, or
/// `GenerateError::PlanTooLarge` if the plan could exceed [`MAX_BATCH`].
pub fn generate_orders<R: Rng + ?Sized>(
    rng: &mut R,
    products: &[ProductRef],
    plan: &OrderPlan,
) -> Result<Vec<Order>, GenerateError> {
    if products.is_empty() {
        return Err(GenerateError::NoProducts);
    }
    let max_orders = plan.checked_max_orders()?;

    let months = plan.window.months();
    let mut per_month: HashMap<YearMonth, usize> = months.iter().map(|m| (*m, 0)).collect();
    let mut orders = Vec::with_capacity(max_orders);

    while orders.len() < plan.target {
        let month = *pick(rng, &months, "months")?;
        orders.push(random_order(rng, products, month)?);
        *per_month.entry(month).or_default() += 1;
    }

    loop {
        let deficient: Vec<YearMonth> = months
            .iter()
            .copied()
            .filter(|m| per_month.get(m).copied().unwrap_or_default() < plan.min_per_month)
            .collect();
        let Some(month) = pick(rng, &deficient, "deficient").ok().copied() else {
            break;
        };
        orders.push(random_order(rng, products, month)?);
        *per_month.entry(month).or_default() += 1;
    }

    orders.shuffle(rng);
    Ok(orders)
}
