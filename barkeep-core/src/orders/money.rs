//! Money calculation utilities using rust_decimal for precision
//!
//! Menu prices are stored as `f64`. Totals are summed as `Decimal` and
//! converted back to `f64` rounded to 2 decimal places.

use rust_decimal::prelude::*;
use shared::error::{AppError, ErrorCode};
use shared::models::{MenuItem, Order, find_menu_item};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed menu item price
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Validate a menu item price: finite, non-negative, at most [`MAX_PRICE`]
pub fn validate_price(price: f64) -> Result<(), AppError> {
    let problem = if !price.is_finite() {
        "must be a finite number"
    } else if price < 0.0 {
        "must be non-negative"
    } else if price > MAX_PRICE {
        "exceeds the maximum allowed"
    } else {
        return Ok(());
    };
    Err(
        AppError::with_message(ErrorCode::MenuItemInvalidPrice, format!("Price {problem}"))
            .with_detail("max", MAX_PRICE),
    )
}

/// Convert f64 to Decimal for calculation
///
/// Non-finite values (NaN, infinity) count as zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::warn!(value, "Non-finite price treated as zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Line total for one menu item, `None` on overflow
pub fn line_total(item: &MenuItem, qty: u32) -> Option<Decimal> {
    to_decimal(item.price).checked_mul(Decimal::from(qty))
}

/// Order total: `price * qty` over lines whose menu item still exists
///
/// Lines pointing at deleted menu items contribute nothing. Overflow
/// saturates at `Decimal::MAX`.
pub fn order_total(order: &Order, menu: &[MenuItem]) -> f64 {
    let total = order
        .items
        .iter()
        .filter_map(|line| find_menu_item(menu, &line.id).map(|item| (item, line.qty)))
        .fold(Decimal::ZERO, |acc, (item, qty)| {
            line_total(item, qty)
                .and_then(|line| acc.checked_add(line))
                .unwrap_or_else(|| {
                    tracing::warn!(menu_item_id = %item.id, qty, "Order total overflowed");
                    Decimal::MAX
                })
        });
    to_f64(total)
}
