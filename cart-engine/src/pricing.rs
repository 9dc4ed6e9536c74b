//! Price calculation using rust_decimal for precision
//!
//! All monetary calculations are done with `Decimal` internally and
//! converted to `f64` at the model/serialization edges. Accumulation
//! across lines stays unrounded; rounding to 2 decimal places happens
//! only at presentation boundaries via [`round_display`].

use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::*;
use shared::models::{CartLine, ExtraOption};

/// Rounding for display values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert an f64 monetary value to Decimal, clamping anything that is
/// not a finite non-negative number to zero so NaN/Infinity/negative
/// prices never propagate into totals.
fn to_decimal(value: f64) -> Decimal {
    if !value.is_finite() || value < 0.0 {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Per-unit price: base price plus the sum of selected extras
pub fn unit_price(base_price: f64, selected_extras: &[ExtraOption]) -> f64 {
    let extras_total: Decimal = selected_extras.iter().map(|e| to_decimal(e.price)).sum();
    (to_decimal(base_price) + extras_total)
        .to_f64()
        .unwrap_or(0.0)
}

/// Total for one line: unit price times quantity
pub fn line_total(unit_price: f64, quantity: i32) -> f64 {
    (to_decimal(unit_price) * Decimal::from(quantity.max(0)))
        .to_f64()
        .unwrap_or(0.0)
}

/// Sum of unit_price * quantity across all lines (unrounded)
pub fn cart_subtotal(lines: &[CartLine]) -> f64 {
    lines
        .iter()
        .map(|l| to_decimal(l.unit_price) * Decimal::from(l.quantity.max(0)))
        .sum::<Decimal>()
        .to_f64()
        .unwrap_or(0.0)
}

/// Sum of quantity across all lines
pub fn cart_item_count(lines: &[CartLine]) -> i32 {
    lines.iter().map(|l| l.quantity).sum()
}

/// Round a monetary value for display (2 dp, half-up).
///
/// Presentation only; never feed the result back into accumulation.
pub fn round_display(value: f64) -> f64 {
    to_decimal(value)
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}
