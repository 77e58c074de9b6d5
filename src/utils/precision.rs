//! Precision utilities for decimal number formatting

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Rounding modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round towards zero
    TowardsZero,
    /// Round to nearest, ties go away from zero
    HalfUp,
}

/// Padding modes for string output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingMode {
    /// No padding
    NoPadding,
    /// Pad with zeros to specified precision
    PadWithZeros,
}

impl RoundingMode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::TowardsZero => RoundingStrategy::ToZero,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
        }
    }
}

/// Format a decimal number to `precision` decimal places
///
/// Negative `precision` rounds to tens, hundreds, and so on.
pub fn decimal_to_precision(
    value: Decimal,
    precision: i32,
    rounding_mode: RoundingMode,
    padding_mode: PaddingMode,
) -> String {
    let rounded = round_places(value, precision, rounding_mode);

    match padding_mode {
        PaddingMode::NoPadding => rounded.normalize().to_string(),
        PaddingMode::PadWithZeros if precision > 0 => {
            format!("{:.1$}", rounded, precision as usize)
        },
        PaddingMode::PadWithZeros => rounded.trunc().to_string(),
    }
}

fn round_places(value: Decimal, places: i32, mode: RoundingMode) -> Decimal {
    if places >= 0 {
        return value.round_dp_with_strategy(places as u32, mode.strategy());
    }
    // factors past 10^28 fall outside Decimal's range
    let Some(factor) = 10i128
        .checked_pow(places.unsigned_abs())
        .filter(|f| *f <= MAX_FACTOR)
        .map(|f| Decimal::from_i128_with_scale(f, 0))
    else {
        return Decimal::ZERO;
    };
    (value / factor)
        .round_dp_with_strategy(0, mode.strategy())
        .checked_mul(factor)
        .unwrap_or(value)
}

const MAX_FACTOR: i128 = 10i128.pow(28);

/// 수량 정밀도 적용 (절사)
pub fn amount_to_precision(amount: Decimal, precision: Option<i32>) -> String {
    match precision {
        Some(p) => decimal_to_precision(
            amount,
            p,
            RoundingMode::TowardsZero,
            PaddingMode::NoPadding,
        ),
        None => amount.normalize().to_string(),
    }
}

/// 가격 정밀도 적용 (반올림)
pub fn price_to_precision(price: Decimal, precision: Option<i32>) -> String {
    match precision {
        Some(p) => decimal_to_precision(
            price,
            p,
            RoundingMode::HalfUp,
            PaddingMode::NoPadding,
        ),
        None => price.normalize().to_string(),
    }
}
