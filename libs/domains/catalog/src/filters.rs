//! Normalisation of raw catalog listing parameters.
//!
//! Every input maps to a usable [`SearchFilters`]: values that do not parse or
//! fall outside their bounds are replaced by defaults instead of being rejected.

use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

use crate::models::SearchFilters;

pub const DEFAULT_OFFSET: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Optional sign, digits with an optional fraction, optional exponent
static PLAIN_DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE]([+-]?[0-9]+))?$")
        .expect("valid decimal pattern")
});

/// Parses the four textual listing parameters into bounded filters.
///
/// - `offset`: integer >= 0, otherwise 0
/// - `limit`: integer in `1..=100`, otherwise 10
/// - `price`: decimal > 0, otherwise no price filter
/// - `category`: any non-empty value, no existence check
pub fn validate_filters(offset: &str, limit: &str, price: &str, category: &str) -> SearchFilters {
    SearchFilters {
        offset: parse_offset(offset),
        limit: parse_limit(limit),
        category: (!category.is_empty()).then(|| category.to_string()),
        price_less_than: parse_price(price),
    }
}

fn parse_offset(raw: &str) -> u64 {
    match raw.parse::<i64>() {
        Ok(offset) if offset >= 0 => offset as u64,
        _ => DEFAULT_OFFSET,
    }
}

fn parse_limit(raw: &str) -> u64 {
    match raw.parse::<i64>() {
        Ok(limit) if (1..=MAX_LIMIT as i64).contains(&limit) => limit as u64,
        _ => DEFAULT_LIMIT,
    }
}

fn parse_price(raw: &str) -> Option<Decimal> {
    parse_exact_decimal(raw).filter(|price| *price > Decimal::ZERO)
}

/// Exact decimal value of `raw`, `None` when it is not a plain decimal
/// or cannot be held without rounding
fn parse_exact_decimal(raw: &str) -> Option<Decimal> {
    let captures = PLAIN_DECIMAL.captures(raw)?;
    let mantissa_end = captures.get(3).map_or(raw.len(), |m| m.start());
    let mantissa = raw[..mantissa_end].trim_start_matches('+');
    let mantissa = match mantissa.strip_prefix('-') {
        Some(rest) => format!("-{}", normalize_point(rest)),
        None => normalize_point(mantissa),
    };
    let value = Decimal::from_str_exact(&mantissa).ok()?;

    match captures.get(4) {
        None => Some(value),
        Some(exponent) => shift_exponent(value, exponent.as_str().parse().ok()?),
    }
}

/// `.5` and `5.` as `0.5` and `5`
fn normalize_point(unsigned: &str) -> String {
    let unsigned = unsigned.strip_suffix('.').unwrap_or(unsigned);
    if unsigned.starts_with('.') {
        format!("0{}", unsigned)
    } else {
        unsigned.to_string()
    }
}

/// `value * 10^exponent` without rounding
fn shift_exponent(mut value: Decimal, exponent: i64) -> Option<Decimal> {
    let scale = i64::from(value.scale());

    if exponent <= 0 {
        let new_scale = u32::try_from(scale - exponent).ok()?;
        value.set_scale(new_scale).ok()?;
        return Some(value);
    }

    if exponent <= scale {
        value.set_scale((scale - exponent) as u32).ok()?;
        return Some(value);
    }

    value.set_scale(0).ok()?;
    (0..exponent - scale).try_fold(value, |acc, _| acc.checked_mul(Decimal::TEN))
}
