//! Conversions from upstream wire primitives into model types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Convert an upstream float into a `Decimal`; non-finite values become `None`.
#[must_use]
pub fn f64_to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value).map(|d| d.normalize())
}

/// Convert an optional upstream float into an optional `Decimal`.
#[must_use]
pub fn opt_f64_to_decimal(value: Option<f64>) -> Option<Decimal> {
    value.and_then(f64_to_decimal)
}

/// Parse an RFC 3339 timestamp (`2024-05-01T12:00:00Z`) into UTC.
#[must_use]
pub fn parse_rfc3339(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
