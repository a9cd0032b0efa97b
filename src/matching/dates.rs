//! Key-date similarity features.
//!
//! Key dates (birth dates for people, incorporation dates for
//! organizations) arrive as ISO-8601 strings, frequently truncated to
//! year or month precision. Day-level agreement is strong evidence;
//! year-level agreement is weaker but survives truncation.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::entity::Entity;

/// Day-precision values (`YYYY-MM-DD`), validated as calendar dates.
fn day_values(entity: &Entity) -> BTreeSet<&str> {
    entity
        .dates()
        .iter()
        .filter_map(|value| value.get(..10))
        .filter(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").is_ok())
        .collect()
}

/// Year-precision values (`YYYY`).
fn year_values(entity: &Entity) -> BTreeSet<&str> {
    entity
        .dates()
        .iter()
        .filter_map(|value| value.get(..4))
        .filter(|prefix| prefix.chars().all(|c| c.is_ascii_digit()))
        .collect()
}

/// The two entities share a key date at day precision.
///
/// 1.0 when any full `YYYY-MM-DD` value matches, 0.0 otherwise or when
/// either side has no day-precision dates. Truncated values ("1952",
/// "1952-10") never participate here.
pub fn key_day_matches(left: &Entity, right: &Entity) -> f64 {
    let left_days = day_values(left);
    let right_days = day_values(right);
    if left_days.intersection(&right_days).next().is_some() {
        1.0
    } else {
        0.0
    }
}

/// The two entities share a key date at year precision.
///
/// 1.0 when any `YYYY` prefix matches, 0.0 otherwise or when either
/// side has no dated values.
pub fn key_year_matches(left: &Entity, right: &Entity) -> f64 {
    let left_years = year_values(left);
    let right_years = year_values(right);
    if left_years.intersection(&right_years).next().is_some() {
        1.0
    } else {
        0.0
    }
}
