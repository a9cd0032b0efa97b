//! Contact, identifier and classification features.

use std::collections::BTreeSet;

use crate::entity::Entity;
use crate::matching::text::{overlap_ratio, word_set};

/// Phone numbers reduced to their digits. Values with fewer than five
/// digits are discarded as noise.
fn phone_set(values: &[String]) -> BTreeSet<String> {
    values
        .iter()
        .map(|value| value.chars().filter(char::is_ascii_digit).collect::<String>())
        .filter(|digits| digits.len() >= 5)
        .collect()
}

/// Folded, trimmed values; used for emails, genders and countries.
fn folded_set(values: &[String]) -> BTreeSet<String> {
    values
        .iter()
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
        .collect()
}

/// Identifiers reduced to upper-case alphanumerics, so "HRB 12345" and
/// "hrb-12345" compare equal.
fn identifier_set(values: &[String]) -> BTreeSet<String> {
    values
        .iter()
        .map(|value| {
            value
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .map(|c| c.to_ascii_uppercase())
                .collect::<String>()
        })
        .filter(|id| !id.is_empty())
        .collect()
}

fn sets_intersect(left: &BTreeSet<String>, right: &BTreeSet<String>) -> f64 {
    if left.intersection(right).next().is_some() {
        1.0
    } else {
        0.0
    }
}

/// The two entities share a phone number, compared digits-only.
///
/// 1.0 on any shared number, 0.0 otherwise or when either side has no
/// usable numbers.
pub fn phone_match(left: &Entity, right: &Entity) -> f64 {
    sets_intersect(&phone_set(left.phones()), &phone_set(right.phones()))
}

/// The two entities share an e-mail address (case-insensitive).
///
/// 1.0 on any shared address, 0.0 otherwise or when either side has
/// none.
pub fn email_match(left: &Entity, right: &Entity) -> f64 {
    sets_intersect(&folded_set(left.emails()), &folded_set(right.emails()))
}

/// The two entities share a registration, tax or passport identifier,
/// compared alphanumerics-only and case-insensitive.
///
/// 1.0 on any shared identifier, 0.0 otherwise or when either side has
/// none.
pub fn identifier_match(left: &Entity, right: &Entity) -> f64 {
    sets_intersect(
        &identifier_set(left.identifiers()),
        &identifier_set(right.identifiers()),
    )
}

/// Same place of birth, scored as the proportion of shared words
/// against the smaller side ("Leningrad" vs "Leningrad, USSR" scores
/// 1.0). 0.0 when either side has no birth place.
pub fn birth_place(left: &Entity, right: &Entity) -> f64 {
    let left_words = word_set(left.birth_places());
    let right_words = word_set(right.birth_places());
    overlap_ratio(&left_words, &right_words)
}

/// Both entities carry a gender and the values are disjoint.
///
/// This is contradiction evidence reported in the positive range: 1.0
/// means an explicit mismatch, 0.0 means agreement or missing data on
/// either side.
pub fn gender_mismatch(left: &Entity, right: &Entity) -> f64 {
    let left_genders = folded_set(left.genders());
    let right_genders = folded_set(right.genders());
    if left_genders.is_empty() || right_genders.is_empty() {
        return 0.0;
    }
    if left_genders.intersection(&right_genders).next().is_some() {
        0.0
    } else {
        1.0
    }
}

/// Both entities carry countries and the sets are disjoint.
///
/// Contradiction evidence in the positive range, like
/// [`gender_mismatch`]: 1.0 means no country in common, 0.0 means
/// agreement or missing data on either side.
pub fn country_mismatch(left: &Entity, right: &Entity) -> f64 {
    let left_countries = folded_set(left.countries());
    let right_countries = folded_set(right.countries());
    if left_countries.is_empty() || right_countries.is_empty() {
        return 0.0;
    }
    if left_countries
        .intersection(&right_countries)
        .next()
        .is_some()
    {
        0.0
    } else {
        1.0
    }
}

/// The two entities carry the same schema (entity type).
///
/// 1.0 when both schemas are present and equal, 0.0 otherwise.
pub fn schema_match(left: &Entity, right: &Entity) -> f64 {
    match (left.schema(), right.schema()) {
        (Some(l), Some(r)) if l == r => 1.0,
        _ => 0.0,
    }
}
