//! Name-based similarity features.

use crate::entity::Entity;
use crate::matching::text::{clean_set, overlap_ratio, word_set};
use crate::util::levenshtein::levenshtein_similarity;

/// Check for an exact full-name match between the two entities.
///
/// Names are case-folded and reduced to their word content before
/// comparison, so "SMITH, John" and "john smith" do not match here
/// (different word order) but "John SMITH" and "john smith" do.
/// 1.0 when any cleaned name is shared, 0.0 otherwise or when either
/// side has no names.
pub fn name_match(left: &Entity, right: &Entity) -> f64 {
    let left_names = clean_set(left.names());
    let right_names = clean_set(right.names());
    if left_names.intersection(&right_names).next().is_some() {
        1.0
    } else {
        0.0
    }
}

/// Evaluate the proportion of identical words shared by the two
/// entities' names, measured against the smaller name vocabulary.
///
/// 0.0 when either side has no names.
pub fn name_token_overlap(left: &Entity, right: &Entity) -> f64 {
    let left_words = word_set(left.names());
    let right_words = word_set(right.names());
    overlap_ratio(&left_words, &right_words)
}

/// Edit-distance similarity of the two most similar names.
///
/// Takes the best `1 - distance/longer_len` over the cross product of
/// cleaned names, which tolerates transliteration noise like
/// "Gonzalez"/"Gonzales". 0.0 when either side has no names.
pub fn name_levenshtein(left: &Entity, right: &Entity) -> f64 {
    let left_names = clean_set(left.names());
    let right_names = clean_set(right.names());
    let mut best = 0.0f64;
    for left_name in &left_names {
        for right_name in &right_names {
            best = best.max(levenshtein_similarity(left_name, right_name));
        }
    }
    best
}

/// Matching given name between the two entities.
///
/// 1.0 when the folded given-name words intersect, 0.0 otherwise or
/// when either side has none.
pub fn first_name_match(left: &Entity, right: &Entity) -> f64 {
    let left_words = word_set(left.first_names());
    let right_words = word_set(right.first_names());
    if left_words.intersection(&right_words).next().is_some() {
        1.0
    } else {
        0.0
    }
}

/// Matching family name between the two entities.
///
/// 1.0 when the folded family-name words intersect, 0.0 otherwise or
/// when either side has none.
pub fn family_name_match(left: &Entity, right: &Entity) -> f64 {
    let left_words = word_set(left.family_names());
    let right_words = word_set(right.family_names());
    if left_words.intersection(&right_words).next().is_some() {
        1.0
    } else {
        0.0
    }
}
