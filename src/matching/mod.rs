//! Pairwise feature encoding for entity matching.
//!
//! A fixed, ordered registry of similarity extractors turns a candidate
//! pair into a numeric evidence vector for an external classifier.
//! Every extractor is a pure, total function of the pair: it never
//! fails, and missing or incomparable data resolves to the extractor's
//! documented neutral value. Values stay in `[0.0, 1.0]`; the mismatch
//! extractors (gender, country) report evidence of contradiction in
//! that same positive range.
//!
//! Vector length and positional meaning are fixed by registration
//! order. Reordering, adding, removing or changing the semantics of an
//! extractor is a breaking format change: bump [`FEATURE_VERSION`] and
//! retrain or re-key any stored classifier weights.
//!
//! # Examples
//!
//! ```
//! use cognate::entity::{Entity, Property};
//! use cognate::matching::{FEATURES, encode_pair};
//!
//! let left = Entity::builder("a")
//!     .schema("Person")
//!     .property(Property::Name, "Jane Doe")
//!     .build();
//! let right = Entity::builder("b")
//!     .schema("Person")
//!     .property(Property::Name, "Jane Doe")
//!     .build();
//!
//! let encoded = encode_pair(&left, &right);
//! assert_eq!(encoded.len(), FEATURES.len());
//! ```

pub mod dates;
pub mod misc;
pub mod names;
pub(crate) mod text;

use crate::entity::Entity;

/// A fixed-order sequence of feature values for one compared pair.
pub type FeatureVector = Vec<f64>;

/// Signature shared by every feature extractor.
pub type FeatureFn = fn(&Entity, &Entity) -> f64;

/// A registered feature extractor.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    /// Stable name, usable as a column label for classifier weights.
    pub name: &'static str,

    /// The extractor itself.
    pub function: FeatureFn,
}

/// Version of the feature vector format.
///
/// Classifier weights trained against one version are meaningless for
/// any other.
pub const FEATURE_VERSION: u32 = 1;

/// The feature registry, in vector order.
pub const FEATURES: [Feature; 14] = [
    Feature {
        name: "name_match",
        function: names::name_match,
    },
    Feature {
        name: "name_token_overlap",
        function: names::name_token_overlap,
    },
    Feature {
        name: "name_levenshtein",
        function: names::name_levenshtein,
    },
    Feature {
        name: "phone_match",
        function: misc::phone_match,
    },
    Feature {
        name: "email_match",
        function: misc::email_match,
    },
    Feature {
        name: "identifier_match",
        function: misc::identifier_match,
    },
    Feature {
        name: "key_day_matches",
        function: dates::key_day_matches,
    },
    Feature {
        name: "key_year_matches",
        function: dates::key_year_matches,
    },
    Feature {
        name: "first_name_match",
        function: names::first_name_match,
    },
    Feature {
        name: "family_name_match",
        function: names::family_name_match,
    },
    Feature {
        name: "birth_place",
        function: misc::birth_place,
    },
    Feature {
        name: "gender_mismatch",
        function: misc::gender_mismatch,
    },
    Feature {
        name: "country_mismatch",
        function: misc::country_mismatch,
    },
    Feature {
        name: "schema_match",
        function: misc::schema_match,
    },
];

/// Encode the comparison between two entities as a feature vector.
///
/// Applies every registered extractor in order; the result always has
/// [`FEATURES`]`.len()` components, each finite, whatever data the two
/// entities carry.
pub fn encode_pair(left: &Entity, right: &Entity) -> FeatureVector {
    FEATURES
        .iter()
        .map(|feature| (feature.function)(left, right))
        .collect()
}

/// The registered feature names, in vector order.
pub fn feature_names() -> Vec<&'static str> {
    FEATURES.iter().map(|feature| feature.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Property;

    #[test]
    fn test_vector_length_matches_registry() {
        let left = Entity::new("a");
        let right = Entity::new("b");
        assert_eq!(encode_pair(&left, &right).len(), FEATURES.len());
        assert_eq!(FEATURES.len(), 14);
    }

    #[test]
    fn test_empty_entities_encode_finite_neutral() {
        let encoded = encode_pair(&Entity::new("a"), &Entity::new("b"));
        assert!(encoded.iter().all(|value| value.is_finite()));
        assert!(encoded.iter().all(|&value| value == 0.0));
    }

    #[test]
    fn test_values_stay_in_range() {
        let left = Entity::builder("a")
            .schema("Person")
            .property(Property::Name, "Erika Mustermann")
            .property(Property::FirstName, "Erika")
            .property(Property::FamilyName, "Mustermann")
            .property(Property::Date, "1964-08-12")
            .property(Property::Gender, "female")
            .property(Property::Country, "de")
            .build();
        let right = Entity::builder("b")
            .schema("Person")
            .property(Property::Name, "Erika Musterman")
            .property(Property::FirstName, "Erika")
            .property(Property::Date, "1964")
            .property(Property::Gender, "male")
            .property(Property::Country, "fr")
            .build();
        let encoded = encode_pair(&left, &right);
        assert!(encoded.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_feature_names_order() {
        let names = feature_names();
        assert_eq!(names.first(), Some(&"name_match"));
        assert_eq!(names.last(), Some(&"schema_match"));
        assert_eq!(names.len(), FEATURES.len());
    }
}
