//! Entity model for indexing and matching.
//!
//! An [`Entity`] is a schema-less record: a stable identifier, an
//! optional schema (entity type), and multi-valued string properties.
//! Properties can be added dynamically; every accessor tolerates absent
//! data by returning an empty slice, so feature extractors never have to
//! special-case missing fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Well-known property slots consumed by the index and the feature
/// extractors.
///
/// `Date` covers the key dates of an entity (birth date for a person,
/// incorporation or registration date for an organization). Values are
/// ISO-8601 strings and may be truncated to year or month precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    /// Full names and aliases.
    Name,
    /// Given names.
    FirstName,
    /// Family names.
    FamilyName,
    /// Key dates (birth, incorporation), ISO-8601, possibly partial.
    Date,
    /// Phone numbers in any formatting.
    Phone,
    /// E-mail addresses.
    Email,
    /// Registration, tax and passport identifiers.
    Identifier,
    /// Gender designations.
    Gender,
    /// Country codes or names.
    Country,
    /// Places of birth.
    BirthPlace,
    /// Postal addresses.
    Address,
}

/// A record describing a real-world entity.
///
/// # Examples
///
/// ```
/// use cognate::entity::{Entity, Property};
///
/// let entity = Entity::builder("Q7747")
///     .schema("Person")
///     .property(Property::Name, "Vladimir Putin")
///     .property(Property::Date, "1952-10-07")
///     .property(Property::Country, "ru")
///     .build();
///
/// assert_eq!(entity.id(), "Q7747");
/// assert_eq!(entity.names(), ["Vladimir Putin"]);
/// assert!(entity.emails().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable identifier for this entity.
    id: String,

    /// Schema (entity type), e.g. "Person" or "Company".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    schema: Option<String>,

    /// Multi-valued properties.
    #[serde(default)]
    properties: BTreeMap<Property, Vec<String>>,
}

impl Entity {
    /// Create a new entity with the given identifier and no properties.
    pub fn new<S: Into<String>>(id: S) -> Self {
        Entity {
            id: id.into(),
            schema: None,
            properties: BTreeMap::new(),
        }
    }

    /// Create a builder for constructing entities.
    pub fn builder<S: Into<String>>(id: S) -> EntityBuilder {
        EntityBuilder {
            entity: Entity::new(id),
        }
    }

    /// The stable identifier of this entity.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The schema (entity type), if known.
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Set the schema.
    pub fn set_schema<S: Into<String>>(&mut self, schema: S) {
        self.schema = Some(schema.into());
    }

    /// Add a property value. Empty or whitespace-only values are ignored.
    pub fn add<S: Into<String>>(&mut self, prop: Property, value: S) {
        let value = value.into();
        if value.trim().is_empty() {
            return;
        }
        self.properties.entry(prop).or_default().push(value);
    }

    /// All values recorded for the given property, empty if absent.
    pub fn values(&self, prop: Property) -> &[String] {
        self.properties.get(&prop).map_or(&[], Vec::as_slice)
    }

    /// Full names and aliases.
    pub fn names(&self) -> &[String] {
        self.values(Property::Name)
    }

    /// Given names.
    pub fn first_names(&self) -> &[String] {
        self.values(Property::FirstName)
    }

    /// Family names.
    pub fn family_names(&self) -> &[String] {
        self.values(Property::FamilyName)
    }

    /// Key dates (ISO-8601, possibly partial).
    pub fn dates(&self) -> &[String] {
        self.values(Property::Date)
    }

    /// Phone numbers.
    pub fn phones(&self) -> &[String] {
        self.values(Property::Phone)
    }

    /// E-mail addresses.
    pub fn emails(&self) -> &[String] {
        self.values(Property::Email)
    }

    /// Registration, tax and passport identifiers.
    pub fn identifiers(&self) -> &[String] {
        self.values(Property::Identifier)
    }

    /// Gender designations.
    pub fn genders(&self) -> &[String] {
        self.values(Property::Gender)
    }

    /// Country codes or names.
    pub fn countries(&self) -> &[String] {
        self.values(Property::Country)
    }

    /// Places of birth.
    pub fn birth_places(&self) -> &[String] {
        self.values(Property::BirthPlace)
    }

    /// Every property value, as raw text to feed the tokenizer when
    /// indexing this entity.
    pub fn index_values(&self) -> impl Iterator<Item = &str> {
        self.properties
            .values()
            .flat_map(|values| values.iter().map(String::as_str))
    }

    /// Number of property values across all properties.
    pub fn len(&self) -> usize {
        self.properties.values().map(Vec::len).sum()
    }

    /// Check whether the entity has no property values.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// A builder for constructing entities in a fluent manner.
#[derive(Debug)]
pub struct EntityBuilder {
    entity: Entity,
}

impl EntityBuilder {
    /// Set the schema (entity type).
    pub fn schema<S: Into<String>>(mut self, schema: S) -> Self {
        self.entity.set_schema(schema);
        self
    }

    /// Add a property value.
    pub fn property<S: Into<String>>(mut self, prop: Property, value: S) -> Self {
        self.entity.add(prop, value);
        self
    }

    /// Build the entity.
    pub fn build(self) -> Entity {
        self.entity
    }
}
