//! The external feature collection consumed by the builder and resolvers.
//!
//! Geometry is opaque to this crate: it is carried as raw JSON so a render
//! set can hand the map surface a valid subset of the input collection
//! without this crate understanding coordinates. Unknown members at any
//! level are preserved on round-trip for the same reason.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A GeoJSON feature collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// GeoJSON type marker, `"FeatureCollection"`.
    #[serde(rename = "type", default = "collection_type")]
    pub kind: String,
    /// The member features. Required on input: a container without this key
    /// does not have the expected top-level shape and fails decoding.
    pub features: Vec<Feature>,
    /// Foreign members (e.g. `bbox`), preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeatureCollection {
    /// Wrap a list of features into a collection.
    #[must_use]
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: collection_type(),
            features,
            extra: Map::new(),
        }
    }

    /// A collection with no features; what a failed fetch degrades to.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of member features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the collection has no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::empty()
    }
}

/// One polygon record: a unique id, a composite name plus optional free-text
/// metadata in `properties`, and an opaque geometry blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// GeoJSON type marker, `"Feature"`.
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    /// Unique record identifier. Sources emit either a JSON string or a
    /// number; both normalize to a string.
    #[serde(default, deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// The properties block carrying the composite name and description.
    #[serde(default)]
    pub properties: FeatureProperties,
    /// Opaque polygon geometry, passed through untouched.
    #[serde(default)]
    pub geometry: Value,
    /// Foreign members, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Feature {
    /// Construct a feature from an id and a composite name, with null
    /// geometry. Primarily useful for fixtures.
    #[must_use]
    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: feature_type(),
            id: id.into(),
            properties: FeatureProperties {
                name: Some(name.into()),
                ..FeatureProperties::default()
            },
            geometry: Value::Null,
            extra: Map::new(),
        }
    }

    /// Attach a free-text description block.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.properties.description = Some(description.into());
        self
    }

    /// Attach a geometry blob.
    #[must_use]
    pub fn with_geometry(mut self, geometry: Value) -> Self {
        self.geometry = geometry;
        self
    }
}

/// The properties block of a [`Feature`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    /// Composite name of the form `"<Operator> - <Zone> - <DD/MM/YYYY>"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-text metadata block with `key: value` lines, possibly wrapped in
    /// markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Other properties, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn collection_type() -> String {
    "FeatureCollection".to_string()
}

fn feature_type() -> String {
    "Feature".to_string()
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
