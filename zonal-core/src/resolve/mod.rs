//! Online visibility resolution.
//!
//! Modules include:
//! - `toggles`: visibility driven by the panel's checkbox state.
//! - `temporal`: visibility driven by a single selected instant.
//!
//! Both resolvers are pure: identical inputs yield identical render sets,
//! and re-running on every input change accumulates no state.

/// Instant-driven selection of the revision in force per zone.
pub mod temporal;
/// Checkbox-driven selection with record > zone > operator precedence.
pub mod toggles;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use zonal_types::Color;

use crate::feature::{Feature, FeatureCollection};

pub use temporal::at_instant;
pub use toggles::by_toggles;

/// Per-operator render sets, ordered by operator name.
///
/// Operators with zero included records are omitted; the map surface treats
/// absence and an empty set identically.
pub type RenderSets = BTreeMap<String, RenderGroup>;

/// The records one operator should render, and the color to draw them with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderGroup {
    /// Included feature records, a subset of the input collection.
    pub features: Vec<Feature>,
    /// The operator's display color.
    pub color: Color,
}

impl RenderGroup {
    pub(crate) const fn new(color: Color) -> Self {
        Self {
            features: Vec::new(),
            color,
        }
    }

    /// Number of included records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the group includes no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Clone the included records into a standalone feature collection the
    /// rendering layer can display without further transformation.
    #[must_use]
    pub fn to_collection(&self) -> FeatureCollection {
        FeatureCollection::new(self.features.clone())
    }
}
