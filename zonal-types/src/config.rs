//! Configuration shared by the atlas orchestrator and the ingestion tool.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::color::Palette;
use crate::coords::CoordinateTable;

/// Global configuration for the `Atlas` orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlasConfig {
    /// Per-operator display colors with a fallback for unknown operators.
    pub palette: Palette,
    /// Static viewport coordinates keyed by operator and zone.
    pub coordinates: CoordinateTable,
    /// Anchor date of the slider timeline; the range runs from here to the
    /// day the atlas is built.
    pub timeline_start: NaiveDate,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            coordinates: CoordinateTable::builtin(),
            timeline_start: NaiveDate::from_ymd_opt(2020, 1, 1)
                .expect("valid calendar date"),
        }
    }
}
