//! Source contract for fetching the raw feature collection.

use std::path::{Path, PathBuf};

use zonal_types::ZonalError;

use crate::feature::FeatureCollection;

/// A provider of the raw feature collection.
///
/// The collection is fetched once per process lifetime and treated as
/// immutable afterwards. Implementations fail with [`ZonalError::Source`]
/// when the container is absent or lacks the expected top-level shape;
/// individual malformed records are not their concern.
pub trait ZoneSource: Send + Sync {
    /// Stable source name used in error messages and logs.
    fn name(&self) -> &'static str;

    /// Fetch the feature collection.
    ///
    /// # Errors
    /// Returns `ZonalError::Source` when the collection cannot be produced.
    fn fetch(&self) -> Result<FeatureCollection, ZonalError>;
}

/// File-backed source reading a GeoJSON feature collection from disk.
#[derive(Debug, Clone)]
pub struct GeoJsonFile {
    path: PathBuf,
}

impl GeoJsonFile {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this source reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ZoneSource for GeoJsonFile {
    fn name(&self) -> &'static str {
        "geojson-file"
    }

    fn fetch(&self) -> Result<FeatureCollection, ZonalError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            ZonalError::source_failed(self.name(), format!("read {}: {e}", self.path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            ZonalError::source_failed(self.name(), format!("decode {}: {e}", self.path.display()))
        })
    }
}
