use zonal_core::feature::FeatureCollection;
use zonal_core::source::ZoneSource;
use zonal_types::ZonalError;

mod fixtures;

pub use fixtures::features::service_areas;

/// Mock source for CI-safe tests and examples. Provides deterministic data
/// from static fixtures.
pub struct MockSource {
    collection: FeatureCollection,
    fail: bool,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// A source serving the default fixture collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            collection: fixtures::features::service_areas(),
            fail: false,
        }
    }

    /// A source serving a caller-supplied collection.
    #[must_use]
    pub fn with_collection(collection: FeatureCollection) -> Self {
        Self {
            collection,
            fail: false,
        }
    }

    /// A source whose fetch always fails, for exercising degrade paths.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            collection: FeatureCollection::empty(),
            fail: true,
        }
    }
}

impl ZoneSource for MockSource {
    fn name(&self) -> &'static str {
        "zonal-mock"
    }

    fn fetch(&self) -> Result<FeatureCollection, ZonalError> {
        if self.fail {
            return Err(ZonalError::source_failed(self.name(), "forced failure"));
        }
        Ok(self.collection.clone())
    }
}
