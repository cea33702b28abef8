//! Zonal-specific configuration primitives and visibility data-transfer objects.
#![warn(missing_docs)]

mod color;
mod config;
mod coords;
mod error;
mod visibility;

pub use color::{Color, Palette};
pub use config::AtlasConfig;
pub use coords::{CoordinateTable, MapPoint};
pub use error::ZonalError;
pub use visibility::{ToggleSet, VisibilityRule};
