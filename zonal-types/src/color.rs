//! Display colors assigned to operators on the map surface.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A CSS hex color string, e.g. `#E31937`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Construct a color from a hex string.
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Returns the inner hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(hex: &str) -> Self {
        Self(hex.to_string())
    }
}

/// Fixed per-operator display colors with a fallback for unknown operators.
///
/// An explicit configuration input to the resolvers; never process-global
/// state. The default palette reproduces the reference deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    operators: HashMap<String, Color>,
    fallback: Color,
}

impl Default for Palette {
    fn default() -> Self {
        let mut operators = HashMap::new();
        operators.insert("Tesla".to_string(), Color::from("#E31937"));
        operators.insert("Waymo".to_string(), Color::from("#01eba7"));
        Self {
            operators,
            fallback: Color::from("#000000"),
        }
    }
}

impl Palette {
    /// An empty palette where every operator resolves to `fallback`.
    #[must_use]
    pub fn with_fallback(fallback: Color) -> Self {
        Self {
            operators: HashMap::new(),
            fallback,
        }
    }

    /// Assign a color to an operator, replacing any previous assignment.
    pub fn assign(&mut self, operator: impl Into<String>, color: Color) {
        self.operators.insert(operator.into(), color);
    }

    /// Resolve the display color for an operator, falling back for unknowns.
    #[must_use]
    pub fn color_for(&self, operator: &str) -> &Color {
        self.operators.get(operator).unwrap_or(&self.fallback)
    }

    /// The color used for operators without an explicit assignment.
    #[must_use]
    pub const fn fallback(&self) -> &Color {
        &self.fallback
    }
}
