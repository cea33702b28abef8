//! Toggle state captured from the panel UI and its precedence resolution.
//!
//! The panel emits a flat string → bool mapping keyed at three granularities:
//! `company-<Operator>`, `zone-<Operator>-<Zone>`, and raw revision ids.
//! Precedence is revision > zone > operator, where a less specific level is
//! consulted only when the more specific ones have no recorded toggle: an
//! absent key is *unset*, not hidden. [`VisibilityRule`] makes that
//! distinction explicit instead of leaning on optional booleans.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Three-state visibility decision at a single toggle level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisibilityRule {
    /// No toggle recorded at this level; defer to the next one.
    #[default]
    Unset,
    /// Explicitly shown.
    Show,
    /// Explicitly hidden.
    Hide,
}

impl VisibilityRule {
    /// Fold two levels: a set rule wins, `Unset` defers to `fallback`.
    #[must_use]
    pub const fn or(self, fallback: Self) -> Self {
        match self {
            Self::Unset => fallback,
            set => set,
        }
    }

    /// Convert a checkbox flag into a set rule.
    #[must_use]
    pub const fn from_flag(visible: bool) -> Self {
        if visible { Self::Show } else { Self::Hide }
    }

    /// Whether this rule renders the record. `Unset` hides by default.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Show)
    }
}

/// Flat toggle mapping owned by the panel UI, read-only to the resolver.
///
/// Stored under the UI wire keys so a serialized checkbox state round-trips
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToggleSet {
    entries: HashMap<String, bool>,
}

impl ToggleSet {
    /// An empty set: everything hidden by default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The wire key for an operator-level toggle.
    #[must_use]
    pub fn operator_key(operator: &str) -> String {
        format!("company-{operator}")
    }

    /// The wire key for a zone-level toggle.
    #[must_use]
    pub fn zone_key(operator: &str, zone: &str) -> String {
        format!("zone-{operator}-{zone}")
    }

    /// Record an operator-level toggle.
    pub fn set_operator(&mut self, operator: &str, visible: bool) {
        self.entries.insert(Self::operator_key(operator), visible);
    }

    /// Record a zone-level toggle.
    pub fn set_zone(&mut self, operator: &str, zone: &str, visible: bool) {
        self.entries
            .insert(Self::zone_key(operator, zone), visible);
    }

    /// Record a revision-level toggle keyed by the raw record id.
    pub fn set_revision(&mut self, id: impl Into<String>, visible: bool) {
        self.entries.insert(id.into(), visible);
    }

    /// Remove every recorded toggle.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The rule recorded under a raw wire key, `Unset` when absent.
    #[must_use]
    pub fn rule_for(&self, key: &str) -> VisibilityRule {
        self.entries
            .get(key)
            .copied()
            .map_or(VisibilityRule::Unset, VisibilityRule::from_flag)
    }

    /// Resolve the effective rule for a record: revision, else zone, else
    /// operator. The result is still `Unset` when no level has a toggle.
    #[must_use]
    pub fn resolve(&self, revision_id: &str, operator: &str, zone: &str) -> VisibilityRule {
        self.rule_for(revision_id)
            .or(self.rule_for(&Self::zone_key(operator, zone)))
            .or(self.rule_for(&Self::operator_key(operator)))
    }
}

impl From<HashMap<String, bool>> for ToggleSet {
    fn from(entries: HashMap<String, bool>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, bool)> for ToggleSet {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
