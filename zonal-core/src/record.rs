//! The single validating parse of composite feature names and metadata.
//!
//! Every consumer of the flat collection (the ingestion builder and both
//! resolvers) derives operator/zone/date through [`RecordTag::parse`], so the
//! naming convention is interpreted in exactly one place.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static BR_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?br\s*/?>").expect("valid regex"));
static ANY_MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// Operator, zone, and effective date derived from a composite name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTag {
    /// Service operator owning the zone.
    pub operator: String,
    /// Zone name within the operator.
    pub zone: String,
    /// Effective date of the boundary revision. `None` when the date segment
    /// is present but unparseable; such a record is still addressable by the
    /// toggle resolver but invisible to ingestion and temporal resolution.
    pub effective: Option<NaiveDate>,
}

impl RecordTag {
    /// Parse a composite name of the form `"<Operator> - <Zone> - <DD/MM/YYYY>"`.
    ///
    /// Returns `None` unless the name splits into exactly three `" - "`
    /// delimited segments; segments are trimmed. The date segment parses as
    /// base-10 day/month/year with month in [1, 12] and a real calendar day.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let parts: Vec<&str> = name.split(" - ").map(str::trim).collect();
        let [operator, zone, date] = parts.as_slice() else {
            return None;
        };
        Some(Self {
            operator: (*operator).to_string(),
            zone: (*zone).to_string(),
            effective: parse_effective(date),
        })
    }
}

fn parse_effective(segment: &str) -> Option<NaiveDate> {
    let mut fields = segment.split('/');
    let day = fields.next()?.trim().parse::<u32>().ok()?;
    let month = fields.next()?.trim().parse::<u32>().ok()?;
    let year = fields.next()?.trim().parse::<i32>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Status, type, and area extracted from a feature's description block.
///
/// Keys absent from the block are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDetails {
    /// Operational status of the revision, e.g. `Active`.
    pub status: String,
    /// Revision type label; serialized as `type` in the model artifact.
    pub kind: String,
    /// Human-readable area figure.
    pub area: String,
}

impl RecordDetails {
    /// Parse a free-text description block.
    ///
    /// `<br>` variants become line breaks, any remaining markup tags are
    /// stripped, and each line containing a colon is split once into a
    /// key/value pair. Keys are lowercased with whitespace runs collapsed to
    /// underscores.
    #[must_use]
    pub fn parse(description: &str) -> Self {
        let unwrapped = BR_MARKUP.replace_all(description, "\n");
        let plain = ANY_MARKUP.replace_all(&unwrapped, "");

        let mut fields: HashMap<String, String> = HashMap::new();
        for line in plain.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some((key, value)) = line.split_once(':') {
                fields.insert(normalize_key(key), value.trim().to_string());
            }
        }

        let mut take = |key: &str| fields.remove(key).unwrap_or_default();
        Self {
            status: take("status"),
            kind: take("type"),
            area: take("area"),
        }
    }
}

fn normalize_key(key: &str) -> String {
    key.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
