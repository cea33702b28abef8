use thiserror::Error;

/// Unified error type for the zonal workspace.
///
/// Individual malformed feature records are never errors: parsers skip them.
/// Errors are reserved for boundary failures such as an unreadable source
/// collection or a misconfigured builder.
#[derive(Debug, Error)]
pub enum ZonalError {
    /// A feature source failed to produce a collection.
    #[error("{name} failed: {msg}")]
    Source {
        /// Source name that failed.
        name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Issues with the returned or expected data (bad container shape, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "zone Austin for Waymo".
        what: String,
    },
}

impl ZonalError {
    /// Helper: build a `Source` error with the source name and message.
    pub fn source_failed(name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            name: name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }
}
