//! Error types for the pagination engine

use thiserror::Error;

/// Errors surfaced while paginating.
///
/// Measurement failures come from the host's [`crate::layout::NodeMeasurer`]
/// implementation; the engine propagates them instead of guessing heights.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// A page that should carry a content area does not have one
    #[error("page {ordinal} has no content area")]
    MissingContentArea {
        /// 1-indexed display label of the offending page
        ordinal: usize,
    },

    /// The host measurer could not produce a rendered height
    #[error("measurement failed: {reason}")]
    Measurement {
        /// Host-supplied failure description
        reason: String,
    },

    /// Configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl LayoutError {
    /// Create a measurement error from any displayable reason
    pub fn measurement(reason: impl Into<String>) -> Self {
        LayoutError::Measurement {
            reason: reason.into(),
        }
    }
}
