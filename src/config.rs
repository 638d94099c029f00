//! Engine configuration

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// Tunable pagination parameters.
///
/// All fields have defaults matching the engine's standard behavior; a host
/// only overrides what it needs, typically through [`PaginationConfig::from_json`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PaginationConfig {
    /// Slack, in device-independent units, by which a page's extent may
    /// exceed its capacity before counting as overflow
    pub overflow_tolerance: f32,
    /// Rendered grapheme length below which a paragraph between a heading
    /// and a table counts as a caption
    pub caption_len_threshold: usize,
    /// Debounce delay for general mutations, in milliseconds
    pub edit_debounce_ms: u64,
    /// Debounce delay for live typing, in milliseconds
    pub typing_debounce_ms: u64,
    /// Delay before the follow-up check after a pass that moved content
    pub follow_up_delay_ms: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            overflow_tolerance: 2.0,
            caption_len_threshold: 100,
            edit_debounce_ms: 500,
            typing_debounce_ms: 100,
            follow_up_delay_ms: 100,
        }
    }
}

impl PaginationConfig {
    /// Parse a configuration from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }
}
