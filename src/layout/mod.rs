//! Overflow measurement and split-point selection

mod keep_together;
mod measure;
mod split;

pub use keep_together::KeepTogetherResolver;
pub use measure::{MeasurementSandbox, NodeMeasurer, OverflowDetector, TextMeasurer};
pub use split::{adjust_split_for_keep_together, compute_split_index};
