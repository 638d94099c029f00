//! Pageflow: a pagination and overflow engine for block-level documents
//!
//! This crate decides where page boundaries fall in a flowing document of
//! block-level content (paragraphs, headings, lists, tables, images):
//! - Overflow detection against each page's fixed vertical capacity
//! - Split-point selection at safe block boundaries via incremental
//!   sandboxed measurement
//! - Keep-together resolution so a heading is never separated from the
//!   table or list it introduces
//! - Cross-page content migration with caret relocation
//! - A debounced, reentrancy-guarded check cycle driven by change
//!   notifications
//!
//! It never re-flows text within a node; rendering, rich-text commands,
//! export and persistence belong to host collaborators reached through
//! [`NodeMeasurer`], [`ChangeEvent`] and the drained [`PagePatch`] protocol.

pub mod config;
pub mod document;
pub mod editing;
pub mod engine;
pub mod error;
pub mod layout;
pub mod notify;
pub mod schedule;

// Re-export primary types
pub use config::PaginationConfig;
pub use document::{BlockKind, BlockNode, ContentArea, Document, NodeId, Page, PageStyle};
pub use editing::Caret;
pub use engine::{PagePatch, Paginator, PassOutcome, ScrollBehavior};
pub use error::LayoutError;
pub use layout::{
    adjust_split_for_keep_together, compute_split_index, KeepTogetherResolver, MeasurementSandbox,
    NodeMeasurer, OverflowDetector, TextMeasurer,
};
pub use notify::{ChangeEvent, ChangeKind, ChangeOrigin, ChangeSubscription};
