//! Keep-together grouping over sibling block nodes
//!
//! Pure predicate and grouping logic; siblings are a page's node list in
//! reading order.

use crate::document::{BlockKind, BlockNode};
use std::ops::Range;

/// Decides which runs of sibling nodes must not be split across a page
/// boundary
#[derive(Debug, Clone, Copy)]
pub struct KeepTogetherResolver {
    /// Rendered grapheme length below which a paragraph counts as a caption
    caption_len_threshold: usize,
}

impl KeepTogetherResolver {
    /// Create a resolver with the given caption-length threshold
    pub fn new(caption_len_threshold: usize) -> Self {
        Self {
            caption_len_threshold,
        }
    }

    /// Check whether the node at `index` must stay on the same page as its
    /// next sibling.
    ///
    /// False for an out-of-range index or a node with no next sibling. True
    /// when:
    /// - a heading introduces a table or a list;
    /// - a heading is followed by a short caption paragraph that itself
    ///   introduces a table (the caption keeps with the table too, so the
    ///   whole run chains into one group);
    /// - a paragraph ending in `:` introduces a table or list.
    pub fn should_keep_with_next(&self, siblings: &[&BlockNode], index: usize) -> bool {
        let Some(node) = siblings.get(index) else {
            return false;
        };
        let Some(next) = siblings.get(index + 1) else {
            return false;
        };

        if node.kind.is_heading() {
            if next.kind.is_table() || next.kind.is_list() {
                return true;
            }
            // Heading + caption + table pattern
            if matches!(next.kind, BlockKind::Paragraph)
                && next.rendered_text_len() < self.caption_len_threshold
                && siblings
                    .get(index + 2)
                    .is_some_and(|after| after.kind.is_table())
            {
                return true;
            }
        }

        // The caption half of the heading + caption + table pattern: a short
        // paragraph between a heading and a table stays with the table
        if matches!(node.kind, BlockKind::Paragraph)
            && node.rendered_text_len() < self.caption_len_threshold
            && next.kind.is_table()
            && index
                .checked_sub(1)
                .and_then(|i| siblings.get(i))
                .is_some_and(|prev| prev.kind.is_heading())
        {
            return true;
        }

        if matches!(node.kind, BlockKind::Paragraph)
            && node.text.trim_end().ends_with(':')
            && (next.kind.is_table() || next.kind.is_list())
        {
            return true;
        }

        false
    }

    /// The keep-together group starting at `start`, as an index range into
    /// `siblings`.
    ///
    /// Extends while the predicate holds on the current node, advancing one
    /// sibling at a time; a node with no forced successor yields a
    /// single-element group.
    pub fn group(&self, siblings: &[&BlockNode], start: usize) -> Range<usize> {
        let mut current = start;
        while self.should_keep_with_next(siblings, current) {
            current += 1;
        }
        start..(current + 1).min(siblings.len()).max(start)
    }
}
