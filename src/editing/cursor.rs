//! Caret tracking and post-move relocation

use crate::document::{Document, NodeId};

/// The text caret: a page, an optional node within it, and a grapheme offset
/// inside that node's text.
///
/// `node == None` means the caret is collapsed to the start of the page's
/// content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Caret {
    /// Page index (0-based) holding editing focus
    pub page: usize,
    /// Node under the caret, if any
    pub node: Option<NodeId>,
    /// Offset within the node's text
    pub offset: usize,
}

impl Caret {
    /// Create a caret at a node's start
    pub fn at_node_start(page: usize, node: NodeId) -> Self {
        Self {
            page,
            node: Some(node),
            offset: 0,
        }
    }

    /// Create a caret collapsed to a page's content-area start
    pub fn at_page_start(page: usize) -> Self {
        Self {
            page,
            node: None,
            offset: 0,
        }
    }
}

/// Pick the caret position for a destination page after content moved there:
/// the start of the first non-empty text-bearing node in document order, or
/// collapsed to the area start when the page holds no text.
pub fn relocated_caret(document: &Document, dest_page: usize) -> Caret {
    let Some(page) = document.page(dest_page) else {
        return Caret::at_page_start(dest_page);
    };

    let target = page
        .nodes
        .iter()
        .copied()
        .find(|id| document.node(*id).is_some_and(|n| n.is_text_bearing()));

    match target {
        Some(node) => Caret::at_node_start(dest_page, node),
        None => Caret::at_page_start(dest_page),
    }
}
