//! Pages and their fixed-capacity content areas

use crate::document::NodeId;

/// Computed styling copied onto every page so the document stays visually
/// consistent after page 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageStyle {
    /// Content width in device-independent units
    pub width: f32,
    /// Base font size
    pub font_size: f32,
    /// Whether overflowing content is clipped at the page edge
    pub clip_overflow: bool,
    /// Cosmetic margin guides, orthogonal to pagination correctness
    pub margins_visible: bool,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            width: 468.0, // US Letter minus 1 inch margins
            font_size: 12.0,
            clip_overflow: true,
            margins_visible: true,
        }
    }
}

/// A page's editable region with a fixed vertical capacity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentArea {
    /// Styling profile, copied from the first page for new pages
    pub style: PageStyle,
    /// Fixed vertical capacity in device-independent units
    pub capacity: f32,
}

impl ContentArea {
    /// Create a content area with the given capacity and default styling
    pub fn new(capacity: f32) -> Self {
        Self {
            style: PageStyle::default(),
            capacity,
        }
    }

    /// Create a content area with explicit styling
    pub fn with_style(capacity: f32, style: PageStyle) -> Self {
        Self { style, capacity }
    }
}

/// A single page: an ordinal display label plus an ordered run of block
/// nodes inside an optional content area.
///
/// The area is optional because an external collaborator (e.g. "clear
/// document") may strip it; the engine skips such pages rather than erroring.
#[derive(Debug, Clone)]
pub struct Page {
    /// 1-indexed display label, assigned in creation order
    pub ordinal: usize,
    /// The editable region, absent if stripped externally
    pub area: Option<ContentArea>,
    /// Block nodes on this page, in reading order
    pub nodes: Vec<NodeId>,
}

impl Page {
    /// Create an empty page
    pub fn new(ordinal: usize, area: ContentArea) -> Self {
        Self {
            ordinal,
            area: Some(area),
            nodes: Vec::new(),
        }
    }

    /// Check if this page holds a given node
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    /// Get node count
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the page holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_contains() {
        let mut page = Page::new(1, ContentArea::new(864.0));
        page.nodes.push(NodeId(3));
        page.nodes.push(NodeId(7));

        assert!(page.contains(NodeId(3)));
        assert!(page.contains(NodeId(7)));
        assert!(!page.contains(NodeId(4)));
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn test_default_style() {
        let style = PageStyle::default();
        assert!(style.clip_overflow);
        assert_eq!(style.width, 468.0);
    }
}
