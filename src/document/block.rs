//! Block-level node model

use unicode_segmentation::UnicodeSegmentation;

/// Stable identifier for block nodes that survives page moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeId(pub u64);

/// The kind of block-level content unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Regular paragraph
    Paragraph,
    /// Heading with level (1-6)
    Heading { level: u8 },
    /// Ordered or unordered list
    List { ordered: bool },
    /// Table; atomic, never internally split
    Table,
    /// Image container; atomic, never internally split
    ImageContainer,
    /// Anything the editing layer produced that the engine does not
    /// distinguish further
    Other,
}

impl Default for BlockKind {
    fn default() -> Self {
        BlockKind::Paragraph
    }
}

impl BlockKind {
    /// Check if this is a heading
    pub fn is_heading(&self) -> bool {
        matches!(self, BlockKind::Heading { .. })
    }

    /// Check if this is a list
    pub fn is_list(&self) -> bool {
        matches!(self, BlockKind::List { .. })
    }

    /// Check if this is a table
    pub fn is_table(&self) -> bool {
        matches!(self, BlockKind::Table)
    }

    /// Check if this kind is atomic with respect to page splitting
    pub fn is_atomic(&self) -> bool {
        matches!(self, BlockKind::Table | BlockKind::ImageContainer)
    }

    /// Get the line height multiplier for this block kind
    pub fn line_height_multiplier(&self) -> f32 {
        match self {
            BlockKind::Heading { level } => match level {
                1 => 1.5,
                2 => 1.4,
                3 => 1.3,
                _ => 1.2,
            },
            _ => 1.0,
        }
    }

    /// Get the spacing after this block (in line heights)
    pub fn spacing_after(&self) -> f32 {
        match self {
            BlockKind::Paragraph => 1.0,
            BlockKind::Heading { .. } => 0.5,
            BlockKind::List { .. } => 0.25,
            BlockKind::Table | BlockKind::ImageContainer => 0.5,
            BlockKind::Other => 1.0,
        }
    }
}

/// A block-level content unit.
///
/// Nodes are created and destroyed by the editing layer; the engine only
/// reorders their page membership. A node placed in a sized container has a
/// measurable rendered height; nodes with a fixed rendered height (images,
/// tables measured by the host) carry it as `intrinsic_height`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockNode {
    /// The kind of block
    pub kind: BlockKind,
    /// Text content, empty for non-text blocks
    pub text: String,
    /// Host-reported fixed height, taking precedence over estimation
    pub intrinsic_height: Option<f32>,
    /// Set on the empty stub paragraph a fresh page is seeded with
    pub placeholder: bool,
}

impl BlockNode {
    /// Create a paragraph node
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            text: text.into(),
            intrinsic_height: None,
            placeholder: false,
        }
    }

    /// Create a heading node, clamping the level to 1-6
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Heading {
                level: level.clamp(1, 6),
            },
            text: text.into(),
            intrinsic_height: None,
            placeholder: false,
        }
    }

    /// Create a list node
    pub fn list(ordered: bool, text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::List { ordered },
            text: text.into(),
            intrinsic_height: None,
            placeholder: false,
        }
    }

    /// Create a table node with a host-measured height
    pub fn table(text: impl Into<String>, height: f32) -> Self {
        Self {
            kind: BlockKind::Table,
            text: text.into(),
            intrinsic_height: Some(height),
            placeholder: false,
        }
    }

    /// Create an image container node with a host-measured height
    pub fn image(height: f32) -> Self {
        Self {
            kind: BlockKind::ImageContainer,
            text: String::new(),
            intrinsic_height: Some(height),
            placeholder: false,
        }
    }

    /// Create the empty stub paragraph a fresh page starts with
    pub fn stub() -> Self {
        Self {
            kind: BlockKind::Paragraph,
            text: String::new(),
            intrinsic_height: None,
            placeholder: true,
        }
    }

    /// Set a fixed rendered height
    pub fn with_height(mut self, height: f32) -> Self {
        self.intrinsic_height = Some(height);
        self
    }

    /// Rendered text length in grapheme clusters
    pub fn rendered_text_len(&self) -> usize {
        self.text.graphemes(true).count()
    }

    /// Check if this node carries visible text
    pub fn is_text_bearing(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_kind() {
        assert!(BlockKind::Heading { level: 2 }.is_heading());
        assert!(BlockKind::List { ordered: true }.is_list());
        assert!(BlockKind::Table.is_table());
        assert!(BlockKind::Table.is_atomic());
        assert!(BlockKind::ImageContainer.is_atomic());
        assert!(!BlockKind::Paragraph.is_atomic());
    }

    #[test]
    fn test_heading_level_clamped() {
        let node = BlockNode::heading(9, "title");
        assert_eq!(node.kind, BlockKind::Heading { level: 6 });
        let node = BlockNode::heading(0, "title");
        assert_eq!(node.kind, BlockKind::Heading { level: 1 });
    }

    #[test]
    fn test_rendered_text_len_graphemes() {
        // Family emoji is a single grapheme cluster across several scalars
        let node = BlockNode::paragraph("a\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}b");
        assert_eq!(node.rendered_text_len(), 3);
    }

    #[test]
    fn test_text_bearing() {
        assert!(BlockNode::paragraph("hello").is_text_bearing());
        assert!(!BlockNode::paragraph("   ").is_text_bearing());
        assert!(!BlockNode::image(120.0).is_text_bearing());
        assert!(!BlockNode::stub().is_text_bearing());
    }
}
