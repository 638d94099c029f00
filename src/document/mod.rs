//! Arena-backed document model
//!
//! The document is an explicit arena of [`BlockNode`] records keyed by stable
//! [`NodeId`]s, plus an ordered list of [`Page`]s each holding node ids in
//! reading order. Concatenating the pages' node lists in page order always
//! reproduces the document's full reading order; no node belongs to more than
//! one page at a time.

mod block;
mod page;

pub use block::{BlockKind, BlockNode, NodeId};
pub use page::{ContentArea, Page, PageStyle};

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// The paginated document
#[derive(Debug)]
pub struct Document {
    /// Node arena
    nodes: FxHashMap<NodeId, BlockNode>,
    /// Pages in creation order; ordinals are 1-indexed
    pages: Vec<Page>,
    /// Next node ID to assign
    next_node_id: u64,
    /// Monotonic version counter, bumped on every mutation
    version: u64,
}

impl Document {
    /// Create a document with a single empty page
    pub fn new(area: ContentArea) -> Self {
        Self {
            nodes: FxHashMap::default(),
            pages: vec![Page::new(1, area)],
            next_node_id: 0,
            version: 0,
        }
    }

    /// Create a document with all given blocks placed on page 1
    pub fn from_blocks(area: ContentArea, blocks: impl IntoIterator<Item = BlockNode>) -> Self {
        let mut doc = Self::new(area);
        for block in blocks {
            let _ = doc.push_node(0, block);
        }
        doc
    }

    /// Get the document version
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Get page count
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get a page by index (0-based; ordinal is index + 1)
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Get a mutable page by index
    pub fn page_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.pages.get_mut(index)
    }

    /// Iterate pages in order
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    /// Look up a node in the arena
    pub fn node(&self, id: NodeId) -> Option<&BlockNode> {
        self.nodes.get(&id)
    }

    /// Look up a node mutably
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut BlockNode> {
        self.nodes.get_mut(&id)
    }

    /// Total node count across all pages
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Find the page holding a node
    pub fn page_of(&self, id: NodeId) -> Option<usize> {
        self.pages.iter().position(|p| p.contains(id))
    }

    /// Iterate all node ids in reading order (page order, then node order)
    pub fn reading_order(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.pages.iter().flat_map(|p| p.nodes.iter().copied())
    }

    /// Resolve a page's node list into node references, in order.
    ///
    /// Ids with no arena entry are skipped; the editing layer owns node
    /// destruction and may race a stale page listing.
    pub fn page_blocks(&self, page_index: usize) -> Vec<&BlockNode> {
        self.pages
            .get(page_index)
            .map(|p| {
                p.nodes
                    .iter()
                    .filter_map(|id| self.nodes.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Append a node to the end of a page, returning its id
    pub fn push_node(&mut self, page_index: usize, block: BlockNode) -> Option<NodeId> {
        let len = self.pages.get(page_index)?.len();
        self.insert_node(page_index, len, block)
    }

    /// Insert a node at a position within a page, returning its id
    pub fn insert_node(
        &mut self,
        page_index: usize,
        position: usize,
        block: BlockNode,
    ) -> Option<NodeId> {
        let page = self.pages.get_mut(page_index)?;
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;

        let position = position.min(page.nodes.len());
        page.nodes.insert(position, id);
        self.nodes.insert(id, block);
        self.version += 1;
        Some(id)
    }

    /// Remove a node from its page and the arena
    pub fn remove_node(&mut self, id: NodeId) -> Option<BlockNode> {
        let block = self.nodes.remove(&id)?;
        for page in &mut self.pages {
            page.nodes.retain(|n| *n != id);
        }
        self.version += 1;
        Some(block)
    }

    /// Replace a node's text content
    pub fn replace_text(&mut self, id: NodeId, text: impl Into<String>) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.text = text.into();
                node.placeholder = false;
                self.version += 1;
                true
            }
            None => false,
        }
    }

    /// Append a new page, returning its index.
    ///
    /// Pages are only ever appended after the current last page and are never
    /// destroyed by the engine. The fresh page is seeded with an empty stub
    /// paragraph so an editor has somewhere to type.
    pub fn create_page(&mut self, area: ContentArea) -> usize {
        let ordinal = self.pages.len() + 1;
        self.pages.push(Page::new(ordinal, area));
        let index = self.pages.len() - 1;
        let _ = self.push_node(index, BlockNode::stub());
        self.version += 1;
        index
    }

    /// Check if a page holds nothing but placeholder stub content
    pub fn page_is_empty_stub(&self, page_index: usize) -> bool {
        match self.pages.get(page_index) {
            Some(page) if !page.nodes.is_empty() => page
                .nodes
                .iter()
                .all(|id| self.nodes.get(id).is_some_and(|n| n.placeholder)),
            _ => false,
        }
    }

    /// Detach a page's tail starting at `split_index`, preserving relative
    /// order. The detached nodes stay in the arena but belong to no page
    /// until re-attached.
    pub fn detach_tail(&mut self, page_index: usize, split_index: usize) -> SmallVec<[NodeId; 4]> {
        let Some(page) = self.pages.get_mut(page_index) else {
            return SmallVec::new();
        };
        if split_index >= page.nodes.len() {
            return SmallVec::new();
        }
        let moved: SmallVec<[NodeId; 4]> = page.nodes.drain(split_index..).collect();
        self.version += 1;
        moved
    }

    /// Prepend detached nodes before a page's existing children, preserving
    /// their relative order. Clears the destination's stub paragraph first if
    /// the page held nothing but placeholder content.
    pub fn prepend_nodes(&mut self, page_index: usize, moved: &[NodeId]) {
        if moved.is_empty() {
            return;
        }
        if self.page_is_empty_stub(page_index) {
            let stale: Vec<NodeId> = self.pages[page_index].nodes.drain(..).collect();
            for id in stale {
                self.nodes.remove(&id);
            }
        }
        let Some(page) = self.pages.get_mut(page_index) else {
            return;
        };
        for (offset, id) in moved.iter().enumerate() {
            page.nodes.insert(offset, *id);
        }
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(blocks: Vec<BlockNode>) -> Document {
        Document::from_blocks(ContentArea::new(864.0), blocks)
    }

    #[test]
    fn test_new_document() {
        let doc = Document::new(ContentArea::new(864.0));
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.node_count(), 0);
        assert_eq!(doc.page(0).unwrap().ordinal, 1);
    }

    #[test]
    fn test_push_and_order() {
        let doc = doc_with(vec![
            BlockNode::paragraph("one"),
            BlockNode::paragraph("two"),
        ]);
        let order: Vec<NodeId> = doc.reading_order().collect();
        assert_eq!(order.len(), 2);
        assert_eq!(doc.node(order[0]).unwrap().text, "one");
        assert_eq!(doc.node(order[1]).unwrap().text, "two");
    }

    #[test]
    fn test_remove_node() {
        let mut doc = doc_with(vec![BlockNode::paragraph("one")]);
        let id = doc.reading_order().next().unwrap();
        assert!(doc.remove_node(id).is_some());
        assert_eq!(doc.node_count(), 0);
        assert!(doc.page(0).unwrap().is_empty());
        assert!(doc.remove_node(id).is_none());
    }

    #[test]
    fn test_detach_and_prepend() {
        let mut doc = doc_with(vec![
            BlockNode::paragraph("a"),
            BlockNode::paragraph("b"),
            BlockNode::paragraph("c"),
        ]);
        let area = doc.page(0).unwrap().area.unwrap();
        let dest = doc.create_page(area);
        assert!(doc.page_is_empty_stub(dest));

        let moved = doc.detach_tail(0, 1);
        assert_eq!(moved.len(), 2);
        doc.prepend_nodes(dest, &moved);

        // Stub cleared, moved content is the new head
        assert!(!doc.page_is_empty_stub(dest));
        let texts: Vec<&str> = doc
            .page_blocks(dest)
            .iter()
            .map(|n| n.text.as_str())
            .collect();
        assert_eq!(texts, vec!["b", "c"]);
        assert_eq!(doc.page(0).unwrap().len(), 1);
    }

    #[test]
    fn test_prepend_keeps_existing_content_after_moved() {
        let mut doc = doc_with(vec![BlockNode::paragraph("a")]);
        let area = doc.page(0).unwrap().area.unwrap();
        let dest = doc.create_page(area);
        doc.replace_text(doc.page(dest).unwrap().nodes[0], "existing");

        let moved = doc.detach_tail(0, 0);
        doc.prepend_nodes(dest, &moved);

        let texts: Vec<&str> = doc
            .page_blocks(dest)
            .iter()
            .map(|n| n.text.as_str())
            .collect();
        assert_eq!(texts, vec!["a", "existing"]);
    }

    #[test]
    fn test_detach_past_end_is_noop() {
        let mut doc = doc_with(vec![BlockNode::paragraph("a")]);
        let before = doc.version();
        assert!(doc.detach_tail(0, 5).is_empty());
        assert_eq!(doc.version(), before);
    }

    #[test]
    fn test_version_bumps_on_mutation() {
        let mut doc = doc_with(vec![BlockNode::paragraph("a")]);
        let v = doc.version();
        let id = doc.reading_order().next().unwrap();
        doc.replace_text(id, "b");
        assert!(doc.version() > v);
    }
}
