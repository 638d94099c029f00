//! Patch protocol describing what a pass changed
//!
//! Hosts drain patches after ticking the engine and apply them as minimal
//! updates: mount a new page, re-parent moved nodes, move the caret, scroll.

use crate::document::NodeId;
use smallvec::SmallVec;

/// Requested scroll behavior for bringing a page into view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animated scroll
    Smooth,
    /// Immediate jump
    Auto,
}

/// A single host-facing update
#[derive(Debug, Clone, PartialEq)]
pub enum PagePatch {
    /// A new page was appended after the last page
    PageAdded {
        /// 1-indexed display label of the new page
        ordinal: usize,
    },
    /// Nodes migrated from one page's tail to another page's head
    NodesMoved {
        /// Source page index
        from: usize,
        /// Destination page index
        to: usize,
        /// Moved node ids, in preserved order
        nodes: SmallVec<[NodeId; 4]>,
    },
    /// Editing focus was repositioned
    CaretMoved {
        /// Destination page index
        page: usize,
        /// Node under the caret, none when collapsed to the area start
        node: Option<NodeId>,
    },
    /// A page should be scrolled into view
    ScrollIntoView {
        /// Page index
        page: usize,
        /// Scroll behavior
        behavior: ScrollBehavior,
    },
    /// The cosmetic margin guides were toggled
    MarginsToggled {
        /// New visibility
        visible: bool,
    },
}
