//! Change notification over the content tree
//!
//! Collaborators push [`ChangeEvent`]s into the engine instead of the engine
//! observing a live mutable tree; the subscription tracks which content areas
//! are covered and can be released wholesale on teardown.

use crate::document::NodeId;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// What changed inside a content area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Children added, removed, or reordered
    Structure,
    /// Text content of existing nodes changed
    Text,
    /// A broader subtree change the source could not narrow down
    Subtree,
}

/// Where a change came from, selecting the debounce delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// Paste, image resize, table insert, undo -- anything but live typing
    Mutation,
    /// Active typing input; checked on the short delay for responsiveness
    Typing,
}

/// A single change notification
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    /// Page index (0-based) whose content area changed
    pub page: usize,
    /// What kind of change occurred
    pub kind: ChangeKind,
    /// Nodes involved, empty when unknown
    pub nodes: SmallVec<[NodeId; 2]>,
    /// Origin of the change
    pub origin: ChangeOrigin,
}

impl ChangeEvent {
    /// Create a mutation-origin event
    pub fn mutation(page: usize, kind: ChangeKind) -> Self {
        Self {
            page,
            kind,
            nodes: SmallVec::new(),
            origin: ChangeOrigin::Mutation,
        }
    }

    /// Create a typing-origin event
    pub fn typing(page: usize) -> Self {
        Self {
            page,
            kind: ChangeKind::Text,
            nodes: SmallVec::new(),
            origin: ChangeOrigin::Typing,
        }
    }

    /// Attach the affected nodes
    pub fn with_nodes(mut self, nodes: impl IntoIterator<Item = NodeId>) -> Self {
        self.nodes = nodes.into_iter().collect();
        self
    }
}

/// Registration state for the change subscription.
///
/// Freshly created pages must be re-registered so their content areas are
/// covered; `release` detaches everything and further events are ignored.
#[derive(Debug)]
pub struct ChangeSubscription {
    watched: FxHashSet<usize>,
    active: bool,
}

impl ChangeSubscription {
    /// Subscribe to the first `page_count` pages
    pub fn new(page_count: usize) -> Self {
        Self {
            watched: (0..page_count).collect(),
            active: true,
        }
    }

    /// Extend coverage to a newly created page
    pub fn watch(&mut self, page_index: usize) {
        if self.active {
            self.watched.insert(page_index);
        }
    }

    /// Check whether an event's page is covered
    pub fn covers(&self, page_index: usize) -> bool {
        self.active && self.watched.contains(&page_index)
    }

    /// Detach the subscription; subsequent events are ignored
    pub fn release(&mut self) {
        self.active = false;
        self.watched.clear();
    }

    /// Whether the subscription is still attached
    pub fn is_active(&self) -> bool {
        self.active
    }
}
