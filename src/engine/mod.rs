//! Pagination orchestration
//!
//! Ties measurement, split-point selection, keep-together resolution, page
//! creation, content migration and caret relocation into the debounced,
//! reentrancy-guarded overflow-check cycle.

mod patch;

pub use patch::{PagePatch, ScrollBehavior};

use crate::config::PaginationConfig;
use crate::document::{BlockNode, ContentArea, Document, NodeId, PageStyle};
use crate::editing::{relocated_caret, Caret};
use crate::error::LayoutError;
use crate::layout::{
    adjust_split_for_keep_together, compute_split_index, KeepTogetherResolver, MeasurementSandbox,
    NodeMeasurer, OverflowDetector, TextMeasurer,
};
use crate::notify::{ChangeEvent, ChangeKind, ChangeOrigin, ChangeSubscription};
use crate::schedule::Debouncer;
use log::{debug, trace};

/// What a call to [`Paginator::check_page_overflow`] or [`Paginator::tick`]
/// did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// No check was due
    Idle,
    /// A pass was already active; the call was a no-op
    Skipped,
    /// A full pass ran; `pages_spilled` pages had content moved off them
    Completed {
        /// Number of pages whose tail migrated forward
        pages_spilled: usize,
    },
}

/// The pagination engine.
///
/// Owns the document, walks pages front to back on each overflow pass, and
/// records host-facing [`PagePatch`]es. Single-threaded and cooperatively
/// scheduled: the host pumps [`Paginator::tick`] with its clock and drains
/// patches afterwards.
pub struct Paginator {
    document: Document,
    config: PaginationConfig,
    measurer: Box<dyn NodeMeasurer>,
    resolver: KeepTogetherResolver,
    detector: OverflowDetector,
    subscription: ChangeSubscription,
    debouncer: Debouncer,
    caret: Caret,
    /// Reentrancy guard; set for the duration of a pass and cleared on every
    /// exit path, the error path included
    pass_active: bool,
    patches: Vec<PagePatch>,
    /// Hook fired when the page list changes, e.g. a table-of-contents
    /// refresh
    structure_changed: Option<Box<dyn FnMut(usize)>>,
    /// Last host-supplied timestamp, used to anchor follow-up scheduling
    now_ms: u64,
}

impl Paginator {
    /// Create an engine over a document with a host-supplied measurer
    pub fn new(
        document: Document,
        measurer: Box<dyn NodeMeasurer>,
        config: PaginationConfig,
    ) -> Self {
        let resolver = KeepTogetherResolver::new(config.caption_len_threshold);
        let detector = OverflowDetector::new(config.overflow_tolerance);
        let subscription = ChangeSubscription::new(document.page_count());
        Self {
            document,
            config,
            measurer,
            resolver,
            detector,
            subscription,
            debouncer: Debouncer::new(),
            caret: Caret::default(),
            pass_active: false,
            patches: Vec::new(),
            structure_changed: None,
            now_ms: 0,
        }
    }

    /// Create an engine with the built-in character-grid measurer
    pub fn with_defaults(document: Document) -> Self {
        Self::new(
            document,
            Box::new(TextMeasurer::default()),
            PaginationConfig::default(),
        )
    }

    /// Get the document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get the document mutably; collaborators mutating through this are
    /// responsible for pushing a matching [`ChangeEvent`]
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Get the current caret
    pub fn caret(&self) -> Caret {
        self.caret
    }

    /// Get total page count
    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    /// Whether an overflow pass is currently active
    pub fn is_pass_active(&self) -> bool {
        self.pass_active
    }

    /// Whether a debounced check is pending
    pub fn has_pending_check(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Drain the host-facing patches recorded since the last drain
    pub fn take_patches(&mut self) -> Vec<PagePatch> {
        std::mem::take(&mut self.patches)
    }

    /// Register the structure-changed hook, called with the new page count
    /// whenever the page list grows
    pub fn on_structure_changed(&mut self, hook: impl FnMut(usize) + 'static) {
        self.structure_changed = Some(Box::new(hook));
    }

    /// Push a change notification into the engine.
    ///
    /// Schedules a debounced overflow check: the longer delay for general
    /// mutations, the shorter one for active typing. A superseding call
    /// replaces any pending scheduled check; an active pass is unaffected.
    pub fn notify_change(&mut self, event: ChangeEvent, now_ms: u64) {
        self.now_ms = now_ms;
        if !self.subscription.covers(event.page) {
            trace!("change on unwatched page {}, ignoring", event.page + 1);
            return;
        }
        let delay = match event.origin {
            ChangeOrigin::Typing => self.config.typing_debounce_ms,
            ChangeOrigin::Mutation => self.config.edit_debounce_ms,
        };
        self.debouncer.queue(now_ms, delay);
    }

    /// Pump the cooperative scheduler; runs a due overflow check, if any
    pub fn tick(&mut self, now_ms: u64) -> Result<PassOutcome, LayoutError> {
        self.now_ms = now_ms;
        if self.debouncer.take_ready(now_ms) {
            self.check_page_overflow()
        } else {
            Ok(PassOutcome::Idle)
        }
    }

    /// Run an overflow pass over all pages, front to back.
    ///
    /// Globally reachable trigger: paste, image-resize and table-insert
    /// collaborators call this directly to request re-pagination. A call
    /// while a pass is active is a no-op. The reentrancy flag never survives
    /// this function, on the error path included.
    pub fn check_page_overflow(&mut self) -> Result<PassOutcome, LayoutError> {
        if self.pass_active {
            trace!("overflow pass already active, skipping");
            return Ok(PassOutcome::Skipped);
        }
        self.pass_active = true;
        let result = self.run_overflow_pass();
        self.pass_active = false;

        if let Ok(PassOutcome::Completed { pages_spilled }) = &result {
            if *pages_spilled > 0 {
                // Let the host's render settle before resolving cascades on
                // pages created mid-pass
                self.debouncer
                    .queue(self.now_ms, self.config.follow_up_delay_ms);
            }
        }
        result
    }

    fn run_overflow_pass(&mut self) -> Result<PassOutcome, LayoutError> {
        // Pages created during this pass are handled by the follow-up check;
        // bounding the walk to the starting page list keeps each pass finite
        // even under forced single-node moves.
        let pages_at_start = self.document.page_count();
        let mut pages_spilled = 0;
        let mut index = 0;

        while index < pages_at_start {
            let Some(page) = self.document.page(index) else {
                break;
            };
            let Some(area) = page.area else {
                trace!("page {} has no content area, skipping", page.ordinal);
                index += 1;
                continue;
            };

            let extent = self.page_extent(index, area.style.width)?;
            if !self.detector.is_overflowing(extent, area.capacity) {
                index += 1;
                continue;
            }
            debug!(
                "page {} overflowing: extent {:.1}, capacity {:.1}",
                page.ordinal, extent, area.capacity
            );

            let split = {
                let blocks = self.document.page_blocks(index);
                let mut sandbox =
                    MeasurementSandbox::new(self.measurer.as_ref(), area.style.width);
                match compute_split_index(&blocks, area.capacity, &mut sandbox)? {
                    Some(raw) => adjust_split_for_keep_together(&self.resolver, &blocks, raw),
                    None => {
                        index += 1;
                        continue;
                    }
                }
            };

            let dest = self.ensure_next_page(index)?;
            let moved = self.document.detach_tail(index, split);
            if !moved.is_empty() {
                self.document.prepend_nodes(dest, &moved);
                debug!(
                    "moved {} node(s) from page {} to page {}",
                    moved.len(),
                    index + 1,
                    dest + 1
                );
                self.patches.push(PagePatch::NodesMoved {
                    from: index,
                    to: dest,
                    nodes: moved,
                });

                self.caret = relocated_caret(&self.document, dest);
                self.patches.push(PagePatch::CaretMoved {
                    page: dest,
                    node: self.caret.node,
                });
                self.patches.push(PagePatch::ScrollIntoView {
                    page: dest,
                    behavior: ScrollBehavior::Smooth,
                });
                pages_spilled += 1;
            }
            index += 1;
        }

        Ok(PassOutcome::Completed { pages_spilled })
    }

    /// Sum of rendered node heights on a page
    fn page_extent(&self, index: usize, width: f32) -> Result<f32, LayoutError> {
        let mut extent = 0.0;
        for block in self.document.page_blocks(index) {
            extent += self.measurer.measure(block, width)?;
        }
        Ok(extent)
    }

    /// The page content spills into: the existing next page when it still has
    /// a content area, else a freshly appended one
    fn ensure_next_page(&mut self, index: usize) -> Result<usize, LayoutError> {
        let next = index + 1;
        match self.document.page(next) {
            Some(page) if page.area.is_some() => Ok(next),
            _ => self.add_new_page(false),
        }
    }

    /// Append a new page after the current last page.
    ///
    /// The new page copies the first page's computed style (width, font
    /// size) with overflow clipping set, takes the next sequential ordinal,
    /// and is re-registered with the change subscription. The
    /// structure-changed hook fires if registered. With `focus`, the caret
    /// moves to the new area's start and a smooth scroll is requested.
    pub fn add_new_page(&mut self, focus: bool) -> Result<usize, LayoutError> {
        let template = self
            .document
            .page(0)
            .and_then(|p| p.area)
            .ok_or(LayoutError::MissingContentArea { ordinal: 1 })?;
        let area = ContentArea {
            style: PageStyle {
                clip_overflow: true,
                ..template.style
            },
            capacity: template.capacity,
        };

        let index = self.document.create_page(area);
        self.subscription.watch(index);
        self.patches.push(PagePatch::PageAdded { ordinal: index + 1 });
        debug!("added page {}", index + 1);

        let count = self.document.page_count();
        if let Some(hook) = self.structure_changed.as_mut() {
            hook(count);
        }

        if focus {
            self.caret = Caret::at_page_start(index);
            self.patches.push(PagePatch::CaretMoved {
                page: index,
                node: None,
            });
            self.patches.push(PagePatch::ScrollIntoView {
                page: index,
                behavior: ScrollBehavior::Smooth,
            });
        }
        Ok(index)
    }

    /// Toggle the cosmetic margin guides on all pages; orthogonal to
    /// pagination correctness
    pub fn toggle_margins(&mut self) -> bool {
        let visible = !self
            .document
            .page(0)
            .and_then(|p| p.area)
            .map(|a| a.style.margins_visible)
            .unwrap_or(true);
        for index in 0..self.document.page_count() {
            if let Some(area) = self
                .document
                .page_mut(index)
                .and_then(|p| p.area.as_mut())
            {
                area.style.margins_visible = visible;
            }
        }
        self.patches.push(PagePatch::MarginsToggled { visible });
        visible
    }

    /// Release the change subscription and drop any pending check; further
    /// notifications are ignored
    pub fn teardown(&mut self) {
        self.subscription.release();
        self.debouncer.cancel();
    }

    // Editing entry points. These mirror what a rich-text layer does: mutate
    // the arena, then push the matching change notification.

    /// Insert a block at a position within a page
    pub fn insert_block(
        &mut self,
        page: usize,
        position: usize,
        block: BlockNode,
        now_ms: u64,
    ) -> Option<NodeId> {
        let id = self.document.insert_node(page, position, block)?;
        self.notify_change(
            ChangeEvent::mutation(page, ChangeKind::Structure).with_nodes([id]),
            now_ms,
        );
        Some(id)
    }

    /// Append a block to the end of a page
    pub fn append_block(&mut self, page: usize, block: BlockNode, now_ms: u64) -> Option<NodeId> {
        let position = self.document.page(page)?.len();
        self.insert_block(page, position, block, now_ms)
    }

    /// Remove a block from the document
    pub fn remove_block(&mut self, id: NodeId, now_ms: u64) -> Option<BlockNode> {
        let page = self.document.page_of(id)?;
        let block = self.document.remove_node(id)?;
        self.notify_change(
            ChangeEvent::mutation(page, ChangeKind::Structure).with_nodes([id]),
            now_ms,
        );
        Some(block)
    }

    /// Replace a node's text as live typing input; checked on the short
    /// debounce delay
    pub fn type_text(&mut self, id: NodeId, text: impl Into<String>, now_ms: u64) -> bool {
        let Some(page) = self.document.page_of(id) else {
            return false;
        };
        if !self.document.replace_text(id, text) {
            return false;
        }
        self.notify_change(ChangeEvent::typing(page).with_nodes([id]), now_ms);
        true
    }
}
