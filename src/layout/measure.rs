//! Node measurement: host trait, built-in estimator, sandbox, overflow check

use crate::document::BlockNode;
use crate::error::LayoutError;

/// Rendered-dimension lookup supplied by the host.
///
/// The engine never re-flows text itself; it only needs the height a node
/// occupies when rendered at a given content width.
pub trait NodeMeasurer {
    /// Rendered height of `node` laid out at `width`, in device-independent
    /// units
    fn measure(&self, node: &BlockNode, width: f32) -> Result<f32, LayoutError>;
}

/// Character-grid height estimator so the crate is usable without a host
/// renderer. Hosts with real font metrics implement [`NodeMeasurer`]
/// themselves.
#[derive(Debug, Clone, Copy)]
pub struct TextMeasurer {
    /// Average glyph advance
    pub char_width: f32,
    /// Base line height before per-kind multipliers
    pub line_height: f32,
}

impl Default for TextMeasurer {
    fn default() -> Self {
        Self {
            char_width: 7.2,
            line_height: 16.0,
        }
    }
}

impl NodeMeasurer for TextMeasurer {
    fn measure(&self, node: &BlockNode, width: f32) -> Result<f32, LayoutError> {
        if let Some(height) = node.intrinsic_height {
            return Ok(height);
        }
        if width <= 0.0 {
            return Err(LayoutError::measurement("content width is not positive"));
        }

        let graphemes = node.rendered_text_len().max(1);
        let per_line = ((width / self.char_width).floor() as usize).max(1);
        let lines = graphemes.div_ceil(per_line);

        let line_height = self.line_height * node.kind.line_height_multiplier();
        Ok(lines as f32 * line_height + node.kind.spacing_after() * self.line_height)
    }
}

/// Decides whether a content area's extent exceeds its capacity
#[derive(Debug, Clone, Copy)]
pub struct OverflowDetector {
    /// Slack absorbing measurement and rounding noise
    tolerance: f32,
}

impl OverflowDetector {
    /// Create a detector with the given tolerance
    pub fn new(tolerance: f32) -> Self {
        Self { tolerance }
    }

    /// True iff `extent` exceeds `capacity` by more than the tolerance.
    /// Side-effect-free; safe to call repeatedly.
    pub fn is_overflowing(&self, extent: f32, capacity: f32) -> bool {
        extent > capacity + self.tolerance
    }
}

/// Off-screen scratch area for incremental measurement.
///
/// Sized to the target content area's width with unconstrained height; real
/// nodes are appended as clones and cumulative height read back after each
/// append, without touching the visible tree. Created once per
/// overflow-handling attempt; scratch clones are released when the sandbox
/// drops, on every exit path.
pub struct MeasurementSandbox<'a> {
    measurer: &'a dyn NodeMeasurer,
    width: f32,
    scratch: Vec<BlockNode>,
    cumulative: f32,
}

impl<'a> MeasurementSandbox<'a> {
    /// Create a sandbox matching a content area's width
    pub fn new(measurer: &'a dyn NodeMeasurer, width: f32) -> Self {
        Self {
            measurer,
            width,
            scratch: Vec::new(),
            cumulative: 0.0,
        }
    }

    /// Append a clone of a real node and return the new cumulative height
    pub fn append_clone(&mut self, node: &BlockNode) -> Result<f32, LayoutError> {
        let clone = node.clone();
        let height = self.measurer.measure(&clone, self.width)?;
        self.scratch.push(clone);
        self.cumulative += height;
        Ok(self.cumulative)
    }

    /// Current cumulative height of all appended clones
    pub fn cumulative_height(&self) -> f32 {
        self.cumulative
    }

    /// Number of clones currently held
    pub fn len(&self) -> usize {
        self.scratch.len()
    }

    /// Check if nothing has been appended yet
    pub fn is_empty(&self) -> bool {
        self.scratch.is_empty()
    }
}

impl Drop for MeasurementSandbox<'_> {
    fn drop(&mut self) {
        self.scratch.clear();
    }
}
