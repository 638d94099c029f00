//! Split-point selection for overflowing pages

use crate::document::BlockNode;
use crate::error::LayoutError;
use crate::layout::keep_together::KeepTogetherResolver;
use crate::layout::measure::MeasurementSandbox;

/// Compute the index at which a page's content must be cut.
///
/// Nodes are cloned into the sandbox in order; the index of the first node
/// whose inclusion pushes cumulative height past `available_height` is the
/// split point. `None` means everything fits and no split is needed.
///
/// If the very first node alone exceeds the budget the index is 0: the node
/// is moved wholesale to the next page rather than internally split. This is
/// a known limitation; a node that fits on no page keeps being force-moved,
/// and bounding that is the caller's responsibility.
pub fn compute_split_index(
    nodes: &[&BlockNode],
    available_height: f32,
    sandbox: &mut MeasurementSandbox<'_>,
) -> Result<Option<usize>, LayoutError> {
    for (index, node) in nodes.iter().enumerate() {
        let cumulative = sandbox.append_clone(node)?;
        if cumulative > available_height {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

/// Pull a proposed split index back so it does not cut through a
/// keep-together group.
///
/// Scans backward from the cut toward 0; when a group straddles the cut, the
/// cut moves to the group's start and the scan restarts, so a relocated cut
/// can never land inside an earlier group. The scan terminates because every
/// relocation moves the cut strictly toward 0. Without a straddling group
/// the index is unchanged.
///
/// A group taller than a whole page still moves intact; the next pass finds
/// the destination overflowing and tries again.
pub fn adjust_split_for_keep_together(
    resolver: &KeepTogetherResolver,
    nodes: &[&BlockNode],
    split_index: usize,
) -> usize {
    let mut split = split_index;
    loop {
        let straddler = (0..split.min(nodes.len()))
            .rev()
            .map(|start| resolver.group(nodes, start))
            .find(|group| group.end > split);
        match straddler {
            Some(group) => split = group.start,
            None => return split,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::BlockNode;
    use crate::layout::measure::TextMeasurer;

    fn refs(nodes: &[BlockNode]) -> Vec<&BlockNode> {
        nodes.iter().collect()
    }

    fn para(height: f32) -> BlockNode {
        BlockNode::paragraph("p").with_height(height)
    }

    #[test]
    fn test_no_split_when_everything_fits() {
        let m = TextMeasurer::default();
        let mut sandbox = MeasurementSandbox::new(&m, 468.0);
        let nodes = [para(200.0), para(300.0)];
        let split = compute_split_index(&refs(&nodes), 864.0, &mut sandbox).unwrap();
        assert_eq!(split, None);
    }

    #[test]
    fn test_first_overflowing_node_wins() {
        let m = TextMeasurer::default();
        let mut sandbox = MeasurementSandbox::new(&m, 468.0);
        let nodes = [para(400.0), para(400.0), para(400.0)];
        let split = compute_split_index(&refs(&nodes), 864.0, &mut sandbox).unwrap();
        assert_eq!(split, Some(2));
    }

    #[test]
    fn test_oversized_first_node_forces_index_zero() {
        let m = TextMeasurer::default();
        let mut sandbox = MeasurementSandbox::new(&m, 468.0);
        let nodes = [para(950.0), para(100.0)];
        let split = compute_split_index(&refs(&nodes), 864.0, &mut sandbox).unwrap();
        assert_eq!(split, Some(0));
    }

    #[test]
    fn test_adjust_without_straddling_group() {
        let resolver = KeepTogetherResolver::new(100);
        let nodes = [para(100.0), para(100.0), para(100.0)];
        assert_eq!(adjust_split_for_keep_together(&resolver, &refs(&nodes), 2), 2);
    }

    #[test]
    fn test_adjust_pulls_back_to_group_start() {
        let resolver = KeepTogetherResolver::new(100);
        let nodes = [
            para(200.0),
            BlockNode::heading(2, "Results").with_height(100.0),
            BlockNode::table("t", 800.0),
        ];
        // Cut proposed between heading and table
        assert_eq!(adjust_split_for_keep_together(&resolver, &refs(&nodes), 2), 1);
    }

    #[test]
    fn test_adjust_pulls_back_through_chained_group() {
        let resolver = KeepTogetherResolver::new(100);
        let nodes = [
            BlockNode::heading(2, "Data").with_height(100.0),
            BlockNode::paragraph("Table 1:").with_height(50.0),
            BlockNode::table("t", 700.0),
        ];
        // heading, caption and table chain into one group; a cut proposed at
        // the table lands before the heading
        assert_eq!(adjust_split_for_keep_together(&resolver, &refs(&nodes), 2), 0);
    }

    #[test]
    fn test_adjust_never_lands_inside_an_earlier_group() {
        let resolver = KeepTogetherResolver::new(100);
        let nodes = [
            BlockNode::paragraph("Overview:").with_height(50.0),
            BlockNode::heading(2, "Data").with_height(100.0),
            BlockNode::paragraph("Table 1: totals").with_height(20.0),
            BlockNode::table("t", 700.0),
        ];
        // The caption's group pulls the cut to index 2, which sits inside
        // the heading's chained group; the cut keeps moving to index 1
        assert_eq!(adjust_split_for_keep_together(&resolver, &refs(&nodes), 3), 1);
    }

    #[test]
    fn test_adjust_index_zero_is_unchanged() {
        let resolver = KeepTogetherResolver::new(100);
        let nodes = [para(950.0)];
        assert_eq!(adjust_split_for_keep_together(&resolver, &refs(&nodes), 0), 0);
    }
}
