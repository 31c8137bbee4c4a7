//! Rendering of a 2-D tree's splitting planes, for debugging tree shape.

use std::io::Write;

use tinyvec::TinyVec;

use crate::error::Result;
use crate::kdtree::KDTree;
use crate::r#type::{Coord, IndexableNum};

/// A node's splitting line, clipped to the rectangle implied by its ancestors' splits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitSegment<N: IndexableNum> {
    /// Index of the point that defines this split.
    pub point_index: u32,
    /// 0 for a vertical line (split on x), 1 for a horizontal line (split on y).
    pub axis: usize,
    /// Start of the segment.
    pub start: Coord<N>,
    /// End of the segment.
    pub end: Coord<N>,
}

impl<N: IndexableNum> KDTree<'_, N> {
    /// The splitting segments of every node, in pre-order, clipped to the rectangle from
    /// `min` to `max`.
    ///
    /// Each node's rectangle is split at the node's coordinate: the left child covers the
    /// lower part and the right child the upper part.
    ///
    /// Panics if the tree is not two-dimensional.
    pub fn split_segments(&self, min: Coord<N>, max: Coord<N>) -> Vec<SplitSegment<N>> {
        assert_eq!(self.dim(), 2, "split segments are only defined for 2-D trees");

        let mut segments = Vec::with_capacity(self.num_items());

        // (node, min_x, min_y, max_x, max_y)
        let mut stack: TinyVec<[(u32, N, N, N, N); 33]> = TinyVec::new();
        if !self.is_empty() {
            stack.push((0, min.x, min.y, max.x, max.y));
        }

        while let Some((slot, x1, y1, x2, y2)) = stack.pop() {
            let node = self.node(slot);
            let coord = self.points.point(node.point_index as usize)[node.axis as usize];

            let (segment, left, right) = if node.axis == 0 {
                (
                    (Coord::new(coord, y1), Coord::new(coord, y2)),
                    (x1, y1, coord, y2),
                    (coord, y1, x2, y2),
                )
            } else {
                (
                    (Coord::new(x1, coord), Coord::new(x2, coord)),
                    (x1, y1, x2, coord),
                    (x1, coord, x2, y2),
                )
            };

            segments.push(SplitSegment {
                point_index: node.point_index,
                axis: node.axis as usize,
                start: segment.0,
                end: segment.1,
            });

            // pushed in backwards order to what gets popped, so left is visited first
            if let Some(right_slot) = node.right {
                stack.push((right_slot, right.0, right.1, right.2, right.3));
            }
            if let Some(left_slot) = node.left {
                stack.push((left_slot, left.0, left.1, left.2, left.3));
            }
        }

        segments
    }

    /// Write an SVG document drawing every splitting segment over the unit square, scaled by
    /// `scale` pixels per unit.
    pub fn write_svg<W: Write>(&self, mut writer: W, scale: f64) -> Result<()> {
        let segments = self.split_segments(
            Coord::new(N::zero(), N::zero()),
            Coord::new(N::one(), N::one()),
        );

        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{scale}\" height=\"{scale}\">\n"
        ));
        for segment in &segments {
            out.push_str(&format!(
                "<line x1=\"{:.6}\" y1=\"{:.6}\" x2=\"{:.6}\" y2=\"{:.6}\" stroke-width=\"1\" stroke=\"black\" />\n",
                to_f64(segment.start.x) * scale,
                to_f64(segment.start.y) * scale,
                to_f64(segment.end.x) * scale,
                to_f64(segment.end.y) * scale,
            ));
        }
        out.push_str("</svg>\n");

        writer.write_all(out.as_bytes())?;
        log::debug!("wrote {} split segments as svg", segments.len());
        Ok(())
    }
}

#[inline]
fn to_f64<N: IndexableNum>(value: N) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
