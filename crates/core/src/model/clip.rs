//! Clipping region.
//!
//! The region is the intersection of every clip path applied since the
//! enclosing save. Paths are kept as closed polygons in device space; the
//! bounding box of the intersection is tracked alongside so consumers can
//! cull cheaply without a geometry library.

use smallvec::SmallVec;

use crate::utils::{Matrix, Point, Rect, apply_matrix_pt, bbox_of_points, intersect_rect};

/// Fill rule used to decide the inside of a clip path (W vs W*).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// A closed polygon contributing to the clip.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipPath {
    pub points: Vec<Point>,
    pub rule: FillRule,
}

impl ClipPath {
    pub fn new(points: Vec<Point>, rule: FillRule) -> Self {
        Self { points, rule }
    }

    /// Rectangle path, normalised so (x0, y0) is the lower-left corner.
    pub fn from_rect(rect: Rect) -> Self {
        let (x0, y0, x1, y1) = normalize_rect(rect);
        Self::new(
            vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1)],
            FillRule::NonZero,
        )
    }

    /// Bounding box of the polygon; an empty path has a zero-area box at the origin.
    pub fn bbox(&self) -> Rect {
        bbox_of_points(&self.points).unwrap_or((0.0, 0.0, 0.0, 0.0))
    }

    /// Maps every point through `m`.
    pub fn transform(&self, m: &Matrix) -> Self {
        Self {
            points: self.points.iter().map(|&p| apply_matrix_pt(m, p)).collect(),
            rule: self.rule,
        }
    }

    pub fn copy(&self) -> Self {
        Self {
            points: self.points.to_vec(),
            rule: self.rule,
        }
    }
}

/// Intersection of one or more clip paths.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipRegion {
    paths: SmallVec<[ClipPath; 2]>,
    bbox: Rect,
}

impl ClipRegion {
    pub fn from_path(path: ClipPath) -> Self {
        let bbox = path.bbox();
        let mut paths = SmallVec::new();
        paths.push(path);
        Self { paths, bbox }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::from_path(ClipPath::from_rect(rect))
    }

    /// Narrows the region to its intersection with `path`.
    pub fn intersect(&mut self, path: ClipPath) {
        self.bbox = intersect_rect(self.bbox, path.bbox());
        self.paths.push(path);
    }

    pub fn intersect_rect(&mut self, rect: Rect) {
        self.intersect(ClipPath::from_rect(rect));
    }

    /// Upper bound of the region.
    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    /// True when nothing can be painted inside the region.
    pub fn is_empty(&self) -> bool {
        let (x0, y0, x1, y1) = self.bbox;
        x1 <= x0 || y1 <= y0
    }

    pub fn paths(&self) -> &[ClipPath] {
        &self.paths
    }

    /// Create a copy of this region; no path is shared with the original.
    pub fn copy(&self) -> Self {
        Self {
            paths: self.paths.iter().map(ClipPath::copy).collect(),
            bbox: self.bbox,
        }
    }
}

fn normalize_rect(rect: Rect) -> Rect {
    let (x0, y0, x1, y1) = rect;
    (x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rect_normalizes() {
        let path = ClipPath::from_rect((10.0, 20.0, 0.0, 0.0));
        assert_eq!(path.bbox(), (0.0, 0.0, 10.0, 20.0));
        assert_eq!(path.points[0], (0.0, 0.0));
    }

    #[test]
    fn test_intersect_narrows_bbox() {
        let mut region = ClipRegion::from_rect((0.0, 0.0, 100.0, 100.0));
        region.intersect_rect((50.0, -10.0, 150.0, 40.0));
        assert_eq!(region.bbox(), (50.0, 0.0, 100.0, 40.0));
        assert_eq!(region.paths().len(), 2);
        assert!(!region.is_empty());
    }

    #[test]
    fn test_disjoint_intersection_is_empty() {
        let mut region = ClipRegion::from_rect((0.0, 0.0, 10.0, 10.0));
        region.intersect_rect((20.0, 20.0, 30.0, 30.0));
        assert!(region.is_empty());
    }

    #[test]
    fn test_polygon_intersection_uses_polygon_bbox() {
        let mut region = ClipRegion::from_rect((0.0, 0.0, 100.0, 100.0));
        let triangle = ClipPath::new(
            vec![(10.0, 10.0), (60.0, 10.0), (35.0, 200.0)],
            FillRule::EvenOdd,
        );
        region.intersect(triangle);
        assert_eq!(region.bbox(), (10.0, 10.0, 60.0, 100.0));
        assert_eq!(region.paths()[1].rule, FillRule::EvenOdd);
    }

    #[test]
    fn test_copy_does_not_share_paths() {
        let original = ClipRegion::from_rect((0.0, 0.0, 10.0, 10.0));
        let mut copy = original.copy();
        copy.intersect_rect((5.0, 5.0, 20.0, 20.0));
        assert_eq!(original.paths().len(), 1);
        assert_eq!(original.bbox(), (0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_transform_path() {
        let path = ClipPath::from_rect((0.0, 0.0, 1.0, 1.0));
        let moved = path.transform(&Matrix::translating(5.0, 5.0));
        assert_eq!(moved.bbox(), (5.0, 5.0, 6.0, 6.0));
    }
}
