use anyhow::Result;
use anyhow::ensure;
use itertools::Itertools;

use crate::geometry::ShapeTransform;
use crate::geometry::Transformable;
use crate::geometry::primitives::{Edge, Point, Rect};

/// Ordered point sequence approximating a shape's closed boundary curve,
/// in shape-local coordinates, with its bounding box cached.
///
/// Immutable once loaded; placements reference it, they never copy it.
/// An empty outline is representable: degenerate shapes degrade, they must
/// never bring down the placement engine.
#[derive(Clone, Debug)]
pub struct Outline {
    points: Vec<Point>,
    bbox: Rect,
}

impl Outline {
    /// Creates an outline from a point sequence. Consecutive duplicate vertices
    /// (including a closing vertex equal to the first) are stripped.
    pub fn try_new(mut points: Vec<Point>) -> Result<Self> {
        ensure!(
            points.iter().all(|p| p.0.is_finite() && p.1.is_finite()),
            "outline contains non-finite coordinates"
        );
        points = points.into_iter().dedup().collect_vec();
        if points.len() > 1 && points[0] == points[points.len() - 1] {
            points.pop();
        }
        let bbox = Self::generate_bbox(&points);
        Ok(Outline { points, bbox })
    }

    pub fn empty() -> Self {
        Outline {
            points: vec![],
            bbox: Rect::ZERO,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    pub fn n_vertices(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.points[i]
    }

    pub fn edge(&self, i: usize) -> Edge {
        let j = (i + 1) % self.n_vertices();
        Edge {
            start: self.points[i],
            end: self.points[j],
        }
    }

    /// Iterates over the closed boundary edges. Empty for outlines with
    /// fewer than 2 vertices.
    pub fn edge_iter(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = if self.n_vertices() < 2 {
            0
        } else {
            self.n_vertices()
        };
        (0..n).map(move |i| self.edge(i))
    }

    pub fn generate_bbox(points: &[Point]) -> Rect {
        if points.is_empty() {
            return Rect::ZERO;
        }
        let (mut x_min, mut y_min) = (f64::MAX, f64::MAX);
        let (mut x_max, mut y_max) = (f64::MIN, f64::MIN);
        for point in points {
            x_min = x_min.min(point.0);
            y_min = y_min.min(point.1);
            x_max = x_max.max(point.0);
            y_max = y_max.max(point.1);
        }
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// All vertices with `t` applied (scale, then rotation, around the local origin).
    pub fn transformed_points(&self, t: &ShapeTransform) -> Vec<Point> {
        self.points.iter().map(|p| p.transform_clone(t)).collect()
    }

    /// Exact bounding box of the transformed outline, evaluated over every
    /// sampled vertex rather than over a rotated rectangle approximation.
    pub fn transformed_bbox(&self, t: &ShapeTransform) -> Rect {
        Self::generate_bbox(&self.transformed_points(t))
    }

    /// Translates the center of the bounding box to the origin and uniformly
    /// scales so the bounding-box height equals `target_height`. A zero-height
    /// outline keeps its size (scale factor 1), it is only re-centered.
    pub fn normalize_to_height(self, target_height: f64) -> Outline {
        if self.points.is_empty() {
            return self;
        }
        let Point(cx, cy) = self.bbox.centroid();
        let scale = match self.bbox.height() {
            h if h > 0.0 => target_height / h,
            _ => 1.0,
        };
        let points = self
            .points
            .iter()
            .map(|p| Point((p.0 - cx) * scale, (p.1 - cy) * scale))
            .collect_vec();
        let bbox = Self::generate_bbox(&points);
        Outline { points, bbox }
    }
}

impl Transformable for Outline {
    fn transform(&mut self, t: &ShapeTransform) -> &mut Self {
        let Outline { points, bbox } = self;
        points.iter_mut().for_each(|p| {
            p.transform(t);
        });
        *bbox = Outline::generate_bbox(points);

        self
    }
}
