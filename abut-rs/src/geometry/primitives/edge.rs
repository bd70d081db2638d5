use anyhow::Result;
use anyhow::ensure;

use crate::geometry::ShapeTransform;
use crate::geometry::Transformable;
use crate::geometry::primitives::Point;

/// Line segment between two [`Point`]s
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn try_new(start: Point, end: Point) -> Result<Self> {
        ensure!(start != end, "degenerate edge, {start:?} == {end:?}");
        Ok(Edge { start, end })
    }

    /// X-coordinate where this edge crosses the horizontal line at `y`, by linear
    /// interpolation. `None` if the edge does not strictly straddle `y`, or if the
    /// edge is within `eps` of horizontal (its endpoints are handled as vertex hits).
    pub fn x_at_y(&self, y: f64, eps: f64) -> Option<f64> {
        let dy = self.end.1 - self.start.1;
        if dy.abs() <= eps {
            return None;
        }
        if (self.start.1 - y) * (self.end.1 - y) >= 0.0 {
            return None;
        }
        let t = (y - self.start.1) / dy;
        Some(self.start.0 + t * (self.end.0 - self.start.0))
    }

    /// Point at parameter `t` in `[0, 1]` along the edge.
    pub fn point_at(&self, t: f64) -> Point {
        Point(
            self.start.0 + t * (self.end.0 - self.start.0),
            self.start.1 + t * (self.end.1 - self.start.1),
        )
    }

    pub fn x_min(&self) -> f64 {
        f64::min(self.start.0, self.end.0)
    }

    pub fn x_max(&self) -> f64 {
        f64::max(self.start.0, self.end.0)
    }

    pub fn y_min(&self) -> f64 {
        f64::min(self.start.1, self.end.1)
    }

    pub fn y_max(&self) -> f64 {
        f64::max(self.start.1, self.end.1)
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.start.0 + self.end.0) / 2.0,
            (self.start.1 + self.end.1) / 2.0,
        )
    }
}

impl Transformable for Edge {
    fn transform(&mut self, t: &ShapeTransform) -> &mut Self {
        let Edge { start, end } = self;
        start.transform(t);
        end.transform(t);

        self
    }
}
