use std::sync::Arc;

use crate::geometry::primitives::{Edge, Outline, Point, Rect};
use crate::geometry::ShapeTransform;
use crate::placement::{BaselineMode, EdgeInset, PlacementConfig};
use crate::util::assertions;

/// A shape handed to the placement engine: a normalized outline plus the
/// rotation/scale to apply and an optional baseline inset.
#[derive(Clone, Debug)]
pub struct PlacementInput {
    pub outline: Arc<Outline>,
    pub transform: ShapeTransform,
    pub inset: EdgeInset,
}

impl PlacementInput {
    pub fn new(outline: Arc<Outline>, transform: ShapeTransform) -> Self {
        Self {
            outline,
            transform,
            inset: EdgeInset::NONE,
        }
    }
}

/// A shape with its final position in composition space.
/// World coordinates of a vertex are `transform.apply(v) + position`.
#[derive(Clone, Debug)]
pub struct PlacedShape {
    pub outline: Arc<Outline>,
    pub transform: ShapeTransform,
    pub position: Point,
}

impl PlacedShape {
    /// Vertices of the outline in composition space.
    pub fn world_points(&self) -> Vec<Point> {
        self.outline
            .points()
            .iter()
            .map(|p| {
                let q = self.transform.apply(*p);
                Point(q.0 + self.position.0, q.1 + self.position.1)
            })
            .collect()
    }

    /// Axis-aligned bounds of the placed shape in composition space.
    pub fn world_bbox(&self) -> Rect {
        self.outline
            .transformed_bbox(&self.transform)
            .shifted(self.position.0, self.position.1)
    }
}

/// Result of a placement run: the shapes in left-to-right order with their
/// positions, and the aggregate bounds of the row.
#[derive(Clone, Debug)]
pub struct Composition {
    pub placed: Vec<PlacedShape>,
    pub bounds: Rect,
}

impl Composition {
    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    pub fn height(&self) -> f64 {
        self.bounds.height()
    }
}

/// Places `inputs` edge-to-edge on the baseline, left to right.
///
/// Each shape is rotated/scaled, aligned vertically per [`BaselineMode`],
/// then shifted so its left baseline extent touches the running contact
/// point. A correction pass against the previous shape's silhouette removes
/// any residual overlap the single-line extent missed, after which the
/// configured contact bias pulls the shape back by a fixed amount.
pub fn place(inputs: &[PlacementInput], config: &PlacementConfig) -> Composition {
    let eps = config.geometric_epsilon;
    let mut placed: Vec<PlacedShape> = Vec::with_capacity(inputs.len());
    let mut contact_x = 0.0;
    // Transformed points of the previously placed shape, in composition space.
    let mut prev_world: Option<(Vec<Point>, Rect)> = None;

    for input in inputs {
        let local = input.outline.transformed_points(&input.transform);

        if local.is_empty() {
            // Degenerate shapes occupy zero width and do not advance the
            // contact point or consume the bias.
            placed.push(PlacedShape {
                outline: input.outline.clone(),
                transform: input.transform,
                position: Point(contact_x, 0.0),
            });
            continue;
        }

        let bbox = bbox_of(&local);
        let pos_y = match config.baseline {
            BaselineMode::Origin => 0.0,
            BaselineMode::VerticalCenter => -(bbox.y_min + bbox.y_max) / 2.0,
        };

        // Extent of the outline along the baseline, measured in local
        // (rotated/scaled) coordinates at the height the baseline crosses.
        let (mut left, mut right) = baseline_extent(&local, &bbox, -pos_y, eps);

        if !input.inset.is_none() {
            let width = right - left;
            left += input.inset.left_frac * width;
            right -= input.inset.right_frac * width;
        }

        let mut pos_x = contact_x - left;

        if let Some((prev_points, prev_bbox)) = &prev_world {
            pos_x += max_penetration(
                &local,
                pos_x,
                pos_y,
                prev_points,
                prev_bbox,
                eps,
                config.edge_overlap_samples,
            );
            pos_x -= config.contact_bias;
            // The shape may end up right of the contact point (overlap
            // correction) but never claims left of it beyond the bias.
            debug_assert!(pos_x + left >= contact_x - config.contact_bias - eps);
        }

        let world: Vec<Point> = local
            .iter()
            .map(|p| Point(p.0 + pos_x, p.1 + pos_y))
            .collect();
        prev_world = Some((world, bbox.shifted(pos_x, pos_y)));

        contact_x = pos_x + right;
        placed.push(PlacedShape {
            outline: input.outline.clone(),
            transform: input.transform,
            position: Point(pos_x, pos_y),
        });
    }

    let bounds = placed
        .iter()
        .filter(|p| !p.outline.is_empty())
        .map(|p| p.world_bbox())
        .reduce(Rect::bounding_rect)
        .unwrap_or(Rect::ZERO);

    debug_assert!(assertions::bounds_envelop_shapes(&placed, &bounds, eps));

    Composition { placed, bounds }
}

/// Leftmost and rightmost x of the outline at height `y`, combining vertices
/// lying on the scanline (within `eps`) with linear interpolation along
/// crossing edges. Falls back to the bounding box when nothing intersects.
pub fn baseline_extent(points: &[Point], bbox: &Rect, y: f64, eps: f64) -> (f64, f64) {
    let mut left = f64::INFINITY;
    let mut right = f64::NEG_INFINITY;

    for p in points {
        if (p.1 - y).abs() <= eps {
            left = left.min(p.0);
            right = right.max(p.0);
        }
    }
    for edge in closed_edges(points) {
        if let Some(x) = edge.x_at_y(y, eps) {
            left = left.min(x);
            right = right.max(x);
        }
    }

    if left > right {
        (bbox.x_min, bbox.x_max)
    } else {
        (left, right)
    }
}

/// Rightmost x of the closed polygon `points` at height `y`, or `None` when
/// the scanline misses the polygon entirely.
pub fn silhouette_right_x(points: &[Point], y: f64, eps: f64) -> Option<f64> {
    let mut right = f64::NEG_INFINITY;
    for p in points {
        if (p.1 - y).abs() <= eps {
            right = right.max(p.0);
        }
    }
    for edge in closed_edges(points) {
        if let Some(x) = edge.x_at_y(y, eps) {
            right = right.max(x);
        }
    }
    (right > f64::NEG_INFINITY).then_some(right)
}

/// Largest horizontal overlap between the candidate shape (local points put
/// at `(pos_x, pos_y)`) and the previous shape's right silhouette.
/// Probes every vertex plus `n_edge_samples` interior points per edge.
fn max_penetration(
    local: &[Point],
    pos_x: f64,
    pos_y: f64,
    prev_points: &[Point],
    prev_bbox: &Rect,
    eps: f64,
    n_edge_samples: usize,
) -> f64 {
    let mut shift = 0.0_f64;

    let mut probe = |p: Point| {
        let wx = p.0 + pos_x;
        let wy = p.1 + pos_y;
        if !prev_bbox.contains_y(wy, eps) {
            return;
        }
        if let Some(prev_right) = silhouette_right_x(prev_points, wy, eps)
            && wx < prev_right
        {
            shift = shift.max(prev_right - wx);
        }
    };

    for p in local {
        probe(*p);
    }
    for edge in closed_edges(local) {
        for k in 1..=n_edge_samples {
            let t = k as f64 / (n_edge_samples + 1) as f64;
            probe(edge.point_at(t));
        }
    }
    shift
}

fn bbox_of(points: &[Point]) -> Rect {
    let mut r = Rect {
        x_min: f64::INFINITY,
        y_min: f64::INFINITY,
        x_max: f64::NEG_INFINITY,
        y_max: f64::NEG_INFINITY,
    };
    for p in points {
        r.x_min = r.x_min.min(p.0);
        r.y_min = r.y_min.min(p.1);
        r.x_max = r.x_max.max(p.0);
        r.y_max = r.y_max.max(p.1);
    }
    r
}

/// Edges of the implicitly closed polygon, skipping degenerate segments.
fn closed_edges(points: &[Point]) -> impl Iterator<Item = Edge> + '_ {
    let n = points.len();
    (0..n).filter_map(move |i| {
        let a = points[i];
        let b = points[(i + 1) % n];
        Edge::try_new(a, b).ok()
    })
}
