//! Validity checks for debug assertions and tests.

use crate::geometry::primitives::Rect;
use crate::placement::{baseline_extent, silhouette_right_x, PlacedShape};

/// True if `bounds` envelops the world bounding box of every non-degenerate
/// placed shape (within `eps`).
pub fn bounds_envelop_shapes(placed: &[PlacedShape], bounds: &Rect, eps: f64) -> bool {
    placed
        .iter()
        .filter(|p| !p.outline.is_empty())
        .map(|p| p.world_bbox())
        .all(|b| {
            b.x_min >= bounds.x_min - eps
                && b.y_min >= bounds.y_min - eps
                && b.x_max <= bounds.x_max + eps
                && b.y_max <= bounds.y_max + eps
        })
}

/// True if every shape claims baseline space in row order: no shape's left
/// baseline extent reaches more than `max_back_reach` left of its
/// predecessor's right baseline extent (both measured on world points at the
/// baseline, within `eps`).
pub fn row_claims_in_order(placed: &[PlacedShape], max_back_reach: f64, eps: f64) -> bool {
    let mut prev_right: Option<f64> = None;
    for p in placed {
        if p.outline.is_empty() {
            continue;
        }
        let points = p.world_points();
        let bbox = p.world_bbox();
        let (left, right) = baseline_extent(&points, &bbox, 0.0, eps);
        if let Some(pr) = prev_right
            && left < pr - max_back_reach - eps
        {
            return false;
        }
        prev_right = Some(right);
    }
    true
}

/// True if no placed shape's silhouette reaches left of its predecessor's
/// silhouette at any shared scanline, beyond `tolerance`.
/// Scans `n_scanlines` evenly spaced heights across the overlapping y-range
/// of each adjacent pair.
pub fn no_residual_overlap(placed: &[PlacedShape], n_scanlines: usize, tolerance: f64) -> bool {
    let eps = 1e-10;
    for pair in placed.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.outline.is_empty() || next.outline.is_empty() {
            continue;
        }
        let prev_points = prev.world_points();
        let next_points = next.world_points();
        let y_lo = prev.world_bbox().y_min.max(next.world_bbox().y_min);
        let y_hi = prev.world_bbox().y_max.min(next.world_bbox().y_max);
        if y_lo >= y_hi {
            continue;
        }
        for k in 0..=n_scanlines {
            let y = y_lo + (y_hi - y_lo) * k as f64 / n_scanlines as f64;
            let prev_right = silhouette_right_x(&prev_points, y, eps);
            let next_left = silhouette_left_x(&next_points, y, eps);
            if let (Some(pr), Some(nl)) = (prev_right, next_left)
                && nl < pr - tolerance
            {
                return false;
            }
        }
    }
    true
}

fn silhouette_left_x(points: &[crate::geometry::primitives::Point], y: f64, eps: f64) -> Option<f64> {
    let mut left = f64::INFINITY;
    for p in points {
        if (p.1 - y).abs() <= eps {
            left = left.min(p.0);
        }
    }
    let n = points.len();
    for i in 0..n {
        if let Ok(edge) =
            crate::geometry::primitives::Edge::try_new(points[i], points[(i + 1) % n])
            && let Some(x) = edge.x_at_y(y, eps)
        {
            left = left.min(x);
        }
    }
    (left < f64::INFINITY).then_some(left)
}
