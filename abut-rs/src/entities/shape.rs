use std::sync::Arc;

use crate::geometry::primitives::{Outline, Point};

/// A named base shape: a normalized outline loaded once at startup, plus the
/// source path data it was sampled from. Placements share the outline through
/// the [`Arc`], they never copy it.
#[derive(Clone, Debug)]
pub struct BaseShape {
    pub id: usize,
    pub label: String,
    pub outline: Arc<Outline>,
    /// Path data as found in the asset, in source coordinates
    pub path_data: String,
    /// Bounding-box center of the source path, subtracted by normalization
    pub source_center: Point,
    /// Uniform factor the source path was scaled by during normalization
    pub source_scale: f64,
}

impl BaseShape {
    pub fn new(
        id: usize,
        label: String,
        outline: Outline,
        path_data: String,
        source_center: Point,
        source_scale: f64,
    ) -> Self {
        Self {
            id,
            label,
            outline: Arc::new(outline),
            path_data,
            source_center,
            source_scale,
        }
    }
}
