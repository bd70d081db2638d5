use std::fmt::Display;

use ordered_float::NotNan;

use crate::geometry::primitives::Point;

/// Transform of a shape instance: a uniform scale followed by a
/// counter-clockwise rotation, both around the shape's local origin.
///
/// Rotation is kept in radians internally; degrees are a presentation-layer
/// concern at the boundary.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy)]
pub struct ShapeTransform {
    /// The rotation in radians
    pub rotation: NotNan<f64>,
    /// The uniform scale factor, strictly positive
    pub scale: NotNan<f64>,
}

impl ShapeTransform {
    pub fn new(rotation: f64, scale: f64) -> Self {
        assert!(scale > 0.0, "scale must be strictly positive, got {scale}");
        Self {
            rotation: NotNan::new(rotation).expect("rotation is NaN"),
            scale: NotNan::new(scale).expect("scale is NaN"),
        }
    }

    pub const fn identity() -> Self {
        const _0: NotNan<f64> = unsafe { NotNan::new_unchecked(0.0) };
        const _1: NotNan<f64> = unsafe { NotNan::new_unchecked(1.0) };
        Self {
            rotation: _0,
            scale: _1,
        }
    }

    pub fn from_rotation(rotation: f64) -> Self {
        Self::new(rotation, 1.0)
    }

    pub fn rotation(&self) -> f64 {
        self.rotation.into_inner()
    }

    pub fn scale(&self) -> f64 {
        self.scale.into_inner()
    }

    /// Applies the transform to a point: scale first, then rotate.
    pub fn apply(&self, p: Point) -> Point {
        let s = self.scale.into_inner();
        Point(p.0 * s, p.1 * s).rotated(self.rotation.into_inner())
    }
}

impl Default for ShapeTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Display for ShapeTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "r: {:.3}°, s: {:.3}",
            self.rotation.into_inner().to_degrees(),
            self.scale.into_inner()
        )
    }
}
