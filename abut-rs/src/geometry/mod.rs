mod geo_traits;
mod shape_transform;

/// Geometric primitives
pub mod primitives;

#[doc(inline)]
pub use geo_traits::Transformable;
#[doc(inline)]
pub use shape_transform::ShapeTransform;
