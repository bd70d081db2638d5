use crate::geometry::ShapeTransform;

/// Trait for types that can be modified by a [`ShapeTransform`].
pub trait Transformable: Clone {
    /// Applies a transformation to `self`.
    fn transform(&mut self, t: &ShapeTransform) -> &mut Self;

    /// Applies a transformation to a clone.
    fn transform_clone(&self, t: &ShapeTransform) -> Self {
        let mut clone = self.clone();
        clone.transform(t);
        clone
    }
}
