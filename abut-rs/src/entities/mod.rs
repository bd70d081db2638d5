mod registry;
mod shape;

#[doc(inline)]
pub use registry::ShapeRegistry;
#[doc(inline)]
pub use shape::BaseShape;
