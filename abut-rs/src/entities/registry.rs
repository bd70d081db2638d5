use crate::entities::BaseShape;

/// Process-wide immutable set of base shapes, loaded once at startup and
/// read-only thereafter. Shape ids are indices into the registry.
#[derive(Clone, Debug, Default)]
pub struct ShapeRegistry {
    shapes: Vec<BaseShape>,
}

impl ShapeRegistry {
    pub fn new(shapes: Vec<BaseShape>) -> Self {
        debug_assert!(
            shapes.iter().enumerate().all(|(i, s)| s.id == i),
            "shape ids must match registry indices"
        );
        Self { shapes }
    }

    pub fn get(&self, id: usize) -> Option<&BaseShape> {
        self.shapes.get(id)
    }

    pub fn by_label(&self, label: &str) -> Option<&BaseShape> {
        self.shapes.iter().find(|s| s.label == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BaseShape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
