use abut_rs::entities::ShapeRegistry;
use abut_rs::geometry::primitives::Rect;
use abut_rs::placement::Composition;
use serde::{Deserialize, Serialize};

use crate::config::StudioConfig;
use crate::editor::EditorState;

/// Serialized result of a composition run.
#[derive(Serialize, Deserialize, Clone)]
pub struct CompositionOutput {
    pub shapes: Vec<PlacedShapeRecord>,
    pub bounds: BoundsRecord,
    pub config: StudioConfig,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct PlacedShapeRecord {
    pub label: String,
    pub rotation_deg: f64,
    pub scale: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct BoundsRecord {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl From<Rect> for BoundsRecord {
    fn from(r: Rect) -> Self {
        Self {
            x_min: r.x_min,
            y_min: r.y_min,
            x_max: r.x_max,
            y_max: r.y_max,
        }
    }
}

impl CompositionOutput {
    pub fn new(
        composition: &Composition,
        registry: &ShapeRegistry,
        state: &EditorState,
        config: &StudioConfig,
    ) -> Self {
        let shapes = state
            .order
            .iter()
            .zip(&composition.placed)
            .filter_map(|(&slot, placed)| registry.get(slot).map(|shape| (slot, placed, shape)))
            .map(|(slot, placed, shape)| PlacedShapeRecord {
                label: shape.label.clone(),
                rotation_deg: state.shapes[slot].rotation_deg,
                scale: state.shapes[slot].scale,
                x: placed.position.0,
                y: placed.position.1,
            })
            .collect();
        Self {
            shapes,
            bounds: composition.bounds.into(),
            config: config.clone(),
        }
    }
}
