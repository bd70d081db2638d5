use abut_rs::entities::ShapeRegistry;
use abut_rs::geometry::ShapeTransform;
use abut_rs::placement::{Composition, PlacementConfig, PlacementInput, place};

use crate::corrections::InsetTable;
use crate::editor::EditorState;
use crate::render::ShapeVisual;

/// Builds the placement inputs from the current editor state and runs the
/// contact engine. Shapes are placed in the editor's row order with their
/// current rotation and scale, plus any matching inset correction.
pub fn compose(
    registry: &ShapeRegistry,
    state: &EditorState,
    corrections: &InsetTable,
    config: &PlacementConfig,
) -> Composition {
    let inputs: Vec<PlacementInput> = state
        .order
        .iter()
        .filter_map(|&slot| registry.get(slot).map(|shape| (slot, shape)))
        .map(|(slot, shape)| {
            let s = &state.shapes[slot];
            let transform = ShapeTransform::new(s.rotation_deg.to_radians(), s.scale);
            let inset = corrections.lookup(&shape.label, s.rotation_deg.round() as i32);
            PlacementInput {
                outline: shape.outline.clone(),
                transform,
                inset,
            }
        })
        .collect();

    place(&inputs, config)
}

/// Drawing sources in row order, parallel to the composition produced by
/// [`compose`] for the same registry and state.
pub fn row_visuals<'a>(registry: &'a ShapeRegistry, state: &EditorState) -> Vec<ShapeVisual<'a>> {
    state
        .order
        .iter()
        .filter_map(|&slot| registry.get(slot))
        .map(ShapeVisual::from)
        .collect()
}
