mod contact;

use serde::{Deserialize, Serialize};

#[doc(inline)]
pub use contact::Composition;
#[doc(inline)]
pub use contact::PlacedShape;
#[doc(inline)]
pub use contact::PlacementInput;
#[doc(inline)]
pub use contact::baseline_extent;
#[doc(inline)]
pub use contact::place;
#[doc(inline)]
pub use contact::silhouette_right_x;

/// Configuration of the contact/placement engine.
///
/// Both tolerances are deliberately tunable: the geometric epsilon guards
/// vertex/edge matching at the baseline, the contact bias is the visible
/// micro-overlap hiding hairline gaps between adjacent shapes.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PlacementConfig {
    /// Tolerance for "at baseline" vertex and edge matching
    pub geometric_epsilon: f64,
    /// Fixed bias pulling each shape into its predecessor, in length units
    pub contact_bias: f64,
    /// Interpolated points per edge used by the overlap correction pass
    pub edge_overlap_samples: usize,
    /// How shapes are aligned vertically on the shared baseline
    pub baseline: BaselineMode,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            geometric_epsilon: 1e-10,
            contact_bias: 0.5,
            edge_overlap_samples: 20,
            baseline: BaselineMode::VerticalCenter,
        }
    }
}

/// Vertical alignment of shapes on the shared baseline (y = 0).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum BaselineMode {
    /// Every shape's local origin lies on the baseline
    Origin,
    /// The midpoint of every shape's own rotated vertical extent lies on the
    /// baseline, independently per shape
    VerticalCenter,
}

/// Fractional narrowing of a shape's baseline extent, applied before contact
/// computation. A presentation-level override supplied by the caller; the
/// engine applies it as plain data.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct EdgeInset {
    pub left_frac: f64,
    pub right_frac: f64,
}

impl EdgeInset {
    pub const NONE: EdgeInset = EdgeInset {
        left_frac: 0.0,
        right_frac: 0.0,
    };

    pub fn is_none(&self) -> bool {
        self.left_frac == 0.0 && self.right_frac == 0.0
    }
}

impl Default for EdgeInset {
    fn default() -> Self {
        Self::NONE
    }
}
