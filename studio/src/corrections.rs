use abut_rs::placement::EdgeInset;
use serde::{Deserialize, Serialize};

/// Which baseline extent side(s) an [`InsetRule`] narrows.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsetSides {
    Left,
    Right,
    Both,
}

/// A single data-driven contact correction: when the shape with `shape`'s
/// label sits at the snapped angle `angle_deg`, narrow its baseline extent by
/// `fraction` of its width on the given side(s).
///
/// Corrections compensate for outlines whose extent at the baseline
/// overstates their visual contact width at specific orientations.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InsetRule {
    pub shape: String,
    pub angle_deg: i32,
    pub sides: InsetSides,
    pub fraction: f64,
}

/// Lookup table over [`InsetRule`]s, keyed by label and snapped angle.
#[derive(Clone, Debug)]
pub struct InsetTable {
    rules: Vec<InsetRule>,
}

impl InsetTable {
    pub fn new(rules: Vec<InsetRule>) -> Self {
        Self { rules }
    }

    /// The inset for `label` at snapped angle `angle_deg`, or
    /// [`EdgeInset::NONE`] when no rule matches. The first matching rule wins.
    pub fn lookup(&self, label: &str, angle_deg: i32) -> EdgeInset {
        self.rules
            .iter()
            .find(|r| r.shape == label && r.angle_deg == angle_deg)
            .map(|r| match r.sides {
                InsetSides::Left => EdgeInset {
                    left_frac: r.fraction,
                    right_frac: 0.0,
                },
                InsetSides::Right => EdgeInset {
                    left_frac: 0.0,
                    right_frac: r.fraction,
                },
                InsetSides::Both => EdgeInset {
                    left_frac: r.fraction,
                    right_frac: r.fraction,
                },
            })
            .unwrap_or(EdgeInset::NONE)
    }
}
