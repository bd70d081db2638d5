use std::path::PathBuf;

use abut_rs::placement::PlacementConfig;
use abut_rs::sampling::SamplerConfig;
use serde::{Deserialize, Serialize};

use crate::corrections::{InsetRule, InsetSides};
use crate::export::ExportTarget;

/// Configuration of the studio, all fields optional with sane defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StudioConfig {
    /// Shape asset files, in row order; the file stem is the shape label
    pub shape_files: Vec<PathBuf>,
    /// Labels of shapes whose rotation gesture is disabled
    pub rotation_locked: Vec<String>,
    /// Height every imported outline is normalized to, in user units
    pub normalized_height: f64,
    /// Inclusive scale range enforced by the editor
    pub scale_range: (f64, f64),
    /// Angular gain of the rotation gesture
    pub rotate_sensitivity: f64,
    /// Data-driven contact corrections, looked up by label and snapped angle
    pub corrections: Vec<InsetRule>,
    pub placement: PlacementConfig,
    pub sampler: SamplerConfig,
    pub render: RenderOptions,
    pub export: ExportConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            shape_files: ["solid.svg", "liquid.svg", "gas.svg", "plasma.svg"]
                .map(PathBuf::from)
                .to_vec(),
            rotation_locked: vec!["plasma".to_string()],
            normalized_height: 240.0,
            scale_range: (0.2, 5.0),
            rotate_sensitivity: 2.5,
            corrections: vec![InsetRule {
                shape: "liquid".to_string(),
                angle_deg: 135,
                sides: InsetSides::Both,
                fraction: 0.25,
            }],
            placement: PlacementConfig::default(),
            sampler: SamplerConfig::default(),
            render: RenderOptions::default(),
            export: ExportConfig::default(),
        }
    }
}

/// Visual options for the on-screen rendering of a composition.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RenderOptions {
    /// Solid canvas background, transparent when unset
    pub background: Option<String>,
    /// Fill color of the shapes
    pub fill: String,
    /// Stroke color of the selection glow
    pub glow_color: String,
    /// Stroke width of the glow, in screen pixels at scale 1
    pub glow_width_px: f64,
    /// Gaussian blur deviation of the glow, in screen pixels at scale 1
    pub glow_blur_px: f64,
    /// Margin around the composition in the viewBox, in user units
    pub margin: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: None,
            fill: "#111111".to_string(),
            glow_color: "#2F49FF".to_string(),
            glow_width_px: 5.0,
            glow_blur_px: 200.0,
            margin: 20.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    pub target: ExportTarget,
    /// Background fill of exported documents
    pub background: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            target: ExportTarget::Width(2000),
            background: "#eaedef".to_string(),
        }
    }
}
