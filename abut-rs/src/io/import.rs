use anyhow::{Context, Result, bail, ensure};
use kurbo::BezPath;
use log::warn;

use crate::entities::{BaseShape, ShapeRegistry};
use crate::geometry::primitives::Outline;
use crate::sampling::{SamplerConfig, sample_path};

/// Converts raw SVG shape assets into normalized [`BaseShape`]s.
#[derive(Clone, Debug, Copy)]
pub struct Importer {
    /// Every imported outline is scaled so its bounding-box height equals this value
    pub normalized_height: f64,
    pub sampler_config: SamplerConfig,
}

impl Importer {
    pub fn new(normalized_height: f64, sampler_config: SamplerConfig) -> Self {
        Self {
            normalized_height,
            sampler_config,
        }
    }

    /// Imports a single shape from raw SVG bytes: extracts its path data,
    /// samples the curve, centers and normalizes the outline.
    pub fn import_shape(&self, id: usize, label: &str, svg_bytes: &[u8]) -> Result<BaseShape> {
        let path_data = extract_path_data(svg_bytes)
            .with_context(|| format!("shape '{label}': no usable path data"))?;
        let path = BezPath::from_svg(&path_data)
            .with_context(|| format!("shape '{label}': malformed path data"))?;

        let points = sample_path(&path, &self.sampler_config);
        ensure!(!points.is_empty(), "shape '{label}': path has no geometry");

        let raw = Outline::try_new(points)?;
        let source_center = raw.bbox().centroid();
        let source_scale = match raw.bbox().height() {
            h if h > 0.0 => self.normalized_height / h,
            _ => 1.0,
        };
        let outline = raw.normalize_to_height(self.normalized_height);
        if outline.n_vertices() < 3 {
            warn!(
                "[IMPORT] shape '{label}' degraded to {} vertices, placement will use its bounding box",
                outline.n_vertices()
            );
        }

        Ok(BaseShape::new(
            id,
            label.to_string(),
            outline,
            path_data,
            source_center,
            source_scale,
        ))
    }

    /// Imports every asset, each independently: a failing shape is reported
    /// by label and does not abort or corrupt the others.
    pub fn import_all(
        &self,
        assets: &[(String, Vec<u8>)],
    ) -> (ShapeRegistry, Vec<(String, anyhow::Error)>) {
        let mut shapes = Vec::with_capacity(assets.len());
        let mut failures = vec![];
        for (label, bytes) in assets {
            let id = shapes.len();
            match self.import_shape(id, label, bytes) {
                Ok(shape) => shapes.push(shape),
                Err(err) => failures.push((label.clone(), err)),
            }
        }
        (ShapeRegistry::new(shapes), failures)
    }
}

/// Extracts path data from raw SVG bytes: the `d` attribute of the first
/// `<path>` element, or, failing that, the first `<circle>` converted to
/// polygonal path data.
pub fn extract_path_data(svg_bytes: &[u8]) -> Result<String> {
    let svg_str = std::str::from_utf8(svg_bytes)?;

    if let Some(tag) = element_slice(svg_str, "<path")
        && let Some(d) = attr_value(tag, "d")
    {
        return Ok(d.to_string());
    }

    if let Some(tag) = element_slice(svg_str, "<circle") {
        let cx = attr_value(tag, "cx").and_then(|v| v.parse::<f64>().ok());
        let cy = attr_value(tag, "cy").and_then(|v| v.parse::<f64>().ok());
        let r = attr_value(tag, "r").and_then(|v| v.parse::<f64>().ok());
        if let (Some(cx), Some(cy), Some(r)) = (cx, cy, r) {
            return Ok(circle_to_path_data(cx, cy, r));
        }
    }

    bail!("no <path> or <circle> element found in SVG")
}

/// The opening tag of the first `elem` element, attributes included.
fn element_slice<'a>(svg_str: &'a str, elem: &str) -> Option<&'a str> {
    let start = svg_str.find(elem)?;
    let end = svg_str[start..].find('>')?;
    Some(&svg_str[start..start + end + 1])
}

/// Value of attribute `name` within an opening tag, single or double quoted.
fn attr_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    for quote in ['"', '\''] {
        let pattern = format!(" {name}={quote}");
        if let Some(start) = tag.find(&pattern) {
            let start = start + pattern.len();
            if let Some(end) = tag[start..].find(quote) {
                return Some(&tag[start..start + end]);
            }
        }
    }
    None
}

/// Converts a circle to path data, approximated as a 32-gon.
fn circle_to_path_data(cx: f64, cy: f64, r: f64) -> String {
    let segments = 32;
    let mut data = String::new();
    for i in 0..segments {
        let angle = 2.0 * std::f64::consts::PI * (i as f64) / (segments as f64);
        let x = cx + r * angle.cos();
        let y = cy + r * angle.sin();
        if i == 0 {
            data.push_str(&format!("M {x},{y}"));
        } else {
            data.push_str(&format!(" L {x},{y}"));
        }
    }
    data.push_str(" Z");
    data
}
