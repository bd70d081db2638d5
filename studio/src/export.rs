use abut_rs::placement::Composition;
use serde::{Deserialize, Serialize};
use svg::Document;
use svg::node::element::{Group, Rectangle};

use crate::config::{ExportConfig, RenderOptions};
use crate::render::{ShapeVisual, shape_path};

const MM_PER_INCH: f64 = 25.4;

/// Pixel sizing of an exported document.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportTarget {
    /// Fixed pixel width, height follows the composition's aspect ratio
    Width(u32),
    /// A physical page at the given dpi
    Paper {
        format: PaperFormat,
        orientation: Orientation,
        dpi: u32,
    },
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaperFormat {
    A4,
    A5,
}

impl PaperFormat {
    /// Portrait dimensions in millimeters.
    pub fn size_mm(&self) -> (f64, f64) {
        match self {
            PaperFormat::A4 => (210.0, 297.0),
            PaperFormat::A5 => (148.0, 210.0),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl ExportTarget {
    /// Document size in pixels for a composition with aspect ratio
    /// `height / width`.
    pub fn pixel_size(&self, aspect: f64) -> (f64, f64) {
        match *self {
            ExportTarget::Width(w) => {
                let w = w as f64;
                (w, (w * aspect).max(1.0))
            }
            ExportTarget::Paper {
                format,
                orientation,
                dpi,
            } => {
                let (mm_w, mm_h) = format.size_mm();
                let (mm_w, mm_h) = match orientation {
                    Orientation::Portrait => (mm_w, mm_h),
                    Orientation::Landscape => (mm_h, mm_w),
                };
                (
                    (mm_w / MM_PER_INCH * dpi as f64).round(),
                    (mm_h / MM_PER_INCH * dpi as f64).round(),
                )
            }
        }
    }
}

/// Renders the composition into a standalone document of the configured
/// pixel size, on the configured background, scaled to fit and centered.
pub fn export_document(
    composition: &Composition,
    visuals: &[ShapeVisual],
    export: &ExportConfig,
    render: &RenderOptions,
) -> Document {
    let b = composition.bounds;
    let aspect = match b.width() {
        w if w > 0.0 => b.height() / w,
        _ => 1.0,
    };
    let (doc_w, doc_h) = export.target.pixel_size(aspect);

    let doc = Document::new()
        .set("width", doc_w)
        .set("height", doc_h)
        .set("viewBox", (0.0, 0.0, doc_w, doc_h))
        .add(
            Rectangle::new()
                .set("width", doc_w)
                .set("height", doc_h)
                .set("fill", export.background.as_str()),
        );

    if b.width() <= 0.0 || b.height() <= 0.0 {
        return doc;
    }

    let k = (doc_w / b.width()).min(doc_h / b.height());
    let tx = (doc_w - b.width() * k) / 2.0 - b.x_min * k;
    let ty = (doc_h - b.height() * k) / 2.0 - b.y_min * k;

    let mut group =
        Group::new().set("transform", format!("translate({tx:.5} {ty:.5}) scale({k:.5})"));
    for (placed, visual) in composition.placed.iter().zip(visuals) {
        if placed.outline.is_empty() {
            continue;
        }
        group = group.add(shape_path(placed, visual).set("fill", render.fill.as_str()));
    }
    doc.add(group)
}
