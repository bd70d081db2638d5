use abut_rs::entities::BaseShape;
use abut_rs::geometry::primitives::Outline;
use abut_rs::placement::{Composition, PlacedShape};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{ClipPath, Path, Rectangle};

use crate::config::RenderOptions;

/// Drawing source of one placed shape, aligned with `composition.placed`.
/// Shapes are drawn from their original path data; the sampled outline is
/// contact geometry, not artwork.
#[derive(Clone, Copy, Debug)]
pub struct ShapeVisual<'a> {
    pub path_data: &'a str,
    pub source_center: (f64, f64),
    pub source_scale: f64,
}

impl<'a> From<&'a BaseShape> for ShapeVisual<'a> {
    fn from(shape: &'a BaseShape) -> Self {
        Self {
            path_data: &shape.path_data,
            source_center: (shape.source_center.0, shape.source_center.1),
            source_scale: shape.source_scale,
        }
    }
}

/// Path data of an outline in its local coordinates.
pub fn outline_data(outline: &Outline) -> Data {
    match outline.points() {
        [] => Data::new(),
        [first, rest @ ..] => {
            let mut data = Data::new().move_to((first.0, first.1));
            for p in rest {
                data = data.line_to((p.0, p.1));
            }
            data.close()
        }
    }
}

/// SVG transform mapping the source path into world coordinates: recenter
/// and normalize, then scale, rotate and translate like the engine does.
pub fn visual_transform(placed: &PlacedShape, visual: &ShapeVisual) -> String {
    let (cx, cy) = visual.source_center;
    format!(
        "translate({:.5} {:.5}) rotate({:.5}) scale({:.5}) translate({:.5} {:.5})",
        placed.position.0,
        placed.position.1,
        placed.transform.rotation().to_degrees(),
        placed.transform.scale() * visual.source_scale,
        -cx,
        -cy,
    )
}

pub(crate) fn shape_path(placed: &PlacedShape, visual: &ShapeVisual) -> Path {
    if visual.path_data.is_empty() {
        // Fall back to the contact outline, which is already in normalized
        // local coordinates.
        Path::new()
            .set("d", outline_data(&placed.outline))
            .set(
                "transform",
                format!(
                    "translate({:.5} {:.5}) rotate({:.5}) scale({:.5})",
                    placed.position.0,
                    placed.position.1,
                    placed.transform.rotation().to_degrees(),
                    placed.transform.scale(),
                ),
            )
    } else {
        Path::new()
            .set("d", visual.path_data)
            .set("transform", visual_transform(placed, visual))
    }
}

/// Renders a composition to an SVG document. `visuals` runs parallel to
/// `composition.placed`; `glow` lists the row indices drawn with the inset
/// edge glow on top of their fill.
pub fn composition_to_svg(
    composition: &Composition,
    visuals: &[ShapeVisual],
    glow: &[usize],
    options: &RenderOptions,
) -> Document {
    let b = composition.bounds;
    let m = options.margin;
    let view_w = (b.width() + 2.0 * m).max(1.0);
    let view_h = (b.height() + 2.0 * m).max(1.0);
    let mut doc = Document::new().set("viewBox", (b.x_min - m, b.y_min - m, view_w, view_h));

    if let Some(background) = &options.background {
        doc = doc.add(
            Rectangle::new()
                .set("x", b.x_min - m)
                .set("y", b.y_min - m)
                .set("width", view_w)
                .set("height", view_h)
                .set("fill", background.as_str()),
        );
    }

    for (i, (placed, visual)) in composition.placed.iter().zip(visuals).enumerate() {
        if placed.outline.is_empty() {
            continue;
        }
        doc = doc.add(shape_path(placed, visual).set("fill", options.fill.as_str()));
        if glow.contains(&i) {
            let (clip, stroke) = glow_nodes(i, placed, visual, options);
            doc = doc.add(clip).add(stroke);
        }
    }
    doc
}

/// Inset glow at a shape's edges: the path is clipped to itself and stroked
/// with a blurred line, so the glow falls only inside the silhouette.
/// Stroke width and blur radius are divided by the shape's scale so the glow
/// has a constant on-screen thickness regardless of how far the shape is
/// scaled up or down.
fn glow_nodes(
    row_idx: usize,
    placed: &PlacedShape,
    visual: &ShapeVisual,
    options: &RenderOptions,
) -> (ClipPath, Path) {
    let clip_id = format!("glow-clip-{row_idx}");
    let clip = ClipPath::new()
        .set("id", clip_id.clone())
        .add(shape_path(placed, visual));
    let scale = placed.transform.scale();
    let stroke = shape_path(placed, visual)
        .set("fill", "none")
        .set("stroke", options.glow_color.as_str())
        .set("stroke-width", options.glow_width_px / scale)
        .set("clip-path", format!("url(#{clip_id})"))
        .set(
            "style",
            format!("filter: blur({}px)", options.glow_blur_px / scale),
        );
    (clip, stroke)
}
