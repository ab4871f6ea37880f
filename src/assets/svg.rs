use std::sync::Arc;

use kurbo::Size;
use usvg::tiny_skia_path::PathSegment;

use crate::foundation::core::{BezPath, Point, Rgba8, ShapeId, affine_from_usvg};
use crate::foundation::error::{RevealError, RevealResult};
use crate::illustration::geometry::Geometry;
use crate::illustration::model::{Illustration, Shape};

/// Parse SVG bytes into an [`Illustration`].
///
/// `usvg` normalizes every basic shape (`rect`, `circle`, `polyline`, ...) into a path, so loaded
/// shapes are all [`Geometry::Path`] except text and images, which are kept in document order
/// as unmeasurable entries.
pub(crate) fn load_svg(bytes: &[u8]) -> RevealResult<Illustration> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts)
        .map_err(|e| RevealError::svg(format!("parse svg tree: {e}")))?;

    let size = Size::new(tree.size().width() as f64, tree.size().height() as f64);
    let mut shapes = Vec::new();
    collect_shapes(tree.root(), &mut shapes)?;

    tracing::debug!(shapes = shapes.len(), "loaded svg illustration");
    Ok(Illustration::from_parts(size, shapes, Some(Arc::new(tree))))
}

fn collect_shapes(group: &usvg::Group, out: &mut Vec<Shape>) -> RevealResult<()> {
    for node in group.children() {
        let (geometry, element_id, transform, fill) = match node {
            usvg::Node::Group(g) => {
                collect_shapes(g, out)?;
                continue;
            }
            usvg::Node::Path(p) => (
                Geometry::Path(bez_from_usvg(p.data())),
                p.id(),
                p.abs_transform(),
                p.fill().and_then(solid_fill),
            ),
            usvg::Node::Image(img) => (Geometry::Image, img.id(), img.abs_transform(), None),
            usvg::Node::Text(text) => (Geometry::Text, text.id(), text.abs_transform(), None),
        };

        out.push(Shape {
            id: ShapeId::from_index(out.len())?,
            element_id: (!element_id.is_empty()).then(|| element_id.to_owned()),
            geometry,
            transform: affine_from_usvg(transform),
            fill,
        });
    }
    Ok(())
}

fn solid_fill(fill: &usvg::Fill) -> Option<Rgba8> {
    let usvg::Paint::Color(c) = fill.paint() else {
        return None;
    };
    let a = (fill.opacity().get() * 255.0).round().clamp(0.0, 255.0) as u8;
    Some(Rgba8::new(c.red, c.green, c.blue, a))
}

pub(crate) fn bez_from_usvg(path: &usvg::tiny_skia_path::Path) -> BezPath {
    fn pt(p: usvg::tiny_skia_path::Point) -> Point {
        Point::new(p.x as f64, p.y as f64)
    }

    let mut out = BezPath::new();
    for seg in path.segments() {
        match seg {
            PathSegment::MoveTo(p) => out.move_to(pt(p)),
            PathSegment::LineTo(p) => out.line_to(pt(p)),
            PathSegment::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathSegment::CubicTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathSegment::Close => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/assets/svg.rs"]
mod tests;
