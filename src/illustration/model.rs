use std::path::Path;
use std::sync::Arc;

use kurbo::Size;

use crate::foundation::core::{Affine, Rgba8, ShapeId};
use crate::foundation::error::{RevealError, RevealResult};
use crate::illustration::geometry::{Geometry, ShapeKind};

/// One drawable element of an [`Illustration`].
#[derive(Clone, Debug)]
pub struct Shape {
    /// Document-order identity.
    pub id: ShapeId,
    /// Element `id` attribute, when the source had one.
    pub element_id: Option<String>,
    /// Geometry in the element's own user space.
    pub geometry: Geometry,
    /// Element-to-canvas transform; only used for rasterization, never for measurement.
    pub transform: Affine,
    /// Solid fill drawn by the color layer when there is no source SVG tree.
    pub fill: Option<Rgba8>,
}

impl Shape {
    /// Primitive kind of this shape.
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }
}

/// Immutable vector graphic: an ordered sequence of shapes plus the canvas they live on.
///
/// Cloning is cheap for the parsed SVG tree, which is shared.
#[derive(Clone, Debug)]
pub struct Illustration {
    size: Size,
    shapes: Vec<Shape>,
    tree: Option<Arc<usvg::Tree>>,
}

impl Illustration {
    pub(crate) fn from_parts(
        size: Size,
        shapes: Vec<Shape>,
        tree: Option<Arc<usvg::Tree>>,
    ) -> Self {
        Self { size, shapes, tree }
    }

    /// Start a programmatic illustration on a `width` x `height` canvas.
    pub fn builder(width: f64, height: f64) -> IllustrationBuilder {
        IllustrationBuilder {
            size: Size::new(width, height),
            shapes: Vec::new(),
            overflowed: false,
        }
    }

    /// Parse SVG bytes.
    pub fn from_svg_data(bytes: &[u8]) -> RevealResult<Self> {
        crate::assets::svg::load_svg(bytes)
    }

    /// Read and parse an SVG file.
    pub fn from_path(path: impl AsRef<Path>) -> RevealResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            RevealError::svg(format!("read svg '{}': {e}", path.display()))
        })?;
        Self::from_svg_data(&bytes)
    }

    /// Canvas size in user units.
    pub fn size(&self) -> Size {
        self.size
    }

    /// All shapes in document order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Look up a shape by id.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.index())
    }

    /// Parsed source tree, present for illustrations loaded from SVG.
    pub fn svg_tree(&self) -> Option<&usvg::Tree> {
        self.tree.as_deref()
    }

    /// Number of shapes, measurable or not.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// `true` when the illustration has no shapes at all.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Builder for illustrations assembled in code.
#[derive(Debug)]
pub struct IllustrationBuilder {
    size: Size,
    shapes: Vec<Shape>,
    overflowed: bool,
}

impl IllustrationBuilder {
    /// Append a shape with an identity transform and no fill.
    pub fn shape(self, geometry: Geometry) -> Self {
        self.shape_with(geometry, Affine::IDENTITY, None)
    }

    /// Append a filled shape.
    pub fn filled(self, geometry: Geometry, fill: Rgba8) -> Self {
        self.shape_with(geometry, Affine::IDENTITY, Some(fill))
    }

    /// Append a shape with an explicit transform and optional fill.
    ///
    /// Shapes past the `u32` id range are dropped and make [`build`](Self::build) fail.
    pub fn shape_with(mut self, geometry: Geometry, transform: Affine, fill: Option<Rgba8>) -> Self {
        let Ok(id) = ShapeId::from_index(self.shapes.len()) else {
            self.overflowed = true;
            return self;
        };
        self.shapes.push(Shape {
            id,
            element_id: None,
            geometry,
            transform,
            fill,
        });
        self
    }

    /// Finish the illustration.
    pub fn build(self) -> RevealResult<Illustration> {
        let Size { width, height } = self.size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(RevealError::validation(
                "illustration width/height must be finite and > 0",
            ));
        }
        if self.overflowed {
            return Err(RevealError::validation("too many shapes for u32 shape ids"));
        }
        Ok(Illustration::from_parts(self.size, self.shapes, None))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/illustration/model.rs"]
mod tests;
