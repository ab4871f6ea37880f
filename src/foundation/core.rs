pub use kurbo::{Affine, BezPath, Circle, Ellipse, Line, Point, Rect, Vec2};

use crate::foundation::error::{RevealError, RevealResult};

/// Document-order index of a shape inside an [`Illustration`](crate::Illustration).
///
/// Ordering by `ShapeId` is the tie-breaker used when two shapes have the same arc length.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ShapeId(pub u32);

impl ShapeId {
    /// Index into the illustration's shape list.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Id for the shape at list position `index`; fails past `u32::MAX`.
    pub fn from_index(index: usize) -> RevealResult<Self> {
        u32::try_from(index)
            .map(Self)
            .map_err(|_| RevealError::validation(format!("shape index {index} exceeds u32 range")))
    }
}

/// Monotonic identity of one play cycle of a sequencer.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
)]
pub struct CycleId(pub u64);

impl CycleId {
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Construct from channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
}

/// Convert a `usvg`/`tiny-skia` transform into a kurbo [`Affine`].
pub(crate) fn affine_from_usvg(ts: usvg::Transform) -> Affine {
    Affine::new([
        ts.sx as f64,
        ts.ky as f64,
        ts.kx as f64,
        ts.sy as f64,
        ts.tx as f64,
        ts.ty as f64,
    ])
}

/// Convert a kurbo [`Affine`] into the `tiny-skia` transform used for rasterization.
pub(crate) fn affine_to_skia(a: Affine) -> resvg::tiny_skia::Transform {
    let [sx, ky, kx, sy, tx, ty] = a.as_coeffs();
    resvg::tiny_skia::Transform::from_row(
        sx as f32, ky as f32, kx as f32, sy as f32, tx as f32, ty as f32,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
