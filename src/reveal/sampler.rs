use crate::foundation::core::ShapeId;
use crate::illustration::model::Illustration;

/// Measured arc length of one shape.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ShapeSample {
    /// Measured shape.
    pub shape: ShapeId,
    /// Arc length in the shape's user units; always finite and `> 0`.
    pub length: f64,
}

/// Measure every shape of `illustration`, in document order.
///
/// Shapes that cannot be measured are left out rather than zero-filled; one failure never stops
/// the rest from being sampled.
#[tracing::instrument(skip(illustration), fields(shapes = illustration.len()))]
pub fn sample(illustration: &Illustration, accuracy: f64) -> Vec<ShapeSample> {
    let mut out = Vec::with_capacity(illustration.len());
    for shape in illustration.shapes() {
        match shape.geometry.arc_length(accuracy) {
            Ok(length) => out.push(ShapeSample {
                shape: shape.id,
                length,
            }),
            Err(err) => {
                tracing::debug!(shape = shape.id.0, kind = ?shape.kind(), %err, "shape excluded");
            }
        }
    }
    tracing::debug!(measured = out.len(), "sampled illustration");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/sampler.rs"]
mod tests;
