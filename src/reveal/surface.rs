use crate::foundation::core::ShapeId;

/// Per-shape outline styling applied at the start of a cycle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum OutlineStyle {
    /// Silhouette member: dash length equals the arc length, drawn from fully offset to zero.
    Drawn {
        /// Dash length (and starting dash offset).
        dash_len: f64,
        /// Delay after animation is enabled.
        delay_ms: u64,
        /// Draw duration.
        duration_ms: u64,
    },
    /// Measured but not part of the silhouette; suppressed, not removed.
    Hidden,
}

/// Color cross-fade parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ColorFade {
    /// Fade length for the color layer (and the outline layer when it fades out).
    pub fade_ms: u64,
    /// Fade the outline layer out over the same span.
    pub fade_outline_out: bool,
}

/// Rendering side of the reveal.
///
/// A browser implementation maps these onto class and inline-style mutation; the CPU renderer
/// records them and evaluates the timeline itself.
pub trait RevealSurface {
    /// Remove the animation and color-reveal state left by a previous cycle.
    fn clear_classes(&mut self);

    /// Synchronously apply pending style changes so a reset is observable before the next
    /// animation is enabled.
    fn flush_layout(&mut self);

    /// Set the outline styling of one measured shape.
    fn apply_outline_style(&mut self, shape: ShapeId, style: &OutlineStyle);

    /// Start the outline draw animation.
    fn enable_animation(&mut self, now_ms: u64);

    /// Start the color cross-fade.
    fn enable_color_fade(&mut self, now_ms: u64, fade: ColorFade);
}
