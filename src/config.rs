use std::path::Path;

use crate::animation::ease::Ease;
use crate::assets::color::ColorDef;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{RevealError, RevealResult};

/// Timing constants of the reveal.
///
/// The fade length and tail buffer have no derivation beyond visual feel; they are defaults, not
/// formulas.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    /// Delay added per rank after the first.
    pub stagger_ms: u64,
    /// Draw milliseconds per unit of arc length before clamping.
    pub duration_per_unit: f64,
    /// Shortest draw duration.
    pub min_duration_ms: u64,
    /// Longest draw duration.
    pub max_duration_ms: u64,
    /// Buffer added after the last stagger delay to estimate total draw time.
    pub tail_ms: u64,
    /// Color cross-fade length; the fade starts this long before the estimated end.
    pub fade_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            stagger_ms: 140,
            duration_per_unit: 1.15,
            min_duration_ms: 800,
            max_duration_ms: 2600,
            tail_ms: 2200,
            fade_ms: 700,
        }
    }
}

impl TimingConfig {
    /// Check internal consistency.
    pub fn validate(&self) -> RevealResult<()> {
        if !self.duration_per_unit.is_finite() || self.duration_per_unit < 0.0 {
            return Err(RevealError::validation(
                "timing.duration_per_unit must be finite and >= 0",
            ));
        }
        if self.min_duration_ms > self.max_duration_ms {
            return Err(RevealError::validation(format!(
                "timing.min_duration_ms ({}) must be <= max_duration_ms ({})",
                self.min_duration_ms, self.max_duration_ms
            )));
        }
        Ok(())
    }
}

/// Reveal configuration, mirroring the inputs the host page passes to the widget.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Number of longest shapes drawn as the outline; `0` behaves as `1`.
    pub keep: usize,
    /// Fade the outline layer out while the color layer fades in.
    pub fade_outline_out: bool,
    /// Square render size in pixels.
    pub size: u32,
    /// Outline stroke color.
    pub stroke_color: ColorDef,
    /// Outline stroke width in illustration user units.
    pub stroke_width: f64,
    /// Arc length accuracy passed to curve measurement.
    pub accuracy: f64,
    /// Easing of each stroke's draw.
    pub draw_ease: Ease,
    /// Easing of the layer cross-fade.
    pub fade_ease: Ease,
    /// Timing constants.
    pub timing: TimingConfig,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            keep: 25,
            fade_outline_out: true,
            size: 320,
            stroke_color: ColorDef(Rgba8::new(0xff, 0x3b, 0x86, 0xff)),
            stroke_width: 6.0,
            accuracy: 0.1,
            draw_ease: Ease::Css,
            fade_ease: Ease::Css,
            timing: TimingConfig::default(),
        }
    }
}

impl RevealConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> RevealResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| RevealError::validation(format!("parse reveal config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> RevealResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            RevealError::validation(format!("read reveal config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// Check every field.
    pub fn validate(&self) -> RevealResult<()> {
        if self.size == 0 {
            return Err(RevealError::validation("size must be > 0"));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(RevealError::validation(
                "stroke_width must be finite and > 0",
            ));
        }
        if !self.accuracy.is_finite() || self.accuracy <= 0.0 {
            return Err(RevealError::validation("accuracy must be finite and > 0"));
        }
        self.timing.validate()
    }

    /// Keep count with the `0 => 1` rule applied.
    pub fn effective_keep(&self) -> usize {
        self.keep.max(1)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
