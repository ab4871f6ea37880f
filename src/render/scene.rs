use std::collections::BTreeMap;

use crate::animation::ease::Ease;
use crate::foundation::core::ShapeId;
use crate::reveal::surface::{ColorFade, OutlineStyle, RevealSurface};

/// Visual state of one outline stroke at an instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StrokeState {
    /// Stroked shape.
    pub shape: ShapeId,
    /// Dash length (the shape's arc length).
    pub dash_len: f64,
    /// Current dash offset; `dash_len` is fully hidden, `0` fully drawn.
    pub dash_offset: f64,
}

impl StrokeState {
    /// Fraction of the stroke currently drawn.
    pub fn drawn_fraction(&self) -> f64 {
        if self.dash_len <= 0.0 {
            return 0.0;
        }
        (1.0 - self.dash_offset / self.dash_len).clamp(0.0, 1.0)
    }
}

/// Everything the rasterizer needs for one frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct RevealFrameState {
    /// Time the state was evaluated at.
    pub t_ms: u64,
    /// Opacity of the color layer.
    pub color_opacity: f64,
    /// Opacity of the outline layer.
    pub outline_opacity: f64,
    /// Silhouette strokes in shape order; hidden shapes are absent.
    pub strokes: Vec<StrokeState>,
}

/// [`RevealSurface`] that records what a browser would hold in classes and inline styles, and
/// evaluates the resulting CSS timeline on demand.
#[derive(Clone, Debug, Default)]
pub struct SceneSurface {
    draw_ease: Ease,
    fade_ease: Ease,
    styles: BTreeMap<ShapeId, OutlineStyle>,
    animate_at_ms: Option<u64>,
    color_fade: Option<(u64, ColorFade)>,
    layout_flushes: u64,
}

impl SceneSurface {
    /// Create a surface with the given easing curves.
    pub fn new(draw_ease: Ease, fade_ease: Ease) -> Self {
        Self {
            draw_ease,
            fade_ease,
            ..Default::default()
        }
    }

    /// Styling currently applied to `shape`.
    pub fn style(&self, shape: ShapeId) -> Option<&OutlineStyle> {
        self.styles.get(&shape)
    }

    /// When the draw animation was enabled, if it is enabled.
    pub fn animate_at_ms(&self) -> Option<u64> {
        self.animate_at_ms
    }

    /// When the color fade started, if it has.
    pub fn color_fade_at_ms(&self) -> Option<u64> {
        self.color_fade.map(|(t, _)| t)
    }

    /// Number of synchronous layout flushes performed.
    pub fn layout_flushes(&self) -> u64 {
        self.layout_flushes
    }

    /// Evaluate the visual state at `t_ms`.
    pub fn snapshot(&self, t_ms: u64) -> RevealFrameState {
        let strokes = self
            .styles
            .iter()
            .filter_map(|(&shape, style)| match *style {
                OutlineStyle::Drawn {
                    dash_len,
                    delay_ms,
                    duration_ms,
                } => {
                    let progress = match self.animate_at_ms {
                        Some(start) => {
                            let begin = start.saturating_add(delay_ms);
                            progress_at(t_ms, begin, duration_ms)
                        }
                        None => 0.0,
                    };
                    Some(StrokeState {
                        shape,
                        dash_len,
                        dash_offset: dash_len * (1.0 - self.draw_ease.apply(progress)),
                    })
                }
                OutlineStyle::Hidden => None,
            })
            .collect();

        let (color_opacity, outline_opacity) = match self.color_fade {
            Some((start, fade)) => {
                let p = self.fade_ease.apply(progress_at(t_ms, start, fade.fade_ms));
                let outline = if fade.fade_outline_out { 1.0 - p } else { 1.0 };
                (p, outline)
            }
            None => (0.0, 1.0),
        };

        RevealFrameState {
            t_ms,
            color_opacity,
            outline_opacity,
            strokes,
        }
    }
}

fn progress_at(t_ms: u64, begin_ms: u64, duration_ms: u64) -> f64 {
    if t_ms < begin_ms {
        return 0.0;
    }
    if duration_ms == 0 {
        return 1.0;
    }
    ((t_ms - begin_ms) as f64 / duration_ms as f64).min(1.0)
}

impl RevealSurface for SceneSurface {
    fn clear_classes(&mut self) {
        self.animate_at_ms = None;
        self.color_fade = None;
    }

    fn flush_layout(&mut self) {
        self.layout_flushes += 1;
    }

    fn apply_outline_style(&mut self, shape: ShapeId, style: &OutlineStyle) {
        self.styles.insert(shape, *style);
    }

    fn enable_animation(&mut self, now_ms: u64) {
        self.animate_at_ms = Some(now_ms);
    }

    fn enable_color_fade(&mut self, now_ms: u64, fade: ColorFade) {
        self.color_fade = Some((now_ms, fade));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
