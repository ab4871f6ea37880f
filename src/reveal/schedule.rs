use crate::config::{RevealConfig, TimingConfig};
use crate::foundation::core::ShapeId;
use crate::illustration::model::Illustration;
use crate::reveal::sampler::sample;
use crate::reveal::selector::{SilhouetteSet, select};

/// Draw timing of one silhouette member.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TimedShape {
    /// Shape being drawn.
    pub shape: ShapeId,
    /// Position in the silhouette ranking (0 = longest).
    pub rank: usize,
    /// Arc length, used as the dash length.
    pub length: f64,
    /// Start delay relative to the draw start.
    pub delay_ms: u64,
    /// Draw duration.
    pub duration_ms: u64,
}

impl TimedShape {
    /// Time at which this stroke finishes drawing, relative to the draw start.
    pub fn end_ms(&self) -> u64 {
        self.delay_ms.saturating_add(self.duration_ms)
    }
}

/// Per-member draw timings plus the cross-fade schedule.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct TimingPlan {
    /// Members in rank order.
    pub entries: Vec<TimedShape>,
    /// Estimated end of the outline draw: last delay plus the tail buffer.
    pub total_estimate_ms: u64,
    /// When the color cross-fade starts, relative to the cycle start.
    pub fade_at_ms: u64,
}

impl TimingPlan {
    /// `true` when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Draw duration for a stroke of `length`: proportional, rounded to whole milliseconds and
/// clamped to `[min_duration_ms, max_duration_ms]`.
///
/// Inverted bounds are swapped rather than rejected.
pub fn draw_duration_ms(length: f64, timing: &TimingConfig) -> u64 {
    let lo = timing.min_duration_ms.min(timing.max_duration_ms);
    let hi = timing.min_duration_ms.max(timing.max_duration_ms);
    let raw = (length * timing.duration_per_unit).round();
    if raw.is_nan() {
        return lo;
    }
    raw.clamp(lo as f64, hi as f64) as u64
}

/// Assign delays and durations to a ranked silhouette.
pub fn schedule(set: &SilhouetteSet, timing: &TimingConfig) -> TimingPlan {
    let entries: Vec<TimedShape> = set
        .members()
        .iter()
        .enumerate()
        .map(|(rank, s)| TimedShape {
            shape: s.shape,
            rank,
            length: s.length,
            delay_ms: timing.stagger_ms.saturating_mul(rank as u64),
            duration_ms: draw_duration_ms(s.length, timing),
        })
        .collect();

    let Some(last) = entries.last() else {
        return TimingPlan::default();
    };

    let total_estimate_ms = last.delay_ms.saturating_add(timing.tail_ms);
    let fade_at_ms = total_estimate_ms.saturating_sub(timing.fade_ms);
    TimingPlan {
        entries,
        total_estimate_ms,
        fade_at_ms,
    }
}

/// Everything one play cycle needs: draw timings plus the shapes to hide.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct RevealPlan {
    /// Number of shapes that could be measured.
    pub measured: usize,
    /// Silhouette timings.
    pub timing: TimingPlan,
    /// Measured shapes outside the silhouette, in document order.
    pub hidden: Vec<ShapeId>,
}

impl RevealPlan {
    /// `true` when the illustration had no measurable shape; the outline phase is skipped.
    pub fn is_empty(&self) -> bool {
        self.timing.is_empty()
    }

    /// Latest stroke end relative to the draw start, `0` for an empty plan.
    pub fn draw_end_ms(&self) -> u64 {
        self.timing
            .entries
            .iter()
            .map(TimedShape::end_ms)
            .max()
            .unwrap_or(0)
    }
}

/// Sample, select and schedule in one pass.
///
/// Pure: the same illustration and configuration always produce the same plan.
#[tracing::instrument(skip_all, fields(keep = config.keep))]
pub fn plan_reveal(illustration: &Illustration, config: &RevealConfig) -> RevealPlan {
    let samples = sample(illustration, config.accuracy);
    let set = select(&samples, config.effective_keep());
    let timing = schedule(&set, &config.timing);
    tracing::debug!(
        measured = samples.len(),
        drawn = timing.entries.len(),
        fade_at_ms = timing.fade_at_ms,
        "planned reveal"
    );
    RevealPlan {
        measured: samples.len(),
        timing,
        hidden: set.hidden().to_vec(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/schedule.rs"]
mod tests;
