use crate::config::RevealConfig;
use crate::foundation::core::CycleId;
use crate::illustration::model::Illustration;
use crate::reveal::host::{FrameHandle, HostEvent, RevealHost, TimerHandle};
use crate::reveal::schedule::{RevealPlan, plan_reveal};
use crate::reveal::surface::{ColorFade, OutlineStyle, RevealSurface};

/// Phase of the current play cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No cycle running.
    #[default]
    Idle,
    /// Outline strokes are drawing; the fade timer is armed.
    Drawing,
    /// The color layer has been faded in.
    ColorRevealed,
}

/// State of the one cycle a sequencer owns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct CycleState {
    /// Identity of the cycle; bumped on every rising edge of `play`.
    pub cycle: CycleId,
    /// Current phase.
    pub phase: Phase,
    /// Host time the cycle started at.
    pub started_at_ms: u64,
    /// Estimated end of the outline draw, relative to `started_at_ms`.
    pub total_estimate_ms: u64,
    /// When the cross-fade is due, relative to `started_at_ms`.
    pub fade_at_ms: u64,
}

/// Drives one illustration through `Idle -> Drawing -> ColorRevealed`.
///
/// Only the rising edge of `play` starts a cycle. Starting a cycle, withdrawing `play` and
/// teardown all cancel the outstanding frame request and fade timer first, so a stale cycle
/// can never mutate the surface.
pub struct RevealSequencer<S: RevealSurface, H: RevealHost> {
    illustration: Illustration,
    config: RevealConfig,
    surface: S,
    host: H,
    play: bool,
    torn_down: bool,
    state: CycleState,
    plan: Option<RevealPlan>,
    pending_frame: Option<FrameHandle>,
    pending_fade: Option<TimerHandle>,
}

impl<S: RevealSurface, H: RevealHost> RevealSequencer<S, H> {
    /// Wrap an illustration; nothing happens until `play` becomes `true`.
    pub fn new(illustration: Illustration, config: RevealConfig, surface: S, host: H) -> Self {
        Self {
            illustration,
            config,
            surface,
            host,
            play: false,
            torn_down: false,
            state: CycleState::default(),
            plan: None,
            pending_frame: None,
            pending_fade: None,
        }
    }

    /// Feed the external `play` trigger.
    ///
    /// `false -> true` starts a fresh cycle. `true -> false` cancels the pending frame and fade
    /// timer and returns to `Idle`, leaving whatever is already on screen.
    pub fn set_play(&mut self, play: bool) {
        if self.torn_down {
            tracing::debug!(play, "play ignored after teardown");
            return;
        }
        let was = std::mem::replace(&mut self.play, play);
        match (was, play) {
            (false, true) => self.start_cycle(),
            (true, false) => {
                self.cancel_pending();
                self.state.phase = Phase::Idle;
                tracing::debug!(cycle = self.state.cycle.0, "play withdrawn");
            }
            _ => {}
        }
    }

    /// Change the silhouette size; restarts the cycle when currently playing.
    pub fn set_keep(&mut self, keep: usize) {
        if self.config.keep == keep {
            return;
        }
        self.config.keep = keep;
        if self.play && !self.torn_down {
            self.start_cycle();
        }
    }

    /// Deliver a host callback.
    ///
    /// Callbacks whose handle does not belong to the live cycle are rejected.
    pub fn dispatch(&mut self, event: HostEvent) {
        if self.torn_down {
            tracing::debug!(?event, "callback after teardown rejected");
            return;
        }
        match event {
            HostEvent::Frame(h) if self.pending_frame == Some(h) => {
                self.pending_frame = None;
                let now = self.host.now_ms();
                self.surface.enable_animation(now);
                tracing::debug!(cycle = self.state.cycle.0, now, "outline draw enabled");
            }
            HostEvent::Timer(h) if self.pending_fade == Some(h) => {
                self.pending_fade = None;
                self.reveal_color();
            }
            stale => {
                tracing::debug!(?stale, cycle = self.state.cycle.0, "stale callback rejected");
            }
        }
    }

    /// Cancel everything outstanding; later triggers and callbacks are ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.cancel_pending();
        self.torn_down = true;
        tracing::debug!(cycle = self.state.cycle.0, "sequencer torn down");
    }

    /// Current cycle state.
    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Plan of the current (or most recent) cycle.
    pub fn plan(&self) -> Option<&RevealPlan> {
        self.plan.as_ref()
    }

    /// Whether `play` is currently asserted.
    pub fn is_playing(&self) -> bool {
        self.play
    }

    /// Active configuration.
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// The illustration being revealed.
    pub fn illustration(&self) -> &Illustration {
        &self.illustration
    }

    /// Borrow the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Borrow the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutably borrow the host, e.g. to advance a virtual clock.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn start_cycle(&mut self) {
        self.cancel_pending();

        let now = self.host.now_ms();
        let cycle = self.state.cycle.next();

        self.surface.clear_classes();
        self.surface.flush_layout();

        let plan = plan_reveal(&self.illustration, &self.config);
        self.state = CycleState {
            cycle,
            phase: Phase::Drawing,
            started_at_ms: now,
            total_estimate_ms: plan.timing.total_estimate_ms,
            fade_at_ms: plan.timing.fade_at_ms,
        };

        if plan.is_empty() {
            tracing::debug!(cycle = cycle.0, "nothing measurable, revealing color");
            self.plan = Some(plan);
            self.reveal_color();
            return;
        }

        for entry in &plan.timing.entries {
            self.surface.apply_outline_style(
                entry.shape,
                &OutlineStyle::Drawn {
                    dash_len: entry.length,
                    delay_ms: entry.delay_ms,
                    duration_ms: entry.duration_ms,
                },
            );
        }
        for &shape in &plan.hidden {
            self.surface
                .apply_outline_style(shape, &OutlineStyle::Hidden);
        }

        self.pending_frame = Some(self.host.request_frame());
        self.pending_fade = Some(self.host.set_timeout(plan.timing.fade_at_ms));
        tracing::debug!(
            cycle = cycle.0,
            drawn = plan.timing.entries.len(),
            fade_at_ms = plan.timing.fade_at_ms,
            "cycle started"
        );
        self.plan = Some(plan);
    }

    fn reveal_color(&mut self) {
        let now = self.host.now_ms();
        self.surface.enable_color_fade(
            now,
            ColorFade {
                fade_ms: self.config.timing.fade_ms,
                fade_outline_out: self.config.fade_outline_out,
            },
        );
        self.state.phase = Phase::ColorRevealed;
        tracing::debug!(cycle = self.state.cycle.0, now, "color revealed");
    }

    fn cancel_pending(&mut self) {
        if let Some(h) = self.pending_frame.take() {
            self.host.cancel_frame(h);
        }
        if let Some(h) = self.pending_fade.take() {
            self.host.clear_timeout(h);
        }
    }
}

impl<S: RevealSurface, H: RevealHost> Drop for RevealSequencer<S, H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/sequencer.rs"]
mod tests;
