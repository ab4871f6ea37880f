use rayon::prelude::*;

use crate::config::RevealConfig;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::{RevealError, RevealResult};
use crate::illustration::model::Illustration;
use crate::render::cpu::{CpuRenderer, CpuRendererOpts, FrameRGBA};
use crate::render::scene::{RevealFrameState, SceneSurface};
use crate::reveal::host::{RevealHost, VirtualHost};
use crate::reveal::schedule::{RevealPlan, plan_reveal};
use crate::reveal::sequencer::{Phase, RevealSequencer};

const MAX_PREALLOCATED_STATES: usize = 4096;

/// Options for [`RevealSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealSessionOpts {
    /// Virtual frame interval used for the next-frame callback.
    pub frame_interval_ms: u64,
    /// Rasterize range renders in parallel chunks.
    pub parallel: bool,
    /// Frames per parallel chunk.
    pub chunk_size: usize,
    /// Renderer options.
    pub renderer: CpuRendererOpts,
}

impl Default for RevealSessionOpts {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            parallel: false,
            chunk_size: 32,
            renderer: CpuRendererOpts::default(),
        }
    }
}

/// A reveal running on a virtual clock: sequencer, recorded scene and CPU renderer together.
pub struct RevealSession {
    sequencer: RevealSequencer<SceneSurface, VirtualHost>,
    renderer: CpuRenderer,
    opts: RevealSessionOpts,
}

impl RevealSession {
    /// Validate `config` and set up an idle session at time zero.
    pub fn new(
        illustration: Illustration,
        config: RevealConfig,
        opts: RevealSessionOpts,
    ) -> RevealResult<Self> {
        config.validate()?;
        if opts.chunk_size == 0 {
            return Err(RevealError::validation("chunk_size must be > 0"));
        }
        let renderer = CpuRenderer::new(&config, opts.renderer);
        let surface = SceneSurface::new(config.draw_ease, config.fade_ease);
        let host = VirtualHost::new(opts.frame_interval_ms);
        Ok(Self {
            sequencer: RevealSequencer::new(illustration, config, surface, host),
            renderer,
            opts,
        })
    }

    /// Assert `play`; starts a cycle on the rising edge.
    pub fn play(&mut self) {
        self.sequencer.set_play(true);
    }

    /// Withdraw `play`.
    pub fn stop(&mut self) {
        self.sequencer.set_play(false);
    }

    /// Change the silhouette size (restarts a running cycle).
    pub fn set_keep(&mut self, keep: usize) {
        self.sequencer.set_keep(keep);
    }

    /// Advance the virtual clock to `t_ms`, dispatching every callback due on the way.
    pub fn advance_to(&mut self, t_ms: u64) {
        while let Some(event) = self.sequencer.host_mut().pop_due(t_ms) {
            self.sequencer.dispatch(event);
        }
        self.sequencer.host_mut().set_now(t_ms);
    }

    /// Current virtual time.
    pub fn now_ms(&self) -> u64 {
        self.sequencer.host().now_ms()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.sequencer.phase()
    }

    /// Plan of the current or most recent cycle.
    pub fn plan(&self) -> Option<&RevealPlan> {
        self.sequencer.plan()
    }

    /// The underlying sequencer.
    pub fn sequencer(&self) -> &RevealSequencer<SceneSurface, VirtualHost> {
        &self.sequencer
    }

    /// Visual state at the current time.
    pub fn frame_state(&self) -> RevealFrameState {
        self.sequencer.surface().snapshot(self.now_ms())
    }

    /// Rasterize the current time.
    pub fn render_current(&self) -> RevealResult<FrameRGBA> {
        self.renderer
            .render(self.sequencer.illustration(), &self.frame_state())
    }

    /// Advance to `t_ms` and rasterize.
    pub fn frame_at(&mut self, t_ms: u64) -> RevealResult<FrameRGBA> {
        self.advance_to(t_ms);
        self.render_current()
    }

    /// Time, measured from the start of the current cycle, after which nothing changes anymore.
    ///
    /// Covers both the last stroke end and the end of the cross-fade. Before the first cycle this
    /// is computed from the plan the next cycle would run.
    pub fn settled_after_ms(&self) -> u64 {
        let fade_ms = self.sequencer.config().timing.fade_ms;
        let planned;
        let plan = match self.sequencer.plan() {
            Some(plan) => plan,
            None => {
                planned = plan_reveal(self.sequencer.illustration(), self.sequencer.config());
                &planned
            }
        };
        if plan.is_empty() {
            return fade_ms;
        }
        let draw_end = self
            .opts
            .frame_interval_ms
            .saturating_add(plan.draw_end_ms());
        let fade_end = plan.timing.fade_at_ms.saturating_add(fade_ms);
        draw_end.max(fade_end)
    }

    /// Restart the reveal at the current time and stream `frame_count` frames at `fps` into
    /// `sink`.
    ///
    /// A cycle already in progress is withdrawn first, so every call draws from scratch. Frame
    /// `i` shows the reveal `i * 1000 / fps` milliseconds after the current time.
    #[tracing::instrument(skip(self, sink))]
    pub fn render_range(
        &mut self,
        fps: u32,
        frame_count: u64,
        sink: &mut dyn FrameSink,
    ) -> RevealResult<()> {
        if fps == 0 {
            return Err(RevealError::validation("fps must be > 0"));
        }

        let capacity = usize::try_from(frame_count)
            .map_err(|_| RevealError::validation("frame_count exceeds addressable range"))?;

        self.stop();
        let origin = self.now_ms();
        self.play();

        let mut states = Vec::with_capacity(capacity.min(MAX_PREALLOCATED_STATES));
        for i in 0..frame_count {
            let t = origin.saturating_add(i.saturating_mul(1000) / fps as u64);
            self.advance_to(t);
            states.push(self.frame_state());
        }

        let size = self.renderer.size();
        sink.begin(SinkConfig {
            width: size,
            height: size,
            fps,
        })?;

        let illustration = self.sequencer.illustration();
        if self.opts.parallel {
            for (chunk_i, chunk) in states.chunks(self.opts.chunk_size).enumerate() {
                let frames: Vec<RevealResult<FrameRGBA>> = chunk
                    .par_iter()
                    .map(|st| self.renderer.render(illustration, st))
                    .collect();
                let base = (chunk_i * self.opts.chunk_size) as u64;
                for (j, frame) in frames.into_iter().enumerate() {
                    sink.push_frame(base + j as u64, &frame?)?;
                }
            }
        } else {
            for (i, st) in states.iter().enumerate() {
                let frame = self.renderer.render(illustration, st)?;
                sink.push_frame(i as u64, &frame)?;
            }
        }

        sink.end()?;
        tracing::debug!(frames = frame_count, "range rendered");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/reveal_session.rs"]
mod tests;
