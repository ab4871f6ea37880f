//! drawreveal is an SVG draw-reveal animation engine.
//!
//! The longest outlines of an illustration are drawn one after another with a dash-offset
//! animation, then the full-color illustration cross-fades in on top of them. The engine is a
//! pure planning function plus a small state machine:
//!
//! - [`plan_reveal`] samples arc lengths, keeps the top-K silhouette and assigns staggered
//!   timings
//! - [`RevealSequencer`] runs `Idle -> Drawing -> ColorRevealed` against a [`RevealSurface`]
//!   (what gets painted) and a [`RevealHost`] (frames and timers)
//! - [`RevealSession`] ties the sequencer to a virtual clock and a CPU rasterizer for offline
//!   rendering
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod config;
mod encode;
mod foundation;
mod illustration;
mod render;
mod reveal;
mod session;

/// Yes/no proposal page state that hosts the reveal.
pub mod prompt;

pub use crate::animation::ease::Ease;
pub use crate::assets::color::ColorDef;
pub use crate::config::{RevealConfig, TimingConfig};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png};
pub use crate::foundation::core::{
    Affine, BezPath, Circle, CycleId, Ellipse, Line, Point, Rect, Rgba8, ShapeId, Vec2,
};
pub use crate::foundation::error::{RevealError, RevealResult};
pub use crate::illustration::geometry::{Geometry, ShapeKind};
pub use crate::illustration::model::{Illustration, IllustrationBuilder, Shape};
pub use crate::render::cpu::{CpuRenderer, CpuRendererOpts, FrameRGBA};
pub use crate::render::scene::{RevealFrameState, SceneSurface, StrokeState};
pub use crate::reveal::host::{FrameHandle, HostEvent, RevealHost, TimerHandle, VirtualHost};
pub use crate::reveal::sampler::{ShapeSample, sample};
pub use crate::reveal::schedule::{
    RevealPlan, TimedShape, TimingPlan, draw_duration_ms, plan_reveal, schedule,
};
pub use crate::reveal::selector::{SilhouetteSet, select};
pub use crate::reveal::sequencer::{CycleState, Phase, RevealSequencer};
pub use crate::reveal::surface::{ColorFade, OutlineStyle, RevealSurface};
pub use crate::session::reveal_session::{RevealSession, RevealSessionOpts};
