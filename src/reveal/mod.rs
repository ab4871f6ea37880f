pub(crate) mod host;
pub(crate) mod sampler;
pub(crate) mod schedule;
pub(crate) mod selector;
pub(crate) mod sequencer;
pub(crate) mod surface;
