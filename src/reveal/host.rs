/// Handle of a requested animation-frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Handle of an armed timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Callback delivered by the host event loop to [`RevealSequencer::dispatch`].
///
/// [`RevealSequencer::dispatch`]: crate::RevealSequencer::dispatch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// A requested frame is being painted.
    Frame(FrameHandle),
    /// A timer elapsed.
    Timer(TimerHandle),
}

/// Scheduling primitives the host environment provides: one next-frame callback and
/// cancellable timers.
pub trait RevealHost {
    /// Current time in milliseconds.
    fn now_ms(&self) -> u64;
    /// Ask for a callback on the next painted frame.
    fn request_frame(&mut self) -> FrameHandle;
    /// Cancel a frame request; unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
    /// Arm a timer firing `delay_ms` from now.
    fn set_timeout(&mut self, delay_ms: u64) -> TimerHandle;
    /// Disarm a timer; unknown handles are ignored.
    fn clear_timeout(&mut self, handle: TimerHandle);
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    due_ms: u64,
    seq: u64,
    event: HostEvent,
}

/// Deterministic host with a virtual millisecond clock.
///
/// Frames are painted every `frame_interval_ms`; nothing happens until the owner advances the
/// clock and dispatches the due events.
#[derive(Debug)]
pub struct VirtualHost {
    now_ms: u64,
    frame_interval_ms: u64,
    next_id: u64,
    pending: Vec<Pending>,
}

impl Default for VirtualHost {
    fn default() -> Self {
        Self::new(16)
    }
}

impl VirtualHost {
    /// Create a host at time zero.
    pub fn new(frame_interval_ms: u64) -> Self {
        Self {
            now_ms: 0,
            frame_interval_ms,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Interval between painted frames.
    pub fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms
    }

    /// Number of armed timers and frame requests.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether `handle` is still armed.
    pub fn is_timer_armed(&self, handle: TimerHandle) -> bool {
        self.pending
            .iter()
            .any(|p| p.event == HostEvent::Timer(handle))
    }

    /// Due time of the earliest pending event.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.pending.iter().map(|p| p.due_ms).min()
    }

    /// Remove and return the earliest event due at or before `until_ms`, moving the clock to
    /// its due time. Ties fire in the order they were scheduled.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<HostEvent> {
        let (i, p) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(i, p)| (i, *p))?;
        self.pending.remove(i);
        self.now_ms = self.now_ms.max(p.due_ms);
        Some(p.event)
    }

    /// Move the clock forward to `t_ms`; never moves backwards.
    pub fn set_now(&mut self, t_ms: u64) {
        self.now_ms = self.now_ms.max(t_ms);
    }

    fn push(&mut self, due_ms: u64, make: impl FnOnce(u64) -> HostEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(Pending {
            due_ms,
            seq: id,
            event: make(id),
        });
        id
    }
}

impl RevealHost for VirtualHost {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn request_frame(&mut self) -> FrameHandle {
        let due = self.now_ms.saturating_add(self.frame_interval_ms);
        let id = self.push(due, |id| HostEvent::Frame(FrameHandle(id)));
        tracing::trace!(id, due, "frame requested");
        FrameHandle(id)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending
            .retain(|p| p.event != HostEvent::Frame(handle));
    }

    fn set_timeout(&mut self, delay_ms: u64) -> TimerHandle {
        let due = self.now_ms.saturating_add(delay_ms);
        let id = self.push(due, |id| HostEvent::Timer(TimerHandle(id)));
        tracing::trace!(id, due, "timer armed");
        TimerHandle(id)
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.pending
            .retain(|p| p.event != HostEvent::Timer(handle));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/host.rs"]
mod tests;
