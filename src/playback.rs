//! Step cursor for replaying a recorded trace.
//!
//! Replaying is plain indexed access into a [`Trace`] that is already complete, so the cursor holds
//! nothing but a position. How fast to advance it, and when to pause, is up to the caller.

use crate::trace::{Step, Trace};

/// Cursor over the steps of a [`Trace`].
///
/// This structure borrows the trace it replays and tracks which step is on display. It starts on
/// the first step and never moves past either end of the trace.
#[derive(Clone, Copy, Debug)]
pub struct Playback<'trace> {
    /// Trace being replayed.
    trace: &'trace Trace,
    /// Index of the step on display.
    position: usize,
}

impl<'trace> Playback<'trace> {
    /// Creates a cursor on the first step of `trace`.
    #[must_use]
    pub const fn new(trace: &'trace Trace) -> Self {
        Self { trace, position: 0 }
    }

    /// Step on display, or [`None`] for an empty trace.
    #[must_use]
    pub fn current(&self) -> Option<&'trace Step> {
        self.trace.get(self.position)
    }

    /// Index of the step on display.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of steps after the one on display.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.trace.len().saturating_sub(self.position + 1)
    }

    /// Returns `true` once the last step is on display, or if there is nothing to replay.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }

    /// Advances to the next step and returns it.
    ///
    /// Returns [`None`] without moving when the last step is already on display.
    pub fn step_forward(&mut self) -> Option<&'trace Step> {
        if self.is_finished() {
            return None;
        }

        self.position += 1;
        self.current()
    }

    /// Moves back to the previous step and returns it.
    ///
    /// Returns [`None`] without moving when the first step is already on display.
    pub fn step_back(&mut self) -> Option<&'trace Step> {
        self.position = self.position.checked_sub(1)?;
        self.current()
    }

    /// Jumps to the step at `index`, clamped to the last step, and returns it.
    pub fn seek(&mut self, index: usize) -> Option<&'trace Step> {
        self.position = index.min(self.trace.len().saturating_sub(1));
        self.current()
    }

    /// Returns to the first step.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}
