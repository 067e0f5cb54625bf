// Cursor state machine with cooperative auto-advance

use super::clock::{Clock, SystemClock};
use super::errors::ControllerError;
use super::timer::{TimerId, TimerSlot};
use super::{PlaybackState, PlaybackStatus};
use crate::trace::{Step, StepKind, Trace};
use std::time::Duration;

/// Owns one [`PlaybackState`] and the timer that advances it.
///
/// All boundary moves are no-ops rather than errors: stepping forward on the
/// last step or back on the first leaves the cursor where it is.
pub struct PlaybackController<K, P, C = SystemClock> {
    state: PlaybackState<K, P>,
    timer: TimerSlot,
    clock: C,
    base_interval: Duration,
    /// `base_interval` scaled by the current speed
    interval: Duration,
}

impl<K: StepKind, P, C: Clock> PlaybackController<K, P, C> {
    /// Start idle at step 0 with speed 1.0
    pub fn new(trace: Trace<K, P>, clock: C, base_interval: Duration) -> Self {
        PlaybackController {
            state: PlaybackState::new(trace, 1.0),
            timer: TimerSlot::new(),
            clock,
            base_interval,
            interval: base_interval,
        }
    }

    /// Begin auto-advance. No-op when already playing or on the last step.
    pub fn play(&mut self) {
        if self.state.is_playing {
            return;
        }
        if self.state.at_end() {
            tracing::debug!(cursor = self.state.cursor, "play ignored at terminal step");
            return;
        }
        self.state.is_playing = true;
        self.arm();
        if self.state.is_playing {
            tracing::debug!(cursor = self.state.cursor, speed = self.state.speed, "playing");
        }
        self.check_invariants();
    }

    pub fn pause(&mut self) {
        self.stop();
        self.check_invariants();
    }

    pub fn toggle(&mut self) {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Move one step forward; reaching the last step stops playback.
    pub fn step_forward(&mut self) {
        self.advance();
        self.check_invariants();
    }

    /// Move one step back. Always pauses: scrubbing while auto-advancing races.
    pub fn step_back(&mut self) {
        self.stop();
        self.state.cursor = self.state.cursor.saturating_sub(1);
        self.check_invariants();
    }

    /// Jump to an arbitrary step (clamped). Pauses like any manual scrub.
    pub fn seek(&mut self, index: usize) {
        self.stop();
        self.state.cursor = index.min(self.state.trace.last_index());
        self.check_invariants();
    }

    pub fn jump_to_end(&mut self) {
        self.seek(self.state.trace.last_index());
    }

    /// Back to step 0, idle
    pub fn reset(&mut self) {
        self.stop();
        self.state.cursor = 0;
        tracing::debug!("playback reset");
        self.check_invariants();
    }

    /// Change the auto-advance rate for subsequently armed ticks.
    ///
    /// Rejects non-finite or non-positive multipliers, and multipliers whose
    /// interval does not fit in a `Duration`, keeping the old speed.
    pub fn set_speed(&mut self, multiplier: f64) -> Result<(), ControllerError> {
        let interval = if multiplier.is_finite() && multiplier > 0.0 {
            Duration::try_from_secs_f64(self.base_interval.as_secs_f64() / multiplier).ok()
        } else {
            None
        };
        let Some(interval) = interval else {
            tracing::warn!(requested = multiplier, kept = self.state.speed, "speed rejected");
            return Err(ControllerError::InvalidSpeed {
                requested: multiplier,
            });
        };
        self.state.speed = multiplier;
        self.interval = interval;
        Ok(())
    }

    /// Swap in a freshly generated trace: the old trace and any pending
    /// timer are dropped together and playback restarts idle at step 0.
    pub fn replace_trace(&mut self, trace: Trace<K, P>) {
        self.timer.cancel();
        self.state = PlaybackState::new(trace, self.state.speed);
        tracing::debug!(steps = self.state.trace.len(), "trace replaced");
        self.check_invariants();
    }

    /// Fire the timer if it is due. Performs at most one step, then re-arms
    /// if still playing. Returns whether a step was taken.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        if self.timer.take_due(now).is_none() {
            return false;
        }
        self.advance();
        if self.state.is_playing {
            self.arm();
        }
        self.check_invariants();
        true
    }

    // ========== Read access ==========

    pub fn state(&self) -> &PlaybackState<K, P> {
        &self.state
    }

    pub fn trace(&self) -> &Trace<K, P> {
        &self.state.trace
    }

    pub fn current_step(&self) -> &Step<K, P> {
        self.state.current_step()
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor
    }

    pub fn total(&self) -> usize {
        self.state.trace.len()
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn speed(&self) -> f64 {
        self.state.speed
    }

    pub fn status(&self) -> PlaybackStatus {
        self.state.status()
    }

    /// Interval between auto-advance ticks at the current speed
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The armed timer, if any
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.timer.pending()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    // ========== Internals ==========

    /// Pauses instead when the deadline cannot be represented.
    fn arm(&mut self) {
        match self.clock.now().checked_add(self.interval) {
            Some(deadline) => {
                self.timer.arm(deadline);
            }
            None => {
                tracing::warn!(
                    interval = ?self.interval,
                    "auto-advance deadline out of range, pausing"
                );
                self.state.is_playing = false;
            }
        }
    }

    fn stop(&mut self) {
        if let Some(id) = self.timer.cancel() {
            tracing::trace!(?id, "timer cancelled");
        }
        self.state.is_playing = false;
    }

    fn advance(&mut self) {
        let last = self.state.trace.last_index();
        self.state.cursor = (self.state.cursor + 1).min(last);
        if self.state.cursor == last && self.state.is_playing {
            self.stop();
            tracing::debug!("playback reached the terminal step");
        }
    }

    fn check_invariants(&self) {
        debug_assert!(self.state.cursor <= self.state.trace.last_index());
        debug_assert!(!(self.state.is_playing && self.state.at_end()));
        debug_assert_eq!(self.state.is_playing, self.timer.pending().is_some());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::ManualClock;
    use crate::trace::TraceBuilder;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tick {
        Start,
        Move,
        Done,
        /// Start and terminal at once, for one-step traces
        Only,
    }

    impl StepKind for Tick {
        fn is_start(self) -> bool {
            matches!(self, Tick::Start | Tick::Only)
        }
        fn is_terminal(self) -> bool {
            matches!(self, Tick::Done | Tick::Only)
        }
        fn label(self) -> &'static str {
            "tick"
        }
    }

    fn trace_of(len: usize) -> Trace<Tick, usize> {
        let mut builder = TraceBuilder::new();
        if len <= 1 {
            builder.push(Tick::Only, "nothing to do", 0);
            return builder.finish();
        }
        builder.push(Tick::Start, "start", 0);
        for i in 1..len - 1 {
            builder.push(Tick::Move, format!("move {}", i), i);
        }
        builder.push(Tick::Done, "done", len - 1);
        builder.finish()
    }

    fn controller(len: usize) -> (PlaybackController<Tick, usize, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let controller =
            PlaybackController::new(trace_of(len), clock.clone(), Duration::from_secs(1));
        (controller, clock)
    }

    #[test]
    fn test_tick_advances_only_when_due() {
        let (mut c, clock) = controller(4);
        c.play();

        clock.advance(Duration::from_millis(999));
        assert!(!c.tick());
        assert_eq!(c.cursor(), 0);

        clock.advance(Duration::from_millis(1));
        assert!(c.tick());
        assert_eq!(c.cursor(), 1);
        assert!(c.pending_timer().is_some());
    }

    #[test]
    fn test_late_tick_moves_one_step() {
        let (mut c, clock) = controller(5);
        c.play();
        clock.advance(Duration::from_secs(10));

        assert!(c.tick());
        assert_eq!(c.cursor(), 1);
        // Re-armed relative to completion of the previous tick
        assert!(!c.tick());
    }

    #[test]
    fn test_playback_stops_at_terminal() {
        let (mut c, clock) = controller(3);
        c.play();
        for _ in 0..5 {
            clock.advance(Duration::from_secs(1));
            c.tick();
        }
        assert_eq!(c.cursor(), 2);
        assert!(!c.is_playing());
        assert_eq!(c.pending_timer(), None);

        c.play();
        assert!(!c.is_playing());
    }

    #[test]
    fn test_speed_scales_interval() {
        let (mut c, clock) = controller(4);
        c.set_speed(4.0).unwrap();
        assert_eq!(c.interval(), Duration::from_millis(250));

        c.play();
        clock.advance(Duration::from_millis(250));
        assert!(c.tick());
    }

    #[test]
    fn test_invalid_speed_keeps_previous() {
        let (mut c, _) = controller(4);
        c.set_speed(2.0).unwrap();
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(c.set_speed(bad).is_err());
        }
        assert_eq!(c.speed(), 2.0);
    }

    #[test]
    fn test_unrepresentable_interval_is_rejected() {
        let (mut c, _) = controller(4);
        c.set_speed(2.0).unwrap();
        assert_eq!(
            c.set_speed(1e-300),
            Err(ControllerError::InvalidSpeed { requested: 1e-300 })
        );
        assert_eq!(c.speed(), 2.0);
        assert_eq!(c.interval(), Duration::from_millis(500));

        c.play();
        assert!(c.is_playing());
    }

    #[test]
    fn test_deadline_overflow_pauses() {
        let clock = ManualClock::new();
        let mut c = PlaybackController::new(trace_of(4), clock, Duration::MAX);
        assert!(c.set_speed(0.5).is_err());

        c.play();
        assert!(!c.is_playing());
        assert_eq!(c.pending_timer(), None);
        assert!(!c.tick());
    }

    #[test]
    fn test_step_back_pauses() {
        let (mut c, _) = controller(4);
        c.step_forward();
        c.step_forward();
        c.play();
        c.step_back();
        assert_eq!(c.cursor(), 1);
        assert!(!c.is_playing());
        assert_eq!(c.pending_timer(), None);
    }

    #[test]
    fn test_single_step_trace() {
        let (mut c, _) = controller(1);
        c.play();
        c.step_forward();
        c.step_back();
        assert_eq!(c.cursor(), 0);
        assert!(!c.is_playing());
    }

    #[test]
    fn test_seek_clamps() {
        let (mut c, _) = controller(4);
        c.seek(99);
        assert_eq!(c.cursor(), 3);
        c.seek(1);
        assert_eq!(c.cursor(), 1);
    }
}
