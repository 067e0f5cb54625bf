//! Playback over an immutable trace
//!
//! - [`controller`]: the cursor state machine and its auto-advance timer
//! - [`clock`]: time source abstraction (real and manual clocks)
//! - [`timer`]: the single cancellable timer slot owned by a controller
//! - [`errors`]: rejected controller calls
//!
//! # State machine
//!
//! ```text
//!            play (cursor < last)
//!   Idle ─────────────────────────▶ Playing
//!    ▲  ◀──── pause / stepBack / reset / replace / reaching last
//!    └──────────────────────────────────┘
//! ```
//!
//! Everything runs on one thread. Auto-advance is cooperative: the owner
//! calls [`PlaybackController::tick`] regularly, and a due timer performs
//! exactly one step forward before the next one is armed. Calls that stop
//! auto-advance cancel the armed timer before they return.

pub mod clock;
pub mod controller;
pub mod errors;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::PlaybackController;
pub use errors::ControllerError;
pub use timer::{TimerId, TimerSlot};

use crate::trace::{Step, StepKind, Trace};

/// A trace together with the cursor over it.
///
/// Created with `cursor = 0` and `is_playing = false`, and replaced as a
/// whole when the trace changes; it never points at a foreign trace.
#[derive(Debug, Clone)]
pub struct PlaybackState<K, P> {
    trace: Trace<K, P>,
    cursor: usize,
    is_playing: bool,
    speed: f64,
}

impl<K: StepKind, P> PlaybackState<K, P> {
    pub fn new(trace: Trace<K, P>, speed: f64) -> Self {
        PlaybackState {
            trace,
            cursor: 0,
            is_playing: false,
            speed,
        }
    }

    pub fn trace(&self) -> &Trace<K, P> {
        &self.trace
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn current_step(&self) -> &Step<K, P> {
        &self.trace.steps()[self.cursor]
    }

    /// Step before the cursor, for renderers that animate transitions
    pub fn previous_step(&self) -> Option<&Step<K, P>> {
        self.cursor.checked_sub(1).and_then(|i| self.trace.get(i))
    }

    pub fn at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn at_end(&self) -> bool {
        self.cursor == self.trace.last_index()
    }

    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus {
            cursor: self.cursor,
            total: self.trace.len(),
            is_playing: self.is_playing,
            speed: self.speed,
        }
    }
}

/// Read-only summary for status displays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackStatus {
    pub cursor: usize,
    pub total: usize,
    pub is_playing: bool,
    pub speed: f64,
}
