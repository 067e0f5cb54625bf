//! Single-slot cancellable timer
//!
//! A controller owns exactly one [`TimerSlot`]; the armed entry in it is the
//! only authoritative timer. Cancelling removes the entry outright, so a
//! cancelled timer can never come due later.

use std::time::Instant;

/// Identity of one arming of the slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy)]
struct Armed {
    id: TimerId,
    deadline: Instant,
}

#[derive(Debug, Default)]
pub struct TimerSlot {
    armed: Option<Armed>,
    next_id: u64,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the slot. Panics if a timer is already armed: the previous one
    /// must have fired or been cancelled first.
    pub fn arm(&mut self, deadline: Instant) -> TimerId {
        if let Some(existing) = self.armed {
            panic!("timer armed while {:?} is still pending", existing.id);
        }
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.armed = Some(Armed { id, deadline });
        id
    }

    /// Disarm, returning the cancelled timer if there was one
    pub fn cancel(&mut self) -> Option<TimerId> {
        self.armed.take().map(|armed| armed.id)
    }

    /// Disarm and return the timer if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<TimerId> {
        match self.armed {
            Some(armed) if armed.deadline <= now => {
                self.armed = None;
                Some(armed.id)
            }
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<TimerId> {
        self.armed.map(|armed| armed.id)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.armed.map(|armed| armed.deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_due_timer_fires_once() {
        let now = Instant::now();
        let mut slot = TimerSlot::new();
        let id = slot.arm(now + Duration::from_millis(10));

        assert_eq!(slot.take_due(now), None);
        assert_eq!(slot.take_due(now + Duration::from_millis(10)), Some(id));
        assert_eq!(slot.take_due(now + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let now = Instant::now();
        let mut slot = TimerSlot::new();
        let id = slot.arm(now);

        assert_eq!(slot.cancel(), Some(id));
        assert_eq!(slot.take_due(now + Duration::from_secs(1)), None);
        assert_eq!(slot.pending(), None);
    }

    #[test]
    fn test_rearming_issues_fresh_ids() {
        let now = Instant::now();
        let mut slot = TimerSlot::new();
        let first = slot.arm(now);
        slot.cancel();
        let second = slot.arm(now);
        assert_ne!(first, second);
    }

    #[test]
    #[should_panic(expected = "still pending")]
    fn test_double_arm_panics() {
        let now = Instant::now();
        let mut slot = TimerSlot::new();
        slot.arm(now);
        slot.arm(now);
    }
}
