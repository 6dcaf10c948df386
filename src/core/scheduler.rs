use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Handle of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Timer capability injected into every time-deferred component.
///
/// Components never read wall-clock time themselves: they ask the scheduler
/// for `now_ms` and register deferred work as events of type `E`.
pub trait Scheduler<E> {
    fn now_ms(&self) -> u64;

    /// Registers `event` to fire once `delay_ms` has elapsed from `now_ms`.
    fn schedule(&mut self, delay_ms: u64, event: E) -> TimerId;

    /// Cancels a pending timer. Returns `false` when it already fired or was
    /// cancelled before.
    fn cancel(&mut self, timer: TimerId) -> bool;
}

/// Deterministic timer queue driven by an explicit clock.
///
/// Due timers are released in deadline order; timers sharing a deadline are
/// released in scheduling order. The clock only moves forward.
#[derive(Debug, Clone)]
pub struct TimerQueue<E> {
    now_ms: u64,
    next_seq: u64,
    pending: BTreeMap<(u64, u64), E>,
    deadlines: HashMap<TimerId, u64>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    #[must_use]
    pub fn starting_at(now_ms: u64) -> Self {
        Self {
            now_ms,
            next_seq: 0,
            pending: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn is_pending(&self, timer: TimerId) -> bool {
        self.deadlines.contains_key(&timer)
    }

    #[must_use]
    pub fn deadline(&self, timer: TimerId) -> Option<u64> {
        self.deadlines.get(&timer).copied()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Releases the earliest timer due at or before `until_ms`.
    ///
    /// The clock is moved to the released timer's deadline so work scheduled
    /// from its handler is measured from the moment it fired.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(TimerId, E)> {
        let key = *self.pending.keys().next()?;
        if key.0 > until_ms {
            return None;
        }
        let event = self.pending.remove(&key)?;
        let timer = TimerId(key.1);
        self.deadlines.remove(&timer);
        self.now_ms = self.now_ms.max(key.0);
        Some((timer, event))
    }

    /// Moves the clock forward without releasing anything.
    pub fn advance_clock(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.deadlines.clear();
    }
}

impl<E> Scheduler<E> for TimerQueue<E> {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn schedule(&mut self, delay_ms: u64, event: E) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let deadline = self.now_ms.saturating_add(delay_ms);
        let timer = TimerId(seq);
        self.pending.insert((deadline, seq), event);
        self.deadlines.insert(timer, deadline);
        timer
    }

    fn cancel(&mut self, timer: TimerId) -> bool {
        match self.deadlines.remove(&timer) {
            Some(deadline) => self.pending.remove(&(deadline, timer.0)).is_some(),
            None => false,
        }
    }
}
