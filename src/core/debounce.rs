use super::scheduler::{Scheduler, TimerId, TimerQueue};

/// Trailing-edge debounce state bound to a shared scheduler.
///
/// Each `call` cancels the previous pending timer and re-arms it with the new
/// arguments, so only the arguments of the last call in a burst survive.
#[derive(Debug, Clone)]
pub struct Debouncer<A> {
    wait_ms: u64,
    pending: Option<(TimerId, A)>,
}

impl<A> Debouncer<A> {
    #[must_use]
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            pending: None,
        }
    }

    #[must_use]
    pub fn wait_ms(&self) -> u64 {
        self.wait_ms
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending_args(&self) -> Option<&A> {
        self.pending.as_ref().map(|(_, args)| args)
    }

    pub fn call<E, S: Scheduler<E>>(&mut self, scheduler: &mut S, args: A, event: E) -> TimerId {
        if let Some((previous, _)) = self.pending.take() {
            scheduler.cancel(previous);
        }
        let timer = scheduler.schedule(self.wait_ms, event);
        self.pending = Some((timer, args));
        timer
    }

    /// Drops the pending invocation, if any, and returns its arguments.
    pub fn cancel<E, S: Scheduler<E>>(&mut self, scheduler: &mut S) -> Option<A> {
        let (timer, args) = self.pending.take()?;
        scheduler.cancel(timer);
        Some(args)
    }

    /// Claims the arguments for a fired timer.
    ///
    /// Returns `None` for timers this debouncer no longer owns.
    pub fn fire(&mut self, timer: TimerId) -> Option<A> {
        match &self.pending {
            Some((pending, _)) if *pending == timer => self.pending.take().map(|(_, args)| args),
            _ => None,
        }
    }
}

/// Standalone debounced action with its own timer.
///
/// Time is supplied by the caller, which keeps the wrapper usable from both
/// wall-clock hosts and virtual-clock tests.
pub struct Debounced<A, F>
where
    F: FnMut(A),
{
    action: F,
    timers: TimerQueue<()>,
    debouncer: Debouncer<A>,
}

impl<A, F> Debounced<A, F>
where
    F: FnMut(A),
{
    #[must_use]
    pub fn new(action: F, wait_ms: u64) -> Self {
        Self {
            action,
            timers: TimerQueue::new(),
            debouncer: Debouncer::new(wait_ms),
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Records a call made at `now_ms`.
    ///
    /// A previous invocation that became due before `now_ms` fires first.
    pub fn call(&mut self, now_ms: u64, args: A) {
        self.advance_to(now_ms);
        self.debouncer.call(&mut self.timers, args, ());
    }

    /// Runs the wrapped action if its quiet period elapsed by `now_ms`.
    ///
    /// Returns the number of invocations performed (0 or 1).
    pub fn advance_to(&mut self, now_ms: u64) -> usize {
        let mut fired = 0;
        while let Some((timer, ())) = self.timers.pop_due(now_ms) {
            if let Some(args) = self.debouncer.fire(timer) {
                (self.action)(args);
                fired += 1;
            }
        }
        self.timers.advance_clock(now_ms);
        fired
    }

    /// Runs a pending invocation immediately.
    pub fn flush(&mut self) -> bool {
        match self.debouncer.cancel(&mut self.timers) {
            Some(args) => {
                (self.action)(args);
                true
            }
            None => false,
        }
    }

    pub fn cancel(&mut self) -> bool {
        self.debouncer.cancel(&mut self.timers).is_some()
    }
}

/// Leading-edge throttle with a single trailing evaluation per interval.
///
/// The first call in an idle period passes through immediately; calls made
/// while the interval is open collapse into one trailing evaluation carrying
/// the latest arguments. An interval of zero passes every call through.
#[derive(Debug, Clone)]
pub struct Throttler<A> {
    interval_ms: u64,
    window: Option<TimerId>,
    trailing: Option<A>,
}

impl<A> Throttler<A> {
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            window: None,
            trailing: None,
        }
    }

    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    #[must_use]
    pub fn has_trailing(&self) -> bool {
        self.trailing.is_some()
    }

    /// Returns the arguments to evaluate now, or `None` when they were
    /// deferred to the trailing edge.
    pub fn call<E, S: Scheduler<E>>(&mut self, scheduler: &mut S, args: A, event: E) -> Option<A> {
        if self.interval_ms == 0 {
            return Some(args);
        }
        if self.window.is_some() {
            self.trailing = Some(args);
            return None;
        }
        self.window = Some(scheduler.schedule(self.interval_ms, event));
        Some(args)
    }

    /// Closes the interval owned by `timer` and releases the trailing
    /// arguments, re-opening the interval when something was released.
    pub fn fire<E, S: Scheduler<E>>(
        &mut self,
        timer: TimerId,
        scheduler: &mut S,
        event: E,
    ) -> Option<A> {
        if self.window != Some(timer) {
            return None;
        }
        self.window = None;
        let args = self.trailing.take()?;
        self.window = Some(scheduler.schedule(self.interval_ms, event));
        Some(args)
    }
}

#[cfg(test)]
mod tests {
    use super::{Debouncer, Throttler};
    use crate::core::scheduler::{Scheduler, TimerQueue};

    #[test]
    fn debouncer_ignores_superseded_timer() {
        let mut queue = TimerQueue::new();
        let mut debouncer = Debouncer::new(100);
        let first = debouncer.call(&mut queue, 1, ());
        let second = debouncer.call(&mut queue, 2, ());

        assert!(!queue.is_pending(first));
        assert_eq!(debouncer.fire(first), None);
        assert_eq!(debouncer.fire(second), Some(2));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn throttler_passes_leading_and_collapses_trailing() {
        let mut queue = TimerQueue::new();
        let mut throttler = Throttler::new(16);

        assert_eq!(throttler.call(&mut queue, 1, ()), Some(1));
        assert_eq!(throttler.call(&mut queue, 2, ()), None);
        assert_eq!(throttler.call(&mut queue, 3, ()), None);

        let (timer, ()) = queue.pop_due(16).expect("window timer");
        assert_eq!(throttler.fire(timer, &mut queue, ()), Some(3));

        let (timer, ()) = queue.pop_due(32).expect("trailing window timer");
        assert_eq!(throttler.fire(timer, &mut queue, ()), None);
        assert_eq!(throttler.call(&mut queue, 4, ()), Some(4));
        assert_eq!(queue.now_ms(), 32);
    }

    #[test]
    fn zero_interval_throttler_passes_everything() {
        let mut queue = TimerQueue::new();
        let mut throttler = Throttler::new(0);
        assert_eq!(throttler.call(&mut queue, 1, ()), Some(1));
        assert_eq!(throttler.call(&mut queue, 2, ()), Some(2));
        assert!(queue.is_empty());
    }
}
