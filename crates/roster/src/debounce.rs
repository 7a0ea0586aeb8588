//! Cancellable delayed delivery of the latest value in a burst.
//!
//! The debouncer has no thread or timer of its own. Callers pass the current
//! [`Instant`] when scheduling and when polling, which keeps it deterministic
//! and lets any event loop drive it.

use std::time::{Duration, Instant};

/// Handle naming one armed timer.
///
/// A newer schedule always gets a larger handle, which invalidates the older one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Pending<T> {
    handle: TimerHandle,
    deadline: Instant,
    value: T,
}

/// Holds at most one pending value and releases it after a quiet period.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
/// use roster::Debouncer;
///
/// let mut debouncer = Debouncer::new(Duration::from_millis(300));
/// let t0 = Instant::now();
///
/// debouncer.schedule("a", t0);
/// debouncer.schedule("an", t0 + Duration::from_millis(100));
///
/// assert_eq!(debouncer.poll(t0 + Duration::from_millis(399)), None);
/// assert_eq!(debouncer.poll(t0 + Duration::from_millis(400)), Some("an"));
/// assert!(!debouncer.is_pending());
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    next_handle: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            next_handle: 0,
            pending: None,
        }
    }

    /// The quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arms a timer for `value`, replacing any pending one.
    pub fn schedule(&mut self, value: T, now: Instant) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending = Some(Pending {
            handle,
            deadline: now + self.delay,
            value,
        });
        handle
    }

    /// Disarms the pending timer, returning its value.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle of the armed timer, if any.
    pub fn pending_handle(&self) -> Option<TimerHandle> {
        self.pending.as_ref().map(|pending| pending.handle)
    }

    /// When the armed timer fires.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Value waiting to be delivered.
    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|pending| &pending.value)
    }

    /// Delivers the pending value once its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.cancel(),
            _ => None,
        }
    }
}
