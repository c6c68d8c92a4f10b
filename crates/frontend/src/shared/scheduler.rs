//! Deferred callbacks.
//!
//! Retry and fallback timers are scheduled through [`Scheduler`] so the
//! navigation core can be driven by a virtual clock in tests.

use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Runs `task` once after `delay`. Fire-and-forget.
    fn schedule(&self, delay: Duration, task: Task);
}

/// `setTimeout` backed scheduler.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task).forget();
    }
}

/// Bounded re-attempt policy: at most `max_retries` extra attempts, each
/// `delay` after the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    pub fn allows(&self, attempt: u32) -> bool {
        attempt < self.max_retries
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(1, Duration::from_millis(800))
    }
}
