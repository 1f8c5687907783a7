// Debounce: one pending deadline, pushed back by every new trigger
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Coalesces bursts of triggers into a single action after a quiet period
///
/// `schedule` resets the deadline. Whoever owns the debouncer runs the
/// action once the deadline passes without another `schedule`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Start (or restart) the quiet period
    pub fn schedule(&mut self) {
        self.deadline = Some(Instant::now() + self.window);
    }

    /// Drop the pending action; returns whether one was pending
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the pending action if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Sleep until the pending deadline and consume it
    ///
    /// Returns false straight away when nothing is pending.
    pub async fn settled(&mut self) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };

        sleep_until(deadline).await;
        self.take_due(Instant::now())
    }
}
