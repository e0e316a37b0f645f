use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// One elapsed period. `sequence` starts at 1 for every `start`.
///
/// A stalled consumer receives the missed periods in a burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub sequence: u64,
}

/// Drives a session countdown with at most one repeating tokio task.
///
/// Ticks are delivered over a channel so state changes stay with the consumer.
/// Dropping the timer cancels the task.
#[derive(Debug)]
pub struct SessionTimer {
    period: Duration,
    sender: UnboundedSender<TimerTick>,
    handle: Option<JoinHandle<()>>,
}

impl SessionTimer {
    #[must_use]
    pub fn new() -> (Self, UnboundedReceiver<TimerTick>) {
        Self::with_period(TICK_PERIOD)
    }

    #[must_use]
    pub fn with_period(period: Duration) -> (Self, UnboundedReceiver<TimerTick>) {
        let (sender, receiver) = unbounded_channel();
        (
            Self {
                period,
                sender,
                handle: None,
            },
            receiver,
        )
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Spawn the tick loop. Returns `false` when one is already running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        let sender = self.sender.clone();
        let period = self.period;
        self.handle = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            let mut sequence = 0;
            loop {
                interval.tick().await;
                sequence += 1;
                if sender.send(TimerTick { sequence }).is_err() {
                    break;
                }
            }
        }));
        tracing::debug!("session timer started");
        true
    }

    /// Cancel the tick loop. Returns `false` when nothing was running.
    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.abort();
                tracing::debug!("session timer stopped");
                true
            }
            None => false,
        }
    }
}

impl Drop for SessionTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
