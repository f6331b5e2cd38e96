//! Elapsed-time source for a running study session.
//!
//! A spawned interval task sends one tick per period over a channel; the session
//! folds pending ticks into its tally when it needs the duration. The task is
//! aborted on `cancel` and on drop, so no tick outlives the session that owns the clock.

use tokio::sync::mpsc::{self, UnboundedReceiver, error::TryRecvError};
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant};

const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub struct SessionClock {
    ticks: UnboundedReceiver<()>,
    task: JoinHandle<()>,
}

impl SessionClock {
    /// Starts a one-second clock. Must be called from within a tokio runtime.
    pub fn start() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    pub fn with_period(period: Duration) -> Self {
        let (tx, ticks) = mpsc::unbounded_channel();
        let mut interval = time::interval_at(Instant::now() + period, period);

        let task = tokio::spawn(async move {
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    break;
                }
            }
        });

        Self { ticks, task }
    }

    /// Takes every tick delivered since the last call.
    pub fn drain(&mut self) -> u64 {
        let mut count = 0;
        loop {
            match self.ticks.try_recv() {
                Ok(()) => count += 1,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return count,
            }
        }
    }

    pub fn cancel(&mut self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for SessionClock {
    fn drop(&mut self) {
        self.task.abort();
    }
}
