//! The repeating one-second scheduler that drives `tick`.
//!
//! The clock owns exactly one `TickScheduler`, and the scheduler owns at most
//! one live `Interval`. Arming while already armed keeps the existing timer.

use std::future::pending;

use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};
use tracing::{debug, warn};

/// Period between ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A cancellable repeating timer.
#[derive(Debug, Default)]
pub struct TickScheduler {
    /// The live timer, if armed
    ticker: Option<Interval>,
}

impl TickScheduler {
    /// Creates an unarmed scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the repeating timer.
    ///
    /// The first tick fires one period after arming. Must be called from
    /// within a tokio runtime.
    pub fn arm(&mut self) {
        if self.ticker.is_some() {
            warn!("Tick scheduler already armed, keeping the existing timer");
            return;
        }

        let mut ticker = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.ticker = Some(ticker);
        debug!("Tick scheduler armed");
    }

    /// Stops the repeating timer. Does nothing when unarmed.
    pub fn cancel(&mut self) {
        if self.ticker.take().is_some() {
            debug!("Tick scheduler cancelled");
        }
    }

    /// Returns true if a timer is live.
    pub fn is_armed(&self) -> bool {
        self.ticker.is_some()
    }

    /// Waits for the next scheduled tick.
    ///
    /// Never resolves while unarmed, which makes it safe to use as a
    /// `tokio::select!` branch. Cancel safe.
    pub async fn next_tick(&mut self) {
        match self.ticker.as_mut() {
            Some(ticker) => {
                ticker.tick().await;
            }
            None => pending::<()>().await,
        }
    }
}
