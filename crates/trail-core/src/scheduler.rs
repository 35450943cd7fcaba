//! Tick scheduler abstraction.
//!
//! A navigation move advances one path index per tick. The scheduler is the
//! only suspension point in the engine; production code waits on a tokio
//! timer, tests inject instant or manually gated implementations.

use std::time::Duration;

use async_trait::async_trait;

/// Abstraction over the fixed-period delay between traversal steps.
#[async_trait]
pub trait TickScheduler: Send + Sync {
    /// Resolves when the next traversal step is due.
    async fn next_tick(&self);
}

/// Production scheduler backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy)]
pub struct IntervalScheduler {
    period: Duration,
}

impl IntervalScheduler {
    /// Creates a scheduler firing once per `period`.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Returns the tick period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }
}

#[async_trait]
impl TickScheduler for IntervalScheduler {
    async fn next_tick(&self) {
        tokio::time::sleep(self.period).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_interval_scheduler_waits_one_period() {
        // Arrange
        let scheduler = IntervalScheduler::new(Duration::from_millis(120));
        let started = tokio::time::Instant::now();

        // Act
        scheduler.next_tick().await;

        // Assert
        assert!(started.elapsed() >= Duration::from_millis(120));
    }
}
