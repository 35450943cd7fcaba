//! Test schedulers — deterministic `TickScheduler` implementations.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Semaphore;
use trail_core::scheduler::TickScheduler;

/// A scheduler whose ticks are due immediately. Counts every tick handed out.
#[derive(Debug, Default)]
pub struct InstantScheduler {
    ticks: AtomicUsize,
}

impl InstantScheduler {
    /// Creates a scheduler with a zero tick count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks that have fired.
    pub fn ticks(&self) -> usize {
        self.ticks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TickScheduler for InstantScheduler {
    async fn next_tick(&self) {
        tokio::task::yield_now().await;
        self.ticks.fetch_add(1, Ordering::SeqCst);
    }
}

/// A scheduler whose ticks fire only when the test releases them, so tests
/// can observe and poke the engine while a move is in flight.
#[derive(Debug)]
pub struct GatedScheduler {
    gate: Semaphore,
    waiting: AtomicUsize,
}

impl Default for GatedScheduler {
    fn default() -> Self {
        Self {
            gate: Semaphore::new(0),
            waiting: AtomicUsize::new(0),
        }
    }
}

impl GatedScheduler {
    /// Creates a closed gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lets `ticks` more ticks fire.
    pub fn release(&self, ticks: usize) {
        self.gate.add_permits(ticks);
    }

    /// Number of `next_tick` calls made so far, fired or still waiting.
    pub fn requested(&self) -> usize {
        self.waiting.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TickScheduler for GatedScheduler {
    async fn next_tick(&self) {
        self.waiting.fetch_add(1, Ordering::SeqCst);
        if let Ok(permit) = self.gate.acquire().await {
            permit.forget();
        }
    }
}
