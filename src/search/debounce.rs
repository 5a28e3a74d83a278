// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A cancellable quiet-period timer.
//!
//! `schedule(value)` (re)starts the timer; when it elapses without another
//! `schedule` or a `cancel`, the handler runs with the most recent value.
//! Timing comes from `tokio::time`, so tests drive it with a paused clock
//! (`#[tokio::test(start_paused = true)]`) instead of real sleeps.
//!
//! The handler is synchronous and runs after the last await point of the
//! timer task. Once it starts, it always finishes; cancelling only ever
//! stops a timer that has not fired yet.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

type Handler<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Debounced task that fires `delay` after the last `schedule`.
///
/// Must be used from within a tokio runtime.
pub struct DebouncedTask<T> {
    delay: Duration,
    handler: Handler<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> DebouncedTask<T> {
    pub fn new<F>(delay: Duration, handler: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            delay,
            handler: Arc::new(handler),
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Restart the quiet period with a new value. Any earlier value that has
    /// not fired yet is dropped.
    pub fn schedule(&mut self, value: T) {
        self.cancel();
        let deadline = Instant::now() + self.delay;
        let handler = Arc::clone(&self.handler);
        self.pending = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            handler(value);
        }));
    }

    /// Drop the pending value. Returns true if a timer was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    /// True while a scheduled value is waiting for its deadline.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl<T> Drop for DebouncedTask<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
