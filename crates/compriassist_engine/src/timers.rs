//! Cancellable one-shot and repeating timers on a tokio runtime.
//!
//! Every timer is owned by a [`TimerHandle`]; dropping the handle cancels
//! the timer, so whoever holds the handles controls how long timers live.

use std::collections::HashMap;
use std::time::Duration;

use assist_logging::assist_debug;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::TimerId;

const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug)]
pub struct TimerHandle {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl TimerHandle {
    /// Runs `on_fire` once after `delay` unless cancelled first.
    pub fn once<F>(runtime: &Handle, delay: Duration, on_fire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let guard = cancel.clone();
        let task = runtime.spawn(async move {
            tokio::select! {
                _ = guard.cancelled() => {}
                _ = tokio::time::sleep(delay) => on_fire(),
            }
        });
        Self {
            cancel,
            task: Some(task),
        }
    }

    /// Calls `on_tick(1..=ticks)` every `interval`, the first call one interval from now.
    pub fn ticker<F>(runtime: &Handle, interval: Duration, ticks: u32, mut on_tick: F) -> Self
    where
        F: FnMut(u32) + Send + 'static,
    {
        let interval = interval.max(MIN_INTERVAL);
        let cancel = CancellationToken::new();
        let guard = cancel.clone();
        let task = runtime.spawn(async move {
            let mut clock = tokio::time::interval_at(Instant::now() + interval, interval);
            clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
            for tick in 1..=ticks {
                tokio::select! {
                    _ = guard.cancelled() => return,
                    _ = clock.tick() => on_tick(tick),
                }
            }
        });
        Self {
            cancel,
            task: Some(task),
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Waits for the timer to fire, finish ticking, or observe cancellation.
    pub async fn wait(mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        // `wait` takes the task out; a timer that was awaited has already run.
        if self.task.is_some() {
            self.cancel.cancel();
        }
    }
}

/// Keyed timers. Scheduling under an existing id replaces (and cancels) the
/// previous timer, which is what gives debounce semantics.
#[derive(Debug)]
pub struct TimerRegistry {
    runtime: Handle,
    timers: HashMap<TimerId, TimerHandle>,
}

impl TimerRegistry {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            timers: HashMap::new(),
        }
    }

    pub fn schedule<F>(&mut self, id: TimerId, delay: Duration, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = TimerHandle::once(&self.runtime, delay, on_fire);
        self.insert(id, handle);
    }

    pub fn ticker<F>(&mut self, id: TimerId, interval: Duration, ticks: u32, on_tick: F)
    where
        F: FnMut(u32) + Send + 'static,
    {
        let handle = TimerHandle::ticker(&self.runtime, interval, ticks, on_tick);
        self.insert(id, handle);
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    pub fn cancel_all(&mut self) -> usize {
        let count = self.timers.len();
        self.timers.clear();
        count
    }

    /// Timers that have neither fired nor been cancelled.
    pub fn active(&self) -> usize {
        self.timers
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    fn insert(&mut self, id: TimerId, handle: TimerHandle) {
        self.timers.retain(|_, existing| !existing.is_finished());
        if self.timers.insert(id, handle).is_some() {
            assist_debug!("timer {} rescheduled", id);
        }
    }
}
