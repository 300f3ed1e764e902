//! Timer and frame queues driving deferred work.
//!
//! Hosts run due tasks by asking the scheduler for the next one up to a
//! deadline. [`VirtualScheduler`] keeps its own clock so callers advance
//! time explicitly and deterministically.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

/// Default interval between frames (about 60 fps).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Queue of deferred tasks of type `T`.
pub trait Scheduler<T> {
    /// Current time on the scheduler clock.
    fn now(&self) -> Duration;

    /// Run `task` once `delay` has elapsed.
    fn set_timeout(&mut self, delay: Duration, task: T);

    /// Run `task` at the next frame boundary.
    fn request_frame(&mut self, task: T);

    /// Due time of the earliest pending task.
    fn next_deadline(&self) -> Option<Duration>;

    /// Pop the earliest task due at or before `deadline` and move the clock
    /// to its due time. When nothing is due the clock moves to `deadline`
    /// and `None` is returned.
    fn next_due(&mut self, deadline: Duration) -> Option<T>;

    /// Number of pending tasks.
    fn pending(&self) -> usize;

    /// Drop every pending task.
    fn clear(&mut self);
}

#[derive(Debug)]
struct Entry<T> {
    due: Duration,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Deterministic scheduler over virtual time.
#[derive(Debug)]
pub struct VirtualScheduler<T> {
    now: Duration,
    frame_interval: Duration,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Entry<T>>>,
}

impl<T> Default for VirtualScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VirtualScheduler<T> {
    pub fn new() -> Self {
        Self::with_frame_interval(DEFAULT_FRAME_INTERVAL)
    }

    /// A zero interval makes frame callbacks fire at the current time.
    pub fn with_frame_interval(frame_interval: Duration) -> Self {
        Self {
            now: Duration::ZERO,
            frame_interval,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Next frame boundary strictly after the current time.
    fn next_frame(&self) -> Duration {
        let interval = self.frame_interval.as_nanos();
        if interval == 0 {
            return self.now;
        }
        let frames = self.now.as_nanos() / interval + 1;
        let nanos = frames.saturating_mul(interval);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    fn push(&mut self, due: Duration, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Entry { due, seq, task }));
    }
}

impl<T> Scheduler<T> for VirtualScheduler<T> {
    fn now(&self) -> Duration {
        self.now
    }

    fn set_timeout(&mut self, delay: Duration, task: T) {
        let due = self.now.saturating_add(delay);
        self.push(due, task);
    }

    fn request_frame(&mut self, task: T) {
        let due = self.next_frame();
        self.push(due, task);
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(entry)| entry.due)
    }

    fn next_due(&mut self, deadline: Duration) -> Option<T> {
        match self.queue.peek() {
            Some(Reverse(entry)) if entry.due <= deadline => {
                let Reverse(entry) = self.queue.pop()?;
                self.now = self.now.max(entry.due);
                Some(entry.task)
            }
            _ => {
                self.now = self.now.max(deadline);
                None
            }
        }
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}
