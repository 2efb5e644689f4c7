//! Progress observation for long closure runs.

use serde::{Deserialize, Serialize};

/// A snapshot of a running closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Words expanded so far.
    pub expansions: usize,
    /// Words waiting in the work queue.
    pub queue_depth: usize,
    /// Friends discovered so far.
    pub friends: usize,
}

/// Receives progress snapshots. Observers cannot influence the run.
pub trait ProgressObserver {
    fn observe(&mut self, progress: &Progress);
}

/// Writes progress lines through the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn observe(&mut self, progress: &Progress) {
        log::info!(
            "Expanded {} times, {} in the queue, {} friends so far.",
            progress.expansions,
            progress.queue_depth,
            progress.friends
        );
    }
}

/// Discards progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn observe(&mut self, _progress: &Progress) {}
}

/// Keeps every snapshot in order.
#[derive(Debug, Clone, Default)]
pub struct RecordProgress {
    pub snapshots: Vec<Progress>,
}

impl ProgressObserver for RecordProgress {
    fn observe(&mut self, progress: &Progress) {
        self.snapshots.push(*progress);
    }
}
