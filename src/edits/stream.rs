//! Candidate generation on a worker thread, streamed over a channel.
//!
//! A [`CandidateStream`] moves the work of building candidate strings off the
//! consuming thread. The consumer pulls candidates one at a time and blocks
//! only while the next candidate is not yet available. Dropping the stream
//! before it is exhausted disconnects the channel; the worker notices on its
//! next send and exits on its own.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, bounded};

use crate::alphabet::Alphabet;
use crate::edits::generator::{Edit, single_edits};
use crate::error::{FriendNetError, Result};

/// Default channel capacity between the generator worker and the consumer.
pub const DEFAULT_STREAM_BUFFER: usize = 64;

/// Streams the single edits of one word from a dedicated worker thread.
#[derive(Debug)]
pub struct CandidateStream {
    receiver: Receiver<Edit>,
    worker: Option<JoinHandle<()>>,
}

impl CandidateStream {
    /// Spawn a worker generating the candidates of `word`.
    ///
    /// `buffer` is the channel capacity; zero makes every send a rendezvous
    /// with the consumer.
    pub fn spawn(word: &str, alphabet: &Alphabet, buffer: usize) -> Result<Self> {
        let (sender, receiver) = bounded(buffer);
        let edits = single_edits(word, alphabet);

        let worker = thread::Builder::new()
            .name("edit-stream".to_string())
            .spawn(move || {
                for edit in edits {
                    if sender.send(edit).is_err() {
                        // Consumer went away.
                        break;
                    }
                }
            })
            .map_err(|e| FriendNetError::thread_pool(format!("Failed to spawn edit stream: {e}")))?;

        Ok(CandidateStream {
            receiver,
            worker: Some(worker),
        })
    }

    fn reap(&mut self) {
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            log::warn!("edit stream worker panicked");
        }
    }
}

impl Iterator for CandidateStream {
    type Item = Edit;

    fn next(&mut self) -> Option<Edit> {
        match self.receiver.recv() {
            Ok(edit) => Some(edit),
            Err(_) => {
                self.reap();
                None
            }
        }
    }
}
