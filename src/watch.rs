//! Push-based change notification for live queries.
//!
//! A `Watchable<T>` holds the senders of every live subscriber. After a
//! write commits, the repository re-evaluates the watched value and calls
//! `publish`; each subscriber receives its own copy. Dropping the receiver
//! is the only unsubscribe step: the dead sender is pruned on the next
//! publish, with no other side effects.

use crossbeam_channel::{Receiver, Sender, unbounded};
use std::sync::Mutex;

pub struct Watchable<T> {
    senders: Mutex<Vec<Sender<T>>>,
}

impl<T: Clone> Watchable<T> {
    pub fn new() -> Self {
        Self {
            senders: Mutex::new(Vec::new()),
        }
    }

    /// Register a new subscriber. Values published after this call are
    /// delivered in order; nothing is replayed.
    pub fn subscribe(&self) -> Receiver<T> {
        let (tx, rx) = unbounded();
        self.senders.lock().unwrap().push(tx);
        rx
    }

    /// Deliver `value` to every live subscriber, dropping the ones whose
    /// receiver has gone away.
    pub fn publish(&self, value: &T) {
        let mut senders = self.senders.lock().unwrap();
        senders.retain(|tx| tx.send(value.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.senders.lock().unwrap().len()
    }
}

impl<T: Clone> Default for Watchable<T> {
    fn default() -> Self {
        Self::new()
    }
}
