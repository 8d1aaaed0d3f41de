pub mod events;

use self::events::Intent;
use crossbeam_channel::{unbounded, Receiver, Sender};

/// Hands decoded intents from input producers to the session, in arrival order.
pub struct IntentQueue {
    sender: Sender<Intent>,
    receiver: Receiver<Intent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Safe to call from the thread that decodes device input.
    /// The queue owns its receiver, so sending cannot fail while `self` is alive.
    pub fn push(&self, intent: Intent) {
        let _ = self.sender.send(intent);
    }

    /// Non-blocking. Returns None if the queue is empty.
    pub fn pop(&self) -> Option<Intent> {
        self.receiver.try_recv().ok()
    }

    /// Sender half for producers that outlive a borrow of the queue.
    pub fn sender(&self) -> Sender<Intent> {
        self.sender.clone()
    }
}

impl Default for IntentQueue {
    fn default() -> Self {
        Self::new()
    }
}
