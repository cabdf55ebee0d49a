//! Publish/subscribe hub for the Cyrillic soft keyboard.
//!
//! One publisher side, any number of subscribers, each holding its own
//! receiving end and able to unsubscribe (explicitly or by dropping the
//! subscription).

use std::sync::mpsc;
use std::sync::Arc;

use parking_lot::Mutex;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SubscriberId(u64);

struct HubInner {
    next_id: u64,
    subscribers: Vec<(SubscriberId, mpsc::Sender<char>)>,
}

/// Fan-out point for soft-keyboard keypresses. Cheap to clone; all clones
/// share one subscriber table.
#[derive(Clone)]
pub struct KeyboardHub {
    inner: Arc<Mutex<HubInner>>,
}

impl Default for KeyboardHub {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardHub {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HubInner {
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn subscribe(&self) -> KeyboardSubscription {
        let mut inner = self.inner.lock();
        let id = SubscriberId(inner.next_id);
        inner.next_id += 1;
        let (tx, rx) = mpsc::channel();
        inner.subscribers.push((id, tx));
        KeyboardSubscription { id, rx }
    }

    pub fn unsubscribe(&self, id: SubscriberId) {
        self.inner.lock().subscribers.retain(|(sub, _)| *sub != id);
    }

    /// Delivers one character to every live subscriber, pruning any whose
    /// receiving end has been dropped. Returns how many were reached.
    pub fn publish(&self, ch: char) -> usize {
        let mut inner = self.inner.lock();
        inner.subscribers.retain(|(_, tx)| tx.send(ch).is_ok());
        inner.subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }
}

/// A subscriber's receiving end. Characters queue up between event-loop
/// ticks and are drained in publication order.
pub struct KeyboardSubscription {
    id: SubscriberId,
    rx: mpsc::Receiver<char>,
}

impl KeyboardSubscription {
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Takes every character published since the last drain.
    pub fn drain(&self) -> Vec<char> {
        let mut out = Vec::new();
        while let Ok(ch) = self.rx.try_recv() {
            out.push(ch);
        }
        out
    }
}
