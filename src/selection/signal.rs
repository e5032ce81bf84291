use crate::error::TrackLensError;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Payload broadcast whenever the selected genre may have changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreSignal {
    pub genre: Option<String>,
}

#[derive(Error, Debug)]
#[error("{0}")]
pub struct SubscriberError(pub String);

impl From<TrackLensError> for SubscriberError {
    fn from(e: TrackLensError) -> Self {
        Self(e.to_string())
    }
}

impl From<std::io::Error> for SubscriberError {
    fn from(e: std::io::Error) -> Self {
        Self(e.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

pub type Listener<P> = Box<dyn FnMut(&P) -> Result<(), SubscriberError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PublishReport {
    pub delivered: usize,
    pub failed: usize,
}

impl PublishReport {
    fn absorb(&mut self, other: PublishReport) {
        self.delivered += other.delivered;
        self.failed += other.failed;
    }
}

/// Synchronous typed broadcast. Every listener sees every payload; a
/// failing listener is logged and skipped.
pub struct SignalBus<P> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<P>)>,
}

impl<P> Default for SignalBus<P> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }
}

impl<P> SignalBus<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&P) -> Result<(), SubscriberError> + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn publish(&mut self, payload: &P) -> PublishReport {
        let mut report = PublishReport::default();
        for (id, listener) in self.listeners.iter_mut() {
            match listener(payload) {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    report.failed += 1;
                    warn!("Subscriber {:?} failed: {}", id, e);
                }
            }
        }
        report
    }

    pub(crate) fn publish_into(&mut self, payload: &P, report: &mut PublishReport) {
        report.absorb(self.publish(payload));
    }
}
