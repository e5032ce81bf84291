use super::signal::{GenreSignal, PublishReport, SignalBus, SubscriberError, SubscriptionId};
use super::state::{Action, SelectionState, YearRange};
use tracing::debug;

/// Owns the selection state and tells subscribed views when it changes.
///
/// Focus actions publish a [`GenreSignal`]; range actions publish the new
/// `Option<YearRange>`. A background click and `Reset` publish on both.
#[derive(Default)]
pub struct Coordinator {
    state: SelectionState,
    genre_bus: SignalBus<GenreSignal>,
    range_bus: SignalBus<Option<YearRange>>,
}

impl Coordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&GenreSignal) -> Result<(), SubscriberError> + 'static,
    {
        self.genre_bus.subscribe(listener)
    }

    pub fn subscribe_range<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Option<YearRange>) -> Result<(), SubscriberError> + 'static,
    {
        self.range_bus.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.genre_bus.unsubscribe(id)
    }

    pub fn unsubscribe_range(&mut self, id: SubscriptionId) -> bool {
        self.range_bus.unsubscribe(id)
    }

    pub fn dispatch(&mut self, action: Action) -> PublishReport {
        let next = self.state.reduce(&action);
        debug!("selection: {:?} -> {:?} via {:?}", self.state.focus, next.focus, action);
        self.state = next;

        let mut report = PublishReport::default();
        if action.touches_focus() {
            let signal = GenreSignal {
                genre: self.state.active_category().map(str::to_string),
            };
            self.genre_bus.publish_into(&signal, &mut report);
        }
        if action.touches_range() {
            let range = self.state.year_range;
            self.range_bus.publish_into(&range, &mut report);
        }
        report
    }
}
