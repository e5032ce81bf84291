//! Cross-chart selection: one state owner, typed broadcast to the views.

pub mod coordinator;
pub mod script;
pub mod signal;
pub mod state;

pub use self::coordinator::Coordinator;
pub use self::signal::{
    GenreSignal, Listener, PublishReport, SignalBus, SubscriberError, SubscriptionId,
};
pub use self::state::{Action, Focus, PointRef, RecordFilter, SelectionState, YearRange};
