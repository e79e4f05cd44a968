//! Topic-based event routing for presentation layers.

mod bus;
mod types;

pub use bus::{BusSink, Event, EventBus, Topic};
pub use types::SessionEvent;
