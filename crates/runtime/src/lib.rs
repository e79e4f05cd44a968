//! Runtime orchestration for the deterministic firing-range core.
//!
//! This crate wires the core's oracle environment, the content catalog,
//! and a topic-based event bus into a cohesive API. Consumers embed
//! [`SessionRunner`] to drive reloads, shots, and bulk firing sessions,
//! and subscribe to the bus to render what happened.
//!
//! Modules are organized by responsibility:
//! - [`runner`] hosts the session runner and its configuration
//! - [`events`] provides the topic-based event bus for flexible routing
//! - [`error`] defines the runtime error surface
pub mod error;
pub mod events;
pub mod runner;

pub use error::{Result, RuntimeError};
pub use events::{BusSink, Event, EventBus, SessionEvent, Topic};
pub use runner::{RunnerConfig, SessionRunner};
