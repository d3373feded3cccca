//! Announcements emitted by the engine.
//!
//! The engine does no I/O. It hands each [`Event`] to an injected
//! [`EventSink`]; rendering, printing or storing them is the sink's job.

pub mod event;
pub mod sink;

pub use event::Event;
pub use sink::{EventLog, EventSink, NullSink, Transcript};
