//! Event sinks: where the engine sends its announcements.
//!
//! The engine is generic over an [`EventSink`] and calls
//! [`EventSink::emit`] synchronously, in order, for every event. Provided
//! sinks:
//!
//! - [`EventLog`]: keeps the structured events (the default)
//! - [`Transcript`]: keeps the rendered lines
//! - [`NullSink`]: drops everything
//! - any `FnMut(&Event)` closure

use super::Event;

/// Receiver for game events.
pub trait EventSink {
    /// Handle one event. Called in emission order, never re-entrantly.
    fn emit(&mut self, event: &Event);
}

impl<F> EventSink for F
where
    F: FnMut(&Event),
{
    fn emit(&mut self, event: &Event) {
        self(event)
    }
}

/// Sink that discards events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &Event) {}
}

/// Sink that records structured events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take every recorded event, leaving the log empty.
    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Rendered announcement lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.events.iter().map(ToString::to_string)
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}

/// Sink that records rendered lines.
///
/// [`Transcript::render`] terminates every line, including the last, with
/// the configured terminator. The default is `"\n"`; use
/// [`Transcript::with_terminator`] with `"\r\n"` to match transcripts
/// captured on Windows consoles.
#[derive(Clone, Debug)]
pub struct Transcript {
    lines: Vec<String>,
    terminator: String,
}

impl Default for Transcript {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            terminator: "\n".to_string(),
        }
    }
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line terminator used by [`Transcript::render`].
    #[must_use]
    pub fn with_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = terminator.into();
        self
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True if any recorded line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// All lines, each followed by the terminator.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push_str(&self.terminator);
        }
        out
    }
}

impl EventSink for Transcript {
    fn emit(&mut self, event: &Event) {
        self.lines.push(event.to_string());
    }
}
