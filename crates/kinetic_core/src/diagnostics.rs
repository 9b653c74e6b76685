//! Diagnostic tracing
//!
//! Components report renders and stubbed interactions through a
//! [`DiagnosticSink`] handed to them at construction. The sink is the only
//! observability seam in the UI layer, so tests can swap in a
//! [`RecordingSink`] and assert on what was reported.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Something worth tracing while the UI runs
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// A screen built its view tree
    ScreenRendered { screen: String },
    /// A button built its view
    ButtonRendered { label: String },
    /// An interaction with no real backend was triggered
    Action { name: String },
    /// The navigation stack changed
    Navigated { from: String, to: String },
}

impl TraceEvent {
    pub fn screen(screen: impl Into<String>) -> Self {
        Self::ScreenRendered {
            screen: screen.into(),
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::ButtonRendered {
            label: label.into(),
        }
    }

    pub fn action(name: impl Into<String>) -> Self {
        Self::Action { name: name.into() }
    }

    pub fn navigated(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Navigated {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::ScreenRendered { screen } => write!(f, "{screen} rendered"),
            TraceEvent::ButtonRendered { label } => write!(f, "Button rendered: {label}"),
            TraceEvent::Action { name } => f.write_str(name),
            TraceEvent::Navigated { from, to } => write!(f, "navigated {from} -> {to}"),
        }
    }
}

/// Receiver for diagnostic events
pub trait DiagnosticSink: Send + Sync {
    fn trace(&self, event: TraceEvent);
}

/// Shared sink handle passed down to components
pub type SharedSink = Arc<dyn DiagnosticSink>;

/// Forwards events to `tracing`
///
/// Render events go to `debug`, actions and navigation to `info`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn trace(&self, event: TraceEvent) {
        match &event {
            TraceEvent::ScreenRendered { .. } | TraceEvent::ButtonRendered { .. } => {
                tracing::debug!(target: "kinetic::render", "{}", event);
            }
            TraceEvent::Action { name } => {
                tracing::info!(target: "kinetic::action", action = %name, "{}", event);
            }
            TraceEvent::Navigated { from, to } => {
                tracing::info!(target: "kinetic::navigation", %from, %to, "{}", event);
            }
        }
    }
}

/// Discards everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn trace(&self, _event: TraceEvent) {}
}

/// Captures events in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<TraceEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event recorded so far
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Names of recorded [`TraceEvent::Action`] events, in order
    pub fn actions(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                TraceEvent::Action { name } => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn trace(&self, event: TraceEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.trace(TraceEvent::screen("HomeScreen"));
        sink.trace(TraceEvent::action("Sign out pressed"));
        sink.trace(TraceEvent::action("Help pressed"));

        assert_eq!(sink.events().len(), 3);
        assert_eq!(sink.actions(), vec!["Sign out pressed", "Help pressed"]);

        sink.clear();
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_sinks_are_object_safe() {
        let sinks: Vec<SharedSink> = vec![
            Arc::new(NullSink),
            Arc::new(TracingSink),
            Arc::new(RecordingSink::new()),
        ];
        for sink in &sinks {
            sink.trace(TraceEvent::button("Get Started"));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TraceEvent::button("Sign Out").to_string(),
            "Button rendered: Sign Out"
        );
        assert_eq!(
            TraceEvent::navigated("/", "/profile").to_string(),
            "navigated / -> /profile"
        );
    }
}
