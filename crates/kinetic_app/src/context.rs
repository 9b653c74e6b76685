//! Render context
//!
//! Everything a screen needs while building its view: the theme it styles
//! itself from and the sink it reports renders to.

use kinetic_core::{DiagnosticSink, TraceEvent};
use kinetic_theme::{Styles, Theme};

pub struct RenderContext<'a> {
    theme: &'a Theme,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, sink: &'a dyn DiagnosticSink) -> Self {
        Self { theme, sink }
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    pub fn styles(&self) -> Styles<'a> {
        self.theme.styles()
    }

    pub fn trace(&self, event: TraceEvent) {
        self.sink.trace(event);
    }
}
