//! Kinetic Core
//!
//! Foundational primitives shared by the Kinetic crates:
//!
//! - **Color / Shadow**: normalized RGBA values used by the theme tokens
//! - **Diagnostics**: the injectable [`DiagnosticSink`] components trace through

pub mod color;
pub mod diagnostics;

pub use color::{Color, ParseColorError, Shadow};
pub use diagnostics::{
    DiagnosticSink, NullSink, RecordingSink, SharedSink, TraceEvent, TracingSink,
};
