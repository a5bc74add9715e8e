//! Services available to nodes while they lay themselves out.

use crate::diag::StrResult;
use crate::text::{Measure, TextDetails, TextStyle};

/// Holds the collaborators a layout pass depends on.
#[derive(Copy, Clone)]
pub struct Engine<'a> {
    /// The text measurement oracle.
    pub measure: &'a dyn Measure,
}

impl<'a> Engine<'a> {
    /// Create an engine around a measurement oracle.
    pub fn new(measure: &'a dyn Measure) -> Self {
        Self { measure }
    }

    /// Measure a label through the oracle.
    pub fn measure_text(&self, label: &str, style: &TextStyle) -> StrResult<TextDetails> {
        self.measure.measure_text(label, style)
    }
}
