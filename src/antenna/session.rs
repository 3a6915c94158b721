//! Calculation session state.
//!
//! A [`Session`] is the explicit application state behind the front ends:
//! the five input fields as typed, the performance assumptions, and the last
//! successful result with its rendered report. A failed calculation leaves
//! the previous report in place.

use std::path::Path;

use crate::antenna::design::{calculate, Assumptions, CalculationResult};
use crate::antenna::error::{AntennaError, AntennaResult};
use crate::antenna::inputs::{Field, RawInputs};
use crate::antenna::report;

/// The last successful calculation and its rendered text.
#[derive(Debug, Clone)]
struct Rendered {
    result: CalculationResult,
    text: String,
}

/// Interactive design session.
#[derive(Debug, Clone)]
pub struct Session {
    inputs: RawInputs,
    assumptions: Assumptions,
    last: Option<Rendered>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(RawInputs::default(), Assumptions::default())
    }
}

impl Session {
    /// Creates a session with the given initial field values.
    #[must_use]
    pub const fn new(inputs: RawInputs, assumptions: Assumptions) -> Self {
        Self {
            inputs,
            assumptions,
            last: None,
        }
    }

    /// Current input fields.
    #[must_use]
    pub const fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    /// Performance assumptions in use.
    #[must_use]
    pub const fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Replaces the text of one input field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.inputs.set(field, value);
    }

    /// Parses the current fields, calculates, and stores the rendered report.
    ///
    /// Returns the new report text.
    ///
    /// # Errors
    ///
    /// Returns [`AntennaError::Parse`] or [`AntennaError::Domain`]; the
    /// previously stored report is kept unchanged.
    pub fn calculate(&mut self) -> AntennaResult<&str> {
        let outcome = self
            .inputs
            .parse()
            .and_then(|params| calculate(&params, &self.assumptions));

        let result = match outcome {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected design inputs");
                return Err(e);
            }
        };

        let text = report::render(&result);
        let rendered = self.last.insert(Rendered { result, text });
        Ok(&rendered.text)
    }

    /// Clears every input field and the stored report.
    pub fn reset(&mut self) {
        self.inputs = RawInputs::empty();
        self.last = None;
        tracing::debug!("Session reset");
    }

    /// The currently displayed report, if any.
    #[must_use]
    pub fn report(&self) -> Option<&str> {
        self.last.as_ref().map(|r| r.text.as_str())
    }

    /// The last successful calculation result, if any.
    #[must_use]
    pub fn result(&self) -> Option<&CalculationResult> {
        self.last.as_ref().map(|r| &r.result)
    }

    /// Writes the current report to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AntennaError::NothingToExport`] if nothing has been
    /// calculated (no file is created), or [`AntennaError::FileWrite`] if
    /// the file cannot be written.
    pub fn export(&self, path: impl AsRef<Path>) -> AntennaResult<()> {
        let text = self.report().ok_or(AntennaError::NothingToExport)?;
        report::export_to_file(text, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_no_report() {
        let session = Session::default();
        assert!(session.report().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn calculate_stores_report() {
        let mut session = Session::default();
        let text = session.calculate().unwrap().to_string();
        assert!(text.starts_with("Patch Antenna Dimensions:\n"));
        assert_eq!(session.report(), Some(text.as_str()));
        assert!(session.result().is_some());
    }

    #[test]
    fn failed_calculation_keeps_previous_report() {
        let mut session = Session::default();
        let first = session.calculate().unwrap().to_string();

        session.set_field(Field::Frequency, "fast");
        let err = session.calculate().unwrap_err();
        assert!(matches!(err, AntennaError::Parse { .. }));
        assert_eq!(session.report(), Some(first.as_str()));

        session.set_field(Field::Frequency, "2.45");
        session.set_field(Field::ReflectionCoefficient, "1");
        let err = session.calculate().unwrap_err();
        assert!(matches!(err, AntennaError::Domain { .. }));
        assert_eq!(session.report(), Some(first.as_str()));
    }

    #[test]
    fn new_inputs_replace_report() {
        let mut session = Session::default();
        let first = session.calculate().unwrap().to_string();
        session.set_field(Field::Frequency, "5.8");
        let second = session.calculate().unwrap().to_string();
        assert_ne!(first, second);
        assert_eq!(session.report(), Some(second.as_str()));
    }

    #[test]
    fn reset_clears_fields_and_report() {
        let mut session = Session::default();
        session.calculate().unwrap();
        session.reset();

        assert!(session.report().is_none());
        for field in Field::ALL {
            assert_eq!(session.inputs().get(field), "");
        }
        assert!(matches!(
            session.calculate(),
            Err(AntennaError::Parse { .. })
        ));
    }

    #[test]
    fn export_without_report_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let session = Session::default();
        assert!(matches!(
            session.export(&path),
            Err(AntennaError::NothingToExport)
        ));
        assert!(!path.exists());
    }
}
