//! Closed-form microstrip patch antenna design equations.
//!
//! Every function here is pure: it takes explicit numeric arguments and
//! returns either the computed value or [`AntennaError::Domain`] when an
//! argument lies outside the formula's mathematical domain.
//!
//! # Units
//!
//! Formulas work in SI units internally. Frequencies are accepted in GHz and
//! substrate heights in millimetres at the boundary; callers convert with
//! [`ghz_to_hz`] and [`mm_to_m`] explicitly at each call site.
//!
//! # Example
//!
//! ```
//! use patch_antenna::antenna::formulas::{mm_to_m, patch};
//!
//! let width = patch::patch_width(2.45, 4.4).unwrap();
//! let eeff = patch::effective_dielectric_constant(4.4, mm_to_m(1.6), width).unwrap();
//! assert!((width * 1000.0 - 37.260).abs() < 1e-3);
//! assert!((eeff - 4.0810).abs() < 1e-4);
//! ```

pub mod feedline;
pub mod patch;
pub mod performance;

use crate::antenna::error::{AntennaError, AntennaResult};

/// Speed of light used by the design equations (m/s).
pub const SPEED_OF_LIGHT: f64 = 3e8;

/// Converts a frequency in GHz to Hz.
#[must_use]
pub fn ghz_to_hz(ghz: f64) -> f64 {
    ghz * 1e9
}

/// Converts a length in millimetres to metres.
#[must_use]
pub fn mm_to_m(mm: f64) -> f64 {
    mm / 1000.0
}

/// Converts a length in metres to millimetres.
#[must_use]
pub fn m_to_mm(m: f64) -> f64 {
    m * 1000.0
}

/// Free-space wavelength in metres for a frequency in GHz.
///
/// # Errors
///
/// Returns a domain error if the frequency is not strictly positive.
pub fn wavelength(frequency_ghz: f64) -> AntennaResult<f64> {
    require_positive("frequency", frequency_ghz)?;
    finite("wavelength", SPEED_OF_LIGHT / ghz_to_hz(frequency_ghz))
}

/// Rejects values that are not strictly positive (including NaN).
pub(crate) fn require_positive(quantity: &'static str, value: f64) -> AntennaResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(AntennaError::domain(
            quantity,
            format!("must be a positive number, got {value}"),
        ))
    }
}

/// Passes a computed value through, failing if it is NaN or infinite.
pub(crate) fn finite(quantity: &'static str, value: f64) -> AntennaResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AntennaError::domain(
            quantity,
            format!("result is not a finite number ({value})"),
        ))
    }
}

/// Divides, failing when the denominator is zero or the quotient overflows.
pub(crate) fn checked_div(
    quantity: &'static str,
    numerator: f64,
    denominator: f64,
) -> AntennaResult<f64> {
    if denominator == 0.0 {
        return Err(AntennaError::domain(quantity, "division by zero"));
    }
    finite(quantity, numerator / denominator)
}
