//! Microstrip feedline width synthesis.

use crate::antenna::error::{AntennaError, AntennaResult};
use crate::antenna::formulas::{checked_div, finite};

/// Synthesis parameter `A` for the narrow-strip microstrip formula.
///
/// `A = Z0/60 · sqrt((εr + 1)/2) + (εr - 1)/(εr + 1) · (0.23 + 0.11/εr)`
///
/// # Errors
///
/// Returns a domain error if `εr ≤ -1` or `εr = 0`.
pub fn synthesis_parameter(dielectric_constant: f64, impedance_ohm: f64) -> AntennaResult<f64> {
    let er = dielectric_constant;
    if er + 1.0 <= 0.0 {
        return Err(AntennaError::domain(
            "feedline width",
            format!("dielectric constant {er} gives a negative square root"),
        ));
    }

    let loading = checked_div("feedline width", er - 1.0, er + 1.0)?
        * (0.23 + checked_div("feedline width", 0.11, er)?);

    finite(
        "feedline width",
        impedance_ohm / 60.0 * ((er + 1.0) / 2.0).sqrt() + loading,
    )
}

/// Feedline width in metres for the target characteristic impedance.
///
/// `Wf = 8h · e^A / (e^(2A) - 2)`
///
/// This is the narrow-strip (`W/h < 2`) approximation and is applied for all
/// inputs, whatever the resulting width to height ratio.
///
/// # Errors
///
/// Returns a domain error if the synthesis parameter cannot be computed or
/// `e^(2A) = 2`.
pub fn feedline_width(
    dielectric_constant: f64,
    height_m: f64,
    impedance_ohm: f64,
) -> AntennaResult<f64> {
    let a = synthesis_parameter(dielectric_constant, impedance_ohm)?;
    checked_div(
        "feedline width",
        8.0 * height_m * a.exp(),
        (2.0 * a).exp() - 2.0,
    )
}
