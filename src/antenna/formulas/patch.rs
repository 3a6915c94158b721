//! Patch geometry: width, effective dielectric constant and length.
//!
//! Transmission-line model of a rectangular patch. The sequence is
//! width → εeff → effective length → fringing extension → physical length,
//! each step using only inputs and previously computed values.

use crate::antenna::error::{AntennaError, AntennaResult};
use crate::antenna::formulas::{checked_div, finite, ghz_to_hz, require_positive, SPEED_OF_LIGHT};

/// Patch width in metres for efficient radiation.
///
/// `W = c / (2f) · sqrt(2 / (εr + 1))`
///
/// # Errors
///
/// Returns a domain error if the frequency is not positive or `εr ≤ -1`.
pub fn patch_width(frequency_ghz: f64, dielectric_constant: f64) -> AntennaResult<f64> {
    require_positive("frequency", frequency_ghz)?;
    let er_plus_one = dielectric_constant + 1.0;
    if er_plus_one <= 0.0 || !er_plus_one.is_finite() {
        return Err(AntennaError::domain(
            "patch width",
            format!("dielectric constant {dielectric_constant} gives a negative square root"),
        ));
    }

    let f = ghz_to_hz(frequency_ghz);
    finite(
        "patch width",
        (SPEED_OF_LIGHT / (2.0 * f)) * (2.0 / er_plus_one).sqrt(),
    )
}

/// Effective dielectric constant accounting for fringing fields.
///
/// `εeff = (εr + 1)/2 + (εr - 1)/2 · 1/sqrt(1 + 12h/W)`
///
/// `height_m` and `width_m` are in metres.
///
/// # Errors
///
/// Returns a domain error if the width is zero or `1 + 12h/W ≤ 0`.
pub fn effective_dielectric_constant(
    dielectric_constant: f64,
    height_m: f64,
    width_m: f64,
) -> AntennaResult<f64> {
    let radicand = 1.0 + checked_div("effective dielectric constant", 12.0 * height_m, width_m)?;
    if radicand <= 0.0 {
        return Err(AntennaError::domain(
            "effective dielectric constant",
            "substrate height to patch width ratio gives a negative square root",
        ));
    }

    let er = dielectric_constant;
    finite(
        "effective dielectric constant",
        (er + 1.0) / 2.0 + (er - 1.0) / 2.0 * (1.0 / radicand.sqrt()),
    )
}

/// Effective (electrical) patch length in metres.
///
/// `Leff = c / (2f · sqrt(εeff))`
///
/// # Errors
///
/// Returns a domain error if the frequency or `εeff` is not positive.
pub fn effective_length(frequency_ghz: f64, effective_permittivity: f64) -> AntennaResult<f64> {
    require_positive("frequency", frequency_ghz)?;
    require_positive("effective dielectric constant", effective_permittivity)?;

    let f = ghz_to_hz(frequency_ghz);
    finite(
        "effective length",
        SPEED_OF_LIGHT / (2.0 * f * effective_permittivity.sqrt()),
    )
}

/// Length extension ΔL in metres caused by fringing at each radiating edge.
///
/// `ΔL = 0.412h · (εeff + 0.3)(W/h + 0.264) / ((εeff - 0.258)(W/h + 0.8))`
///
/// # Errors
///
/// Returns a domain error if the height is zero or the denominator vanishes
/// (`εeff ≈ 0.258`).
pub fn length_extension(
    height_m: f64,
    effective_permittivity: f64,
    width_m: f64,
) -> AntennaResult<f64> {
    let w_over_h = checked_div("length extension", width_m, height_m)?;
    let numerator = 0.412 * height_m * ((effective_permittivity + 0.3) * (w_over_h + 0.264));
    let denominator = (effective_permittivity - 0.258) * (w_over_h + 0.8);

    checked_div("length extension", numerator, denominator)
}

/// Physical patch length: `L = Leff - 2ΔL`.
#[must_use]
pub fn patch_length(effective_length_m: f64, length_extension_m: f64) -> f64 {
    2.0f64.mul_add(-length_extension_m, effective_length_m)
}
