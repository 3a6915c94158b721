//! RF performance metrics derived from the match and the patch geometry.

use std::f64::consts::PI;

use crate::antenna::error::{AntennaError, AntennaResult};
use crate::antenna::formulas::{checked_div, finite, require_positive, wavelength};

/// Return loss in dB for a reflection coefficient magnitude: `-20·log10(Γ)`.
///
/// # Errors
///
/// Returns a domain error if `Γ ≤ 0`.
pub fn return_loss(reflection_coefficient: f64) -> AntennaResult<f64> {
    if reflection_coefficient <= 0.0 || reflection_coefficient.is_nan() {
        return Err(AntennaError::domain(
            "return loss",
            format!("log10 is undefined for reflection coefficient {reflection_coefficient}"),
        ));
    }
    finite("return loss", -20.0 * reflection_coefficient.log10())
}

/// Voltage standing wave ratio: `(1 + Γ) / (1 - Γ)`.
///
/// # Errors
///
/// Returns a domain error if `Γ = 1`.
pub fn vswr(reflection_coefficient: f64) -> AntennaResult<f64> {
    checked_div(
        "VSWR",
        1.0 + reflection_coefficient,
        1.0 - reflection_coefficient,
    )
}

/// Gain as directivity × efficiency.
#[must_use]
pub fn gain(directivity: f64, efficiency: f64) -> f64 {
    directivity * efficiency
}

/// Half-power beamwidth estimate in degrees: `50·λ / W`.
///
/// # Errors
///
/// Returns a domain error if the frequency is not positive or the width is zero.
pub fn beamwidth(frequency_ghz: f64, patch_width_m: f64) -> AntennaResult<f64> {
    let lambda = wavelength(frequency_ghz)?;
    checked_div("beamwidth", 50.0 * lambda, patch_width_m)
}

/// Far-field (Fraunhofer) distance in metres: `2D² / λ`.
///
/// # Errors
///
/// Returns a domain error if the frequency is not positive.
pub fn far_field_distance(largest_dimension_m: f64, frequency_ghz: f64) -> AntennaResult<f64> {
    let lambda = wavelength(frequency_ghz)?;
    checked_div(
        "far field distance",
        2.0 * largest_dimension_m.powi(2),
        lambda,
    )
}

/// Effective aperture in m²: `G·λ² / 4π`.
///
/// # Errors
///
/// Returns a domain error if the frequency is not positive.
pub fn effective_aperture(gain: f64, frequency_ghz: f64) -> AntennaResult<f64> {
    let lambda = wavelength(frequency_ghz)?;
    finite("effective aperture", gain * lambda.powi(2) / (4.0 * PI))
}

/// Estimated bandwidth in GHz: `f · 0.39 / sqrt(εr)`.
///
/// # Errors
///
/// Returns a domain error if the dielectric constant is not positive.
pub fn bandwidth(frequency_ghz: f64, dielectric_constant: f64) -> AntennaResult<f64> {
    require_positive("dielectric constant", dielectric_constant)?;
    finite(
        "bandwidth",
        frequency_ghz * (0.39 / dielectric_constant.sqrt()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_loss_golden() {
        let rl = return_loss(0.3).unwrap();
        assert!((rl - 10.457_575).abs() < 1e-6);
        assert_eq!(format!("{rl:.2}"), "10.46");
    }

    #[test]
    fn return_loss_rejects_zero_and_negative() {
        assert!(return_loss(0.0).is_err());
        assert!(return_loss(-0.1).is_err());
    }

    #[test]
    fn vswr_golden() {
        let v = vswr(0.3).unwrap();
        assert!((v - 1.857_142_857).abs() < 1e-9);
    }

    #[test]
    fn vswr_is_strictly_increasing() {
        let mut previous = vswr(0.0).unwrap();
        for i in 1..100 {
            let gamma = f64::from(i) / 100.0;
            let current = vswr(gamma).unwrap();
            assert!(current > previous, "vswr({gamma}) = {current} <= {previous}");
            previous = current;
        }
    }

    #[test]
    fn vswr_rejects_total_reflection() {
        assert!(matches!(vswr(1.0), Err(AntennaError::Domain { .. })));
    }

    #[test]
    fn vswr_just_below_total_reflection() {
        let gamma = 1.0 - f64::EPSILON / 2.0;
        assert!(gamma < 1.0);
        let v = vswr(gamma).unwrap();
        assert!(v.is_finite());
        assert!(v > 1e16);
    }

    #[test]
    fn gain_is_product() {
        assert!((gain(6.0, 0.8) - 4.8).abs() < 1e-12);
    }

    #[test]
    fn beamwidth_and_far_field() {
        let w = 0.037_260_037_925_521_5;
        assert!((beamwidth(2.45, w).unwrap() - 164.316_767).abs() < 1e-5);
        assert!((far_field_distance(w, 2.45).unwrap() - 0.022_675_737).abs() < 1e-8);
        assert!(beamwidth(2.45, 0.0).is_err());
    }

    #[test]
    fn aperture_and_bandwidth() {
        assert!((effective_aperture(4.8, 2.45).unwrap() - 0.005_727_192).abs() < 1e-9);
        assert!((bandwidth(2.45, 4.4).unwrap() - 0.455_516_752).abs() < 1e-9);
        assert!(bandwidth(2.45, 0.0).is_err());
    }
}
