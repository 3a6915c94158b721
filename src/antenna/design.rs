//! Full patch antenna design: geometry, feedline and performance.

use serde::{Deserialize, Serialize};

use crate::antenna::error::AntennaResult;
use crate::antenna::formulas::{feedline, mm_to_m, patch, performance};
use crate::antenna::inputs::InputParameters;

/// Assumed radiation properties used for the performance estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Assumptions {
    /// Directivity (linear).
    /// Default: 6.0
    #[serde(default = "default_directivity")]
    pub directivity: f64,

    /// Radiation efficiency (0 < η ≤ 1).
    /// Default: 0.8
    #[serde(default = "default_efficiency")]
    pub efficiency: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            directivity: default_directivity(),
            efficiency: default_efficiency(),
        }
    }
}

const fn default_directivity() -> f64 {
    6.0
}

const fn default_efficiency() -> f64 {
    0.8
}

/// Radiating patch dimensions. Lengths in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatchGeometry {
    /// Patch width W.
    pub width_m: f64,
    /// Effective dielectric constant εeff.
    pub effective_dielectric_constant: f64,
    /// Effective length Leff.
    pub effective_length_m: f64,
    /// Fringing length extension ΔL at each edge.
    pub length_extension_m: f64,
    /// Physical patch length L.
    pub length_m: f64,
}

impl PatchGeometry {
    /// Computes the patch geometry in the order
    /// width → εeff → Leff → ΔL → L.
    ///
    /// # Errors
    ///
    /// Returns a domain error from the first formula that fails.
    pub fn compute(params: &InputParameters) -> AntennaResult<Self> {
        let height_m = mm_to_m(params.substrate_height_mm);

        let width_m = patch::patch_width(params.frequency_ghz, params.dielectric_constant)?;
        let effective_dielectric_constant =
            patch::effective_dielectric_constant(params.dielectric_constant, height_m, width_m)?;
        let effective_length_m =
            patch::effective_length(params.frequency_ghz, effective_dielectric_constant)?;
        let length_extension_m =
            patch::length_extension(height_m, effective_dielectric_constant, width_m)?;
        let length_m = patch::patch_length(effective_length_m, length_extension_m);

        Ok(Self {
            width_m,
            effective_dielectric_constant,
            effective_length_m,
            length_extension_m,
            length_m,
        })
    }
}

/// Microstrip feedline dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedlineGeometry {
    /// Strip width Wf in metres.
    pub width_m: f64,
}

impl FeedlineGeometry {
    /// Computes the feedline from the raw inputs only.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the synthesis formula is undefined.
    pub fn compute(params: &InputParameters) -> AntennaResult<Self> {
        let width_m = feedline::feedline_width(
            params.dielectric_constant,
            mm_to_m(params.substrate_height_mm),
            params.target_impedance_ohm,
        )?;
        Ok(Self { width_m })
    }
}

/// Estimated RF performance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Return loss |S11| in dB (positive).
    pub return_loss_db: f64,
    /// Voltage standing wave ratio.
    pub vswr: f64,
    /// Gain, reported in dBi.
    pub gain_dbi: f64,
    /// Beamwidth in degrees.
    pub beamwidth_deg: f64,
    /// Far-field distance in metres.
    pub far_field_distance_m: f64,
    /// Effective aperture in m².
    pub effective_aperture_m2: f64,
    /// Estimated bandwidth in GHz.
    pub bandwidth_ghz: f64,
}

impl PerformanceMetrics {
    /// Computes the performance metrics for a patch of the given width.
    ///
    /// # Errors
    ///
    /// Returns a domain error from the first formula that fails.
    pub fn compute(
        params: &InputParameters,
        patch_width_m: f64,
        assumptions: &Assumptions,
    ) -> AntennaResult<Self> {
        let gamma = params.reflection_coefficient;
        let freq = params.frequency_ghz;

        let return_loss_db = performance::return_loss(gamma)?;
        let vswr = performance::vswr(gamma)?;
        let gain_dbi = performance::gain(assumptions.directivity, assumptions.efficiency);
        let beamwidth_deg = performance::beamwidth(freq, patch_width_m)?;
        let effective_aperture_m2 = performance::effective_aperture(gain_dbi, freq)?;
        let far_field_distance_m = performance::far_field_distance(patch_width_m, freq)?;
        let bandwidth_ghz = performance::bandwidth(freq, params.dielectric_constant)?;

        Ok(Self {
            return_loss_db,
            vswr,
            gain_dbi,
            beamwidth_deg,
            far_field_distance_m,
            effective_aperture_m2,
            bandwidth_ghz,
        })
    }
}

/// Complete result of one design calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Radiating patch.
    pub patch: PatchGeometry,
    /// Feedline.
    pub feedline: FeedlineGeometry,
    /// Performance estimate.
    pub performance: PerformanceMetrics,
}

/// Calculates a patch antenna design.
///
/// The whole calculation either succeeds or fails; no partial result is
/// produced.
///
/// # Errors
///
/// Returns `AntennaError::Parse` or `AntennaError::Domain` if the inputs
/// are invalid or any formula leaves its domain.
pub fn calculate(
    params: &InputParameters,
    assumptions: &Assumptions,
) -> AntennaResult<CalculationResult> {
    params.validate()?;

    let patch = PatchGeometry::compute(params)?;
    let feedline = FeedlineGeometry::compute(params)?;
    let performance = PerformanceMetrics::compute(params, patch.width_m, assumptions)?;

    tracing::debug!(
        width_m = patch.width_m,
        length_m = patch.length_m,
        eeff = patch.effective_dielectric_constant,
        feedline_width_m = feedline.width_m,
        vswr = performance.vswr,
        "Calculated patch antenna design"
    );

    Ok(CalculationResult {
        patch,
        feedline,
        performance,
    })
}

impl CalculationResult {
    /// Returns `true` if every field is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [
            self.patch.width_m,
            self.patch.effective_dielectric_constant,
            self.patch.effective_length_m,
            self.patch.length_extension_m,
            self.patch.length_m,
            self.feedline.width_m,
            self.performance.return_loss_db,
            self.performance.vswr,
            self.performance.gain_dbi,
            self.performance.beamwidth_deg,
            self.performance.far_field_distance_m,
            self.performance.effective_aperture_m2,
            self.performance.bandwidth_ghz,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::antenna::error::AntennaError;
    use crate::antenna::inputs::RawInputs;

    fn golden() -> InputParameters {
        RawInputs::default().parse().unwrap()
    }

    #[test]
    fn golden_design() {
        let result = calculate(&golden(), &Assumptions::default()).unwrap();

        assert!((result.patch.width_m * 1000.0 - 37.260_038).abs() < 1e-5);
        assert!((result.patch.effective_dielectric_constant - 4.081_020).abs() < 1e-6);
        assert!((result.patch.length_m * 1000.0 - 28.829_639).abs() < 1e-5);
        assert!((result.feedline.width_m * 1000.0 - 3.058_975).abs() < 1e-5);
        assert!((result.performance.return_loss_db - 10.457_575).abs() < 1e-6);
        assert!((result.performance.vswr - 1.857_143).abs() < 1e-6);
        assert!((result.performance.gain_dbi - 4.8).abs() < 1e-12);
        assert!((result.performance.beamwidth_deg - 164.316_767).abs() < 1e-5);
        assert!((result.performance.far_field_distance_m - 0.022_676).abs() < 1e-6);
        assert!((result.performance.effective_aperture_m2 - 0.005_727_192).abs() < 1e-9);
        assert!((result.performance.bandwidth_ghz - 0.455_517).abs() < 1e-6);
        assert!(result.is_finite());
    }

    #[test]
    fn custom_assumptions_change_gain_and_aperture() {
        let assumptions = Assumptions {
            directivity: 5.0,
            efficiency: 1.0,
        };
        let result = calculate(&golden(), &assumptions).unwrap();
        assert!((result.performance.gain_dbi - 5.0).abs() < 1e-12);

        let default = calculate(&golden(), &Assumptions::default()).unwrap();
        assert!(result.performance.effective_aperture_m2 > default.performance.effective_aperture_m2);
        assert_eq!(result.patch, default.patch);
    }

    #[test]
    fn gamma_boundaries_are_domain_errors() {
        for gamma in [0.0, 1.0] {
            let params = InputParameters {
                reflection_coefficient: gamma,
                ..golden()
            };
            assert!(matches!(
                calculate(&params, &Assumptions::default()),
                Err(AntennaError::Domain { .. })
            ));
        }
    }

    #[test]
    fn extreme_but_valid_inputs_calculate() {
        let near_total_reflection = InputParameters {
            reflection_coefficient: 1.0 - f64::EPSILON / 2.0,
            ..golden()
        };
        let result = calculate(&near_total_reflection, &Assumptions::default()).unwrap();
        assert!(result.is_finite());
        assert!(result.performance.vswr > 1e16);

        let thin_substrate = InputParameters {
            substrate_height_mm: 1e-13,
            ..golden()
        };
        let result = calculate(&thin_substrate, &Assumptions::default()).unwrap();
        assert!(result.is_finite());
    }

    #[test]
    fn valid_inputs_give_finite_results() {
        for freq in [0.9, 2.45, 5.8, 24.0] {
            for er in [1.1, 2.2, 4.4, 10.2] {
                for h in [0.2, 0.8, 1.6, 3.2] {
                    for gamma in [0.01, 0.3, 0.99] {
                        let params = InputParameters {
                            frequency_ghz: freq,
                            dielectric_constant: er,
                            substrate_height_mm: h,
                            target_impedance_ohm: 50.0,
                            reflection_coefficient: gamma,
                        };
                        let result = calculate(&params, &Assumptions::default()).unwrap();
                        assert!(result.is_finite(), "{params:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn assumptions_defaults() {
        let assumptions = Assumptions::default();
        assert!((assumptions.directivity - 6.0).abs() < f64::EPSILON);
        assert!((assumptions.efficiency - 0.8).abs() < f64::EPSILON);
    }
}
