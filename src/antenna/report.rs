//! Text report rendering and export.
//!
//! # Layout
//!
//! The report has a fixed field order and fixed precision. Geometry is shown
//! in millimetres with 3 decimals (4 for εeff), performance values with 2
//! decimals (6 for the aperture). The bandwidth, computed in GHz, is shown
//! multiplied by 1000 as MHz.
//!
//! ```text
//! Patch Antenna Dimensions:
//! Patch Width W: 37.260 mm
//! Effective Dielectric Constant: 4.0810
//! Patch Length L: 28.830 mm
//! Feedline Width Wf: 3.059 mm
//!
//! Performance Parameters:
//! Return Loss (S11): -10.46 dB
//! VSWR: 1.86
//! Gain: 4.80 dBi
//! Beamwidth: 164.32 deg
//! Far Field Distance: 0.02 m
//! Effective Aperture: 0.005727 m2
//! Estimated Bandwidth: 455.52 MHz
//! ```
//!
//! Rendering rounds every value to its displayed precision.

use std::fmt::Write as _;
use std::path::Path;

use crate::antenna::design::CalculationResult;
use crate::antenna::error::{AntennaError, AntennaResult};
use crate::antenna::formulas::m_to_mm;

/// Default export file, relative to the working directory.
pub const DEFAULT_EXPORT_PATH: &str = "antenna_output.txt";

/// Renders a calculation result as the fixed-layout text report.
///
/// Every line, including the last, ends with `\n`.
#[must_use]
pub fn render(result: &CalculationResult) -> String {
    let patch = &result.patch;
    let perf = &result.performance;
    let mut out = String::with_capacity(512);

    // Writing to a String cannot fail
    let _ = writeln!(out, "Patch Antenna Dimensions:");
    let _ = writeln!(out, "Patch Width W: {:.3} mm", m_to_mm(patch.width_m));
    let _ = writeln!(
        out,
        "Effective Dielectric Constant: {:.4}",
        patch.effective_dielectric_constant
    );
    let _ = writeln!(out, "Patch Length L: {:.3} mm", m_to_mm(patch.length_m));
    let _ = writeln!(
        out,
        "Feedline Width Wf: {:.3} mm",
        m_to_mm(result.feedline.width_m)
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Performance Parameters:");
    let _ = writeln!(out, "Return Loss (S11): -{:.2} dB", perf.return_loss_db.abs());
    let _ = writeln!(out, "VSWR: {:.2}", perf.vswr);
    let _ = writeln!(out, "Gain: {:.2} dBi", perf.gain_dbi);
    let _ = writeln!(out, "Beamwidth: {:.2} deg", perf.beamwidth_deg);
    let _ = writeln!(out, "Far Field Distance: {:.2} m", perf.far_field_distance_m);
    let _ = writeln!(out, "Effective Aperture: {:.6} m2", perf.effective_aperture_m2);
    let _ = writeln!(
        out,
        "Estimated Bandwidth: {:.2} MHz",
        perf.bandwidth_ghz * 1000.0
    );

    out
}

/// Writes a rendered report to `path`, followed by one newline.
///
/// Any existing file is truncated and overwritten. The full contents are
/// assembled before the file is opened.
///
/// # Errors
///
/// Returns [`AntennaError::FileWrite`] if the file cannot be created or
/// written.
pub fn export_to_file(text: &str, path: impl AsRef<Path>) -> AntennaResult<()> {
    let path = path.as_ref();

    let mut contents = String::with_capacity(text.len() + 1);
    contents.push_str(text);
    contents.push('\n');

    std::fs::write(path, contents.as_bytes()).map_err(|e| AntennaError::file_write(path, e))?;

    tracing::info!(
        path = %path.display(),
        bytes = contents.len(),
        "Exported antenna report"
    );

    Ok(())
}
