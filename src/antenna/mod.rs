//! Rectangular microstrip patch antenna design.
//!
//! This module turns five scalar inputs into patch dimensions, a feedline
//! width and an RF performance estimate:
//!
//! - [`inputs`] — raw text fields and validated [`InputParameters`]
//! - [`formulas`] — the closed-form design equations
//! - [`design`] — orchestration into a [`CalculationResult`]
//! - [`report`] — fixed-layout text rendering and file export
//! - [`session`] — explicit application state for interactive use
//!
//! Data flows one way: inputs → formulas → result → report.
//!
//! # Example
//!
//! ```
//! use patch_antenna::antenna::{calculate, report, Assumptions, RawInputs};
//!
//! let params = RawInputs::default().parse().unwrap();
//! let result = calculate(&params, &Assumptions::default()).unwrap();
//! let text = report::render(&result);
//!
//! assert!(text.contains("Patch Width W: 37.260 mm"));
//! ```

pub mod design;
pub mod error;
pub mod formulas;
pub mod inputs;
pub mod report;
pub mod session;

pub use design::{
    calculate, Assumptions, CalculationResult, FeedlineGeometry, PatchGeometry,
    PerformanceMetrics,
};
pub use error::{AntennaError, AntennaResult};
pub use inputs::{Field, InputParameters, RawInputs};
pub use session::Session;
