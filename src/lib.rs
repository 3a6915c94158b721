//! patch-antenna: rectangular microstrip patch antenna design calculator
//!
//! This library computes patch dimensions, feedline width and an RF
//! performance estimate from five design inputs, and renders the result as a
//! fixed-layout text report.
//!
//! # Architecture
//!
//! - **Formula library**: closed-form design equations, pure functions
//! - **Orchestration**: validated inputs → geometry → feedline → performance
//! - **Report**: deterministic text rendering and file export
//!
//! Front ends (the one-shot CLI and the interactive console) hold no state of
//! their own beyond a [`antenna::Session`].
//!
//! # Modules
//!
//! - [`antenna`] — Design inputs, formulas, results, report, session
//! - [`config`] — Configuration loading and validation
//! - [`console`] — Interactive line-oriented console
//! - [`error`] — Configuration error types

pub mod antenna;
pub mod config;
pub mod console;
pub mod error;
