//! Moldrate Core — throughput math for injection-molding cycles.
//!
//! This crate contains the whole computational contract:
//! - Form inputs as typed, and the parse-or-zero rule
//! - The six-horizon throughput projection
//! - The three-tier display formatting rule
//! - The common cavity-count quick-pick table
//!
//! Everything here is pure and synchronous. The host (the TUI) calls
//! [`RawInputs::parse`] and [`Throughput::project`] after every input
//! mutation; there is no stored state and no error channel — invalid
//! input degrades to a zero contribution.

pub mod cavity;
pub mod format;
pub mod inputs;
pub mod throughput;

pub use cavity::COMMON_CAVITY_COUNTS;
pub use format::format_value;
pub use inputs::{parse_or_zero, CalculatorInputs, RawInputs};
pub use throughput::Throughput;
