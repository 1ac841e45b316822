//! Moldrate TUI — terminal form surface for the throughput calculator.
//!
//! Left column: the five-field input form with a settings echo.
//! Right column: the six projected throughput metrics.
//! Overlays: cavity quick-pick, help.
//!
//! State and input handling live here so integration tests can drive
//! the form with synthetic key events; the binary wires up the terminal.

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;
