//! Data source picker library
//!
//! Binary-side glue around the picker crates: the headless NDJSON driver.

pub mod headless;

// Re-export main entry point
pub use headless::runner::run_headless;
