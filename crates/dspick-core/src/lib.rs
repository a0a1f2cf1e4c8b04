//! # dspick-core - Core Domain Types
//!
//! Foundation crate for the data source picker. Provides domain types,
//! error handling, logging setup and the option normalizer.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`DataSourceRecord`] - A data source as returned by the catalog
//! - [`SelectableOption`] - One checkbox entry of the picker
//! - [`CheckState`] - `on` / `off` checkbox state
//!
//! ### Options (`options`)
//! - [`normalize()`] - Turn fetched records into the ordered option list
//! - [`checked_only()`] - Filter an option list down to its checked entries
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use dspick_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod options;
pub mod prelude;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use options::{checked_only, normalize};
pub use types::{
    CheckState, DataSourceRecord, SelectableOption, LOCAL_CLUSTER_ID, LOCAL_CLUSTER_LABEL,
};
