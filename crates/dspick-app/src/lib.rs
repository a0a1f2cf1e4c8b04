//! # dspick-app - Picker State and Orchestration
//!
//! Implements the data source picker on the TEA (The Elm Architecture)
//! pattern: an [`AppState`] model, [`Message`]s, and a pure
//! [`handler::update`] function whose [`UpdateAction`]s the [`Engine`]
//! performs.
//!
//! ## Public API
//!
//! ### Engine
//! - [`Engine`] - Owns one picker instance: activation, toggles, teardown
//!
//! ### State
//! - [`AppState`] - Model of one picker instance
//! - [`SelectionState`] / [`SelectionPhase`] - Option list and checked subset
//! - [`LifecycleGuard`] - Inactive / open / closed gate for writes and reports
//!
//! ### Collaborators
//! - [`SelectorConfig`] - Catalog, settings, notifier and flags
//! - [`Notifier`] - Non-blocking warnings
//! - [`SelectionHandler`] - Receives selection reports

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod lifecycle;
pub mod message;
pub mod selection;
pub mod services;
pub mod state;

pub use config::{SelectorConfig, Settings, SettingsReader};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use lifecycle::{GuardState, LifecycleGuard};
pub use message::Message;
pub use selection::{SelectionPhase, SelectionState};
pub use services::{Notifier, SelectionHandler, TracingNotifier};
pub use state::AppState;
