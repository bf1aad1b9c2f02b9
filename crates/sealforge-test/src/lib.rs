//! Shared test fixtures for sealforge crates.
//!
//! This crate provides ready-made hierarchy declarations for testing.
//! Unit tests inside `sealforge-core` build their own fixtures; only
//! integration tests and downstream crates depend on this one.
//!
//! - [`ui_state`] - The canonical `UIState` sealed interface and its bindings
//! - [`shapes`] - Declarations that exercise every variant shape and failure
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! sealforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use sealforge_test::ui_state::{ui_state, ui_state_with};
//! use sealforge_test::shapes::{open_class, page_with_list};
//! ```

pub mod shapes;
pub mod ui_state;

pub use shapes::{open_class, page_with_list, payment_result};
pub use ui_state::{kotlin_type, ui_state, ui_state_with};
