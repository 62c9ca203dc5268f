// src/config/mod.rs

//! Launch file loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a launch file from disk (`loader.rs`).
//! - Validate it into a `LaunchRequest` (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_and_validate_with, load_from_path};
pub use model::{LaunchConfig, RawLaunchConfig};
