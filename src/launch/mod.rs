// src/launch/mod.rs

//! Everything that happens before the test host is spawned.
//!
//! - [`acquire`] is the seam to the binary-acquisition collaborator.
//! - [`resolve`] fills in the executable and produces a `ResolvedLaunch`.
//! - [`args`] builds the argument list for the implicit shape.
//! - [`env`] merges caller overrides into the ambient environment.

pub mod acquire;
pub mod args;
pub mod env;
pub mod resolve;

pub use acquire::{BinaryAcquirer, LocalInstallAcquirer};
pub use args::{build_launch_args, launch_args_for};
pub use env::{merge_env, AmbientEnv};
pub use resolve::{prepare_launch, resolve_executable, resolve_launch};
