// src/launch/env.rs

//! Child environment construction.
//!
//! The ambient process environment is captured once per invocation into an
//! [`AmbientEnv`] snapshot and passed explicitly into [`merge_env`]. Nothing
//! here mutates the real process environment.

use std::collections::BTreeMap;
use std::ffi::OsString;

use crate::types::TestRunnerEnv;

/// Read-only snapshot of a process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmbientEnv {
    vars: BTreeMap<OsString, OsString>,
}

impl AmbientEnv {
    /// Snapshot the current process environment.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars_os().collect(),
        }
    }

    /// Build a snapshot from fixed entries (tests, dry runs).
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&OsString> {
        self.vars.get(&OsString::from(key))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Merge caller overrides on top of the ambient environment.
///
/// Override values win on conflict; `None` overrides are ignored, leaving
/// the ambient value (if any) in place.
pub fn merge_env(
    ambient: &AmbientEnv,
    overrides: &TestRunnerEnv,
) -> BTreeMap<OsString, OsString> {
    let mut merged = ambient.vars.clone();
    for (key, value) in overrides {
        if let Some(value) = value {
            merged.insert(OsString::from(key), OsString::from(value));
        }
    }
    merged
}
