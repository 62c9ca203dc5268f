// src/config/validate.rs

use crate::config::model::{LaunchConfig, RawLaunchConfig};
use crate::errors::{LaunchError, Result};
use crate::types::{ExplicitLaunch, ImplicitLaunch, LaunchRequest, TestRunnerEnv};

impl TryFrom<RawLaunchConfig> for LaunchConfig {
    type Error = crate::errors::LaunchError;

    fn try_from(raw: RawLaunchConfig) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;

        let env: TestRunnerEnv = raw
            .extension_tests_env
            .into_iter()
            .map(|(k, v)| (k, Some(v)))
            .collect();

        let request = match raw.launch_args {
            Some(launch_args) => LaunchRequest::Explicit(ExplicitLaunch {
                executable_path: raw.executable_path,
                version: raw.version,
                launch_args,
                extension_tests_env: env,
            }),
            None => LaunchRequest::Implicit(ImplicitLaunch {
                executable_path: raw.executable_path,
                version: raw.version,
                // Presence checked by `validate_implicit_shape`.
                extension_development_path: raw.extension_development_path.unwrap_or_default(),
                extension_tests_path: raw.extension_tests_path.unwrap_or_default(),
                extension_tests_env: env,
                test_workspace: raw.test_workspace,
                additional_launch_args: raw.additional_launch_args.unwrap_or_default(),
                locale: raw.locale,
            }),
        };

        Ok(LaunchConfig::new_unchecked(request, raw.cache_dir))
    }
}

fn validate_raw_config(cfg: &RawLaunchConfig) -> Result<()> {
    validate_common_fields(cfg)?;
    if cfg.launch_args.is_some() {
        validate_explicit_shape(cfg)
    } else {
        validate_implicit_shape(cfg)
    }
}

fn validate_common_fields(cfg: &RawLaunchConfig) -> Result<()> {
    if let Some(ref path) = cfg.executable_path {
        if path.as_os_str().is_empty() {
            return Err(LaunchError::ConfigError(
                "`executable_path` must not be empty (omit it to acquire one)".to_string(),
            ));
        }
    }
    if let Some(ref version) = cfg.version {
        if version.trim().is_empty() {
            return Err(LaunchError::ConfigError(
                "`version` must not be empty (omit it for latest stable)".to_string(),
            ));
        }
    }
    for key in cfg.extension_tests_env.keys() {
        if key.is_empty() || key.contains('=') {
            return Err(LaunchError::ConfigError(format!(
                "invalid environment variable name '{}' in [extension_tests_env]",
                key
            )));
        }
    }
    Ok(())
}

/// The explicit shape must not be mixed with any implicit field.
fn validate_explicit_shape(cfg: &RawLaunchConfig) -> Result<()> {
    let implicit_fields = [
        ("extension_development_path", cfg.extension_development_path.is_some()),
        ("extension_tests_path", cfg.extension_tests_path.is_some()),
        ("test_workspace", cfg.test_workspace.is_some()),
        ("locale", cfg.locale.is_some()),
        ("additional_launch_args", cfg.additional_launch_args.is_some()),
    ];

    let mixed: Vec<&str> = implicit_fields
        .iter()
        .filter(|(_, present)| *present)
        .map(|(name, _)| *name)
        .collect();

    if !mixed.is_empty() {
        return Err(LaunchError::ConfigError(format!(
            "`launch_args` cannot be combined with {}",
            mixed.join(", ")
        )));
    }
    Ok(())
}

fn validate_implicit_shape(cfg: &RawLaunchConfig) -> Result<()> {
    let required = [
        ("extension_development_path", &cfg.extension_development_path),
        ("extension_tests_path", &cfg.extension_tests_path),
    ];

    for (name, value) in required {
        match value {
            None => {
                return Err(LaunchError::ConfigError(format!(
                    "`{}` is required unless `launch_args` is given",
                    name
                )));
            }
            Some(path) if path.as_os_str().is_empty() => {
                return Err(LaunchError::ConfigError(format!("`{}` must not be empty", name)));
            }
            Some(_) => {}
        }
    }

    if let Some(ref locale) = cfg.locale {
        if locale.trim().is_empty() {
            return Err(LaunchError::ConfigError(
                "`locale` must not be empty (omit it for \"en\")".to_string(),
            ));
        }
    }
    Ok(())
}
