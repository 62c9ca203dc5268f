#![allow(dead_code)]

use std::path::PathBuf;

use vscode_test_launcher::types::{ExplicitLaunch, ImplicitLaunch, LaunchRequest};

/// Builder for implicit-shape `LaunchRequest`s.
pub struct ImplicitLaunchBuilder {
    launch: ImplicitLaunch,
}

impl ImplicitLaunchBuilder {
    pub fn new(extension_development_path: &str, extension_tests_path: &str) -> Self {
        Self {
            launch: ImplicitLaunch::new(extension_development_path, extension_tests_path),
        }
    }

    pub fn executable(mut self, path: &str) -> Self {
        self.launch.executable_path = Some(PathBuf::from(path));
        self
    }

    pub fn version(mut self, version: &str) -> Self {
        self.launch.version = Some(version.to_string());
        self
    }

    pub fn workspace(mut self, path: &str) -> Self {
        self.launch.test_workspace = Some(PathBuf::from(path));
        self
    }

    pub fn locale(mut self, locale: &str) -> Self {
        self.launch.locale = Some(locale.to_string());
        self
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.launch.additional_launch_args.push(arg.to_string());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.launch
            .extension_tests_env
            .insert(key.to_string(), Some(value.to_string()));
        self
    }

    pub fn unset_env(mut self, key: &str) -> Self {
        self.launch.extension_tests_env.insert(key.to_string(), None);
        self
    }

    pub fn build_launch(self) -> ImplicitLaunch {
        self.launch
    }

    pub fn build(self) -> LaunchRequest {
        LaunchRequest::Implicit(self.launch)
    }
}

/// Builder for explicit-shape `LaunchRequest`s.
pub struct ExplicitLaunchBuilder {
    launch: ExplicitLaunch,
}

impl ExplicitLaunchBuilder {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            launch: ExplicitLaunch::new(args.into_iter().map(Into::into).collect()),
        }
    }

    pub fn executable(mut self, path: &str) -> Self {
        self.launch.executable_path = Some(PathBuf::from(path));
        self
    }

    pub fn version(mut self, version: &str) -> Self {
        self.launch.version = Some(version.to_string());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.launch
            .extension_tests_env
            .insert(key.to_string(), Some(value.to_string()));
        self
    }

    pub fn build(self) -> LaunchRequest {
        LaunchRequest::Explicit(self.launch)
    }
}
