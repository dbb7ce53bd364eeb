//! Generator configuration model.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::{
    CONFIG_SUFFIX, DEFAULT_APP_NAME, DEFAULT_OUTPUT_ROOT, DEPLOYMENT_SUFFIX, INGRESS_SUFFIX,
    MAX_LABEL_LENGTH, SERVICE_SUFFIX,
};
use crate::error::{EnvchartError, Result};
use crate::types::Environment;

/// Settings that shape a generator run, independent of the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorConfig {
    /// Application name; labels and resource names derive from it.
    pub app_name: String,
    /// Directory that receives one subdirectory per environment.
    pub output_root: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
        }
    }
}

impl GeneratorConfig {
    /// Returns the directory manifests for `env` are written to.
    #[must_use]
    pub fn output_dir(&self, env: Environment) -> PathBuf {
        environment_dir(&self.output_root, env)
    }

    /// Checks that every name derived from `app_name` is a valid RFC 1035 label.
    ///
    /// Service names must start with a letter, so the app name must too.
    ///
    /// # Errors
    ///
    /// Returns [`EnvchartError::Config`] describing the first violation.
    pub fn validate(&self) -> Result<()> {
        let name = self.app_name.as_str();
        if name.is_empty() {
            return Err(config_error("app name must not be empty".into()));
        }
        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(config_error(format!(
                "app name \"{name}\" contains invalid character '{c}' (allowed: a-z, 0-9, '-')"
            )));
        }
        if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
            return Err(config_error(format!(
                "app name \"{name}\" must start with a lowercase letter"
            )));
        }
        if name.ends_with('-') {
            return Err(config_error(format!(
                "app name \"{name}\" must end with an alphanumeric character"
            )));
        }
        let longest_suffix = [DEPLOYMENT_SUFFIX, SERVICE_SUFFIX, INGRESS_SUFFIX, CONFIG_SUFFIX]
            .iter()
            .map(|s| s.len())
            .max()
            .unwrap_or_default();
        let limit = MAX_LABEL_LENGTH - longest_suffix;
        if name.len() > limit {
            return Err(config_error(format!(
                "app name \"{name}\" is {} characters, at most {limit} allowed",
                name.len()
            )));
        }
        Ok(())
    }
}

/// Joins an output root with the environment's directory name.
#[must_use]
pub fn environment_dir(root: &Path, env: Environment) -> PathBuf {
    root.join(env.as_str())
}

fn config_error(message: String) -> EnvchartError {
    EnvchartError::Config { message }
}
