use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use crate::bailc;
use crate::constants::APIKEY_ENV;
use crate::constants::PRIMARY_STYLE;
use crate::constants::RESULTS_GLOB_DEFAULT;
use crate::constants::TIMEOUT_DEFAULT;
use crate::error::ctx;
use crate::file_system::FileOperations;
use crate::templates::Templates;

/// Where the record service lives and which experiment to work in.
///
/// # Examples
///
/// ```toml
/// [remote]
/// url = "https://materialscommons.org/api"
/// project = "my-project"
/// experiment = "cpfe-runs"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    /// The root of the api.
    pub url: String,

    /// The api key.
    ///
    /// If absent it is read from the `MC_API_KEY` environment variable.
    pub apikey: Option<String>,

    /// The id of the project.
    pub project: String,

    /// The id of the experiment inside the project.
    pub experiment: String,

    /// Request timeout in seconds.
    #[serde(default = "TIMEOUT_DEFAULT")]
    pub timeout: u64,
}

impl RemoteConfig {
    /// The api key, from the config or the environment.
    pub fn apikey(&self) -> Result<String> {
        self.apikey_or(std::env::var(APIKEY_ENV).ok())
    }

    /// The api key, falling back to `env` when the config has none.
    pub fn apikey_or(&self, env: Option<String>) -> Result<String> {
        if let Some(key) = self.apikey.clone().or(env) {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }

        bailc!(
          "No api key for the record service", ;
          "", ;
          "Set {PRIMARY_STYLE}apikey{PRIMARY_STYLE:#} under [remote] or export {APIKEY_ENV}",
        );
    }
}

/// The full configuration of `prismscpfe`.
///
/// # Examples
///
/// ```toml
/// results = "*.vtu"
///
/// [remote]
/// url = "https://materialscommons.org/api"
/// project = "my-project"
/// experiment = "cpfe-runs"
///
/// [templates]
/// simulation = "my_simulation_template"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The record service.
    pub remote: RemoteConfig,

    /// Template ids per process kind.
    #[serde(default)]
    pub templates: Templates,

    /// The glob matching simulation results in the working directory.
    #[serde(default = "RESULTS_GLOB_DEFAULT")]
    pub results: String,
}

impl Config {
    /// Load a configuration file from `path`.
    pub fn from_file<F: FileOperations>(path: &Path, fs: &F) -> Result<Config> {
        fs.try_read_toml(path).with_context(ctx!(
          "Could not parse {path:?}", ;
          "The configuration needs a {PRIMARY_STYLE}[remote]{PRIMARY_STYLE:#} table with url, project and experiment",
        ))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
