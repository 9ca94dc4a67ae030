// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provider configuration.
//!
//! The configuration is usually deserialized from the host, and then
//! completed with values from the environment:
//!
//! ```
//! # use peering_provider::config::ProviderConfig;
//! let config: ProviderConfig = serde_json::from_str(r#"{
//!     "project": "my-project",
//!     "timeouts": { "create": "10m" }
//! }"#)?;
//! assert_eq!(config.timeouts.create, std::time::Duration::from_secs(600));
//! assert_eq!(config.timeouts.delete, std::time::Duration::from_secs(240));
//! # Ok::<(), serde_json::Error>(())
//! ```

use crate::error::{Error, Result};
use gax::exponential_backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The environment variables that may contain the default project, in
/// order of preference.
pub const PROJECT_VARS: [&str; 4] = [
    "GOOGLE_PROJECT",
    "GOOGLE_CLOUD_PROJECT",
    "GCLOUD_PROJECT",
    "CLOUDSDK_CORE_PROJECT",
];

/// The environment variable that may contain an OAuth2 access token.
pub const ACCESS_TOKEN_VAR: &str = compute::credentials::access_token::ACCESS_TOKEN_VAR;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(4 * 60);

/// Configuration shared by all the resources in the provider.
#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProviderConfig {
    /// The default project for resources that do not set one.
    pub project: Option<String>,

    /// An OAuth2 access token. If unset the client reads it from the
    /// environment.
    #[serde(skip_serializing)]
    pub access_token: Option<String>,

    /// Sends requests without credentials, e.g. to an emulator.
    pub anonymous: bool,

    /// Overrides the Compute Engine endpoint, mostly for testing.
    pub compute_endpoint: Option<String>,

    /// A prefix for the `User-Agent` header.
    pub user_agent: Option<String>,

    /// Limits the time waiting for operations.
    pub timeouts: Timeouts,

    /// Controls the delay between operation polls.
    pub polling: PollingConfig,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("project", &self.project)
            .field("access_token", &self.access_token.as_ref().map(|_| "[censored]"))
            .field("anonymous", &self.anonymous)
            .field("compute_endpoint", &self.compute_endpoint)
            .field("user_agent", &self.user_agent)
            .field("timeouts", &self.timeouts)
            .field("polling", &self.polling)
            .finish()
    }
}

impl ProviderConfig {
    /// Creates a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default project.
    pub fn with_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = Some(v.into());
        self
    }

    /// Sets the access token.
    pub fn with_access_token<T: Into<String>>(mut self, v: T) -> Self {
        self.access_token = Some(v.into());
        self
    }

    /// Sends requests without credentials.
    pub fn with_anonymous_credentials(mut self) -> Self {
        self.anonymous = true;
        self
    }

    /// Sets the Compute Engine endpoint.
    pub fn with_compute_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.compute_endpoint = Some(v.into());
        self
    }

    /// Sets the user agent prefix.
    pub fn with_user_agent<T: Into<String>>(mut self, v: T) -> Self {
        self.user_agent = Some(v.into());
        self
    }

    /// Sets the operation timeouts.
    pub fn with_timeouts(mut self, v: Timeouts) -> Self {
        self.timeouts = v;
        self
    }

    /// Sets the polling configuration.
    pub fn with_polling(mut self, v: PollingConfig) -> Self {
        self.polling = v;
        self
    }

    /// Fills unset values from the environment.
    pub fn from_env(self) -> Self {
        self.from_lookup(|k| std::env::var(k).ok())
    }

    fn from_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |k: &str| lookup(k).filter(|v| !v.is_empty());
        if self.project.is_none() {
            self.project = PROJECT_VARS.into_iter().find_map(non_empty);
        }
        if self.access_token.is_none() && !self.anonymous {
            self.access_token = non_empty(ACCESS_TOKEN_VAR);
        }
        self
    }

    /// Rejects configurations that cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.anonymous && self.access_token.is_some() {
            return Err(Error::Config(
                "anonymous credentials cannot be combined with an access token".to_string(),
            ));
        }
        for (name, value) in [
            ("create", self.timeouts.create),
            ("delete", self.timeouts.delete),
        ] {
            if value.is_zero() {
                return Err(Error::Config(format!(
                    "the {name} timeout must be greater than zero"
                )));
            }
        }
        self.polling.backoff().map(|_| ())
    }
}

/// The maximum time waiting for each kind of operation.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Timeouts {
    #[serde(with = "humantime_serde")]
    pub create: Duration,
    #[serde(with = "humantime_serde")]
    pub delete: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            create: DEFAULT_TIMEOUT,
            delete: DEFAULT_TIMEOUT,
        }
    }
}

/// The backoff between polls of a long-running operation.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PollingConfig {
    #[serde(with = "humantime_serde")]
    pub initial_delay: Duration,
    #[serde(with = "humantime_serde")]
    pub maximum_delay: Duration,
    pub scaling: f64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            maximum_delay: Duration::from_secs(10),
            scaling: 2.0,
        }
    }
}

impl PollingConfig {
    /// Creates the backoff policy for this configuration.
    pub fn backoff(&self) -> Result<ExponentialBackoff> {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(self.initial_delay)
            .with_maximum_delay(self.maximum_delay)
            .with_scaling(self.scaling)
            .build()
            .map_err(|e| Error::Config(e.to_string()))
    }
}

mod humantime_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        humantime::format_duration(*duration)
            .to_string()
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        humantime::parse_duration(&s).map_err(serde::de::Error::custom)
    }
}
