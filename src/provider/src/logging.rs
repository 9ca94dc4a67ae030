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

//! Initialize logging for binaries and tests hosting the provider.
//!
//! The provider emits [tracing] events. Hosts that already install a
//! subscriber need not call anything in this module.

use tracing_subscriber::EnvFilter;

/// The environment variable consulted when `RUST_LOG` is not set.
pub const LOG_VAR: &str = "PEERING_LOG";

const DEFAULT_FILTER: &str = "info";

/// Installs a `fmt` subscriber as the global default.
///
/// Does nothing if a global subscriber is already installed.
pub fn init() {
    let _ = try_init();
}

/// Installs a `fmt` subscriber as the global default, returning an error
/// if one is already installed.
pub fn try_init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_target(true)
        .try_init()
}

/// Returns the filter configured by the environment.
pub fn filter() -> EnvFilter {
    filter_from(|k| std::env::var(k).ok())
}

fn filter_from<F>(lookup: F) -> EnvFilter
where
    F: Fn(&str) -> Option<String>,
{
    [EnvFilter::DEFAULT_ENV, LOG_VAR]
        .into_iter()
        .filter_map(&lookup)
        .filter(|v| !v.is_empty())
        .find_map(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
