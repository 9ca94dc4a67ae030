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

//! Resolve the project and network of a peering.

use crate::error::{Error, Result};

const SELF_LINK_PREFIX: &str = "https://www.googleapis.com/compute/";

/// Returns the project for a request.
///
/// The resource value wins over the provider default.
pub fn project(resource: Option<&str>, default: Option<&str>) -> Result<String> {
    [resource, default]
        .into_iter()
        .flatten()
        .find(|p| !p.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::required("project"))
}

/// Returns the network name from a name, a relative resource name, or a self
/// link.
///
/// # Example
/// ```
/// # use peering_provider::resolve::network_name;
/// let link = "https://www.googleapis.com/compute/v1/projects/p/global/networks/net-1";
/// assert_eq!(network_name(link)?, "net-1");
/// assert_eq!(network_name("projects/p/global/networks/net-1")?, "net-1");
/// assert_eq!(network_name("net-1")?, "net-1");
/// # Ok::<(), peering_provider::Error>(())
/// ```
pub fn network_name(value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(Error::required("network"));
    }
    if let Some(path) = value.strip_prefix(SELF_LINK_PREFIX) {
        // The path starts with the API version, e.g. `v1/` or `beta/`.
        return path
            .split_once('/')
            .and_then(|(_, relative)| from_relative(relative))
            .ok_or_else(|| {
                Error::Validation(format!(
                    "network specified was not a valid self link: {value}"
                ))
            });
    }
    if value.starts_with("projects/") {
        return from_relative(value).ok_or_else(|| {
            Error::Validation(format!(
                "network specified was not a valid resource name: {value}"
            ))
        });
    }
    Ok(value.to_string())
}

fn from_relative(relative: &str) -> Option<String> {
    match relative.split('/').collect::<Vec<_>>().as_slice() {
        ["projects", project, "global", "networks", name]
            if !project.is_empty() && is_network_name(name) =>
        {
            Some(name.to_string())
        }
        _ => None,
    }
}

// RFC 1035: a lowercase letter, then lowercase letters, digits or dashes, not
// ending in a dash.
fn is_network_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_lowercase()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !name.ends_with('-')
}
