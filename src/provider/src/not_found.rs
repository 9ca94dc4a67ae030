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

//! Classify "not found" errors while reading resources.
//!
//! A resource deleted outside the provider is not an error: the provider
//! clears the local identifier and the host plans to create it again.

use crate::state::PeeringConnection;

/// The outcome of looking up a remote resource.
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

/// Separates "not found" errors from other failures.
pub fn classify<T>(result: gax::Result<T>) -> gax::Result<Lookup<T>> {
    match result {
        Ok(v) => Ok(Lookup::Found(v)),
        Err(e) if e.is_not_found() => Ok(Lookup::NotFound),
        Err(e) => Err(e),
    }
}

/// Forgets a resource that is gone.
pub(crate) fn remove_from_state(
    state: &mut PeeringConnection,
    resource_type: &str,
    reason: &str,
) {
    tracing::warn!(
        resource_type,
        id = state.id.as_deref().unwrap_or_default(),
        "removing from state because it no longer exists: {reason}"
    );
    state.forget();
}
