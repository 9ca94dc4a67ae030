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

//! The interface between the host and each managed resource type.

use crate::error::Result;
use crate::schema::Schema;

/// A resource type managed by the provider.
///
/// Resources are create, read and delete only. Any change to a `force_new`
/// attribute is planned by the host as a delete followed by a create.
///
/// Each operation receives the local state and updates it in place. After a
/// successful `create()` the local identifier is set. After `delete()`, or a
/// `read()` that finds the resource is gone, it is cleared.
#[async_trait::async_trait]
pub trait Resource: std::fmt::Debug + Send + Sync {
    /// The local state of the resource.
    type State: Send;

    /// The name of the resource type, e.g. `google_compute_vpc_peering_connection`.
    fn type_name(&self) -> &'static str;

    /// The attributes of the resource.
    fn schema(&self) -> Schema;

    /// Creates the remote resource described by `state`.
    async fn create(&self, state: &mut Self::State) -> Result<()>;

    /// Refreshes `state` from the remote resource.
    async fn read(&self, state: &mut Self::State) -> Result<()>;

    /// Deletes the remote resource.
    async fn delete(&self, state: &mut Self::State) -> Result<()>;

    /// Returns the local state for an existing remote resource.
    ///
    /// The state is incomplete, the host must call `read()` to populate it.
    fn import(&self, id: &str) -> Result<Self::State>;
}
