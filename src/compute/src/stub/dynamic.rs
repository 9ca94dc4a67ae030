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

use crate::Result;
use crate::model::{Network, Operation, global_operations, networks};

/// A dyn-compatible, crate-private version of [super::Networks].
#[async_trait::async_trait]
pub trait Networks: std::fmt::Debug + Send + Sync {
    async fn get(&self, req: networks::GetRequest) -> Result<Network>;

    async fn add_peering(&self, req: networks::AddPeeringRequest) -> Result<Operation>;

    async fn remove_peering(&self, req: networks::RemovePeeringRequest) -> Result<Operation>;

    async fn get_global_operation(&self, req: global_operations::GetRequest)
    -> Result<Operation>;
}

/// All implementations of [super::Networks] also implement [Networks].
#[async_trait::async_trait]
impl<T: super::Networks> Networks for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn get(&self, req: networks::GetRequest) -> Result<Network> {
        T::get(self, req).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn add_peering(&self, req: networks::AddPeeringRequest) -> Result<Operation> {
        T::add_peering(self, req).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn remove_peering(&self, req: networks::RemovePeeringRequest) -> Result<Operation> {
        T::remove_peering(self, req).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_global_operation(
        &self,
        req: global_operations::GetRequest,
    ) -> Result<Operation> {
        T::get_global_operation(self, req).await
    }
}
