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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

use crate::Result;
use crate::model::{Network, Operation, global_operations, networks};

pub(crate) mod dynamic;

/// Defines the trait used to implement [crate::client::Networks].
///
/// Application developers may need to implement this trait to mock
/// `client::Networks`. In other use-cases, application developers only
/// use `client::Networks` and need not be concerned with this trait or
/// its implementations.
///
/// The trait provides a default implementation of each method. These
/// implementations return an error.
pub trait Networks: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::Networks::get].
    fn get(
        &self,
        _req: networks::GetRequest,
    ) -> impl std::future::Future<Output = Result<Network>> + Send {
        unimplemented_stub::<Network>("get")
    }

    /// Implements [crate::client::Networks::add_peering].
    fn add_peering(
        &self,
        _req: networks::AddPeeringRequest,
    ) -> impl std::future::Future<Output = Result<Operation>> + Send {
        unimplemented_stub::<Operation>("add_peering")
    }

    /// Implements [crate::client::Networks::remove_peering].
    fn remove_peering(
        &self,
        _req: networks::RemovePeeringRequest,
    ) -> impl std::future::Future<Output = Result<Operation>> + Send {
        unimplemented_stub::<Operation>("remove_peering")
    }

    /// Implements [crate::client::Networks::get_global_operation].
    fn get_global_operation(
        &self,
        _req: global_operations::GetRequest,
    ) -> impl std::future::Future<Output = Result<Operation>> + Send {
        unimplemented_stub::<Operation>("get_global_operation")
    }
}

async fn unimplemented_stub<T>(method: &'static str) -> Result<T> {
    Err(gax::error::Error::other(format!(
        "the stub does not implement {method}"
    )))
}
