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

//! A client for the Compute Engine API, limited to VPC network peerings.
//!
//! This crate contains the types and client to read networks, add and remove
//! network peerings, and poll the global operations returned by those
//! mutations.

/// The default host used by the client.
pub(crate) const DEFAULT_HOST: &str = "https://compute.googleapis.com";

pub use gax::Result;
pub use gax::error::Error;

/// The messages and enums that are part of this client library.
pub mod model;

/// Concrete implementations of this client library traits.
pub mod client;

/// Request builders.
pub mod builder;

/// Credentials used to authenticate requests.
pub mod credentials;

/// Traits to mock the clients in this library.
pub mod stub;

mod http;
mod operation;
mod transport;
