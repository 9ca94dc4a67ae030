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

//! A resource controller for VPC network peering connections.
//!
//! The controller implements create, read, delete and import for
//! `google_compute_vpc_peering_connection` on top of the Compute Engine
//! `networks` API. Mutations return long-running operations, the controller
//! waits for them to complete before returning.
//!
//! The host owns the local state, an instance of [PeeringConnection], and
//! calls the controller through the [resource::Resource] trait:
//!
//! ```no_run
//! # use peering_provider::{PeeringConnection, VpcPeeringConnection};
//! # use peering_provider::config::ProviderConfig;
//! # use peering_provider::resource::Resource;
//! # async fn sample() -> anyhow::Result<()> {
//! peering_provider::logging::init();
//! let config = ProviderConfig::new().from_env();
//! let controller = VpcPeeringConnection::from_config(&config).await?;
//! let mut state = controller.import("peer-a")?;
//! state.network = "net-1".to_string();
//! controller.read(&mut state).await?;
//! if !state.exists() {
//!     println!("peer-a is gone");
//! }
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod not_found;
pub mod operation_wait;
pub mod resolve;
pub mod resource;
pub mod schema;
pub mod state;
pub mod vpc_peering_connection;

#[cfg(test)]
mod fake;

pub use error::{Error, Result};
pub use state::PeeringConnection;
pub use vpc_peering_connection::VpcPeeringConnection;
