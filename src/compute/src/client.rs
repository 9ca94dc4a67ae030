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

use std::sync::Arc;

/// Implements a client for the Compute Engine API networks service.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use compute::client::Networks;
/// let client = Networks::builder().build().await?;
/// let network = client
///     .get()
///     .set_project("my-project")
///     .set_network("default")
///     .send()
///     .await?;
/// for peering in network.peerings {
///     println!("{peering:?}");
/// }
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `Networks` use the `with_*` methods in the type returned
/// by [builder()][Networks::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints, private endpoints, or test servers may need to override this
///   default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable.
///
/// [with_endpoint()]: super::builder::networks::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::networks::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `Networks` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `Networks` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct Networks {
    inner: Arc<dyn super::stub::dynamic::Networks>,
}

impl Networks {
    /// Returns a builder for [Networks].
    pub fn builder() -> super::builder::networks::ClientBuilder {
        super::builder::networks::ClientBuilder::new()
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Networks + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    /// Returns the specified network.
    pub fn get(&self) -> super::builder::networks::Get {
        super::builder::networks::Get::new(self.inner.clone())
    }

    /// Adds a peering to the specified network.
    ///
    /// This method returns a Compute Engine operation. The peering is usable
    /// once the operation completes.
    pub fn add_peering(&self) -> super::builder::networks::AddPeering {
        super::builder::networks::AddPeering::new(self.inner.clone())
    }

    /// Removes a peering from the specified network.
    ///
    /// This method returns a Compute Engine operation. The peering is removed
    /// once the operation completes.
    pub fn remove_peering(&self) -> super::builder::networks::RemovePeering {
        super::builder::networks::RemovePeering::new(self.inner.clone())
    }

    /// Retrieves the specified global operation.
    pub fn get_global_operation(&self) -> super::builder::networks::GetGlobalOperation {
        super::builder::networks::GetGlobalOperation::new(self.inner.clone())
    }
}
