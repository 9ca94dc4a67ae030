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

//! Builders for the clients and requests in this crate.

use crate::credentials::Credentials;

/// Configure a client.
///
/// Applications use [ClientBuilder][networks::ClientBuilder] to set these
/// values. It is only public so the transport can consume it.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ClientConfig {
    pub endpoint: Option<String>,
    pub cred: Option<Credentials>,
    pub user_agent: Option<String>,
}

/// The result type for client construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use compute::client::Networks;
/// # tokio_test::block_on(async {
/// match Networks::builder().build().await {
///     Ok(c) => { /* use the client */ }
///     Err(e) if e.is_credentials() => { println!("error loading the credentials {e}"); }
///     Err(e) => { println!("other error creating the client {e}"); }
/// }
/// # });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the credentials.
    pub fn is_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::Credentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Creates a new `Error` from a credentials error.
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Credentials(source.into()))
    }

    /// Creates a new `Error` from a transport initialization error.
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create credentials")]
    Credentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub mod networks {
    use crate::Result;
    use crate::model::{
        Network, NetworksAddPeeringRequest, NetworksRemovePeeringRequest, Operation,
        global_operations, networks,
    };
    use std::sync::Arc;

    /// A builder for [Networks][crate::client::Networks].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use compute::*;
    /// # use builder::networks::ClientBuilder;
    /// # use client::Networks;
    /// let builder : ClientBuilder = Networks::builder();
    /// let client = builder
    ///     .with_endpoint("https://compute.googleapis.com")
    ///     .build().await?;
    /// # compute::builder::Result::<()>::Ok(()) });
    /// ```
    #[derive(Clone, Debug, Default)]
    pub struct ClientBuilder {
        config: super::ClientConfig,
    }

    impl ClientBuilder {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        /// Sets the endpoint.
        pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
            self.config.endpoint = Some(v.into());
            self
        }

        /// Configures the authentication credentials.
        ///
        /// If not set, the client uses the access token in the
        /// `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable.
        pub fn with_credentials<V: Into<crate::credentials::Credentials>>(mut self, v: V) -> Self {
            self.config.cred = Some(v.into());
            self
        }

        /// Sets the `User-Agent` header sent with each request.
        pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
            self.config.user_agent = Some(v.into());
            self
        }

        /// Creates a new client.
        pub async fn build(self) -> super::Result<crate::client::Networks> {
            let stub = crate::transport::Networks::new(self.config)?;
            Ok(crate::client::Networks::from_stub(stub))
        }
    }

    /// The request builder for [Networks::get][crate::client::Networks::get] calls.
    #[derive(Clone, Debug)]
    pub struct Get {
        stub: Arc<dyn crate::stub::dynamic::Networks>,
        request: networks::GetRequest,
    }

    impl Get {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Networks>) -> Self {
            Self {
                stub,
                request: networks::GetRequest::default(),
            }
        }

        /// Sets the value of [project][networks::GetRequest::project].
        pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
            self.request.project = v.into();
            self
        }

        /// Sets the value of [network][networks::GetRequest::network].
        pub fn set_network<T: Into<String>>(mut self, v: T) -> Self {
            self.request.network = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Network> {
            self.stub.get(self.request).await
        }
    }

    /// The request builder for [Networks::add_peering][crate::client::Networks::add_peering] calls.
    #[derive(Clone, Debug)]
    pub struct AddPeering {
        stub: Arc<dyn crate::stub::dynamic::Networks>,
        request: networks::AddPeeringRequest,
    }

    impl AddPeering {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Networks>) -> Self {
            Self {
                stub,
                request: networks::AddPeeringRequest::default(),
            }
        }

        /// Sets the value of [project][networks::AddPeeringRequest::project].
        pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
            self.request.project = v.into();
            self
        }

        /// Sets the value of [network][networks::AddPeeringRequest::network].
        pub fn set_network<T: Into<String>>(mut self, v: T) -> Self {
            self.request.network = v.into();
            self
        }

        /// Sets the value of [body][networks::AddPeeringRequest::body].
        pub fn set_body<T: Into<NetworksAddPeeringRequest>>(mut self, v: T) -> Self {
            self.request.body = Some(v.into());
            self
        }

        /// Sends the request.
        ///
        /// The returned operation must be polled until it completes.
        pub async fn send(self) -> Result<Operation> {
            self.stub.add_peering(self.request).await
        }
    }

    /// The request builder for [Networks::remove_peering][crate::client::Networks::remove_peering] calls.
    #[derive(Clone, Debug)]
    pub struct RemovePeering {
        stub: Arc<dyn crate::stub::dynamic::Networks>,
        request: networks::RemovePeeringRequest,
    }

    impl RemovePeering {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Networks>) -> Self {
            Self {
                stub,
                request: networks::RemovePeeringRequest::default(),
            }
        }

        /// Sets the value of [project][networks::RemovePeeringRequest::project].
        pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
            self.request.project = v.into();
            self
        }

        /// Sets the value of [network][networks::RemovePeeringRequest::network].
        pub fn set_network<T: Into<String>>(mut self, v: T) -> Self {
            self.request.network = v.into();
            self
        }

        /// Sets the value of [body][networks::RemovePeeringRequest::body].
        pub fn set_body<T: Into<NetworksRemovePeeringRequest>>(mut self, v: T) -> Self {
            self.request.body = Some(v.into());
            self
        }

        /// Sends the request.
        ///
        /// The returned operation must be polled until it completes.
        pub async fn send(self) -> Result<Operation> {
            self.stub.remove_peering(self.request).await
        }
    }

    /// The request builder for [Networks::get_global_operation][crate::client::Networks::get_global_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetGlobalOperation {
        stub: Arc<dyn crate::stub::dynamic::Networks>,
        request: global_operations::GetRequest,
    }

    impl GetGlobalOperation {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Networks>) -> Self {
            Self {
                stub,
                request: global_operations::GetRequest::default(),
            }
        }

        /// Sets the value of [project][global_operations::GetRequest::project].
        pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
            self.request.project = v.into();
            self
        }

        /// Sets the value of [operation][global_operations::GetRequest::operation].
        pub fn set_operation<T: Into<String>>(mut self, v: T) -> Self {
            self.request.operation = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Operation> {
            self.stub.get_global_operation(self.request).await
        }
    }
}
