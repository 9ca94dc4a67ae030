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

//! Types and functions to authenticate requests to Compute Engine.
//!
//! The client attaches the headers returned by [Credentials::headers] to
//! every request. Two kinds of credentials are provided:
//!
//! * [anonymous] credentials add no headers. They are used with emulators,
//!   test servers, and proxies that inject their own authentication.
//! * [access_token] credentials use a pre-issued OAuth2 access token as a
//!   bearer token.

use http::HeaderMap;
use std::sync::Arc;

/// The error type for credentials.
#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    /// The credentials could not be found in the environment.
    #[error("cannot find credentials, {0}")]
    NotFound(String),
    /// The credentials cannot be represented as HTTP headers.
    #[error("invalid credentials: {0}")]
    Invalid(#[source] http::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, CredentialsError>;

/// An implementation of [dynamic::CredentialsProvider].
///
/// Represents a [Credentials] used to obtain the auth request headers.
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: dynamic::CredentialsProvider + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to attach to each request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

pub mod dynamic {
    use super::Result;
    use http::HeaderMap;

    /// A trait for credential types that can provide authentication headers.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        /// Asynchronously constructs the auth headers.
        async fn headers(&self) -> Result<HeaderMap>;
    }
}

/// Anonymous credentials.
///
/// These credentials do not provide any authentication information.
pub mod anonymous {
    use super::{Credentials, Result};
    use http::HeaderMap;

    #[derive(Debug)]
    struct AnonymousCredentials;

    /// A builder for creating anonymous credentials.
    #[derive(Debug, Default)]
    pub struct Builder {}

    impl Builder {
        /// Creates a new builder.
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns a [Credentials] instance.
        pub fn build(self) -> Credentials {
            Credentials::from(AnonymousCredentials)
        }
    }

    #[async_trait::async_trait]
    impl super::dynamic::CredentialsProvider for AnonymousCredentials {
        async fn headers(&self) -> Result<HeaderMap> {
            Ok(HeaderMap::new())
        }
    }
}

/// Credentials based on a pre-issued OAuth2 access token.
///
/// The token is used verbatim. It is not refreshed.
pub mod access_token {
    use super::{Credentials, CredentialsError, Result};
    use http::HeaderMap;
    use http::header::{AUTHORIZATION, HeaderValue};

    /// The environment variable holding the access token.
    pub const ACCESS_TOKEN_VAR: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

    struct AccessTokenCredentials {
        header: HeaderValue,
    }

    impl std::fmt::Debug for AccessTokenCredentials {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("AccessTokenCredentials")
                .field("token", &"[censored]")
                .finish()
        }
    }

    /// A builder for creating credentials from an access token.
    pub struct Builder {
        token: String,
    }

    impl std::fmt::Debug for Builder {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Builder")
                .field("token", &"[censored]")
                .finish()
        }
    }

    impl Builder {
        /// Creates a new builder with the given access token.
        pub fn new<T: Into<String>>(token: T) -> Self {
            Self {
                token: token.into(),
            }
        }

        /// Creates a new builder using the token in `GOOGLE_OAUTH_ACCESS_TOKEN`.
        pub fn from_env() -> Result<Self> {
            match std::env::var(ACCESS_TOKEN_VAR) {
                Ok(token) if !token.is_empty() => Ok(Self::new(token)),
                _ => Err(CredentialsError::NotFound(format!(
                    "the {ACCESS_TOKEN_VAR} environment variable is not set"
                ))),
            }
        }

        /// Returns a [Credentials] instance.
        pub fn build(self) -> Result<Credentials> {
            let mut header = HeaderValue::from_str(&format!("Bearer {}", self.token))
                .map_err(CredentialsError::Invalid)?;
            header.set_sensitive(true);
            Ok(Credentials::from(AccessTokenCredentials { header }))
        }
    }

    #[async_trait::async_trait]
    impl super::dynamic::CredentialsProvider for AccessTokenCredentials {
        async fn headers(&self) -> Result<HeaderMap> {
            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, self.header.clone());
            Ok(headers)
        }
    }
}
