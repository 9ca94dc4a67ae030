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

//! The errors returned by the resource controller.

/// The result type for resource operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for resource operations.
///
/// A remote "not found" while reading a resource is not an error. It clears
/// the local identifier instead, see [crate::not_found].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A required field is unset or cannot be resolved.
    ///
    /// No remote call is made when this error is returned.
    #[error("{0}")]
    Validation(String),

    /// The service rejected a mutation.
    #[error("Error {context}: {source}")]
    Operation {
        context: String,
        #[source]
        source: gax::error::Error,
    },

    /// A long-running operation failed, or did not complete in time.
    #[error("Error waiting for {action}: {source}")]
    Wait {
        action: String,
        /// The last status observed while polling, if any.
        last_status: Option<String>,
        #[source]
        source: gax::error::Error,
    },

    /// Reading the remote resource failed for a reason other than "not found".
    #[error("Error reading {context}: {source}")]
    Api {
        context: String,
        #[source]
        source: gax::error::Error,
    },

    /// The provider configuration is invalid.
    #[error("invalid provider configuration: {0}")]
    Config(String),

    /// The Compute Engine client could not be created.
    #[error("cannot create the Compute Engine client: {0}")]
    Client(#[from] compute::builder::Error),
}

impl Error {
    /// Creates a [Error::Validation] for a required field that is not set.
    pub fn required(field: &str) -> Self {
        Self::Validation(format!("{field:?}: required field is not set"))
    }

    /// If true, the operation was aborted before any remote call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// If true, the error was caused by a long-running operation.
    pub fn is_wait(&self) -> bool {
        matches!(self, Self::Wait { .. })
    }

    /// If true, waiting for an operation stopped because of the configured timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Wait { source, .. } if source.is_exhausted() || source.is_timeout())
    }

    /// The last status observed while waiting for an operation.
    pub fn last_status(&self) -> Option<&str> {
        match self {
            Self::Wait { last_status, .. } => last_status.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::{Code, Status};
    use std::error::Error as _;

    #[test]
    fn required() {
        let e = Error::required("network");
        assert!(e.is_validation(), "{e:?}");
        assert_eq!(e.to_string(), r#""network": required field is not set"#);
    }

    #[test]
    fn operation() {
        let e = Error::Operation {
            context: "creating network peering".into(),
            source: gax::error::Error::service(
                Status::default()
                    .set_code(Code::InvalidArgument)
                    .set_message("bad peer network"),
            ),
        };
        let msg = e.to_string();
        assert!(msg.starts_with("Error creating network peering: "), "{msg}");
        assert!(msg.contains("bad peer network"), "{msg}");
        assert!(e.source().is_some(), "{e:?}");
        assert!(!e.is_wait(), "{e:?}");
    }

    #[test]
    fn wait() {
        let e = Error::Wait {
            action: "Creating Network Peering".into(),
            last_status: Some("RUNNING".into()),
            source: gax::error::Error::exhausted("deadline"),
        };
        assert!(e.is_wait(), "{e:?}");
        assert!(e.is_timeout(), "{e:?}");
        assert_eq!(e.last_status(), Some("RUNNING"));
        assert!(e.to_string().contains("Creating Network Peering"), "{e}");

        let e = Error::Wait {
            action: "Deleting Network Peering".into(),
            last_status: None,
            source: gax::error::Error::other("failed"),
        };
        assert!(!e.is_timeout(), "{e:?}");
        assert_eq!(e.last_status(), None);
    }
}
