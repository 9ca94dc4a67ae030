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

use super::rpc::{Code, Status};
use bytes::Bytes;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The error returned by the Compute client and the operation poller.
///
/// Errors come from the service (an error payload), the HTTP transport (a
/// response without a usable payload, or no response at all), or the client
/// itself (serialization, credentials, polling limits).
///
/// Most callers propagate or log the error. The resource controller inspects
/// it, mainly to find resources that no longer exist:
///
/// ```
/// use gax::error::Error;
/// use gax::error::rpc::{Code, Status};
/// fn describe(e: &Error) -> &'static str {
///     match e {
///         e if e.is_not_found() => "gone",
///         e if e.is_exhausted() || e.is_timeout() => "too slow",
///         _ => "failed",
///     }
/// }
/// let e = Error::service(Status::default().set_code(Code::NotFound));
/// assert_eq!(describe(&e), "gone");
/// ```
#[derive(Debug)]
pub struct Error(Repr);

#[derive(Debug)]
enum Repr {
    Service {
        status: Status,
        response: Option<Box<Response>>,
    },
    Http {
        response: Box<Response>,
        payload: Bytes,
    },
    Io(BoxError),
    Client(ClientKind, BoxError),
}

#[derive(Debug)]
struct Response {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ClientKind {
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Exhausted,
    Other,
}

impl Error {
    /// An error payload returned by the service.
    ///
    /// ```
    /// use gax::error::Error;
    /// use gax::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::NotFound).set_message("NOT FOUND");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: Status) -> Self {
        Self(Repr::Service {
            status,
            response: None,
        })
    }

    /// An error payload returned by the service, with the HTTP response
    /// metadata.
    pub fn service_with_http_metadata(
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let response = Box::new(Response {
            status_code,
            headers,
        });
        Self(Repr::Service {
            status,
            response: Some(response),
        })
    }

    /// An HTTP error response whose payload is not a service error.
    pub fn http(status_code: u16, headers: HeaderMap, payload: Bytes) -> Self {
        let response = Box::new(Response {
            status_code: Some(status_code),
            headers: Some(headers),
        });
        Self(Repr::Http { response, payload })
    }

    /// The request, or its response, was lost in the transport. For example,
    /// the connection was refused or dropped.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self(Repr::Io(source.into()))
    }

    /// The request could not complete before its deadline.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::client(ClientKind::Timeout, source)
    }

    /// A polling policy stopped the loop before the operation completed.
    ///
    /// ```
    /// use std::error::Error as _;
    /// use gax::error::Error;
    /// let error = Error::exhausted("too many polling attempts");
    /// assert!(error.is_exhausted());
    /// assert!(error.source().is_some());
    /// ```
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self::client(ClientKind::Exhausted, source)
    }

    /// The response could not be parsed.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::client(ClientKind::Deserialization, source)
    }

    /// The request could not be built. Nothing was sent.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::client(ClientKind::Serialization, source)
    }

    /// The credentials could not produce authentication headers.
    pub fn authentication<T: Into<BoxError>>(source: T) -> Self {
        Self::client(ClientKind::Authentication, source)
    }

    /// Any other problem.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self::client(ClientKind::Other, source)
    }

    fn client<T: Into<BoxError>>(kind: ClientKind, source: T) -> Self {
        Self(Repr::Client(kind, source.into()))
    }

    fn is_client(&self, kind: ClientKind) -> bool {
        matches!(&self.0, Repr::Client(k, _) if *k == kind)
    }

    pub fn is_timeout(&self) -> bool {
        self.is_client(ClientKind::Timeout)
    }

    pub fn is_exhausted(&self) -> bool {
        self.is_client(ClientKind::Exhausted)
    }

    pub fn is_deserialization(&self) -> bool {
        self.is_client(ClientKind::Deserialization)
    }

    pub fn is_serialization(&self) -> bool {
        self.is_client(ClientKind::Serialization)
    }

    pub fn is_authentication(&self) -> bool {
        self.is_client(ClientKind::Authentication)
    }

    /// True for errors without a complete HTTP response.
    pub fn is_io(&self) -> bool {
        matches!(&self.0, Repr::Io(_))
    }

    /// True for HTTP transport errors, with or without a response.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, Repr::Io(_) | Repr::Http { .. })
    }

    /// The error payload returned by the service, if any.
    pub fn status(&self) -> Option<&Status> {
        match &self.0 {
            Repr::Service { status, .. } => Some(status),
            _ => None,
        }
    }

    fn response(&self) -> Option<&Response> {
        match &self.0 {
            Repr::Service { response, .. } => response.as_deref(),
            Repr::Http { response, .. } => Some(response),
            _ => None,
        }
    }

    /// The HTTP status code of the response, if any.
    pub fn http_status_code(&self) -> Option<u16> {
        self.response().and_then(|r| r.status_code)
    }

    /// The HTTP headers of the response, if any.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        self.response().and_then(|r| r.headers.as_ref())
    }

    /// The raw payload of an HTTP error that is not a service error.
    pub fn http_payload(&self) -> Option<&Bytes> {
        match &self.0 {
            Repr::Http { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// The remote resource does not exist.
    ///
    /// True for a `NOT_FOUND` service error, or any HTTP 404 response.
    ///
    /// ```
    /// use gax::error::Error;
    /// let error = Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"gone"));
    /// assert!(error.is_not_found());
    /// ```
    pub fn is_not_found(&self) -> bool {
        self.status().is_some_and(|s| s.code == Code::NotFound)
            || self.http_status_code() == Some(http::StatusCode::NOT_FOUND.as_u16())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Repr::Service { status, .. } => write!(
                f,
                "the service reports an error with code {} described as: {}",
                status.code, status.message
            ),
            Repr::Http { response, payload } => {
                let code = response.status_code.unwrap_or_default();
                match std::str::from_utf8(payload) {
                    Ok(text) => write!(f, "HTTP error [{code}]: {text}"),
                    Err(_) => write!(f, "HTTP error [{code}]: {payload:?}"),
                }
            }
            Repr::Io(e) => write!(f, "the request failed in the transport: {e}"),
            Repr::Client(kind, e) => match kind {
                ClientKind::Serialization => write!(f, "cannot serialize the request: {e}"),
                ClientKind::Deserialization => write!(f, "cannot deserialize the response: {e}"),
                ClientKind::Authentication => {
                    write!(f, "cannot create the authentication headers: {e}")
                }
                ClientKind::Timeout => write!(f, "the request deadline expired: {e}"),
                ClientKind::Exhausted => write!(f, "{e}"),
                ClientKind::Other => write!(f, "an unclassified problem making a request: {e}"),
            },
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.0 {
            Repr::Io(e) | Repr::Client(_, e) => Some(e.as_ref() as &(dyn StdError + 'static)),
            Repr::Service { .. } | Repr::Http { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn service() {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("The resource 'projects/p/global/networks/n' was not found");
        let error = Error::service(status.clone());
        assert_eq!(error.status(), Some(&status));
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.is_not_found(), "{error:?}");
        assert_eq!(
            error.to_string(),
            "the service reports an error with code NOT_FOUND described as: The resource 'projects/p/global/networks/n' was not found"
        );
    }

    #[test]
    fn service_with_http_metadata() {
        let status = Status::default()
            .set_code(Code::PermissionDenied)
            .set_message("denied");
        let mut headers = HeaderMap::new();
        headers.insert("x-test", http::HeaderValue::from_static("value"));
        let error = Error::service_with_http_metadata(status.clone(), Some(403), Some(headers));
        assert_eq!(error.status(), Some(&status));
        assert_eq!(error.http_status_code(), Some(403));
        assert!(error.http_headers().is_some_and(|h| h.contains_key("x-test")));
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(!error.is_not_found(), "{error:?}");
    }

    #[test]
    fn http() {
        let error = Error::http(404, HeaderMap::new(), Bytes::from_static(b"not here"));
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_payload(), Some(&Bytes::from_static(b"not here")));
        assert!(error.is_not_found(), "{error:?}");
        assert_eq!(error.to_string(), "HTTP error [404]: not here");
    }

    #[test]
    fn io() {
        let error = Error::io("connection refused");
        assert!(error.is_io(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(!error.is_not_found(), "{error:?}");
        assert!(error.to_string().contains("connection refused"), "{error}");
    }

    #[test_case(Error::timeout("t"), ClientKind::Timeout)]
    #[test_case(Error::exhausted("e"), ClientKind::Exhausted)]
    #[test_case(Error::ser("s"), ClientKind::Serialization)]
    #[test_case(Error::deser("d"), ClientKind::Deserialization)]
    #[test_case(Error::authentication("a"), ClientKind::Authentication)]
    #[test_case(Error::other("o"), ClientKind::Other)]
    fn client(error: Error, want: ClientKind) {
        assert_eq!(error.is_timeout(), want == ClientKind::Timeout);
        assert_eq!(error.is_exhausted(), want == ClientKind::Exhausted);
        assert_eq!(error.is_serialization(), want == ClientKind::Serialization);
        assert_eq!(error.is_deserialization(), want == ClientKind::Deserialization);
        assert_eq!(error.is_authentication(), want == ClientKind::Authentication);
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
        assert!(!error.is_not_found(), "{error:?}");
    }
}
