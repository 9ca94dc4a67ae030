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

use crate::error::Error;
use serde::Deserialize;

/// The error payload returned by Compute Engine.
///
/// Compute Engine reports errors as `{"error": {"code": 404, "message": ...,
/// "errors": [...]}}`. The `code` is the HTTP status, some responses also
/// include a canonical `status` name. See the [API Design Guide] for the
/// error model.
///
/// [API Design Guide]: https://cloud.google.com/apis/design/errors
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Status {
    /// The canonical error code.
    pub code: Code,

    /// A developer-facing message, in English.
    pub message: String,

    /// The entries of the `errors` list.
    pub details: Vec<ErrorDetail>,
}

impl Status {
    pub fn set_code<T: Into<Code>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    pub fn set_details<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<ErrorDetail>,
    {
        self.details = v.into_iter().map(Into::into).collect();
        self
    }
}

/// One entry in the `errors` list of an error payload, or of a failed
/// operation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ErrorDetail {
    /// Usually `global`. Operations report the failing field here.
    pub domain: Option<String>,
    /// A short machine-readable reason, e.g. `notFound`.
    pub reason: Option<String>,
    pub message: Option<String>,
}

impl ErrorDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = Some(v.into());
        self
    }

    pub fn set_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.reason = Some(v.into());
        self
    }

    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }
}

/// The canonical error codes.
///
/// The numeric values and names match `google.rpc.Code`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Code {
    Ok = 0,
    Cancelled = 1,
    #[default]
    Unknown = 2,
    InvalidArgument = 3,
    DeadlineExceeded = 4,
    /// The network, peering, or operation does not exist.
    NotFound = 5,
    AlreadyExists = 6,
    PermissionDenied = 7,
    /// Usually a quota error.
    ResourceExhausted = 8,
    FailedPrecondition = 9,
    Aborted = 10,
    OutOfRange = 11,
    Unimplemented = 12,
    Internal = 13,
    /// A transient condition, the request can be retried with backoff.
    Unavailable = 14,
    DataLoss = 15,
    Unauthenticated = 16,
}

// Indexed by the numeric value of each code.
const CODES: [(Code, &str); 17] = [
    (Code::Ok, "OK"),
    (Code::Cancelled, "CANCELLED"),
    (Code::Unknown, "UNKNOWN"),
    (Code::InvalidArgument, "INVALID_ARGUMENT"),
    (Code::DeadlineExceeded, "DEADLINE_EXCEEDED"),
    (Code::NotFound, "NOT_FOUND"),
    (Code::AlreadyExists, "ALREADY_EXISTS"),
    (Code::PermissionDenied, "PERMISSION_DENIED"),
    (Code::ResourceExhausted, "RESOURCE_EXHAUSTED"),
    (Code::FailedPrecondition, "FAILED_PRECONDITION"),
    (Code::Aborted, "ABORTED"),
    (Code::OutOfRange, "OUT_OF_RANGE"),
    (Code::Unimplemented, "UNIMPLEMENTED"),
    (Code::Internal, "INTERNAL"),
    (Code::Unavailable, "UNAVAILABLE"),
    (Code::DataLoss, "DATA_LOSS"),
    (Code::Unauthenticated, "UNAUTHENTICATED"),
];

impl Code {
    /// The name of the code, e.g. `NOT_FOUND`.
    pub fn name(&self) -> &'static str {
        CODES[*self as usize].1
    }

    /// Maps an HTTP status code to the closest canonical code.
    ///
    /// Compute Engine error payloads often omit the canonical status name,
    /// then the HTTP status is the only hint about the error category.
    pub fn from_http_status(status_code: u16) -> Self {
        match status_code {
            200..=299 => Code::Ok,
            400 => Code::InvalidArgument,
            401 => Code::Unauthenticated,
            403 => Code::PermissionDenied,
            404 => Code::NotFound,
            409 => Code::Aborted,
            412 => Code::FailedPrecondition,
            429 => Code::ResourceExhausted,
            499 => Code::Cancelled,
            501 => Code::Unimplemented,
            503 => Code::Unavailable,
            504 => Code::DeadlineExceeded,
            _ => Code::Unknown,
        }
    }
}

impl From<i32> for Code {
    fn from(value: i32) -> Self {
        usize::try_from(value)
            .ok()
            .and_then(|i| CODES.get(i))
            .map_or(Code::Unknown, |(code, _)| *code)
    }
}

impl TryFrom<&str> for Code {
    type Error = String;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        CODES
            .iter()
            .find(|(_, name)| *name == value)
            .map(|(code, _)| *code)
            .ok_or_else(|| format!("unknown status code name {value}"))
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Deserialize)]
struct Payload {
    error: PayloadError,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct PayloadError {
    // The HTTP status code.
    code: u16,
    message: String,
    status: Option<String>,
    errors: Vec<ErrorDetail>,
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let payload = serde_json::from_slice::<Payload>(value).map_err(Error::deser)?;
        let PayloadError {
            code,
            message,
            status,
            errors,
        } = payload.error;
        let code = status
            .and_then(|s| Code::try_from(s.as_str()).ok())
            .unwrap_or_else(|| Code::from_http_status(code));
        Ok(Status {
            code,
            message,
            details: errors,
        })
    }
}
