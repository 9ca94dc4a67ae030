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

//! Decide if a polling loop continues after an error or a slow operation.
//!
//! Compute Engine operations are polled until they are `DONE`. A policy sees
//! every failed poll, and every poll that finds the operation still running.
//! The base policy, [Aip194Strict], classifies errors. [PollingErrorPolicyExt]
//! bounds the loop:
//!
//! ```
//! # use gax::polling_error_policy::*;
//! use std::time::Duration;
//! let policy = Aip194Strict.with_time_limit(Duration::from_secs(4 * 60));
//! ```

use crate::error::Error;
use crate::polling_state::PollingState;
use crate::retry_result::RetryResult;
use std::time::Duration;

/// Classifies polling errors and bounds the polling loop.
pub trait PollingErrorPolicy: Send + Sync + std::fmt::Debug {
    /// Called after a poll fails.
    ///
    /// The attempt count in `state` includes the failed poll.
    fn on_error(&self, state: &PollingState, error: Error) -> RetryResult;

    /// Called after a poll finds the operation still in progress.
    ///
    /// Returning an error stops the loop with that error.
    fn on_in_progress(&self, _state: &PollingState, _operation_name: &str) -> Option<Error> {
        None
    }
}

/// Decorators to bound any [PollingErrorPolicy].
pub trait PollingErrorPolicyExt: PollingErrorPolicy + Sized {
    /// Stops the loop once `maximum_duration` has elapsed since it started.
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }
}

impl<T: PollingErrorPolicy> PollingErrorPolicyExt for T {}

/// Continues only on errors that [AIP-194] considers safe to retry.
///
/// That is `UNAVAILABLE` (or HTTP 503) and I/O errors, where the request may
/// not have reached the service. Any other error stops the loop. This policy
/// never stops the loop on its own, decorate it with a limit.
///
/// [AIP-194]: https://google.aip.dev/194
#[derive(Clone, Debug)]
pub struct Aip194Strict;

impl PollingErrorPolicy for Aip194Strict {
    fn on_error(&self, _state: &PollingState, error: Error) -> RetryResult {
        let transient = match error.status() {
            _ if error.is_io() => true,
            Some(status) => status.code == crate::error::rpc::Code::Unavailable,
            None => error.http_status_code() == Some(http::StatusCode::SERVICE_UNAVAILABLE.as_u16()),
        };
        if transient {
            RetryResult::Continue(error)
        } else {
            RetryResult::Permanent(error)
        }
    }
}

/// Bounds the time spent in the polling loop, including backoff.
#[derive(Debug)]
pub struct LimitedElapsedTime<P = Aip194Strict>
where
    P: PollingErrorPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Bounds an [Aip194Strict] policy.
    ///
    /// ```
    /// # use gax::polling_error_policy::*;
    /// # use gax::polling_state::PollingState;
    /// use std::time::{Duration, Instant};
    /// let policy = LimitedElapsedTime::new(Duration::from_secs(10));
    /// let state = PollingState::new(Instant::now() - Duration::from_secs(20));
    /// let error = policy.on_in_progress(&state, "operation-123");
    /// assert!(error.is_some_and(|e| e.is_exhausted()));
    /// ```
    pub fn new(maximum_duration: Duration) -> Self {
        Self::custom(Aip194Strict, maximum_duration)
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: PollingErrorPolicy,
{
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn exhausted(&self, state: &PollingState, operation_name: &str) -> Option<Exhausted> {
        let elapsed = state.elapsed();
        (elapsed >= self.maximum_duration).then(|| {
            Exhausted::new(
                operation_name,
                "elapsed time",
                format!("{elapsed:?}"),
                format!("{:?}", self.maximum_duration),
            )
        })
    }
}

impl<P> PollingErrorPolicy for LimitedElapsedTime<P>
where
    P: PollingErrorPolicy,
{
    fn on_error(&self, state: &PollingState, error: Error) -> RetryResult {
        let reached = state.elapsed() >= self.maximum_duration;
        limit(self.inner.on_error(state, error), reached)
    }

    fn on_in_progress(&self, state: &PollingState, operation_name: &str) -> Option<Error> {
        self.inner
            .on_in_progress(state, operation_name)
            .or_else(|| self.exhausted(state, operation_name).map(Error::exhausted))
    }
}

// Only a `Continue` decision is changed by a limit.
fn limit(result: RetryResult, reached: bool) -> RetryResult {
    match result {
        RetryResult::Continue(e) if reached => RetryResult::Exhausted(e),
        other => other,
    }
}

/// The error returned when a polling limit is reached.
#[derive(Debug)]
pub struct Exhausted {
    operation_name: String,
    limit_name: &'static str,
    value: String,
    limit: String,
}

impl Exhausted {
    pub fn new(operation_name: &str, limit_name: &'static str, value: String, limit: String) -> Self {
        Self {
            operation_name: operation_name.to_string(),
            limit_name,
            value,
            limit,
        }
    }
}

impl std::fmt::Display for Exhausted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "stopped polling {}, the {} ({}) reached the limit ({})",
            self.operation_name, self.limit_name, self.value, self.limit
        )
    }
}

impl std::error::Error for Exhausted {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::{Code, Status};
    use http::HeaderMap;
    use std::time::Instant;
    use test_case::test_case;

    mockall::mock! {
        #[derive(Debug)]
        Policy {}
        impl PollingErrorPolicy for Policy {
            fn on_error(&self, state: &PollingState, error: Error) -> RetryResult;
            fn on_in_progress(&self, state: &PollingState, operation_name: &str) -> Option<Error>;
        }
    }

    fn service(code: Code) -> Error {
        Error::service(Status::default().set_code(code))
    }

    fn http(code: u16) -> Error {
        Error::http(code, HeaderMap::new(), bytes::Bytes::from_static(b"payload"))
    }

    fn started_ago(secs: u64) -> PollingState {
        PollingState::new(Instant::now() - Duration::from_secs(secs))
    }

    #[test_case(service(Code::Unavailable), true)]
    #[test_case(service(Code::PermissionDenied), false)]
    #[test_case(service(Code::NotFound), false)]
    #[test_case(http(503), true)]
    #[test_case(http(403), false)]
    #[test_case(Error::io("connection reset"), true)]
    #[test_case(Error::deser("bad json"), false)]
    fn aip194_strict(error: Error, transient: bool) {
        let state = PollingState::default();
        let got = Aip194Strict.on_error(&state, error);
        assert_eq!(got.is_continue(), transient, "{got:?}");
        assert_eq!(got.is_permanent(), !transient, "{got:?}");
        assert!(Aip194Strict.on_in_progress(&state, "op").is_none());
    }

    #[test]
    fn elapsed_time() {
        let policy = LimitedElapsedTime::new(Duration::from_secs(20));
        let fresh = PollingState::default().with_attempt_count(1);
        assert!(policy.on_error(&fresh, service(Code::Unavailable)).is_continue());
        assert!(policy.on_in_progress(&fresh, "op-123").is_none());

        let stale = started_ago(30);
        assert!(policy.on_error(&stale, service(Code::Unavailable)).is_exhausted());
        assert!(policy.on_error(&stale, service(Code::PermissionDenied)).is_permanent());
        let got = policy.on_in_progress(&stale, "op-123");
        assert!(got.as_ref().is_some_and(Error::is_exhausted), "{got:?}");
        let msg = got.map(|e| e.to_string()).unwrap_or_default();
        assert!(msg.contains("op-123"), "{msg}");
        assert!(msg.contains("elapsed time"), "{msg}");
    }

    #[test]
    fn elapsed_time_consults_inner_first() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1)
            .returning(|_, e| RetryResult::Exhausted(e));
        mock.expect_on_in_progress()
            .times(1)
            .returning(|_, _| Some(Error::other("inner")));
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let state = PollingState::default();
        assert!(policy.on_error(&state, service(Code::Unavailable)).is_exhausted());
        let got = policy.on_in_progress(&state, "op");
        assert!(got.as_ref().is_some_and(|e| !e.is_exhausted()), "{got:?}");
    }

    #[test]
    fn time_limit_decorator() {
        let policy = Aip194Strict.with_time_limit(Duration::from_secs(60));
        let state = PollingState::default().with_attempt_count(1);
        assert!(policy.on_in_progress(&state, "op").is_none());
        assert!(policy.on_error(&state, service(Code::Unavailable)).is_continue());

        let state = started_ago(120).with_attempt_count(1);
        assert!(policy.on_in_progress(&state, "op").is_some());
        assert!(policy.on_error(&state, service(Code::Unavailable)).is_exhausted());
        assert!(policy.on_error(&state, service(Code::Internal)).is_permanent());
    }
}
