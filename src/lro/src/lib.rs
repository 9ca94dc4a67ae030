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

//! Poll Compute Engine long-running operations.
//!
//! Mutations such as `addPeering` or `removePeering` return an operation.
//! The change takes effect once the operation is `DONE`. A [Poller] fetches
//! the operation until then, consulting a polling error policy after each
//! poll and a backoff policy between polls.

pub use gax::Result;
pub use gax::error::Error;

/// The outcome of one poll.
///
/// * `R` - the value returned when the operation succeeds.
/// * `M` - the value observed while the operation is in progress.
#[derive(Debug)]
pub enum PollingResult<R, M> {
    /// Poll again later. Carries the latest observed state, if any.
    InProgress(Option<M>),
    /// The operation finished, successfully or not, or polling stopped for
    /// good. No further polls are possible.
    Completed(Result<R>),
    /// This poll failed, but the policy allows polling again.
    PollingError(Error),
}

/// Drives the polling loop of a long-running operation.
pub trait Poller<R, M>: Send + sealed::Poller {
    /// Polls once.
    ///
    /// Returns `None` after a `Completed` result was returned.
    fn poll(&mut self) -> impl Future<Output = Option<PollingResult<R, M>>> + Send;

    /// Polls until the operation completes, sleeping between polls.
    fn until_done(self) -> impl Future<Output = Result<R>> + Send;
}

mod sealed {
    pub trait Poller {}
}

pub mod internal;
