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

//! Polls Compute Engine global operations.
//!
//! A Compute `Operation` never carries the result of the mutation. It only
//! reports a status, and a list of errors once it is `DONE`. A `DONE`
//! operation with errors means the mutation failed.

use crate::{Error, Poller, PollingResult, Result};
use gax::error::rpc::Status;
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::PollingErrorPolicy;
use gax::polling_state::PollingState;
use gax::retry_result::RetryResult;
use std::future::Future;
use std::sync::Arc;

/// The view of an operation needed to poll it.
pub trait DiscoveryOperation {
    /// True once the operation reached its final state, with or without
    /// errors.
    fn done(&self) -> bool;

    /// The name used to fetch the operation again. Polling stops if the
    /// operation has no name.
    fn name(&self) -> Option<&String>;

    /// The errors reported by the operation, if any, as a service error.
    fn status(&self) -> Option<Status>;
}

/// Returns a poller over a discovery-style operation.
///
/// `start` sends the mutation and returns the first operation, `query` fetches
/// an operation by name.
pub fn new_discovery_poller<S, SF, Q, QF, O>(
    polling_error_policy: Arc<dyn PollingErrorPolicy>,
    polling_backoff_policy: Arc<dyn PollingBackoffPolicy>,
    start: S,
    query: Q,
) -> impl Poller<O, O>
where
    O: DiscoveryOperation + Send,
    S: FnOnce() -> SF + Send + Sync,
    SF: Future<Output = Result<O>> + Send + 'static,
    Q: FnMut(String) -> QF + Send + Sync + Clone,
    QF: Future<Output = Result<O>> + Send + 'static,
{
    DiscoveryPoller {
        error_policy: polling_error_policy,
        backoff_policy: polling_backoff_policy,
        stage: Stage::Start(start),
        query,
        state: PollingState::default(),
    }
}

enum Stage<S> {
    Start(S),
    Polling(String),
    Finished,
}

struct DiscoveryPoller<S, Q> {
    error_policy: Arc<dyn PollingErrorPolicy>,
    backoff_policy: Arc<dyn PollingBackoffPolicy>,
    stage: Stage<S>,
    query: Q,
    state: PollingState,
}

impl<S, Q> crate::sealed::Poller for DiscoveryPoller<S, Q> {}

impl<O, S, SF, Q, QF> Poller<O, O> for DiscoveryPoller<S, Q>
where
    O: DiscoveryOperation + Send,
    S: FnOnce() -> SF + Send + Sync,
    SF: Future<Output = Result<O>> + Send + 'static,
    Q: FnMut(String) -> QF + Send + Sync + Clone,
    QF: Future<Output = Result<O>> + Send + 'static,
{
    async fn poll(&mut self) -> Option<PollingResult<O, O>> {
        let (next, result) = match std::mem::replace(&mut self.stage, Stage::Finished) {
            Stage::Finished => return None,
            Stage::Start(start) => after_start(start().await),
            Stage::Polling(name) => {
                self.state.attempt_count += 1;
                let response = (self.query)(name.clone()).await;
                after_query(self.error_policy.as_ref(), &self.state, name, response)
            }
        };
        self.stage = next.map_or(Stage::Finished, Stage::Polling);
        Some(result)
    }

    async fn until_done(mut self) -> Result<O> {
        loop {
            match self.poll().await {
                None => return Err(Error::other("operation poller stopped without a result")),
                Some(PollingResult::Completed(r)) => return r,
                Some(PollingResult::InProgress(_)) => {}
                Some(PollingResult::PollingError(e)) => {
                    tracing::debug!("transient error polling operation: {e}");
                }
            }
            tokio::time::sleep(self.backoff_policy.wait_period(&self.state)).await;
        }
    }
}

// Each step returns the name to poll next, if any, and what to report.
type Step<O> = (Option<String>, PollingResult<O, O>);

fn after_start<O: DiscoveryOperation>(response: Result<O>) -> Step<O> {
    match response {
        Err(e) => (None, PollingResult::Completed(Err(e))),
        Ok(op) => inspect(op),
    }
}

fn after_query<O: DiscoveryOperation>(
    policy: &dyn PollingErrorPolicy,
    state: &PollingState,
    name: String,
    response: Result<O>,
) -> Step<O> {
    let op = match response {
        Ok(op) => op,
        Err(e) => {
            return match policy.on_error(state, e) {
                RetryResult::Continue(e) => (Some(name), PollingResult::PollingError(e)),
                RetryResult::Exhausted(e) | RetryResult::Permanent(e) => {
                    (None, PollingResult::Completed(Err(e)))
                }
            };
        }
    };
    match inspect(op) {
        (Some(next), result) => match policy.on_in_progress(state, &next) {
            None => (Some(next), result),
            Some(e) => (None, PollingResult::Completed(Err(e))),
        },
        finished => finished,
    }
}

fn inspect<O: DiscoveryOperation>(op: O) -> Step<O> {
    if let Some(status) = op.status() {
        return (None, PollingResult::Completed(Err(Error::service(status))));
    }
    if op.done() {
        return (None, PollingResult::Completed(Ok(op)));
    }
    match op.name().cloned() {
        Some(name) => (Some(name), PollingResult::InProgress(Some(op))),
        None => (
            None,
            PollingResult::Completed(Err(Error::other(
                "operation in progress without a name, cannot poll it",
            ))),
        ),
    }
}
