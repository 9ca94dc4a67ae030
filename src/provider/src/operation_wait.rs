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

//! Wait for Compute Engine global operations.
//!
//! Mutations of a network return an [Operation]. The operation is polled
//! until its status is `DONE`, the configured timeout expires, or polling
//! fails with an error that is not transient. The timeout also bounds
//! requests that never complete.

use crate::error::{Error, Result};
use compute::client::Networks;
use compute::model::Operation;
use compute::model::operation::Status as OperationStatus;
use gax::exponential_backoff::ExponentialBackoff;
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::{Aip194Strict, PollingErrorPolicyExt};
use lro::Poller;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Polls global operations until they complete.
#[derive(Clone, Debug)]
pub struct OperationWaiter {
    client: Networks,
    backoff: Arc<dyn PollingBackoffPolicy>,
}

impl OperationWaiter {
    pub fn new(client: Networks, backoff: ExponentialBackoff) -> Self {
        Self {
            client,
            backoff: Arc::new(backoff),
        }
    }

    /// Waits for `operation` to complete.
    ///
    /// `action` is a human readable label, such as "Creating Network Peering",
    /// included in errors. On failure the error carries the last status
    /// observed while polling.
    pub async fn wait(
        &self,
        operation: Operation,
        project: &str,
        action: &str,
        timeout: Duration,
    ) -> Result<()> {
        let last_status = Arc::new(Mutex::new(None));
        record(&last_status, &operation);
        let error_policy = Arc::new(Aip194Strict.with_time_limit(timeout));
        let start = move || async move { Ok(operation) };
        let query = {
            let client = self.client.clone();
            let project = project.to_string();
            let last_status = last_status.clone();
            move |name: String| {
                let client = client.clone();
                let project = project.clone();
                let last_status = last_status.clone();
                async move {
                    tracing::debug!(
                        project = %project,
                        operation = %name,
                        "polling global operation"
                    );
                    let op = client
                        .get_global_operation()
                        .set_project(project)
                        .set_operation(name)
                        .send()
                        .await?;
                    record(&last_status, &op);
                    Ok::<_, gax::error::Error>(op)
                }
            }
        };
        let poller = lro::internal::new_discovery_poller(
            error_policy,
            self.backoff.clone(),
            start,
            query,
        );

        // The error policy only sees completed polls, a request that never
        // returns is bounded here.
        let result = match tokio::time::timeout(timeout, poller.until_done()).await {
            Ok(r) => r.map(|_| ()),
            Err(elapsed) => Err(gax::error::Error::timeout(elapsed)),
        };
        result.map_err(|source| Error::Wait {
            action: action.to_string(),
            last_status: last_status.lock().ok().and_then(|s| s.clone()),
            source,
        })?;
        tracing::debug!(action, "operation completed");
        Ok(())
    }
}

// Keeps the status of operations still in progress.
fn record(last_status: &Mutex<Option<String>>, operation: &Operation) {
    let Some(status) = operation.status.as_ref() else {
        return;
    };
    if *status == OperationStatus::Done {
        return;
    }
    if let Ok(mut guard) = last_status.lock() {
        *guard = Some(status.name().to_string());
    }
}
