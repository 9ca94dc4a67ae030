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

use crate::polling_state::PollingState;

/// Determines the delay between polling attempts.
///
/// The polling loop calls this trait after each attempt that did not
/// complete the operation.
pub trait PollingBackoffPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the delay before the next polling attempt.
    ///
    /// # Parameters
    /// * `state` - the current state of the polling loop. This method is
    ///   always called after the first attempt.
    fn wait_period(&self, state: &PollingState) -> std::time::Duration;
}
