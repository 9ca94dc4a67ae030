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

use std::time::{Duration, Instant};

/// The state of a polling loop.
///
/// The polling loop updates this value after each attempt, and the polling
/// policies use it to decide if the loop should continue, and how long to wait
/// before the next attempt.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct PollingState {
    /// When the polling loop started.
    pub start: Instant,
    /// The number of poll queries. Zero before the first query.
    pub attempt_count: u32,
}

impl PollingState {
    /// Creates a new state for a loop starting at `start`.
    pub fn new(start: Instant) -> Self {
        Self {
            start,
            attempt_count: 0,
        }
    }

    /// Changes the attempt count.
    pub fn with_attempt_count(mut self, v: u32) -> Self {
        self.attempt_count = v;
        self
    }

    /// The time spent in the polling loop so far.
    pub fn elapsed(&self) -> Duration {
        Instant::now().saturating_duration_since(self.start)
    }
}

impl Default for PollingState {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}
