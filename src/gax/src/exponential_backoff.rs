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

//! Truncated exponential backoff between operation polls.
//!
//! The first wait is `initial_delay`. Each following wait is `scaling` times
//! longer than the previous one, up to `maximum_delay`. The defaults (1s,
//! 10s, 2.0) suit Compute Engine global operations, which usually complete
//! within a few seconds.
//!
//! ```
//! # use gax::exponential_backoff::*;
//! # use gax::polling_backoff_policy::PollingBackoffPolicy;
//! # use gax::polling_state::PollingState;
//! use std::time::Duration;
//! let backoff = ExponentialBackoffBuilder::new()
//!     .with_initial_delay(Duration::from_millis(500))
//!     .with_maximum_delay(Duration::from_secs(4))
//!     .build()?;
//! let state = PollingState::default().with_attempt_count(3);
//! assert_eq!(backoff.wait_period(&state), Duration::from_secs(2));
//! # Ok::<(), Error>(())
//! ```

use crate::polling_backoff_policy::PollingBackoffPolicy;
use crate::polling_state::PollingState;
use std::time::Duration;

const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(1);
const DEFAULT_MAXIMUM_DELAY: Duration = Duration::from_secs(10);
const DEFAULT_SCALING: f64 = 2.0;

/// Invalid backoff parameters.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("the backoff scaling factor must be at least 1.0, got {0}")]
    InvalidScalingFactor(f64),
    #[error("the initial backoff delay must be positive, got {0:?}")]
    InvalidInitialDelay(Duration),
    #[error("the maximum backoff delay ({maximum:?}) is shorter than the initial delay ({initial:?})")]
    EmptyRange { maximum: Duration, initial: Duration },
}

/// Validates parameters and creates [ExponentialBackoff] instances.
#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoffBuilder {
    pub fn new() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            maximum_delay: DEFAULT_MAXIMUM_DELAY,
            scaling: DEFAULT_SCALING,
        }
    }

    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.initial_delay = v.into();
        self
    }

    pub fn with_maximum_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.maximum_delay = v.into();
        self
    }

    pub fn with_scaling<V: Into<f64>>(mut self, v: V) -> Self {
        self.scaling = v.into();
        self
    }

    /// Returns the policy, or an error if the parameters are inconsistent.
    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        if self.scaling.is_nan() || self.scaling < 1.0 {
            return Err(Error::InvalidScalingFactor(self.scaling));
        }
        if self.initial_delay.is_zero() {
            return Err(Error::InvalidInitialDelay(self.initial_delay));
        }
        if self.maximum_delay < self.initial_delay {
            return Err(Error::EmptyRange {
                maximum: self.maximum_delay,
                initial: self.initial_delay,
            });
        }
        Ok(ExponentialBackoff {
            initial_delay: self.initial_delay,
            maximum_delay: self.maximum_delay,
            scaling: self.scaling,
        })
    }
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A [PollingBackoffPolicy] with truncated exponential growth.
#[derive(Clone, Debug, PartialEq)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoff {
    // The n-th attempt waits `initial * scaling^(n-1)`, computed in floating
    // point and truncated before converting back to a Duration.
    fn delay(&self, attempt_count: u32) -> Duration {
        let exponent = i32::try_from(attempt_count.saturating_sub(1)).unwrap_or(i32::MAX);
        let factor = self.scaling.powi(exponent);
        let limit = self.maximum_delay.div_duration_f64(self.initial_delay);
        if factor >= limit {
            return self.maximum_delay;
        }
        self.initial_delay.mul_f64(factor)
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            maximum_delay: DEFAULT_MAXIMUM_DELAY,
            scaling: DEFAULT_SCALING,
        }
    }
}

impl PollingBackoffPolicy for ExponentialBackoff {
    fn wait_period(&self, state: &PollingState) -> Duration {
        self.delay(state.attempt_count)
    }
}
