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

//! Google APIs helpers for the VPC peering provider.
//!
//! This crate contains the error model shared by the Compute client and the
//! resource controller, and the policies that control how long-running
//! operations are polled.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the client and the controller.
pub mod error;

/// Implements truncated exponential backoff for polling loops.
pub mod exponential_backoff;

/// Defines the trait to compute the delay between polling attempts.
pub mod polling_backoff_policy;

/// Defines the policies to handle errors in polling loops.
pub mod polling_error_policy;

/// The state of a polling loop, shared by the policies.
pub mod polling_state;

/// The result of consulting a policy after an error.
pub mod retry_result;
