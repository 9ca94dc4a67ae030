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

use crate::model::{Operation, operation::Error, operation::Status as OperationStatus};
use gax::error::rpc::{Code, ErrorDetail, Status};

impl lro::internal::DiscoveryOperation for Operation {
    fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }
    fn done(&self) -> bool {
        self.status == Some(OperationStatus::Done)
    }
    fn status(&self) -> Option<Status> {
        if self.error.is_none() && self.http_error_status_code.is_none() {
            return None;
        }
        let status = self
            .error
            .as_ref()
            .map(Status::from)
            .unwrap_or_default();
        let status = match (status.code, self.http_error_status_code) {
            (Code::Unknown, Some(c)) => {
                let code = u16::try_from(c).map_or(Code::Unknown, Code::from_http_status);
                status.set_code(code)
            }
            _ => status,
        };
        let status = match (status.message.is_empty(), self.http_error_message.as_ref()) {
            (true, Some(m)) => status.set_message(m),
            _ => status,
        };
        Some(status)
    }
}

#[doc(hidden)]
impl From<&Error> for Status {
    fn from(value: &Error) -> Self {
        let code = value
            .errors
            .iter()
            .filter_map(|e| e.code.as_ref())
            .filter_map(|c| Code::try_from(c.as_str()).ok())
            .take(1)
            .next();
        let message = value
            .errors
            .iter()
            .flat_map(|e| e.message.as_ref())
            .take(1)
            .next();
        let details = value.errors.iter().map(|e| {
            let detail = ErrorDetail::new();
            let detail = e.code.iter().fold(detail, |d, v| d.set_reason(v));
            let detail = e.location.iter().fold(detail, |d, v| d.set_domain(v));
            e.message.iter().fold(detail, |d, v| d.set_message(v))
        });

        let status = Status::default().set_details(details);
        let status = code.into_iter().fold(status, |s, c| s.set_code(c));
        message.into_iter().fold(status, |s, m| s.set_message(m))
    }
}
