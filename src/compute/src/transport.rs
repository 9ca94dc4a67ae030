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

use crate::Result;
use crate::http::HttpClient;
use crate::model::{Network, Operation, global_operations, networks};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in a path segment.
///
/// Resource names are RFC 1035 labels, but the values come from user input and
/// must not be able to change the request path.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn segment(field: &'static str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(gax::error::Error::ser(format!(
            "missing required path parameter `{field}`"
        )));
    }
    Ok(utf8_percent_encode(value, PATH_SEGMENT).to_string())
}

/// Implements [Networks](super::stub::Networks) over HTTP+JSON.
#[derive(Clone, Debug)]
pub struct Networks {
    inner: HttpClient,
}

impl Networks {
    pub fn new(config: crate::builder::ClientConfig) -> crate::builder::Result<Self> {
        let inner = HttpClient::new(config, crate::DEFAULT_HOST)?;
        Ok(Self { inner })
    }
}

impl super::stub::Networks for Networks {
    async fn get(&self, req: networks::GetRequest) -> Result<Network> {
        let path = format!(
            "/compute/v1/projects/{}/global/networks/{}",
            segment("project", &req.project)?,
            segment("network", &req.network)?,
        );
        tracing::debug!(%path, "GET network");
        self.inner
            .send(reqwest::Method::GET, &path, None::<&()>)
            .await
    }

    async fn add_peering(&self, req: networks::AddPeeringRequest) -> Result<Operation> {
        let path = format!(
            "/compute/v1/projects/{}/global/networks/{}/addPeering",
            segment("project", &req.project)?,
            segment("network", &req.network)?,
        );
        tracing::debug!(%path, "POST addPeering");
        self.inner
            .send(reqwest::Method::POST, &path, req.body.as_ref())
            .await
    }

    async fn remove_peering(&self, req: networks::RemovePeeringRequest) -> Result<Operation> {
        let path = format!(
            "/compute/v1/projects/{}/global/networks/{}/removePeering",
            segment("project", &req.project)?,
            segment("network", &req.network)?,
        );
        tracing::debug!(%path, "POST removePeering");
        self.inner
            .send(reqwest::Method::POST, &path, req.body.as_ref())
            .await
    }

    async fn get_global_operation(&self, req: global_operations::GetRequest) -> Result<Operation> {
        let path = format!(
            "/compute/v1/projects/{}/global/operations/{}",
            segment("project", &req.project)?,
            segment("operation", &req.operation)?,
        );
        tracing::debug!(%path, "GET global operation");
        self.inner
            .send(reqwest::Method::GET, &path, None::<&()>)
            .await
    }
}
