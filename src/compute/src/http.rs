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

use crate::builder::{ClientConfig, Error as BuilderError};
use crate::credentials::Credentials;
use bytes::Bytes;
use gax::Result;
use gax::error::Error;
use gax::error::rpc::Status;
use http::{HeaderMap, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Sends JSON requests to the Compute Engine REST endpoint.
#[derive(Clone, Debug)]
pub struct HttpClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
}

impl HttpClient {
    pub fn new(config: ClientConfig, default_endpoint: &str) -> crate::builder::Result<Self> {
        let cred = match config.cred {
            Some(c) => c,
            None => crate::credentials::access_token::Builder::from_env()
                .and_then(|b| b.build())
                .map_err(BuilderError::cred)?,
        };
        let mut builder = reqwest::Client::builder();
        if let Some(agent) = config.user_agent.as_deref() {
            builder = builder.user_agent(agent);
        }
        let endpoint = config.endpoint.as_deref().unwrap_or(default_endpoint);
        Ok(Self {
            inner: builder.build().map_err(BuilderError::transport)?,
            cred,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Sends `method` to `path`, with an optional JSON body, and parses the
    /// JSON response.
    pub async fn send<B, O>(&self, method: reqwest::Method, path: &str, body: Option<&B>) -> Result<O>
    where
        B: Serialize + ?Sized,
        O: DeserializeOwned + Default,
    {
        let mut request = self.inner.request(method, format!("{}{path}", self.endpoint));
        if let Some(body) = body {
            request = request.json(body);
        }
        let headers = self.cred.headers().await.map_err(Error::authentication)?;
        request = request.headers(headers);
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::timeout(e)
            } else {
                Error::io(e)
            }
        })?;
        let (status, headers, payload) = collect(response).await?;
        if !status.is_success() {
            return Err(service_error(status, headers, payload));
        }
        parse(status, &payload)
    }
}

async fn collect(response: reqwest::Response) -> Result<(StatusCode, HeaderMap, Bytes)> {
    let (parts, body) = http::Response::from(response).into_parts();
    let payload = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();
    Ok((parts.status, parts.headers, payload))
}

// Compute errors are JSON payloads, but proxies and load balancers may reply
// with anything.
fn service_error(status: StatusCode, headers: HeaderMap, payload: Bytes) -> Error {
    match Status::try_from(&payload) {
        Ok(s) => Error::service_with_http_metadata(s, Some(status.as_u16()), Some(headers)),
        Err(_) => Error::http(status.as_u16(), headers, payload),
    }
}

fn parse<O: DeserializeOwned + Default>(status: StatusCode, payload: &Bytes) -> Result<O> {
    if status == StatusCode::NO_CONTENT && payload.is_empty() {
        return Ok(O::default());
    }
    serde_json::from_slice(payload).map_err(Error::deser)
}
