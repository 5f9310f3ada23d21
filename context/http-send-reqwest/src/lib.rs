// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Reqwest-based transport for agcod.
//!
//! `ReqwestHttpSend` implements [`HttpSend`] on top of a pooled
//! [`reqwest::Client`]. Every request is bounded by a timeout, 30 seconds
//! unless configured otherwise.
//!
//! ## Example
//!
//! ```no_run
//! use agcod_core::Context;
//! use agcod_http_send_reqwest::ReqwestHttpSend;
//! use std::time::Duration;
//!
//! let ctx = Context::new()
//!     .with_http_send(ReqwestHttpSend::default().with_timeout(Duration::from_secs(10)));
//! ```

use agcod_core::{Error, HttpSend, Result};
use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use log::debug;
use reqwest::{Client, Request};
use std::time::Duration;

/// Timeout applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HttpSend implementation backed by `reqwest`.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
    timeout: Option<Duration>,
}

impl Default for ReqwestHttpSend {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Bound every request by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Rely on whatever timeout the inner client was built with.
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let mut req = Request::try_from(req).map_err(|e| {
            Error::request_invalid("failed to convert request").with_source(e)
        })?;
        if let Some(timeout) = self.timeout {
            *req.timeout_mut() = Some(timeout);
        }
        debug!("sending {} {}", req.method(), req.url());

        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport("failed to send request").with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport("failed to read response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
