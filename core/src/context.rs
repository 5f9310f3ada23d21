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

use crate::{Error, Result};
use bytes::Bytes;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Context carries the pluggable runtime pieces a client needs.
///
/// A fresh context sends nothing and sees an empty environment: plug in an
/// [`HttpSend`] and an [`Env`] before use.
///
/// ```
/// use agcod_core::{Context, OsEnv};
///
/// let ctx = Context::new().with_env(OsEnv);
/// ```
#[derive(Debug, Clone)]
pub struct Context {
    http: Arc<dyn HttpSend>,
    env: Arc<dyn Env>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a context that refuses to send and has no environment.
    pub fn new() -> Self {
        Self {
            http: Arc::new(NoopHttpSend),
            env: Arc::new(StaticEnv::default()),
        }
    }

    /// Use `http` to deliver requests.
    pub fn with_http_send(mut self, http: impl HttpSend) -> Self {
        self.http = Arc::new(http);
        self
    }

    /// Use `env` to look up environment variables.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Deliver `req` and return the full response.
    #[inline]
    pub async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }

    /// Look up an environment variable.
    ///
    /// Empty values are reported as unset.
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key).filter(|v| !v.is_empty())
    }
}

/// HttpSend is used to deliver signed requests to the service.
///
/// Implementations must be safe to share between tasks: one instance serves
/// every call made through a [`Context`], so it should pool connections.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    ///
    /// Connection level failures should be reported as [`crate::ErrorKind::Transport`].
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// Env abstracts environment variable access so configuration can be tested.
pub trait Env: Debug + Send + Sync + 'static {
    /// Value of `key`, or `None` if it is unset or not valid utf-8.
    fn var(&self, key: &str) -> Option<String>;
}

/// Env backed by the process environment.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }
}

/// Env backed by a fixed set of variables.
///
/// ```
/// use agcod_core::StaticEnv;
///
/// let env = StaticEnv::new().with_var("AGCOD_PARTNER_ID", "Acme");
/// let same: StaticEnv = [("AGCOD_PARTNER_ID", "Acme")].into_iter().collect();
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticEnv(HashMap<String, String>);

impl StaticEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

/// HttpSend used until a real one is configured. Every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpSend;

#[async_trait::async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(&self, _: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(Error::transport("no http client configured"))
    }
}
