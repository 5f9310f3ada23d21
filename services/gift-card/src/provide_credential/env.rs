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

use crate::{constants::*, Credential};
use agcod_core::{Context, ProvideCredential, Result};
use async_trait::async_trait;

/// EnvCredentialProvider reads the generic AWS variables.
///
/// Both `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY` must be set, otherwise
/// nothing is returned. `AWS_SESSION_TOKEN` is picked up when present.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a provider reading the process variables through [`Context`].
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let (Some(ak), Some(sk)) = (
            ctx.env_var(AWS_ACCESS_KEY_ID),
            ctx.env_var(AWS_SECRET_ACCESS_KEY),
        ) else {
            return Ok(None);
        };

        Ok(Some(Credential {
            access_key_id: ak,
            secret_access_key: sk,
            session_token: ctx.env_var(AWS_SESSION_TOKEN),
            expires_in: None,
        }))
    }
}
