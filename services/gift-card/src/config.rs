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

use crate::constants::*;
use crate::region::Environment;
use agcod_core::utils::Redact;
use agcod_core::{Context, Result};
use std::fmt::{Debug, Formatter};

/// Config for the gift card client.
#[derive(Clone, Default)]
pub struct Config {
    /// Partner id assigned by Amazon, prefix of every creation request id.
    pub partner_id: Option<String>,
    /// Access key id of the partner's AGCOD credentials.
    pub access_key_id: Option<String>,
    /// Secret access key of the partner's AGCOD credentials.
    pub secret_access_key: Option<String>,
    /// Target deployment, defaults to sandbox.
    pub environment: Option<Environment>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("partner_id", &self.partner_id)
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("environment", &self.environment)
            .finish()
    }
}

impl Config {
    /// Load config from environment variables.
    ///
    /// - `AGCOD_PARTNER_ID`
    /// - `AGCOD_ACCESS_KEY_ID`
    /// - `AGCOD_SECRET_ACCESS_KEY`
    /// - `AGCOD_ENVIRONMENT`: `sandbox` or `production`
    ///
    /// Fails if `AGCOD_ENVIRONMENT` holds anything else.
    pub fn from_env(ctx: &Context) -> Result<Self> {
        let environment = ctx
            .env_var(AGCOD_ENVIRONMENT)
            .map(|v| v.parse::<Environment>())
            .transpose()?;

        Ok(Self {
            partner_id: ctx.env_var(AGCOD_PARTNER_ID),
            access_key_id: ctx.env_var(AGCOD_ACCESS_KEY_ID),
            secret_access_key: ctx.env_var(AGCOD_SECRET_ACCESS_KEY),
            environment,
        })
    }

    /// Set the partner id.
    pub fn with_partner_id(mut self, partner_id: &str) -> Self {
        self.partner_id = Some(partner_id.to_string());
        self
    }

    /// Set the static key pair.
    pub fn with_credential(mut self, access_key_id: &str, secret_access_key: &str) -> Self {
        self.access_key_id = Some(access_key_id.to_string());
        self.secret_access_key = Some(secret_access_key.to_string());
        self
    }

    /// Set the target deployment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }
}
