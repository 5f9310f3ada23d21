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

use crate::provide_credential::{
    ConfigCredentialProvider, EnvCredentialProvider, ProvideCredentialChain,
};
use crate::{Config, Credential};
use agcod_core::{Context, ProvideCredential, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// DefaultCredentialProvider is a loader that will try to load credential via default chains.
///
/// Resolution order:
///
/// 1. Key pair set on [`Config`]
/// 2. Environment variables (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`)
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain,
}

impl DefaultCredentialProvider {
    /// Create a new `DefaultCredentialProvider` instance.
    pub fn new(config: Arc<Config>) -> Self {
        let chain = ProvideCredentialChain::new()
            .push(ConfigCredentialProvider::new(config))
            .push(EnvCredentialProvider::new());

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain) -> Self {
        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY};
    use agcod_core::StaticEnv;

    fn env_ctx() -> Context {
        Context::new().with_env(
            StaticEnv::new()
                .with_var(AWS_ACCESS_KEY_ID, "access_key_id")
                .with_var(AWS_SECRET_ACCESS_KEY, "secret_access_key"),
        )
    }

    #[tokio::test]
    async fn test_credential_loader_without_anything() {
        let _ = env_logger::builder().is_test(true).try_init();

        let l = DefaultCredentialProvider::new(Arc::new(Config::default()));
        let x = l.provide_credential(&Context::new()).await.unwrap();
        assert!(x.is_none());
    }

    #[tokio::test]
    async fn test_credential_loader_falls_back_to_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        let l = DefaultCredentialProvider::new(Arc::new(Config::default()));
        let x = l
            .provide_credential(&env_ctx())
            .await
            .expect("load must succeed")
            .expect("credential must exist");
        assert_eq!("access_key_id", x.access_key_id);
        assert_eq!("secret_access_key", x.secret_access_key);
    }

    #[tokio::test]
    async fn test_credential_loader_prefers_config() {
        let _ = env_logger::builder().is_test(true).try_init();

        let cfg = Config::default().with_credential("config_ak", "config_sk");
        let l = DefaultCredentialProvider::new(Arc::new(cfg));
        let x = l
            .provide_credential(&env_ctx())
            .await
            .expect("load must succeed")
            .expect("credential must exist");
        assert_eq!("config_ak", x.access_key_id);
        assert_eq!("config_sk", x.secret_access_key);
    }
}
