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

use crate::{Context, ProvideCredential, SignRequest, SigningCredential};
use crate::Result;
use bytes::Bytes;
use log::debug;
use std::sync::{Arc, Mutex, PoisonError};

/// Signer is the main struct used to sign the request.
///
/// It caches the credential returned by its provider and only asks the
/// provider again once the cached one is no longer valid.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    provider: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            provider: Arc::new(provider),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Replace the credential provider and drop any cached credential.
    pub fn with_credential_provider(
        mut self,
        provider: impl ProvideCredential<Credential = K>,
    ) -> Self {
        self.provider = Arc::new(provider);
        self.credential = Arc::new(Mutex::new(None));
        self
    }

    /// Signing request.
    pub async fn sign(&self, req: &mut http::Request<Bytes>, region: &str) -> Result<()> {
        let credential = self.cached();
        let credential = if credential.is_valid() {
            credential
        } else {
            debug!("cached credential is absent or expired, loading a new one");
            let loaded = self.provider.provide_credential(&self.ctx).await?;
            *self
                .credential
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = loaded.clone();
            loaded
        };

        self.builder
            .sign_request(&self.ctx, req, region, credential.as_ref())
            .await
    }

    fn cached(&self) -> Option<K> {
        self.credential
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
