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

use crate::Credential;
use agcod_core::{Context, Error, ProvideCredential, Result};
use async_trait::async_trait;
use log::{debug, warn};
use std::fmt::{self, Debug};

type BoxedProvider = Box<dyn ProvideCredential<Credential = Credential>>;

/// ProvideCredentialChain asks its providers in order and returns the first
/// credential found.
///
/// A failing provider does not stop the chain. Its error is only returned
/// when no later provider yields a credential, so a broken source is never
/// mistaken for an absent one.
#[derive(Default)]
pub struct ProvideCredentialChain {
    providers: Vec<BoxedProvider>,
}

impl ProvideCredentialChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `provider` to the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = Credential>) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no provider.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl FromIterator<BoxedProvider> for ProvideCredentialChain {
    fn from_iter<I: IntoIterator<Item = BoxedProvider>>(iter: I) -> Self {
        Self {
            providers: iter.into_iter().collect(),
        }
    }
}

impl Debug for ProvideCredentialChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.providers).finish()
    }
}

#[async_trait]
impl ProvideCredential for ProvideCredentialChain {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Credential>> {
        let mut first_err: Option<Error> = None;

        for provider in &self.providers {
            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) => {
                    debug!("credential loaded by {provider:?}");
                    return Ok(Some(cred));
                }
                Ok(None) => debug!("{provider:?} has no credential"),
                Err(err) => {
                    warn!("{provider:?} failed to load credential: {err}");
                    first_err.get_or_insert(err);
                }
            }
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(None),
        }
    }
}
