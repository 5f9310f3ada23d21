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

use crate::build::{build_cancel_request, build_create_request};
use crate::constants::{APPLICATION_JSON, X_AMZ_TARGET};
use crate::decode::decode;
use crate::model::{
    Action, CancelGiftCardRequest, CancelGiftCardResponse, GiftCardRequest, GiftCardResponse,
};
use crate::provide_credential::DefaultCredentialProvider;
use crate::region::{resolve, Endpoint, Environment};
use crate::request_id::{GenerateRequestId, SequentialRequestId};
use crate::{Config, Credential, RequestSigner};
use agcod_core::{Context, Error, ProvideCredential, Result, Signer};
use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE, HOST};
use http::Method;
use log::debug;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// GiftCardClient issues and cancels gift cards.
///
/// Every call resolves the endpoint for the given region, builds the JSON
/// body, signs it with SigV4 and sends it through the [`Context`]'s
/// `HttpSend`. Calls are single-shot: nothing is retried.
///
/// The client is cheap to clone and safe to share between tasks.
#[derive(Debug, Clone)]
pub struct GiftCardClient {
    ctx: Context,
    partner_id: String,
    environment: Environment,
    signer: Signer<Credential>,
    request_id: Arc<dyn GenerateRequestId>,
}

impl GiftCardClient {
    /// Create a new client.
    ///
    /// `config.partner_id` is required. Credentials are loaded through
    /// [`DefaultCredentialProvider`], the environment defaults to sandbox.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let partner_id = match config.partner_id.as_deref() {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => return Err(Error::config_invalid("partner_id is required")),
        };
        let environment = config.environment.unwrap_or_default();

        let provider = DefaultCredentialProvider::new(Arc::new(config));
        let signer = Signer::new(ctx.clone(), provider, RequestSigner::new());

        Ok(Self {
            ctx,
            partner_id,
            environment,
            signer,
            request_id: Arc::new(SequentialRequestId::default()),
        })
    }

    /// Replace the credential provider.
    pub fn with_credential_provider(
        mut self,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Self {
        self.signer = self.signer.with_credential_provider(provider);
        self
    }

    /// Replace the creation request id generator.
    pub fn with_request_id_generator(mut self, generator: impl GenerateRequestId) -> Self {
        self.request_id = Arc::new(generator);
        self
    }

    /// Replace the signer.
    pub fn with_signer(mut self, signer: Signer<Credential>) -> Self {
        self.signer = signer;
        self
    }

    /// Partner id this client creates gift cards for.
    pub fn partner_id(&self) -> &str {
        &self.partner_id
    }

    /// Deployment this client talks to.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Build a create request with a fresh creation request id.
    ///
    /// Persist `creation_request_id()` before calling
    /// [`GiftCardClient::send_create_request`]: it is needed to cancel the
    /// card if the response is lost.
    pub fn build_create_request(
        &self,
        amount: Decimal,
        currency_code: &str,
    ) -> Result<GiftCardRequest> {
        build_create_request(
            self.request_id.as_ref(),
            &self.partner_id,
            amount,
            currency_code,
        )
    }

    /// Issue a gift card of `amount` in `currency_code` in `region`.
    pub async fn create_gift_card(
        &self,
        region: &str,
        amount: Decimal,
        currency_code: &str,
    ) -> Result<GiftCardResponse> {
        let endpoint = resolve(region, self.environment)?;
        let req = self.build_create_request(amount, currency_code)?;

        self.send(endpoint, Action::CreateGiftCard, &req).await
    }

    /// Send a create request built by [`GiftCardClient::build_create_request`].
    pub async fn send_create_request(
        &self,
        region: &str,
        req: &GiftCardRequest,
    ) -> Result<GiftCardResponse> {
        let endpoint = resolve(region, self.environment)?;

        self.send(endpoint, Action::CreateGiftCard, req).await
    }

    /// Cancel the gift card created with `creation_request_id`.
    pub async fn cancel_gift_card(
        &self,
        region: &str,
        partner_id: &str,
        creation_request_id: &str,
    ) -> Result<CancelGiftCardResponse> {
        let endpoint = resolve(region, self.environment)?;
        let req = build_cancel_request(partner_id, creation_request_id)?;

        self.send(endpoint, Action::CancelGiftCard, &req).await
    }

    /// Send a cancel request, for instance one carrying a `gcId`.
    pub async fn send_cancel_request(
        &self,
        region: &str,
        req: &CancelGiftCardRequest,
    ) -> Result<CancelGiftCardResponse> {
        let endpoint = resolve(region, self.environment)?;

        self.send(endpoint, Action::CancelGiftCard, req).await
    }

    async fn send<B, T>(&self, endpoint: Endpoint, action: Action, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(body)
            .map_err(|e| Error::request_invalid("failed to encode request body").with_source(e))?;

        let mut req = http::Request::builder()
            .method(Method::POST)
            .uri(endpoint.url(action.as_str()))
            .header(HOST, endpoint.host)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .header(X_AMZ_TARGET, action.target())
            .body(Bytes::from(body))?;

        self.signer.sign(&mut req, endpoint.signing_region).await?;

        debug!("sending {action} to {}", endpoint.host);
        let resp = self.ctx.http_send(req).await?;

        decode(resp)
    }
}
