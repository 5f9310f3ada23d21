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

//! Amazon Gift Card Incentives (AGCOD) client.
//!
//! This crate issues and cancels Amazon gift cards. It resolves the
//! marketplace endpoint, builds the JSON body, signs it with AWS SigV4 and
//! decodes the answer.
//!
//! ## Example
//!
//! ```no_run
//! use agcod_core::{Context, OsEnv, Result};
//! use agcod_gift_card::{Config, GiftCardClient};
//! use agcod_http_send_reqwest::ReqwestHttpSend;
//! use rust_decimal::Decimal;
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new()
//!     .with_http_send(ReqwestHttpSend::default())
//!     .with_env(OsEnv);
//! let config = Config::from_env(&ctx)?;
//! let client = GiftCardClient::new(ctx, config)?;
//!
//! // Keep the creation request id, it is the only way to cancel the card.
//! let req = client.build_create_request(Decimal::new(2500, 2), "USD")?;
//! let card = client.send_create_request("NA", &req).await?;
//! println!("claim code: {}", card.gc_claim_code);
//!
//! client
//!     .cancel_gift_card("NA", client.partner_id(), req.creation_request_id())
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;

mod build;
pub use build::{build_cancel_request, build_create_request};

mod client;
pub use client::GiftCardClient;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod decode;
pub use decode::decode;

mod model;
pub use model::{
    Action, CancelGiftCardRequest, CancelGiftCardResponse, CardInfo, GiftCardRequest,
    GiftCardResponse, Money,
};

mod provide_credential;
pub use provide_credential::*;

mod region;
pub use region::{resolve, Endpoint, Environment, Region};

mod request_id;
pub use request_id::{GenerateRequestId, RandomRequestId, SequentialRequestId, SUFFIX_LEN};

mod sign_request;
pub use sign_request::RequestSigner;
