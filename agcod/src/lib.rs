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

//! Issue and cancel Amazon gift cards through the AGCOD Incentives API.
//!
//! This crate bundles [`agcod_core`] with the gift card client and a ready
//! made [`Context`].
//!
//! ```no_run
//! # async fn example() -> agcod::Result<()> {
//! use rust_decimal::Decimal;
//!
//! // Reads AGCOD_PARTNER_ID, AGCOD_ACCESS_KEY_ID, AGCOD_SECRET_ACCESS_KEY
//! // and AGCOD_ENVIRONMENT.
//! let client = agcod::gift_card::default_client()?;
//!
//! let card = client
//!     .create_gift_card("NA", Decimal::new(2500, 2), "USD")
//!     .await?;
//! println!("{}", card.gc_claim_code);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use agcod_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

#[cfg(feature = "gift-card")]
pub mod gift_card;
