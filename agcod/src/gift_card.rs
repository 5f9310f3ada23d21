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

//! Gift card client with convenience constructors.

pub use agcod_gift_card::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Result};

/// Create a [`GiftCardClient`] from the process environment.
///
/// Uses [`default_context`] and [`Config::from_env`], so
/// `AGCOD_PARTNER_ID` must be set. Credentials come from
/// `AGCOD_ACCESS_KEY_ID` / `AGCOD_SECRET_ACCESS_KEY`, falling back to the
/// `AWS_*` variables.
///
/// Use the `with_*` methods to customise it:
///
/// ```no_run
/// # fn example() -> agcod::Result<()> {
/// use agcod::gift_card::{default_client, RandomRequestId, StaticCredentialProvider};
///
/// let client = default_client()?
///     .with_credential_provider(StaticCredentialProvider::new(
///         "my-access-key",
///         "my-secret-key",
///     ))
///     .with_request_id_generator(RandomRequestId::default());
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_client() -> Result<GiftCardClient> {
    let ctx = default_context();
    let config = Config::from_env(&ctx)?;
    GiftCardClient::new(ctx, config)
}
