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

//! Wire types of the gift card API.

use crate::constants::X_AMZ_TARGET_PREFIX;
use agcod_core::{Error, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operations exposed by AGCOD.
///
/// Only [`Action::CreateGiftCard`] and [`Action::CancelGiftCard`] are wired
/// into the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Issue a new gift card.
    CreateGiftCard,
    /// Cancel a previously issued gift card.
    CancelGiftCard,
    /// Activate a gift card (not supported by the client).
    ActivateGiftCard,
    /// Deactivate a gift card (not supported by the client).
    DeactivateGiftCard,
    /// Check activation status (not supported by the client).
    ActivationStatusCheck,
    /// Page through gift card activity (not supported by the client).
    GetGiftCardActivityPage,
}

impl Action {
    /// Name used in the URL path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::CreateGiftCard => "CreateGiftCard",
            Action::CancelGiftCard => "CancelGiftCard",
            Action::ActivateGiftCard => "ActivateGiftCard",
            Action::DeactivateGiftCard => "DeactivateGiftCard",
            Action::ActivationStatusCheck => "ActivationStatusCheck",
            Action::GetGiftCardActivityPage => "GetGiftCardActivityPage",
        }
    }

    /// Value of the `x-amz-target` header for this action.
    pub fn target(&self) -> String {
        format!("{X_AMZ_TARGET_PREFIX}{}", self.as_str())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An amount of money in a given currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Amount in the currency's standard unit, e.g. dollars.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// ISO 4217 currency code such as `USD`.
    pub currency_code: String,
}

impl Money {
    /// Build a validated amount.
    ///
    /// `amount` must be positive and `currency_code` must be three uppercase
    /// ASCII letters.
    ///
    /// The amount travels as a JSON number, that is an `f64`. Amounts an
    /// `f64` cannot hold exactly, such as `123456789012345678.9`, are
    /// rejected instead of being rounded on the wire.
    pub fn new(amount: Decimal, currency_code: &str) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(Error::request_invalid(format!(
                "amount must be greater than zero, got {amount}"
            )));
        }
        if !survives_f64(amount) {
            return Err(Error::request_invalid(format!(
                "amount {amount} cannot be sent as a JSON number without rounding"
            )));
        }
        if currency_code.len() != 3 || !currency_code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(Error::request_invalid(format!(
                "currency code must be a 3-letter ISO 4217 code, got {currency_code:?}"
            )));
        }

        Ok(Self {
            amount,
            currency_code: currency_code.to_string(),
        })
    }
}

/// Body of a `CreateGiftCard` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCardRequest {
    creation_request_id: String,
    partner_id: String,
    value: Money,
}

impl GiftCardRequest {
    pub(crate) fn new(creation_request_id: String, partner_id: &str, value: Money) -> Self {
        Self {
            creation_request_id,
            partner_id: partner_id.to_string(),
            value,
        }
    }

    /// Idempotency token of this request. Keep it: cancelling the card needs it.
    pub fn creation_request_id(&self) -> &str {
        &self.creation_request_id
    }

    /// Partner the card is issued for.
    pub fn partner_id(&self) -> &str {
        &self.partner_id
    }

    /// Face value of the card.
    pub fn value(&self) -> &Money {
        &self.value
    }
}

/// Card details returned alongside a created gift card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    /// Card number, usually empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub card_number: String,
    /// Card status, such as `Fulfilled`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub card_status: String,
    /// Card expiration date, if any.
    #[serde(default, deserialize_with = "null_as_default")]
    pub expiration_date: String,
    /// Face value of the card.
    pub value: Money,
}

/// Response of a `CreateGiftCard` call.
///
/// `status` is informational, the client never branches on it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCardResponse {
    /// Card details.
    pub card_info: CardInfo,
    /// Echo of the creation request id.
    #[serde(default, deserialize_with = "null_as_default")]
    pub creation_request_id: String,
    /// Claim code to hand to the recipient.
    #[serde(default, deserialize_with = "null_as_default")]
    pub gc_claim_code: String,
    /// Expiration date of the claim code, if any.
    #[serde(default, deserialize_with = "null_as_default")]
    pub gc_expiration_date: String,
    /// Gift card id assigned by Amazon.
    #[serde(default, deserialize_with = "null_as_default")]
    pub gc_id: String,
    /// `SUCCESS`, `FAILURE` or `RESEND`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

/// Body of a `CancelGiftCard` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelGiftCardRequest {
    creation_request_id: String,
    partner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    gc_id: Option<String>,
}

impl CancelGiftCardRequest {
    pub(crate) fn new(partner_id: &str, creation_request_id: &str) -> Self {
        Self {
            creation_request_id: creation_request_id.to_string(),
            partner_id: partner_id.to_string(),
            gc_id: None,
        }
    }

    /// Also name the gift card id returned at creation.
    pub fn with_gc_id(mut self, gc_id: &str) -> Self {
        self.gc_id = Some(gc_id.to_string());
        self
    }

    /// Idempotency token of the original create request.
    pub fn creation_request_id(&self) -> &str {
        &self.creation_request_id
    }

    /// Partner the card was issued for.
    pub fn partner_id(&self) -> &str {
        &self.partner_id
    }

    /// Gift card id, if set.
    pub fn gc_id(&self) -> Option<&str> {
        self.gc_id.as_deref()
    }
}

/// Response of a `CancelGiftCard` call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelGiftCardResponse {
    /// Echo of the creation request id.
    #[serde(default, deserialize_with = "null_as_default")]
    pub creation_request_id: String,
    /// Gift card id, when the service returns it.
    #[serde(default)]
    pub gc_id: Option<String>,
    /// Outcome reported by the service.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

// `{}` on f64 prints the shortest text that reads back to the same f64, which
// is also what goes on the wire.
fn survives_f64(amount: Decimal) -> bool {
    amount
        .to_f64()
        .and_then(|f| Decimal::from_str(&f.to_string()).ok())
        .is_some_and(|back| back == amount)
}

// The service sends `null` for fields it has no value for.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
