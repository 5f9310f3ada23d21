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

use crate::model::{CancelGiftCardRequest, GiftCardRequest, Money};
use crate::request_id::GenerateRequestId;
use agcod_core::{Error, Result};
use rust_decimal::Decimal;

/// Build the body of a `CreateGiftCard` call.
///
/// The creation request id is `partner_id` followed by a fresh id from
/// `generator`. Persist it before sending: it is the only handle that allows
/// cancelling the card later.
pub fn build_create_request(
    generator: &dyn GenerateRequestId,
    partner_id: &str,
    amount: Decimal,
    currency_code: &str,
) -> Result<GiftCardRequest> {
    check_partner_id(partner_id)?;
    let value = Money::new(amount, currency_code)?;
    let creation_request_id = format!("{partner_id}{}", generator.generate());

    Ok(GiftCardRequest::new(creation_request_id, partner_id, value))
}

/// Build the body of a `CancelGiftCard` call for a card created earlier.
///
/// `creation_request_id` must be the id sent with the original create request.
pub fn build_cancel_request(
    partner_id: &str,
    creation_request_id: &str,
) -> Result<CancelGiftCardRequest> {
    check_partner_id(partner_id)?;
    if !creation_request_id.starts_with(partner_id) {
        return Err(Error::request_invalid(format!(
            "creation request id {creation_request_id:?} does not start with partner id {partner_id:?}"
        )));
    }

    Ok(CancelGiftCardRequest::new(partner_id, creation_request_id))
}

fn check_partner_id(partner_id: &str) -> Result<()> {
    if partner_id.is_empty() {
        return Err(Error::request_invalid("partner id must not be empty"));
    }
    Ok(())
}
