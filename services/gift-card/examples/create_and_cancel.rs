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

use agcod_core::{Context, ErrorKind, OsEnv};
use agcod_gift_card::{Config, GiftCardClient};
use agcod_http_send_reqwest::ReqwestHttpSend;
use anyhow::Result;
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    // Reads AGCOD_PARTNER_ID, AGCOD_ACCESS_KEY_ID, AGCOD_SECRET_ACCESS_KEY
    // and AGCOD_ENVIRONMENT. Defaults to the sandbox hosts.
    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::from_env(&ctx)?;
    let client = GiftCardClient::new(ctx, config)?;

    let region = std::env::args().nth(1).unwrap_or_else(|| "NA".to_string());

    let req = client.build_create_request(Decimal::new(100, 2), "USD")?;
    println!("creation request id: {}", req.creation_request_id());

    match client.send_create_request(&region, &req).await {
        Ok(card) => {
            println!("status: {}", card.status);
            println!("claim code: {}", card.gc_claim_code);
        }
        Err(e) if e.kind() == ErrorKind::Upstream => {
            eprintln!("service rejected the request: {}", e.body().unwrap_or_default());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let cancelled = client
        .cancel_gift_card(&region, client.partner_id(), req.creation_request_id())
        .await?;
    println!("cancel status: {}", cancelled.status);

    Ok(())
}
