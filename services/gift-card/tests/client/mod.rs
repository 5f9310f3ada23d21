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

use agcod_core::{Context, HttpSend, Result};
use agcod_gift_card::{Config, GiftCardClient, GenerateRequestId, StaticCredentialProvider};
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::{Arc, Mutex};

mod cancel;
mod create;

pub const PARTNER_ID: &str = "Acme";

pub const CREATE_RESPONSE: &str = r#"{"cardInfo":{"cardNumber":null,"cardStatus":"Fulfilled","expirationDate":null,"value":{"amount":25,"currencyCode":"USD"}},"creationRequestId":"AcmeJJHY0000000001","gcClaimCode":"ABCD-EFGHIJ-KLMN","gcExpirationDate":null,"gcId":"A2GCN9BRX5QS76","status":"SUCCESS"}"#;

/// HttpSend that records every request and answers with a canned response.
#[derive(Debug, Clone)]
pub struct RecordingHttpSend {
    status: u16,
    body: &'static str,
    requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
}

impl RecordingHttpSend {
    pub fn new(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<(http::request::Parts, Bytes)> {
        let requests = std::mem::take(&mut *self.requests.lock().unwrap());
        requests.into_iter().map(|req| req.into_parts()).collect()
    }
}

#[async_trait]
impl HttpSend for RecordingHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.requests.lock().unwrap().push(req);

        Ok(http::Response::builder()
            .status(self.status)
            .body(Bytes::from_static(self.body.as_bytes()))?)
    }
}

#[derive(Debug)]
pub struct FixedRequestId;

impl GenerateRequestId for FixedRequestId {
    fn generate(&self) -> String {
        "JJHY0000000001".to_string()
    }
}

pub fn init_client(http: &RecordingHttpSend) -> GiftCardClient {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_http_send(http.clone());
    GiftCardClient::new(ctx, Config::default().with_partner_id(PARTNER_ID))
        .expect("client must be created")
        .with_credential_provider(StaticCredentialProvider::new(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
        ))
        .with_request_id_generator(FixedRequestId)
}
