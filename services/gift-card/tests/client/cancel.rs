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

use super::*;
use agcod_core::ErrorKind;
use agcod_gift_card::build_cancel_request;
use pretty_assertions::assert_eq;

const CANCEL_RESPONSE: &str =
    r#"{"creationRequestId":"AcmeJJHY0000000001","gcId":"A2GCN9BRX5QS76","status":"SUCCESS"}"#;

#[tokio::test]
async fn test_cancel_gift_card() -> Result<()> {
    let http = RecordingHttpSend::new(200, CANCEL_RESPONSE);
    let client = init_client(&http);

    let resp = client
        .cancel_gift_card("EU", PARTNER_ID, "AcmeJJHY0000000001")
        .await?;
    assert_eq!(resp.status, "SUCCESS");
    assert_eq!(resp.creation_request_id, "AcmeJJHY0000000001");
    assert_eq!(resp.gc_id.as_deref(), Some("A2GCN9BRX5QS76"));

    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    let (parts, body) = &requests[0];
    assert_eq!(
        parts.uri.to_string(),
        "https://agcod-v2-eu-gamma.amazon.com/CancelGiftCard"
    );
    assert_eq!(
        parts.headers["x-amz-target"],
        "com.amazonaws.agcod.AGCODService.CancelGiftCard"
    );

    let body: serde_json::Value = serde_json::from_slice(body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "creationRequestId": "AcmeJJHY0000000001",
            "partnerId": "Acme",
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_send_cancel_request_with_gc_id() -> Result<()> {
    let http = RecordingHttpSend::new(200, CANCEL_RESPONSE);
    let client = init_client(&http);

    let req = build_cancel_request(PARTNER_ID, "AcmeJJHY0000000001")?.with_gc_id("A2GCN9BRX5QS76");
    client.send_cancel_request("NA", &req).await?;

    let requests = http.requests();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].1).unwrap();
    assert_eq!(body["gcId"], "A2GCN9BRX5QS76");
    Ok(())
}

#[tokio::test]
async fn test_cancel_gift_card_rejects_foreign_id() {
    let http = RecordingHttpSend::new(200, CANCEL_RESPONSE);
    let client = init_client(&http);

    let err = client
        .cancel_gift_card("NA", PARTNER_ID, "OtherJJHY0000000001")
        .await
        .expect_err("id of another partner must be rejected");

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(http.requests().is_empty());
}

#[tokio::test]
async fn test_cancel_gift_card_unsupported_region_sends_nothing() {
    let http = RecordingHttpSend::new(200, CANCEL_RESPONSE);
    let client = init_client(&http);

    let err = client
        .cancel_gift_card("us", PARTNER_ID, "AcmeJJHY0000000001")
        .await
        .expect_err("lowercase region must be rejected");

    assert_eq!(err.kind(), ErrorKind::UnsupportedRegion);
    assert!(http.requests().is_empty());
}
