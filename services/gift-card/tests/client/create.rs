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
use agcod_gift_card::Environment;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use test_case::test_case;

#[tokio::test]
async fn test_create_gift_card() -> Result<()> {
    let http = RecordingHttpSend::new(200, CREATE_RESPONSE);
    let client = init_client(&http);

    let resp = client
        .create_gift_card("NA", Decimal::new(25, 0), "USD")
        .await?;
    assert_eq!(resp.status, "SUCCESS");
    assert_eq!(resp.gc_claim_code, "ABCD-EFGHIJ-KLMN");
    assert_eq!(resp.card_info.value.amount, Decimal::new(25, 0));

    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    let (parts, body) = &requests[0];

    assert_eq!(parts.method, http::Method::POST);
    assert_eq!(
        parts.uri.to_string(),
        "https://agcod-v2-gamma.amazon.com/CreateGiftCard"
    );
    assert_eq!(parts.headers["host"], "agcod-v2-gamma.amazon.com");
    assert_eq!(parts.headers["content-type"], "application/json");
    assert_eq!(parts.headers["accept"], "application/json");
    assert_eq!(
        parts.headers["x-amz-target"],
        "com.amazonaws.agcod.AGCODService.CreateGiftCard"
    );
    assert!(parts.headers.contains_key("x-amz-date"));

    let authorization = parts.headers["authorization"].to_str().unwrap();
    assert!(
        authorization.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"),
        "unexpected authorization: {authorization}"
    );
    assert!(authorization.contains("/us-east-1/AGCODService/aws4_request"));

    let body: serde_json::Value = serde_json::from_slice(body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "creationRequestId": "AcmeJJHY0000000001",
            "partnerId": "Acme",
            "value": {"amount": 25.0, "currencyCode": "USD"},
        })
    );
    Ok(())
}

#[test_case("EU", Environment::Sandbox, "https://agcod-v2-eu-gamma.amazon.com/CreateGiftCard", "eu-west-1")]
#[test_case("FE", Environment::Production, "https://agcod-v2-fe.amazon.com/CreateGiftCard", "us-west-2")]
#[test_case("CANADA", Environment::Production, "https://agcod-v2-gamma.amazon.com/CreateGiftCard", "us-east-1")]
#[tokio::test]
async fn test_create_gift_card_endpoint(
    region: &str,
    environment: Environment,
    url: &str,
    signing_region: &str,
) -> Result<()> {
    let http = RecordingHttpSend::new(200, CREATE_RESPONSE);
    let ctx = Context::new().with_http_send(http.clone());
    let config = Config::default()
        .with_partner_id(PARTNER_ID)
        .with_credential("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
        .with_environment(environment);
    let client = GiftCardClient::new(ctx, config)?;

    client
        .create_gift_card(region, Decimal::new(10, 0), "EUR")
        .await?;

    let requests = http.requests();
    let (parts, _) = &requests[0];
    assert_eq!(parts.uri.to_string(), url);
    assert!(parts.headers["authorization"]
        .to_str()
        .unwrap()
        .contains(&format!("/{signing_region}/AGCODService/")));
    Ok(())
}

#[tokio::test]
async fn test_create_gift_card_unsupported_region_sends_nothing() {
    let http = RecordingHttpSend::new(200, CREATE_RESPONSE);
    let client = init_client(&http);

    let err = client
        .create_gift_card("XX", Decimal::new(10, 0), "USD")
        .await
        .expect_err("XX must be rejected");

    assert_eq!(err.kind(), ErrorKind::UnsupportedRegion);
    assert!(http.requests().is_empty());
}

#[tokio::test]
async fn test_create_gift_card_invalid_amount_sends_nothing() {
    let http = RecordingHttpSend::new(200, CREATE_RESPONSE);
    let client = init_client(&http);

    let err = client
        .create_gift_card("NA", Decimal::ZERO, "USD")
        .await
        .expect_err("zero amount must be rejected");

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(http.requests().is_empty());
}

#[tokio::test]
async fn test_create_gift_card_upstream_error() {
    let body = r#"{"errorCode":"F100","errorType":"SystemTemporarilyUnavailable","message":"Internal error"}"#;
    let http = RecordingHttpSend::new(500, body);
    let client = init_client(&http);

    let err = client
        .create_gift_card("NA", Decimal::new(10, 0), "USD")
        .await
        .expect_err("500 must fail");

    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert_eq!(err.status(), Some(http::StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(err.body(), Some(body));
    assert!(!err.is_retryable());
    assert_eq!(http.requests().len(), 1);
}

#[tokio::test]
async fn test_create_gift_card_malformed_response() {
    let http = RecordingHttpSend::new(200, "<html>oops</html>");
    let client = init_client(&http);

    let err = client
        .create_gift_card("NA", Decimal::new(10, 0), "USD")
        .await
        .expect_err("html must not decode");

    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn test_create_gift_card_without_credential_sends_nothing() {
    let http = RecordingHttpSend::new(200, CREATE_RESPONSE);
    let ctx = Context::new().with_http_send(http.clone());
    let client = GiftCardClient::new(ctx, Config::default().with_partner_id(PARTNER_ID))
        .expect("client must be created");

    let err = client
        .create_gift_card("NA", Decimal::new(10, 0), "USD")
        .await
        .expect_err("unsigned request must not be sent");

    assert_eq!(err.kind(), ErrorKind::Signing);
    assert!(http.requests().is_empty());
}

#[tokio::test]
async fn test_build_then_send_keeps_creation_request_id() -> Result<()> {
    let http = RecordingHttpSend::new(200, CREATE_RESPONSE);
    let client = init_client(&http);

    let req = client.build_create_request(Decimal::new(2500, 2), "USD")?;
    assert_eq!(req.creation_request_id(), "AcmeJJHY0000000001");

    client.send_create_request("NA", &req).await?;

    let requests = http.requests();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].1).unwrap();
    assert_eq!(body["creationRequestId"], req.creation_request_id());
    Ok(())
}
