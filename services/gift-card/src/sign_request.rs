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

use crate::constants::{SERVICE_NAME, X_AMZ_DATE};
use crate::Credential;
use agcod_core::hash::hex_sha256;
use agcod_core::time::{format_date, format_iso8601, now, DateTime};
use agcod_core::{Context, Error, Result, SignRequest};
use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_sigv4::http_request::{sign, SignableBody, SignableRequest, SigningSettings};
use aws_sigv4::sign::v4;
use bytes::Bytes;
use http::HeaderValue;
use log::debug;
use std::time::SystemTime;

/// RequestSigner signs AGCOD requests with AWS SigV4.
///
/// The signature itself is computed by `aws-sigv4`; this type feeds it the
/// request, the payload hash and the credential scope.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
#[derive(Debug)]
pub struct RequestSigner {
    service: String,

    time: Option<DateTime>,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSigner {
    /// Create a new signer for `AGCODService`.
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),

            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut http::Request<Bytes>,
        region: &str,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::signing(
                "no credential available, refusing to send an unsigned request",
            ));
        };
        if cred.access_key_id.is_empty() || cred.secret_access_key.is_empty() {
            return Err(Error::signing("credential has an empty access key or secret key"));
        }
        let now = self.time.unwrap_or_else(now);

        // Hash the exact bytes that go on the wire before any header changes.
        let payload_hash = hex_sha256(req.body());
        debug!("calculated payload hash: {payload_hash}");

        req.headers_mut()
            .insert(X_AMZ_DATE, HeaderValue::from_str(&format_iso8601(now))?);

        let identity = Credentials::new(
            &cred.access_key_id,
            &cred.secret_access_key,
            cred.session_token.clone(),
            cred.expires_in.map(SystemTime::from),
            "agcod",
        )
        .into();
        let params = v4::SigningParams::builder()
            .identity(&identity)
            .region(region)
            .name(&self.service)
            .time(SystemTime::from(now))
            .settings(SigningSettings::default())
            .build()
            .map_err(|e| Error::signing("failed to build signing params").with_source(e))?;

        let mut headers = Vec::with_capacity(req.headers().len());
        for (name, value) in req.headers() {
            let value = value.to_str().map_err(|e| {
                Error::signing(format!("header {name} is not valid for signing")).with_source(e)
            })?;
            headers.push((name.as_str(), value));
        }
        let uri = req.uri().to_string();
        let signable = SignableRequest::new(
            req.method().as_str(),
            uri,
            headers.into_iter(),
            SignableBody::Precomputed(payload_hash),
        )
        .map_err(|e| Error::signing("request is not signable").with_source(e))?;

        let (instructions, _signature) = sign(signable, &params.into())
            .map_err(|e| Error::signing("failed to sign request").with_source(e))?
            .into_parts();
        debug!(
            "signed request with scope {}/{region}/{}/aws4_request",
            format_date(now),
            self.service
        );

        instructions.apply_to_request_http1x(req);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::X_AMZ_TARGET;
    use agcod_core::ErrorKind;
    use chrono::TimeZone;
    use http::header;
    use pretty_assertions::assert_eq;

    fn test_time() -> DateTime {
        chrono::Utc
            .with_ymd_and_hms(2024, 3, 13, 7, 20, 4)
            .single()
            .expect("time must be valid")
    }

    fn test_credential() -> Credential {
        Credential {
            access_key_id: "AKIDEXAMPLE".to_string(),
            secret_access_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string(),
            ..Default::default()
        }
    }

    fn test_request(body: &'static str) -> http::Request<Bytes> {
        http::Request::post("https://agcod-v2-gamma.amazon.com/CreateGiftCard")
            .header(header::HOST, "agcod-v2-gamma.amazon.com")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .header(X_AMZ_TARGET, "com.amazonaws.agcod.AGCODService.CreateGiftCard")
            .body(Bytes::from_static(body.as_bytes()))
            .expect("request must be valid")
    }

    /// Sign the request directly with aws-sigv4, hashing the raw body itself.
    fn expected_authorization(body: &'static str, region: &str) -> String {
        let mut req = test_request(body);
        let identity = Credentials::new(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            None,
            None,
            "hardcoded-credentials",
        )
        .into();
        let params = v4::SigningParams::builder()
            .identity(&identity)
            .region(region)
            .name("AGCODService")
            .time(SystemTime::from(test_time()))
            .settings(SigningSettings::default())
            .build()
            .expect("signing params must be valid");

        let (instructions, _) = sign(
            SignableRequest::new(
                req.method().as_str(),
                req.uri().to_string(),
                req.headers()
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.to_str().unwrap())),
                SignableBody::Bytes(req.body()),
            )
            .unwrap(),
            &params.into(),
        )
        .unwrap()
        .into_parts();
        instructions.apply_to_request_http1x(&mut req);

        req.headers()[header::AUTHORIZATION]
            .to_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_signature_matches_aws_sigv4() -> Result<()> {
        let body = r#"{"creationRequestId":"AcmeJJHY0123456789","partnerId":"Acme","value":{"amount":10.0,"currencyCode":"USD"}}"#;
        let mut req = test_request(body);
        let expected = expected_authorization(body, "us-east-1");

        RequestSigner::new()
            .with_time(test_time())
            .sign_request(&Context::new(), &mut req, "us-east-1", Some(&test_credential()))
            .await?;

        let authorization = req.headers()[header::AUTHORIZATION].to_str()?;
        assert_eq!(authorization, expected);
        assert!(authorization.starts_with(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20240313/us-east-1/AGCODService/aws4_request"
        ));
        assert_eq!(req.headers()[X_AMZ_DATE], "20240313T072004Z");
        assert_eq!(req.body().as_ref(), body.as_bytes());
        Ok(())
    }

    #[tokio::test]
    async fn test_signature_depends_on_body() -> Result<()> {
        let mut req = test_request(r#"{"partnerId":"Acme"}"#);
        let other = expected_authorization(r#"{"partnerId":"Other"}"#, "eu-west-1");

        RequestSigner::new()
            .with_time(test_time())
            .sign_request(&Context::new(), &mut req, "eu-west-1", Some(&test_credential()))
            .await?;

        assert_ne!(req.headers()[header::AUTHORIZATION].to_str()?, other);
        Ok(())
    }

    #[tokio::test]
    async fn test_session_token_is_applied() -> Result<()> {
        let mut req = test_request("{}");
        let cred = Credential {
            session_token: Some("SESSION".to_string()),
            ..test_credential()
        };

        RequestSigner::new()
            .with_time(test_time())
            .sign_request(&Context::new(), &mut req, "us-west-2", Some(&cred))
            .await?;

        assert_eq!(req.headers()["x-amz-security-token"], "SESSION");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_credential_is_signing_error() {
        let mut req = test_request("{}");

        let err = RequestSigner::new()
            .sign_request(&Context::new(), &mut req, "us-east-1", None)
            .await
            .expect_err("must refuse to sign");

        assert_eq!(err.kind(), ErrorKind::Signing);
        assert!(req.headers().get(header::AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn test_empty_credential_is_signing_error() {
        let mut req = test_request("{}");

        let err = RequestSigner::new()
            .sign_request(&Context::new(), &mut req, "us-east-1", Some(&Credential::default()))
            .await
            .expect_err("must refuse to sign with empty keys");

        assert_eq!(err.kind(), ErrorKind::Signing);
    }
}
