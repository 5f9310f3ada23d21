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

use agcod_core::{Error, Result};
use bytes::Bytes;
use http::StatusCode;
use log::debug;
use serde::de::DeserializeOwned;

/// Decode a service response into `T`.
///
/// - Any status other than `200 OK` is an [`agcod_core::ErrorKind::Upstream`]
///   error carrying the raw body.
/// - A `200 OK` whose body is not the expected JSON is an
///   [`agcod_core::ErrorKind::MalformedResponse`] error.
///
/// Fields such as `status` inside a successful body are handed to the caller
/// untouched.
pub fn decode<T: DeserializeOwned>(resp: http::Response<Bytes>) -> Result<T> {
    let (parts, body) = resp.into_parts();
    debug!("got response with status {}", parts.status);

    if parts.status != StatusCode::OK {
        return Err(Error::upstream(
            parts.status,
            String::from_utf8_lossy(&body).into_owned(),
        ));
    }

    serde_json::from_slice(&body).map_err(|e| {
        Error::malformed_response("failed to decode response body")
            .with_response(parts.status, String::from_utf8_lossy(&body).into_owned())
            .with_source(e)
    })
}
