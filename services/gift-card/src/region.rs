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

//! Endpoint resolution for the AGCOD marketplaces.

use agcod_core::{Error, Result};
use log::warn;
use std::fmt;
use std::str::FromStr;

/// Logical marketplace region served by AGCOD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// `NA`: US and Canada.
    NorthAmerica,
    /// `EU`: Italy, Spain, Germany, France and the UK.
    Europe,
    /// `FE`: Japan.
    FarEast,
}

impl Region {
    /// Short region code as used by the API documentation.
    pub fn code(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "NA",
            Region::Europe => "EU",
            Region::FarEast => "FE",
        }
    }

    /// Parse a region code exactly. Loose matching is handled by [`resolve`].
    fn from_exact(code: &str) -> Option<Self> {
        match code {
            "NA" => Some(Region::NorthAmerica),
            "EU" => Some(Region::Europe),
            "FE" => Some(Region::FarEast),
            _ => None,
        }
    }

    fn endpoint(&self, environment: Environment) -> Endpoint {
        let (host, signing_region) = match (self, environment) {
            (Region::NorthAmerica, Environment::Sandbox) => ("agcod-v2-gamma.amazon.com", "us-east-1"),
            (Region::NorthAmerica, Environment::Production) => ("agcod-v2.amazon.com", "us-east-1"),
            (Region::Europe, Environment::Sandbox) => ("agcod-v2-eu-gamma.amazon.com", "eu-west-1"),
            (Region::Europe, Environment::Production) => ("agcod-v2-eu.amazon.com", "eu-west-1"),
            (Region::FarEast, Environment::Sandbox) => ("agcod-v2-fe-gamma.amazon.com", "us-west-2"),
            (Region::FarEast, Environment::Production) => ("agcod-v2-fe.amazon.com", "us-west-2"),
        };

        Endpoint {
            host,
            signing_region,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Which AGCOD deployment requests are sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// The gamma hosts, issuing test codes.
    #[default]
    Sandbox,
    /// The live hosts, issuing real gift cards.
    Production,
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" | "gamma" => Ok(Environment::Sandbox),
            "production" | "prod" => Ok(Environment::Production),
            v => Err(Error::config_invalid(format!(
                "environment must be sandbox or production, got {v:?}"
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Sandbox => f.write_str("sandbox"),
            Environment::Production => f.write_str("production"),
        }
    }
}

/// Host and SigV4 signing region for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Host name requests are POSTed to.
    pub host: &'static str,
    /// Region the signature is scoped to.
    pub signing_region: &'static str,
}

impl Endpoint {
    /// Endpoint used for codes that only match a region loosely.
    pub const FALLBACK: Endpoint = Endpoint {
        host: "agcod-v2-gamma.amazon.com",
        signing_region: "us-east-1",
    };

    /// Full URL of the given action on this endpoint.
    pub fn url(&self, action: &str) -> String {
        format!("https://{}/{}", self.host, action)
    }
}

/// Resolve a region code into the endpoint to call.
///
/// A code is accepted when it contains `NA`, `EU` or `FE` anywhere, case
/// sensitive. Only the exact codes pick their own table entry; anything
/// accepted through the substring match (`CANADA`, `XEU`, ...) goes to
/// [`Endpoint::FALLBACK`] whatever the environment.
///
/// Codes without any of the substrings fail with
/// [`agcod_core::ErrorKind::UnsupportedRegion`].
pub fn resolve(region: &str, environment: Environment) -> Result<Endpoint> {
    if !is_supported(region) {
        return Err(Error::unsupported_region(format!(
            "region {region:?} is not supported, expected one of NA, EU or FE"
        )));
    }

    match Region::from_exact(region) {
        Some(r) => Ok(r.endpoint(environment)),
        None => {
            warn!(
                "region {region:?} matched loosely, using fallback endpoint {}",
                Endpoint::FALLBACK.host
            );
            Ok(Endpoint::FALLBACK)
        }
    }
}

fn is_supported(region: &str) -> bool {
    ["NA", "EU", "FE"].iter().any(|code| region.contains(code))
}
