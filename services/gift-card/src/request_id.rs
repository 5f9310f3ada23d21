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

//! Creation request id generation.
//!
//! AGCOD requires every `creationRequestId` to start with the partner id and
//! to be unique for that partner. The generators here produce the part that
//! follows the partner id.

use crate::constants::DEFAULT_REQUEST_ID_TAG;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Length of the part following the tag.
pub const SUFFIX_LEN: usize = 10;

/// GenerateRequestId produces the unique part of a creation request id.
pub trait GenerateRequestId: Debug + Send + Sync + 'static {
    /// Return the id part that will follow the partner id.
    fn generate(&self) -> String;
}

/// Clock based generator: tag followed by the last ten base-36 digits of the
/// current UNIX time in nanoseconds.
///
/// Readings are forced to advance by at least one nanosecond per call, so
/// one generator never repeats itself. Two processes (or a clock moved
/// backwards across restarts) can still produce the same id; use
/// [`RandomRequestId`] or your own generator when that matters.
#[derive(Debug)]
pub struct SequentialRequestId {
    tag: String,
    last: AtomicU64,
}

impl Default for SequentialRequestId {
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_ID_TAG)
    }
}

impl SequentialRequestId {
    /// Create a generator using `tag` in front of the clock digits.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            last: AtomicU64::new(0),
        }
    }

    fn tick(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();

        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.wrapping_add(1)))
            })
            .unwrap_or(now);
        now.max(prev.wrapping_add(1))
    }
}

impl GenerateRequestId for SequentialRequestId {
    fn generate(&self) -> String {
        let digits = to_base36(self.tick());
        let suffix = if digits.len() > SUFFIX_LEN {
            &digits[digits.len() - SUFFIX_LEN..]
        } else {
            &digits
        };
        format!("{}{:0>width$}", self.tag, suffix, width = SUFFIX_LEN)
    }
}

/// Random generator: tag followed by ten random alphanumeric characters.
#[derive(Debug)]
pub struct RandomRequestId {
    tag: String,
}

impl Default for RandomRequestId {
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_ID_TAG)
    }
}

impl RandomRequestId {
    /// Create a generator using `tag` in front of the random characters.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
        }
    }
}

impl GenerateRequestId for RandomRequestId {
    fn generate(&self) -> String {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SUFFIX_LEN)
            .map(char::from)
            .collect();
        format!("{}{}", self.tag, suffix)
    }
}

/// Lowercase base-36 rendering of `n`.
fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::with_capacity(13);
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8_lossy(&buf).into_owned()
}
