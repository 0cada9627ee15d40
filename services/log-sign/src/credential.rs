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

use std::fmt::{Debug, Formatter};

use streamproxy_core::{utils::Redact, SigningCredential};

/// Credential for the StreamProxy service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Access key id
    pub access_key_id: String,
    /// Secret key
    pub secret_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(access_key_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Return a copy with leading and trailing whitespace removed from both
    /// fields.
    ///
    /// Keys pasted into env vars or config files often pick up a stray
    /// newline; interior characters are kept as-is.
    pub fn sanitize(&self) -> Credential {
        Credential {
            access_key_id: self.access_key_id.trim().to_string(),
            secret_key: self.secret_key.trim().to_string(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_key", &Redact::from(&self.secret_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.access_key_id.trim().is_empty() && !self.secret_key.trim().is_empty()
    }
}
