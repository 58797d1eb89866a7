// SPDX-License-Identifier: Apache-2.0

use krishi_core::{ENV_KRISHI_BIND, ENV_KRISHI_DEFAULT_LOCATION};
use std::env;

pub const ENV_KRISHI_LOG_JSON: &str = "KRISHI_LOG_JSON";

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_LOCATION: &str = "Delhi";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: String,
    /// Location used when a request does not name one, and by the
    /// readiness probe.
    pub default_location: String,
    pub log_json: bool,
}

impl ApiConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var(ENV_KRISHI_BIND).unwrap_or_else(|_| DEFAULT_BIND.to_string()),
            default_location: env::var(ENV_KRISHI_DEFAULT_LOCATION)
                .unwrap_or_else(|_| DEFAULT_LOCATION.to_string()),
            log_json: env_bool(ENV_KRISHI_LOG_JSON, true),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND.to_string(),
            default_location: DEFAULT_LOCATION.to_string(),
            log_json: true,
        }
    }
}

#[must_use]
pub fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}
