//! Greeting payload.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::HELLO_MESSAGE;

/// Response of `GET /hello`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HelloResponse {
    #[schema(example = "Hello, World!")]
    pub message: String,
    /// RFC 3339 UTC instant at which the greeting was produced
    #[schema(example = "2025-01-01T09:30:00.123Z")]
    pub timestamp: String,
}

impl HelloResponse {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            message: HELLO_MESSAGE.to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}
