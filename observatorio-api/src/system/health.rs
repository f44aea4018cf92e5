use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub const URL: &str = "/health";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Connected,
    Disconnected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    Healthy {
        #[serde(with = "time::serde::rfc3339")]
        timestamp: OffsetDateTime,
        version: String,
        database: Database,
        message: String,
    },
    Unhealthy {
        #[serde(with = "time::serde::rfc3339")]
        timestamp: OffsetDateTime,
        database: Database,
        error: String,
    },
}

impl Response {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy { .. })
    }
}
