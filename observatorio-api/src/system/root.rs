use serde::{Deserialize, Serialize};

pub const URL: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}
