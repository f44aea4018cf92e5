use serde::{Deserialize, Serialize};

use super::WaterBody;

pub const URL: &str = "/cuerpos-agua/tipo/{tipo}";

/// The kind is matched as a case-insensitive fragment, so it is not parsed into [`super::Kind`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    #[serde(rename = "tipo")]
    pub kind: String,
}

pub type Response = Vec<WaterBody>;
