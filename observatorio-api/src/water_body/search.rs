use serde::{Deserialize, Serialize};

use super::WaterBody;

pub const URL: &str = "/cuerpos-agua/buscar/{termino}";

pub const MIN_TERM_LENGTH: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    #[serde(rename = "termino")]
    pub term: String,
}

pub type Response = Vec<WaterBody>;
