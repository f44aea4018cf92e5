use serde::{Deserialize, Serialize};

use super::WaterBody;

pub const URL: &str = "/cuerpos-agua/{id}";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Request {
    pub id: i32,
}

pub type Response = WaterBody;
