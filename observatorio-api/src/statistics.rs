use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub const URL: &str = "/estadisticas";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    #[serde(rename = "temperatura")]
    pub temperature: f64,
    pub ph: f64,
    #[serde(rename = "oxigeno_disuelto")]
    pub dissolved_oxygen: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "total_cuerpos_agua")]
    pub total: i64,
    #[serde(rename = "distribucion_por_tipo")]
    pub by_kind: BTreeMap<String, i64>,
    #[serde(rename = "distribucion_contaminacion")]
    pub by_pollution: BTreeMap<String, i64>,
    #[serde(rename = "promedios")]
    pub averages: Averages,
    #[serde(rename = "ultima_actualizacion", with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}

impl Averages {
    /// Rounds each average to two decimals, a missing average counts as zero.
    pub fn new(
        temperature: Option<f64>,
        ph: Option<f64>,
        dissolved_oxygen: Option<f64>,
    ) -> Self {
        let round = |value: Option<f64>| (value.unwrap_or_default() * 100.0).round() / 100.0;
        Self {
            temperature: round(temperature),
            ph: round(ph),
            dissolved_oxygen: round(dissolved_oxygen),
        }
    }
}
