pub mod by_kind;
pub mod create;
pub mod get;
pub mod list;
pub mod search;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

pub const URL: &str = "/cuerpos-agua";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    IntoStaticStr,
    SerializeDisplay,
    DeserializeFromStr,
)]
#[cfg_attr(any(test, feature = "test"), derive(fake::Dummy))]
pub enum Kind {
    #[strum(serialize = "río")]
    River,
    #[strum(serialize = "lago")]
    Lake,
    #[strum(serialize = "océano")]
    Ocean,
    #[strum(serialize = "mar")]
    Sea,
    #[strum(serialize = "laguna")]
    Lagoon,
    #[strum(serialize = "embalse")]
    Reservoir,
    #[strum(serialize = "arroyo")]
    Stream,
}

// Kinds carry accents, so matching has to fold case beyond ASCII.
impl FromStr for Kind {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        Self::iter()
            .find(|kind| <&'static str>::from(*kind) == s)
            .ok_or(strum::ParseError::VariantNotFound)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    SerializeDisplay,
    DeserializeFromStr,
)]
#[cfg_attr(any(test, feature = "test"), derive(fake::Dummy))]
pub enum Pollution {
    #[strum(serialize = "Baja")]
    Low,
    #[strum(serialize = "Media")]
    Medium,
    #[strum(serialize = "Alta")]
    High,
    #[strum(serialize = "Crítica")]
    Critical,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    SerializeDisplay,
    DeserializeFromStr,
)]
#[cfg_attr(any(test, feature = "test"), derive(fake::Dummy))]
pub enum Biodiversity {
    #[strum(serialize = "Baja")]
    Low,
    #[strum(serialize = "Media")]
    Medium,
    #[strum(serialize = "Alta")]
    High,
}

/// Every field a client provides for a water body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "test"), derive(fake::Dummy))]
pub struct Data {
    #[serde(rename = "nombre")]
    #[cfg_attr(any(test, feature = "test"), dummy(faker = "16..32"))]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: Kind,
    #[serde(rename = "latitud")]
    #[cfg_attr(any(test, feature = "test"), dummy(faker = "-90.0..90.0"))]
    pub latitude: f64,
    #[serde(rename = "longitud")]
    #[cfg_attr(any(test, feature = "test"), dummy(faker = "-180.0..180.0"))]
    pub longitude: f64,
    #[serde(rename = "contaminacion")]
    pub pollution: Pollution,
    #[serde(rename = "biodiversidad")]
    pub biodiversity: Biodiversity,
    #[serde(rename = "descripcion", default)]
    #[cfg_attr(any(test, feature = "test"), dummy(faker = "fake::faker::lorem::en::Sentence(3..8)"))]
    pub description: Option<String>,
    #[serde(rename = "temperatura", default)]
    #[cfg_attr(any(test, feature = "test"), dummy(expr = "Some(fake::Fake::fake::<f64>(&(-10.0..50.0)))"))]
    pub temperature: Option<f64>,
    #[serde(default)]
    #[cfg_attr(any(test, feature = "test"), dummy(expr = "Some(fake::Fake::fake::<f64>(&(0.0..14.0)))"))]
    pub ph: Option<f64>,
    #[serde(rename = "oxigeno_disuelto", default)]
    #[cfg_attr(any(test, feature = "test"), dummy(expr = "Some(fake::Fake::fake::<f64>(&(0.0..20.0)))"))]
    pub dissolved_oxygen: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterBody {
    pub id: i32,
    #[serde(flatten)]
    pub data: Data,
}
