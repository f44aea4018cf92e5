use std::borrow::Cow;

use color_eyre::eyre::WrapErr;
use diesel::prelude::*;
use observatorio_api::water_body as api;

pub use crate::schema::water_bodies::{self, *};
use crate::Error;

#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = water_bodies, check_for_backend(crate::orm::Type))]
pub struct Data<'a> {
    pub name: Cow<'a, str>,
    pub kind: Cow<'a, str>,
    pub latitude: f64,
    pub longitude: f64,
    pub pollution: Cow<'a, str>,
    pub biodiversity: Cow<'a, str>,
    pub description: Option<Cow<'a, str>>,
    pub temperature: Option<f64>,
    pub ph: Option<f64>,
    pub dissolved_oxygen: Option<f64>,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = water_bodies, check_for_backend(crate::orm::Type))]
pub struct WaterBody<'a> {
    pub id: i32,
    #[diesel(embed)]
    pub data: Data<'a>,
}

impl<'a> From<&'a api::Data> for Data<'a> {
    fn from(value: &'a api::Data) -> Self {
        Self {
            name: value.name.as_str().into(),
            kind: <&'static str>::from(value.kind).into(),
            latitude: value.latitude,
            longitude: value.longitude,
            pollution: <&'static str>::from(value.pollution).into(),
            biodiversity: <&'static str>::from(value.biodiversity).into(),
            description: value.description.as_deref().map(Cow::Borrowed),
            temperature: value.temperature,
            ph: value.ph,
            dissolved_oxygen: value.dissolved_oxygen,
        }
    }
}

impl TryFrom<Data<'_>> for api::Data {
    type Error = Error;

    fn try_from(value: Data<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            kind: value.kind.parse().wrap_err("Invalid water body kind in database")?,
            pollution: value.pollution.parse().wrap_err("Invalid pollution in database")?,
            biodiversity: value
                .biodiversity
                .parse()
                .wrap_err("Invalid biodiversity in database")?,
            name: value.name.into_owned(),
            latitude: value.latitude,
            longitude: value.longitude,
            description: value.description.map(Cow::into_owned),
            temperature: value.temperature,
            ph: value.ph,
            dissolved_oxygen: value.dissolved_oxygen,
        })
    }
}

impl TryFrom<WaterBody<'_>> for api::WaterBody {
    type Error = Error;

    fn try_from(value: WaterBody<'_>) -> Result<Self, Self::Error> {
        Ok(Self { id: value.id, data: value.data.try_into()? })
    }
}

pub fn into_api(water_bodies: Vec<WaterBody<'_>>) -> Result<Vec<api::WaterBody>, Error> {
    water_bodies.into_iter().map(api::WaterBody::try_from).collect()
}
