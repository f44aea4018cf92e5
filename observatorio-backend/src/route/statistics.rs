use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use diesel::dsl::{avg, count};
use diesel::QueryDsl;
use diesel_async::RunQueryDsl;
use observatorio_api::statistics::Averages;
pub use observatorio_api::statistics::{Response, URL};
use time::OffsetDateTime;

use crate::database::Database;
use crate::orm::water_bodies;
use crate::Error;

pub async fn handler(database: &Database) -> Result<Response, Error> {
    let mut connection = database.get().await?;

    let total = water_bodies::table.count().get_result::<i64>(&mut connection).await?;
    let by_kind: BTreeMap<String, i64> = water_bodies::table
        .group_by(water_bodies::kind)
        .select((water_bodies::kind, count(water_bodies::id)))
        .load::<(String, i64)>(&mut connection)
        .await?
        .into_iter()
        .collect();
    let by_pollution: BTreeMap<String, i64> = water_bodies::table
        .group_by(water_bodies::pollution)
        .select((water_bodies::pollution, count(water_bodies::id)))
        .load::<(String, i64)>(&mut connection)
        .await?
        .into_iter()
        .collect();
    let (temperature, ph, dissolved_oxygen) = water_bodies::table
        .select((
            avg(water_bodies::temperature),
            avg(water_bodies::ph),
            avg(water_bodies::dissolved_oxygen),
        ))
        .get_result::<(Option<f64>, Option<f64>, Option<f64>)>(&mut connection)
        .await?;

    tracing::info!(total, "statistics generated");
    Ok(Response {
        total,
        by_kind,
        by_pollution,
        averages: Averages::new(temperature, ph, dissolved_oxygen),
        last_updated: OffsetDateTime::now_utc(),
    })
}

pub async fn json_handler(State(database): State<Database>) -> Result<Json<Response>, Error> {
    handler(&database).await.map(Json)
}
