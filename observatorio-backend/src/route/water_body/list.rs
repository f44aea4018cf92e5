use axum::extract::State;
use axum::Json;
use diesel::{QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
pub use observatorio_api::water_body::list::{Response, URL};

use crate::database::Database;
use crate::orm::water_bodies;
use crate::Error;

pub async fn handler(database: &Database) -> Result<Response, Error> {
    let water_bodies = water_bodies::table
        .select(water_bodies::WaterBody::as_select())
        .order_by(water_bodies::id)
        .load(&mut database.get().await?)
        .await?;
    tracing::info!(count = water_bodies.len(), "water bodies listed");
    water_bodies::into_api(water_bodies)
}

pub async fn json_handler(State(database): State<Database>) -> Result<Json<Response>, Error> {
    handler(&database).await.map(Json)
}
