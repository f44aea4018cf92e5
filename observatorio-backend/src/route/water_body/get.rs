use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::WithRejection;
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
pub use observatorio_api::water_body::get::{Request, Response, URL};

use crate::database::Database;
use crate::orm::water_bodies;
use crate::Error;

pub async fn handler(database: &Database, request: Request) -> Result<Response, Error> {
    if request.id <= 0 {
        return Err(Error::InvalidParameter("Id must be a positive number"));
    }

    let water_body = water_bodies::table
        .filter(water_bodies::id.eq(request.id))
        .select(water_bodies::WaterBody::as_select())
        .first(&mut database.get().await?)
        .await
        .optional()?
        .ok_or(Error::NotFound(request.id))?;
    tracing::info!(name = %water_body.data.name, "water body retrieved");
    water_body.try_into()
}

pub async fn json_handler(
    State(database): State<Database>,
    WithRejection(Path(request), _): WithRejection<Path<Request>, Error>,
) -> Result<Json<Response>, Error> {
    handler(&database, request).await.map(Json)
}
