use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::{PgTextExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
pub use observatorio_api::water_body::create::{Request, Response, URL};

use crate::database::Database;
use crate::orm::{self, water_bodies};
use crate::Error;

pub async fn handler(database: &Database, request: Request) -> Result<Response, Error> {
    request.validate().map_err(Error::InvalidPayload)?;

    let mut connection = database.get().await?;
    let exists = water_bodies::table
        .filter(water_bodies::name.ilike(orm::escape_like(&request.name)))
        .count()
        .get_result::<i64>(&mut connection)
        .await?
        > 0;
    if exists {
        return Err(Error::Conflict(request.name));
    }

    let water_body = diesel::insert_into(water_bodies::table)
        .values(water_bodies::Data::from(&request))
        .returning(water_bodies::WaterBody::as_returning())
        .get_result(&mut connection)
        .await
        .map_err(|error| match error {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                Error::Conflict(request.name.clone())
            }
            error => error.into(),
        })?;
    tracing::info!(id = water_body.id, name = %water_body.data.name, "water body created");
    water_body.try_into()
}

pub async fn json_handler(
    State(database): State<Database>,
    WithRejection(Json(request), _): WithRejection<Json<Request>, Error>,
) -> Result<(StatusCode, Json<Response>), Error> {
    let response = handler(&database, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
