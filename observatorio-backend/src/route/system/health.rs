use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use diesel_async::RunQueryDsl;
pub use observatorio_api::system::health::{Response, URL};
use observatorio_api::{constant, system};
use time::OffsetDateTime;

use crate::database::Database;
use crate::Error;

async fn ping(database: &Database) -> Result<(), Error> {
    diesel::sql_query("SELECT 1").execute(&mut database.get().await?).await?;
    Ok(())
}

pub async fn handler(database: &Database) -> Response {
    let timestamp = OffsetDateTime::now_utc();
    match ping(database).await {
        Ok(()) => Response::Healthy {
            timestamp,
            version: constant::SERVER_VERSION.to_owned(),
            database: system::health::Database::Connected,
            message: "System is operating normally".to_owned(),
        },
        Err(error) => {
            tracing::error!(%error, "health check failed");
            Response::Unhealthy {
                timestamp,
                database: system::health::Database::Disconnected,
                error: "Could not connect to the database".to_owned(),
            }
        }
    }
}

pub async fn json_handler(State(database): State<Database>) -> (StatusCode, Json<Response>) {
    let response = handler(&database).await;
    let status =
        if response.is_healthy() { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status, Json(response))
}
