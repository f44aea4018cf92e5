use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::WithRejection;
use diesel::{PgTextExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
pub use observatorio_api::water_body::search::{Request, Response, MIN_TERM_LENGTH, URL};

use crate::database::Database;
use crate::orm::{self, water_bodies};
use crate::Error;

pub async fn handler(database: &Database, request: Request) -> Result<Response, Error> {
    let term = request.term.trim();
    if term.is_empty() {
        return Err(Error::InvalidParameter("Search term could not be empty"));
    }
    if term.chars().count() < MIN_TERM_LENGTH {
        return Err(Error::InvalidParameter("Search term must have at least 2 characters"));
    }

    let water_bodies = water_bodies::table
        .filter(water_bodies::name.ilike(orm::contains(term)))
        .select(water_bodies::WaterBody::as_select())
        .order_by(water_bodies::id)
        .load(&mut database.get().await?)
        .await?;
    tracing::info!(term, count = water_bodies.len(), "water bodies searched");
    water_bodies::into_api(water_bodies)
}

pub async fn json_handler(
    State(database): State<Database>,
    WithRejection(Path(request), _): WithRejection<Path<Request>, Error>,
) -> Result<Json<Response>, Error> {
    handler(&database, request).await.map(Json)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::StatusCode;
    use rstest::rstest;
    use tower::ServiceExt;

    use super::*;
    use crate::test::{offline, Mock};
    use crate::{config, route, seed};

    #[rstest]
    #[case("/cuerpos-agua/buscar/a")]
    #[case("/cuerpos-agua/buscar/%20a%20")]
    #[case("/cuerpos-agua/buscar/%20%20")]
    #[tokio::test]
    async fn test_invalid_term(#[case] uri: &str) {
        let response = route::build(&config::Server::default(), offline())
            .oneshot(axum::http::Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[case("titi", &["Lago Titicaca"])]
    #[case("AMAZONAS", &["Río Amazonas"])]
    #[case("ama", &["Río Amazonas"])]
    #[case("del", &[])]
    #[tokio::test]
    #[ignore = "requires a PostgreSQL server at DATABASE_URL"]
    async fn test_search(#[case] term: &str, #[case] expected: &[&str]) {
        let mock = Mock::new().await.unwrap();
        seed::run(mock.database()).await.unwrap();

        let response =
            handler(mock.database(), Request { term: term.to_owned() }).await.unwrap();
        assert_eq!(
            response.iter().map(|water_body| water_body.data.name.as_str()).collect::<Vec<_>>(),
            expected
        );
    }
}
