use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::WithRejection;
use diesel::{PgTextExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
pub use observatorio_api::water_body::by_kind::{Request, Response, URL};

use crate::database::Database;
use crate::orm::{self, water_bodies};
use crate::Error;

pub async fn handler(database: &Database, request: Request) -> Result<Response, Error> {
    let kind = request.kind.trim();
    if kind.is_empty() {
        return Err(Error::InvalidParameter("Kind could not be empty"));
    }

    let water_bodies = water_bodies::table
        .filter(water_bodies::kind.ilike(orm::contains(kind)))
        .select(water_bodies::WaterBody::as_select())
        .order_by(water_bodies::id)
        .load(&mut database.get().await?)
        .await?;
    tracing::info!(kind, count = water_bodies.len(), "water bodies filtered by kind");
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
    use observatorio_api::water_body::Kind;
    use rstest::rstest;

    use super::*;
    use crate::seed;
    use crate::test::{offline, Mock};

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[tokio::test]
    async fn test_blank_kind(#[case] kind: &str) {
        let error = handler(&offline(), Request { kind: kind.to_owned() }).await.unwrap_err();
        assert!(matches!(error, Error::InvalidParameter(_)));
    }

    #[rstest]
    #[case("lago", &[Kind::Lake])]
    #[case(" LAGO ", &[Kind::Lake])]
    #[case("o", &[Kind::River, Kind::Lake, Kind::Ocean])]
    #[case("embalse", &[])]
    #[case("%", &[])]
    #[tokio::test]
    #[ignore = "requires a PostgreSQL server at DATABASE_URL"]
    async fn test_by_kind(#[case] kind: &str, #[case] expected: &[Kind]) {
        let mock = Mock::new().await.unwrap();
        seed::run(mock.database()).await.unwrap();

        let response =
            handler(mock.database(), Request { kind: kind.to_owned() }).await.unwrap();
        assert_eq!(
            response.iter().map(|water_body| water_body.data.kind).collect::<Vec<_>>(),
            expected
        );
    }
}
