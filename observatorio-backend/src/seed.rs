use diesel::QueryDsl;
use diesel_async::RunQueryDsl;
use observatorio_api::water_body::{Biodiversity, Data, Kind, Pollution};

use crate::orm::water_bodies;
use crate::{Database, Error};

pub fn samples() -> Vec<Data> {
    vec![
        Data {
            name: "Río Amazonas".to_owned(),
            kind: Kind::River,
            latitude: -3.4653,
            longitude: -58.38,
            pollution: Pollution::Low,
            biodiversity: Biodiversity::High,
            description: Some("El río más caudaloso del mundo".to_owned()),
            temperature: Some(26.5),
            ph: Some(6.8),
            dissolved_oxygen: Some(7.2),
        },
        Data {
            name: "Lago Titicaca".to_owned(),
            kind: Kind::Lake,
            latitude: -15.9254,
            longitude: -69.3354,
            pollution: Pollution::Medium,
            biodiversity: Biodiversity::Medium,
            description: Some("Lago navegable más alto del mundo".to_owned()),
            temperature: Some(12.0),
            ph: Some(8.1),
            dissolved_oxygen: Some(6.5),
        },
        Data {
            name: "Océano Pacífico".to_owned(),
            kind: Kind::Ocean,
            latitude: 0.7893,
            longitude: -109.9796,
            pollution: Pollution::Medium,
            biodiversity: Biodiversity::High,
            description: Some("El océano más grande del mundo".to_owned()),
            temperature: Some(15.8),
            ph: Some(8.0),
            dissolved_oxygen: Some(8.1),
        },
    ]
}

/// Inserts the sample water bodies into an empty table, returns the number of inserted rows.
pub async fn run(database: &Database) -> Result<usize, Error> {
    let mut connection = database.get().await?;
    if water_bodies::table.count().get_result::<i64>(&mut connection).await? > 0 {
        tracing::info!("water bodies already present, skipping sample data");
        return Ok(0);
    }

    let samples = samples();
    let inserted = diesel::insert_into(water_bodies::table)
        .values(samples.iter().map(water_bodies::Data::from).collect::<Vec<_>>())
        .execute(&mut connection)
        .await?;
    tracing::info!(inserted, "sample water bodies inserted");
    Ok(inserted)
}
