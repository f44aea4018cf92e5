use diesel_async::pooled_connection::{deadpool, AsyncDieselConnectionManager};
use diesel_async::AsyncPgConnection;

use crate::Error;

type Connection = AsyncDieselConnectionManager<AsyncPgConnection>;
type Pool = deadpool::Pool<AsyncPgConnection>;

#[derive(Clone)]
pub struct Database {
    pool: Pool,
}

impl Database {
    /// Builds the connection pool, no connection is opened until the first checkout.
    pub fn new(config: &crate::config::Database) -> Result<Self, Error> {
        let pool = Pool::builder(Connection::new(&config.url))
            .build()
            .map_err(color_eyre::Report::new)?;
        Ok(Self { pool })
    }

    pub async fn get(&self) -> Result<deadpool::Object<AsyncPgConnection>, Error> {
        self.pool.get().await.map_err(|error| {
            tracing::error!(%error, "could not checkout a database connection");
            Error::CheckoutConnectionPool
        })
    }
}
