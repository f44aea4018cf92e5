use color_eyre::eyre::eyre;
use diesel::Connection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_async::AsyncPgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::Error;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub async fn run(database_url: &str) -> Result<(), Error> {
    let database_url = database_url.to_owned();
    tokio::task::spawn_blocking(move || -> Result<(), Error> {
        let mut async_wrapper =
            AsyncConnectionWrapper::<AsyncPgConnection>::establish(&database_url)?;

        for migration in async_wrapper.pending_migrations(MIGRATIONS).map_err(|e| eyre!(e))? {
            tracing::info!(pending_migration =% migration.name());
            async_wrapper.run_migration(&migration).map_err(|e| eyre!(e))?;
        }
        tracing::info!("migration done");
        Ok(())
    })
    .await?
}
