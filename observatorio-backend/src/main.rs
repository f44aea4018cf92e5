use mimalloc::MiMalloc;
use observatorio_api::constant;
use observatorio_backend::{build, config, init_tracing, migration, seed, Database};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = config::Config::new()?;
    init_tracing(&config.log)?;
    tracing::info!(server_version =% constant::SERVER_VERSION);
    tracing::info!("{config:#?}");

    migration::run(&config.database.url).await?;
    let database = Database::new(&config.database)?;
    if config.database.seed {
        seed::run(&database).await?;
    }
    if let Some(path) = config.server.missing_map_page().await {
        tracing::warn!(path =% path.display(), "map page is missing from frontend directory");
    }

    let address = config.server.to_socket_addr();
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!(%address, "listening");
    axum::serve(listener, build(&config.server, database)).await?;
    Ok(())
}
