pub mod config;
mod database;
mod error;
pub mod migration;
mod orm;
mod route;
mod schema;
pub mod seed;

pub use database::Database;
pub use error::Error;
pub use route::build;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[cfg(test)]
mod test;

pub fn init_tracing(config: &config::Log) -> Result<(), color_eyre::Report> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(concat!(env!("CARGO_CRATE_NAME"), "=info,tower_http=info"))
    });
    let registry =
        tracing_subscriber::registry().with(filter).with(tracing_error::ErrorLayer::default());

    match (config.format, config.time) {
        (config::log::Format::Plain, true) => registry.with(fmt::layer()).try_init(),
        (config::log::Format::Plain, false) => registry.with(fmt::layer().without_time()).try_init(),
        (config::log::Format::Json, true) => registry.with(fmt::layer().json()).try_init(),
        (config::log::Format::Json, false) => {
            registry.with(fmt::layer().json().without_time()).try_init()
        }
    }?;
    Ok(())
}
