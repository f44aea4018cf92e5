mod database;
pub mod log;
mod server;

pub use database::Database;
use figment::providers::{Env, Serialized};
use figment::Figment;
pub use log::Log;
use observatorio_api::constant;
use serde::Deserialize;
pub use server::Server;

/// Unprefixed environment variables accepted for compatibility with older deployments.
const ALIASES: &[(&str, &str)] = &[
    ("DATABASE_URL", "database.url"),
    ("API_HOST", "server.host"),
    ("API_PORT", "server.port"),
];

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: Server,
    pub database: Database,
    pub log: Log,
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Env::raw().filter_map(|key| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| key.as_str().eq_ignore_ascii_case(alias))
                    .map(|(_, path)| (*path).into())
            }))
            .merge(
                Env::prefixed(const_format::concatcp!(constant::SERVER_NAME, "_")).split("__"),
            )
            .join(Serialized::default("server", Server::default()))
            .join(Serialized::default("log", Log::default()))
    }
}
