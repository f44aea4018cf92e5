use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use educe::Educe;
use observatorio_api::constant;
use serde::{Deserialize, Serialize};
use serde_with::formats::SpaceSeparator;
use serde_with::{serde_as, StringWithSeparator};

#[serde_as]
#[derive(Debug, Serialize, Deserialize, Educe)]
#[educe(Default)]
pub struct Server {
    #[educe(Default(expression = IpAddr::V4(Ipv4Addr::UNSPECIFIED)))]
    pub host: IpAddr,
    #[educe(Default(expression = 8000))]
    pub port: u16,
    /// Directory of the built frontend, served for every path the api does not handle.
    pub frontend_dir: Option<PathBuf>,
    #[serde_as(as = "StringWithSeparator::<SpaceSeparator, String>")]
    #[educe(Default(expression = vec!["http://localhost:5173".to_owned()]))]
    pub cors_origins: Vec<String>,
}

impl Server {
    pub fn to_socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Path of the page the frontend redirects to, when the frontend directory cannot serve it.
    #[must_use]
    pub async fn missing_map_page(&self) -> Option<PathBuf> {
        let path = self.frontend_dir.as_ref()?.join(constant::MAP_PAGE.trim_start_matches('/'));
        (!tokio::fs::try_exists(&path).await.unwrap_or_default()).then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_map_page() {
        let dir = tempfile::tempdir().unwrap();
        let server = Server { frontend_dir: Some(dir.path().to_owned()), ..Server::default() };
        assert_eq!(server.missing_map_page().await, Some(dir.path().join("mapa-simple.html")));

        tokio::fs::write(dir.path().join("mapa-simple.html"), "<html></html>").await.unwrap();
        assert_eq!(server.missing_map_page().await, None);
    }

    #[tokio::test]
    async fn test_missing_map_page_without_frontend() {
        assert_eq!(Server::default().missing_map_page().await, None);
    }
}
