pub const SERVER_NAME: &str = "observatorio";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Static map page every visitor of the frontend is sent to.
pub const MAP_PAGE: &str = "/mapa-simple.html";
