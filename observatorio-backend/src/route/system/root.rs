use axum::Json;
pub use observatorio_api::system::root::{Response, URL};

pub async fn handler() -> Response {
    Response { message: "Welcome to the Observatorio de Aguas API".to_owned() }
}

pub async fn json_handler() -> Json<Response> {
    Json(handler().await)
}
