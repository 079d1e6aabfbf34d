pub mod config;
pub mod error;
pub mod exchange;
pub mod logging;
pub mod models;
pub mod routes;

use axum::Router;
use lambda_http::{run, Error};
use tracing::info;

use crate::config::Config;
use crate::routes::status;

/// Every path and method lands on the status handler.
pub fn create_app() -> Router {
    Router::new().fallback(status::handler)
}

pub async fn run_app(config: Config) -> Result<(), Error> {
    logging::init_logger(&config)?;
    info!(environment = ?config.environment, "Starting status lambda");
    let app = create_app();
    run(app).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status::ResponseBody;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn call(method: &str, uri: &str) -> (StatusCode, Option<String>, ResponseBody) {
        let response = create_app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ResponseBody = serde_json::from_slice(&bytes).unwrap();

        (status, content_type, body)
    }

    #[tokio::test]
    async fn test_get_root() {
        let (status, content_type, body) = call("GET", "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body.message, "Funcionando!");
        assert_eq!(body.method.as_deref(), Some("GET"));
    }

    #[tokio::test]
    async fn test_post_any_path() {
        let (status, _, body) = call("POST", "/api/whatever?x=1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.method.as_deref(), Some("POST"));
    }

    #[tokio::test]
    async fn test_extension_method() {
        let (status, _, body) = call("PURGE", "/cache").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.method.as_deref(), Some("PURGE"));
    }
}
