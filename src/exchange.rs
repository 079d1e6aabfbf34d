//! Capabilities a handler needs from its host: something that names the
//! request method, and somewhere to write a status and a JSON body.

use axum::{
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

#[cfg(test)]
use mockall::automock;

pub trait RequestDescriptor {
    fn http_method(&self) -> Option<&str>;
}

#[cfg_attr(test, automock)]
pub trait ResponseSink {
    fn status(&mut self, code: StatusCode);
    fn json(&mut self, body: Value);
}

impl<B> RequestDescriptor for Request<B> {
    fn http_method(&self) -> Option<&str> {
        Some(self.method().as_str())
    }
}

/// Sink backing the axum adapter. Starts out as an empty `200 OK`.
#[derive(Debug, Default)]
pub struct JsonResponse {
    status: StatusCode,
    body: Option<Value>,
}

impl JsonResponse {
    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

impl ResponseSink for JsonResponse {
    fn status(&mut self, code: StatusCode) {
        self.status = code;
    }

    fn json(&mut self, body: Value) {
        self.body = Some(body);
    }
}

impl IntoResponse for JsonResponse {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, Method};
    use serde_json::json;

    #[test]
    fn test_request_exposes_method_verbatim() {
        let request = Request::builder()
            .method(Method::from_bytes(b"purge").unwrap())
            .body(())
            .unwrap();

        assert_eq!(request.http_method(), Some("purge"));
    }

    #[test]
    fn test_json_response_defaults_to_ok() {
        let response = JsonResponse::default();

        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(response.body().is_none());
    }

    #[test]
    fn test_json_response_into_response() {
        let mut sink = JsonResponse::default();
        sink.status(StatusCode::ACCEPTED);
        sink.json(json!({ "a": 1 }));

        let response = sink.into_response();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
