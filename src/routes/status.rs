use axum::{extract::Request, http::StatusCode};
use tracing::debug;

use crate::exchange::{JsonResponse, RequestDescriptor, ResponseSink};
use crate::models::status::ResponseBody;

pub fn respond<R, S>(request: &R, response: &mut S)
where
    R: RequestDescriptor + ?Sized,
    S: ResponseSink + ?Sized,
{
    response.status(StatusCode::OK);
    let body = ResponseBody::now(request.http_method());
    response.json(body.into());
}

pub async fn handler(request: Request) -> JsonResponse {
    let mut response = JsonResponse::default();
    respond(&request, &mut response);
    debug!(method = %request.method(), uri = %request.uri(), "Status handler is run");
    response
}
