use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Request ID wrapper type for extension
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Tags each request with a generated id, available to handlers through the
/// request extensions and echoed back in the response headers
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    match HeaderValue::from_str(&request_id) {
        Ok(value) => {
            response.headers_mut().insert(X_REQUEST_ID, value);
        }
        Err(_) => {
            tracing::warn!(request_id = %request_id, "Request id not representable as header value");
        }
    }

    response
}
