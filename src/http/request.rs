//! Request identity middleware.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4)
//! - Attach it as early as possible so log lines correlate
//! - Echo it back to the client on the response
//!
//! # Design Decisions
//! - UUID v4: no coordination needed, collision odds negligible
//! - The header name matches what proxies conventionally forward

use axum::http::Request;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request id.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Produces a fresh UUID v4 per incoming request.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_ids_are_unique_per_request() {
        let mut maker = MakeRequestUuid;
        let req = Request::builder().body(Body::empty()).unwrap();

        let a = maker.make_request_id(&req).unwrap();
        let b = maker.make_request_id(&req).unwrap();
        assert_ne!(a.header_value(), b.header_value());
    }
}
