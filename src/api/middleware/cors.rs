//! Cross-origin policy.

use tower_http::cors::CorsLayer;

/// Permissive CORS: any origin, credentials allowed.
///
/// Browsers refuse `Access-Control-Allow-Origin: *` together with
/// credentials, so the request's `Origin`, method and headers are mirrored
/// back instead of using a wildcard. Preflight requests are answered with
/// `200 OK`.
pub fn layer() -> CorsLayer {
    CorsLayer::very_permissive()
}
