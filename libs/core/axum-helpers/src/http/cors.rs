use tower_http::cors::CorsLayer;

/// CORS layer for a public marketing-site API.
///
/// Any origin, method and header is accepted and credentials are allowed.
/// Origin, methods and headers are mirrored from the request, since a
/// literal `*` cannot be combined with credentials.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}
