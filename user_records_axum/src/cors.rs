use http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build the CORS layer for the allow-listed origins.
///
/// Credentials are allowed, so methods and headers are mirrored from the
/// preflight request instead of answered with `*`, which browsers reject in
/// combination with credentials. A `*` entry in the origin list is ignored
/// for the same reason.
pub(crate) fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter(|origin| {
            if origin.as_str() == "*" {
                tracing::warn!("Ignoring wildcard CORS origin; list origins explicitly");
                return false;
            }
            true
        })
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    tracing::debug!(count = origins.len(), "CORS allow-list configured");

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
