//! Optional Axum route handlers for serving the guide grid stylesheet.
//!
//! Enable with `features = ["axum"]` in Cargo.toml.
//!
//! # Usage
//!
//! ```ignore
//! use axum::routing::get;
//!
//! let app = axum::Router::new()
//!     .route("/static/css/guide-grid.css", get(guide_render::serve::grid_css));
//! ```

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Serve the generated `ug-grid-*` stylesheet with CSS content type and
/// cache headers.
pub async fn grid_css() -> Response {
    css_response(crate::grid::grid_css())
}

fn css_response(css: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        css,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_css_with_headers() {
        let response = grid_css().await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/css; charset=utf-8"
        );
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=86400"
        );
    }
}
