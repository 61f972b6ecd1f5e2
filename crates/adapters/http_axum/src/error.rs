//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use weekday_form_domain::error::PageError;

/// Body sent whenever the page cannot be produced.
pub const INTERNAL_ERROR_BODY: &str = "internal server error";

/// Failure to produce the HTML page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The page content could not be prepared (e.g. no usable clock).
    #[error("failed to prepare page content")]
    Page(#[from] PageError),
    /// The template failed to write its output.
    #[error("failed to render page template")]
    Template(#[from] askama::Error),
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self, "page rendering failed");
        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
    }
}
