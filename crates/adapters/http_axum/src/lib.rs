//! # weekday-form-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Render the **sample form page** server-side with an askama template
//!   (`templates/form.html`), zero JavaScript
//! - Serve it at `GET /` with `Cache-Control: no-store`, since the day field
//!   changes at midnight
//! - Expose `GET /health` for liveness probes
//! - Map rendering failures into a generic `500` response
//!
//! The form posts to an external handler; nothing here accepts the submission.
//!
//! ## Dependency rule
//! Depends on `weekday-form-app` (for the clock port and page service) and
//! `weekday-form-domain` (for the form model). Never leaks axum types into the
//! domain.

pub mod error;
pub mod page;
pub mod router;
pub mod state;
