//! Shared application state for axum handlers.

use std::sync::Arc;

use weekday_form_app::ports::Clock;
use weekday_form_app::services::page_service::PageService;

/// Page title used when none is configured.
pub const DEFAULT_TITLE: &str = "Sample Form";

/// Application state shared across all axum handlers.
///
/// Generic over the clock to avoid dynamic dispatch.
/// `Clone` is implemented manually so the clock itself does not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<C> {
    /// Builds the form for the current instant.
    pub page_service: Arc<PageService<C>>,
    /// Document `<title>`.
    pub title: Arc<str>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            page_service: Arc::clone(&self.page_service),
            title: Arc::clone(&self.title),
        }
    }
}

impl<C> AppState<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(page_service: PageService<C>, title: impl Into<Arc<str>>) -> Self {
        Self {
            page_service: Arc::new(page_service),
            title: title.into(),
        }
    }
}
