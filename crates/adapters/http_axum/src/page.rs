//! The sample form page.

use askama::Template;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};

use weekday_form_app::ports::Clock;
use weekday_form_app::services::page_service::PageService;
use weekday_form_domain::form::FormField;

use crate::error::RenderError;
use crate::state::AppState;

/// Form page template.
#[derive(Template)]
#[template(path = "form.html")]
struct FormPageTemplate<'a> {
    title: &'a str,
    action: &'a str,
    fields: [FormField; 3],
}

/// Render the complete HTML document for the current instant.
///
/// # Errors
///
/// Returns [`RenderError`] when the clock cannot be read or the template
/// fails to write.
pub fn render_page<C: Clock>(
    service: &PageService<C>,
    title: &str,
) -> Result<String, RenderError> {
    let form = service.form()?;
    let template = FormPageTemplate {
        title,
        action: form.action(),
        fields: form.fields(),
    };
    Ok(template.render()?)
}

/// Rendered page, always sent uncached.
pub struct FormPage(String);

impl IntoResponse for FormPage {
    fn into_response(self) -> Response {
        ([(header::CACHE_CONTROL, "no-store")], Html(self.0)).into_response()
    }
}

/// `GET /` — the form with today's weekday pre-filled.
///
/// # Errors
///
/// Responds with `500` when the page cannot be rendered.
pub async fn index<C>(State(state): State<AppState<C>>) -> Result<FormPage, RenderError>
where
    C: Clock + Send + Sync + 'static,
{
    render_page(&state.page_service, &state.title).map(FormPage)
}
