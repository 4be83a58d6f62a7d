// HTTP request handlers
use crate::domain::dashboard::DashboardDescriptor;
use crate::domain::page::Page;
use crate::error::HubError;
use crate::infrastructure::chunked_html::stream_from_receiver;
use crate::presentation::app_state::AppState;
use crate::presentation::session_cookie::{read_state, store_state};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct PageSummary {
    pub slug: &'static str,
    pub label: &'static str,
    pub embed: Option<DashboardDescriptor>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Landing route, renders the overview
pub async fn index(jar: CookieJar, State(state): State<Arc<AppState>>) -> Response {
    render_page(&state, jar, Page::Overview)
}

/// Render the page named by the slug (progressive loading)
pub async fn show_page(
    Path(slug): Path<String>,
    jar: CookieJar,
    State(state): State<Arc<AppState>>,
) -> Result<Response, HubError> {
    let page: Page = slug.parse()?;
    Ok(render_page(&state, jar, page))
}

/// List the navigation set with its embed descriptors
pub async fn list_pages() -> Json<Vec<PageSummary>> {
    let pages = Page::ALL
        .into_iter()
        .map(|page| PageSummary {
            slug: page.slug(),
            label: page.label(),
            embed: DashboardDescriptor::for_page(page),
        })
        .collect();

    Json(pages)
}

fn render_page(state: &AppState, jar: CookieJar, page: Page) -> Response {
    let previous = read_state(&jar);
    let cycle = state.shell.render(previous, page);

    if let Some(toast) = &cycle.transition {
        tracing::info!(page = page.slug(), "{}", toast.text);
    }

    let jar = store_state(jar, &cycle.state);
    let rx = state.streaming_service.stream_page(cycle);

    (jar, stream_from_receiver(rx)).into_response()
}
