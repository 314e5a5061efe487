//! Route table and request handlers.

use axum::Router;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::AppState;
use crate::constants::USERS_PATH;
use crate::models::SortKey;
use crate::pages;

/// Query string accepted by the listing page.
#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    #[serde(rename = "sortOrder", default)]
    pub sort_order: SortKey,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing))
        .route(USERS_PATH, get(users))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn landing() -> Html<String> {
    Html(pages::landing_page())
}

/// A query string that fails to parse at all (e.g. a repeated
/// `sortOrder`) is treated like an absent one.
async fn users(
    State(state): State<AppState>,
    query: Result<Query<UsersQuery>, QueryRejection>,
) -> Response {
    let sort_order = query.map(|Query(q)| q.sort_order).unwrap_or_default();

    match pages::users_page(state.source.as_ref(), state.options, sort_order).await {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            warn!(error = %err, %sort_order, "failed to load users");
            (StatusCode::BAD_GATEWAY, Html(pages::fetch_error_page())).into_response()
        }
    }
}

async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(pages::not_found_page()))
}
