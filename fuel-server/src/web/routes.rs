//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;

use crate::search;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/stations/suggest", get(suggest_states))
        .route("/api/facets", get(facets))
        .route("/api/stats", get(stats))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form and filter selects.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let directory = &state.directory;
    let template = IndexTemplate {
        total: directory.len(),
        states: directory.states().iter().map(|s| s.to_string()).collect(),
        categories: directory
            .categories()
            .iter()
            .map(|c| c.to_string())
            .collect(),
        brands: directory.brands().iter().map(|b| b.to_string()).collect(),
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Search and filter the station list.
///
/// Unknown filter values are not an error: they simply match nothing, and
/// the "all" sentinel (or an absent parameter) leaves a criterion
/// unconstrained.
async fn list_stations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<StationQuery>,
) -> Result<Response, AppError> {
    let visible = search::visible_stations(
        state.directory.stations(),
        req.q.as_deref().unwrap_or(""),
        req.state.as_deref(),
        req.category.as_deref(),
        req.brand.as_deref(),
        &state.config,
    );

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = StationListTemplate {
            count: visible.len(),
            stations: visible.iter().map(|s| StationView::from_station(s)).collect(),
        };
        let html = template.render().map_err(|e| AppError {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        let stations: Vec<StationResult> = visible
            .iter()
            .map(|s| StationResult::from_station(s))
            .collect();

        Ok(Json(StationListResponse {
            count: stations.len(),
            stations,
        })
        .into_response())
    }
}

/// Suggest state completions for a partial query.
async fn suggest_states(
    State(state): State<AppState>,
    Query(req): Query<SuggestQuery>,
) -> Json<SuggestResponse> {
    Json(SuggestResponse {
        suggestions: search::suggestions(&req.q, &state.config),
    })
}

/// The distinct filter choices present in the dataset.
async fn facets(State(state): State<AppState>) -> Json<FacetsResponse> {
    let directory = &state.directory;
    Json(FacetsResponse {
        states: directory.states().iter().map(|s| s.to_string()).collect(),
        categories: directory
            .categories()
            .iter()
            .map(|c| c.to_string())
            .collect(),
        brands: directory.brands().iter().map(|b| b.to_string()).collect(),
    })
}

/// Summary counts for the loaded snapshot.
async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from_stats(&state.directory.stats()))
}

/// Application error type.
///
/// The pipeline itself is total, so the only failure mode left in the web
/// layer is template rendering.
#[derive(Debug)]
pub struct AppError {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(message = %self.message, "request failed");

        let body = Json(ErrorResponse {
            error: self.message,
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
