use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use engine::loader::load_catalog;
use engine::{CatalogEntry, EngineConfig, EngineError, FitStats, Recommendation, RecommendationIndex};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path as FsPath, PathBuf};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct RecommendParams {
    pub title: String,
    #[serde(default = "default_k")]
    pub k: i64,
}
fn default_k() -> i64 { 5 }

#[derive(Serialize)]
pub struct RecommendResponse {
    pub query: String,
    pub took_s: f64,
    pub results: Vec<Recommendation>,
}

#[derive(Clone)]
pub struct AppState {
    /// Published snapshot. Readers clone the inner Arc and drop the lock before ranking.
    pub index: Arc<RwLock<Arc<RecommendationIndex>>>,
    pub catalog_path: PathBuf,
    pub config: EngineConfig,
    pub admin_token: Option<String>,
}

impl AppState {
    fn snapshot(&self) -> Arc<RecommendationIndex> { self.index.read().clone() }
}

/// Maps engine errors onto HTTP responses with a JSON `{"error": ...}` body.
pub struct ApiError(StatusCode, String);

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let status = match err {
            EngineError::NotFound { .. } => StatusCode::NOT_FOUND,
            EngineError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(serde_json::json!({ "error": self.1 }))).into_response()
    }
}

fn load_index(path: &FsPath, config: &EngineConfig) -> Result<RecommendationIndex, EngineError> {
    let catalog = load_catalog(path)?;
    RecommendationIndex::load(catalog, config)
}

pub fn build_app(catalog_path: impl Into<PathBuf>, config: EngineConfig) -> Result<Router> {
    let catalog_path = catalog_path.into();
    let index = load_index(&catalog_path, &config)?;
    let admin_token = std::env::var("ADMIN_TOKEN").ok();
    let app_state = AppState { index: Arc::new(RwLock::new(Arc::new(index))), catalog_path, config, admin_token };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/recommend", get(recommend_handler))
        .route("/movie/:id", get(movie_handler))
        .route("/stats", get(stats_handler))
        .route("/index/reload", post(reload_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);
    Ok(app)
}

pub async fn recommend_handler(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let start = std::time::Instant::now();
    let index = state.snapshot();
    let title = params.title.clone();
    // on-demand rows cost one cosine per catalog entry; keep them off the async workers
    let results = tokio::task::spawn_blocking(move || index.recommend(&title, params.k))
        .await
        .map_err(|e| ApiError(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))??;
    Ok(Json(RecommendResponse { query: params.title, took_s: start.elapsed().as_secs_f64(), results }))
}

pub async fn movie_handler(State(state): State<AppState>, Path(id): Path<u32>) -> Result<Json<CatalogEntry>, ApiError> {
    let index = state.snapshot();
    match index.entry(id) {
        Some(entry) => Ok(Json(entry.clone())),
        None => Err(ApiError(StatusCode::NOT_FOUND, format!("no movie with id {id}"))),
    }
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<FitStats> {
    Json(state.snapshot().stats().clone())
}

/// Full rebuild from the catalog path. The previous snapshot keeps serving until
/// the new one is complete, and stays live if the rebuild fails.
async fn reload_handler(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<FitStats>, ApiError> {
    authorize(&state, &headers)?;
    let path = state.catalog_path.clone();
    let config = state.config.clone();
    let rebuilt = tokio::task::spawn_blocking(move || load_index(&path, &config))
        .await
        .map_err(|e| ApiError(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    let index = match rebuilt {
        Ok(index) => index,
        Err(e) => {
            tracing::error!(error = %e, "reload failed; keeping previous index");
            return Err(e.into());
        }
    };
    let stats = index.stats().clone();
    *state.index.write() = Arc::new(index);
    tracing::info!(entries = stats.entries, "published rebuilt index");
    Ok(Json(stats))
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let required = match &state.admin_token {
        Some(t) => t,
        None => return Err(ApiError(StatusCode::UNAUTHORIZED, "ADMIN_TOKEN not set".into())),
    };
    let provided = headers.get("X-ADMIN-TOKEN").and_then(|v| v.to_str().ok()).unwrap_or("");
    if provided == required {
        Ok(())
    } else {
        Err(ApiError(StatusCode::UNAUTHORIZED, "invalid admin token".into()))
    }
}
