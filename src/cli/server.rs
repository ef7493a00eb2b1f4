//! HTTP server mode for REST access to the paginated dataset

use axum::{
    extract::{rejection::QueryRejection, OriginalUri, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::pagination::{HyperPage, PageLinks};
use crate::server::PaginationServer;
use crate::source::DatasetSource;
use crate::types::{PageNumber, PageSize};

/// Pagination server over any boxed source
pub type SharedPager = PaginationServer<Box<dyn DatasetSource>>;

/// App state shared across handlers
pub struct AppState {
    config: AppConfig,
    pager: SharedPager,
}

impl AppState {
    /// Create handler state from a config and a pagination server
    pub fn new(config: AppConfig, pager: SharedPager) -> Self {
        Self { config, pager }
    }

    /// Create handler state reading the CSV file named by the config
    pub fn from_config(config: AppConfig) -> Self {
        let source: Box<dyn DatasetSource> = Box::new(config.source());
        let pager = PaginationServer::with_header(source, config.has_header);
        Self::new(config, pager)
    }

    /// The pagination server behind the handlers
    pub fn pager(&self) -> &SharedPager {
        &self.pager
    }

    /// Resolve query parameters against configured defaults and limits
    fn resolve(&self, query: &PageQuery) -> Result<(PageNumber, PageSize)> {
        let page = query
            .page
            .map_or(Ok(PageNumber::FIRST), PageNumber::try_from_i64)?;
        let page_size = self.resolve_page_size(query.page_size)?;
        Ok((page, page_size))
    }

    fn resolve_page_size(&self, page_size: Option<i64>) -> Result<PageSize> {
        let page_size = page_size.map_or(Ok(self.config.default_page_size), PageSize::try_from_i64)?;
        self.config.check_page_size(page_size)?;
        Ok(page_size)
    }
}

/// Query string for page endpoints
#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    #[serde(default)]
    page: Option<i64>,
    #[serde(default)]
    page_size: Option<i64>,
}

/// Query string for the info endpoint
#[derive(Debug, Default, Deserialize)]
struct InfoQuery {
    #[serde(default)]
    page_size: Option<i64>,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Hypermedia page with navigation URLs
#[derive(Debug, Serialize)]
struct HyperBody {
    #[serde(flatten)]
    page: HyperPage,
    links: PageLinks,
}

/// Build the router for the pagination endpoints
pub fn router(state: Arc<AppState>) -> Router {
    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .route("/page", get(get_page))
        .route("/hyper", get(get_hyper))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server
///
/// The dataset is loaded before the port is bound, so a missing data file
/// fails startup instead of the first request.
pub async fn serve(config: AppConfig) -> Result<()> {
    let port = config.port;
    let state = AppState::from_config(config);

    let records = state.pager.preload()?;
    tracing::info!(records, "Dataset ready");

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::server(format!("Failed to bind to port {port}: {e}")))?;

    serve_with_listener(listener, Arc::new(state)).await
}

/// Serve on an already bound listener
pub async fn serve_with_listener(listener: TcpListener, state: Arc<AppState>) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("Starting HTTP server on http://{}", addr);

    axum::serve(listener, router(state))
        .await
        .map_err(|e| Error::server(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Dataset size and page count
async fn info(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<InfoQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return rejection_response(&e),
    };

    let result = with_pager(state, move |state| {
        let page_size = state.resolve_page_size(query.page_size)?;
        let total_items = state.pager.total_items()?;
        let total_pages = state.pager.total_pages(page_size)?;
        Ok(json!({
            "total_items": total_items,
            "total_pages": total_pages,
            "page_size": page_size
        }))
    })
    .await;

    match result {
        Ok(body) => (StatusCode::OK, Json(ApiResponse::success(body))).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Raw page of records
async fn get_page(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<PageQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return rejection_response(&e),
    };

    let result = with_pager(state, move |state| {
        let (page, page_size) = state.resolve(&query)?;
        state.pager.get_page(page, page_size)
    })
    .await;

    match result {
        Ok(records) => (StatusCode::OK, Json(ApiResponse::success(records))).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Page with hypermedia metadata and a `Link` header
///
/// Links are built from the request path, so they stay valid when the
/// router is nested under a prefix.
async fn get_hyper(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    query: std::result::Result<Query<PageQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return rejection_response(&e),
    };

    let result = with_pager(state, move |state| {
        let (page, page_size) = state.resolve(&query)?;
        state.pager.get_hyper(page, page_size)
    })
    .await;

    match result {
        Ok(page) => {
            let links = page.links(uri.path());
            let link_header = links.link_header();
            (
                StatusCode::OK,
                [(header::LINK, link_header)],
                Json(ApiResponse::success(HyperBody { page, links })),
            )
                .into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// Run pager work on the blocking pool; a first access may read the data file
async fn with_pager<T, F>(state: Arc<AppState>, f: F) -> Result<T>
where
    F: FnOnce(&AppState) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&state))
        .await
        .map_err(|e| Error::server(format!("Request task failed: {e}")))?
}

fn error_response(err: &Error) -> Response {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        tracing::error!(error = %err, "Request failed");
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(ApiResponse::<()>::error(err.to_string()))).into_response()
}

fn rejection_response(rejection: &QueryRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(format!(
            "Invalid query: {}",
            rejection.body_text()
        ))),
    )
        .into_response()
}
