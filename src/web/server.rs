use axum::http::header;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::cli::ServeArgs;
use crate::core::types::PokemonNumber;
use crate::fetch::load_store;
use crate::render::{Browser, BrowserEvent, ViewUpdate};

/// Longest accepted search or type parameter
pub const MAX_QUERY_LEN: usize = 64;

/// Shared application state
pub struct AppState {
    pub browser: RwLock<Browser>,
}

impl AppState {
    pub fn new(browser: Browser) -> Self {
        Self {
            browser: RwLock::new(browser),
        }
    }
}

/// Error body returned to clients
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
}

/// Type filter and search query, both optional
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub q: Option<String>,
}

impl ListParams {
    fn is_valid(&self) -> bool {
        [self.kind.as_deref(), self.q.as_deref()]
            .into_iter()
            .flatten()
            .all(|s| s.chars().count() <= MAX_QUERY_LEN)
    }
}

/// Create an error response, logging the internal cause server-side only
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
    }
}

fn state_unavailable() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(create_safe_error_response(
            "state_unavailable",
            "The catalog is temporarily unavailable",
            Some("browser lock poisoned"),
        )),
    )
        .into_response()
}

fn query_too_long() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(create_safe_error_response(
            "query_too_long",
            "Search and type parameters are limited to 64 characters",
            None,
        )),
    )
        .into_response()
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created, the HTTP client
/// cannot be built, or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with routes and security headers.
///
/// Rate limiting needs the peer address and is added in [`run`].
pub fn create_router(browser: Browser) -> Router {
    let state = Arc::new(AppState::new(browser));

    Router::new()
        .route("/", get(index_handler))
        .route("/api/pokemon", get(pokemon_handler))
        .route("/api/types", get(types_handler))
        .route("/api/catalog", get(catalog_handler))
        .route("/api/toggle/{number}", post(toggle_handler))
        .route("/fragments/list", get(list_fragment_handler))
        .route("/static/css/styles.css", get(styles_css_handler))
        .route("/static/js/main.js", get(main_js_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(30),
                ))
                .layer(ConcurrencyLimitLayer::new(100)),
        )
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let store = load_store(args.fetch.to_config()).await?;
    tracing::info!(count = store.len(), "Catalog loaded");

    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10)
        .burst_size(50)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("invalid rate limit configuration"))?;

    let app = create_router(Browser::new(store)).layer(GovernorLayer {
        config: Arc::new(governor_conf),
    });

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting pokedex web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Main page, optionally pre-filtered
async fn index_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Response {
    if !params.is_valid() {
        return query_too_long();
    }
    let Ok(browser) = state.browser.read() else {
        return state_unavailable();
    };
    Html(browser.page(params.kind.as_deref(), params.q.as_deref())).into_response()
}

/// The card list alone, for in-place replacement by the page script.
///
/// `type` and `q` map onto the filter and search events; given both, a
/// card must match both.
async fn list_fragment_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Response {
    if !params.is_valid() {
        return query_too_long();
    }
    let Ok(browser) = state.browser.read() else {
        return state_unavailable();
    };

    let list = browser.render(&browser.visible(params.kind.as_deref(), params.q.as_deref()));

    (
        [(
            HeaderName::from_static("x-result-count"),
            HeaderValue::from(list.len()),
        )],
        Html(list.html),
    )
        .into_response()
}

/// JSON view of the (filtered) catalog
async fn pokemon_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Response {
    if !params.is_valid() {
        return query_too_long();
    }
    let Ok(browser) = state.browser.read() else {
        return state_unavailable();
    };

    let records: Vec<serde_json::Value> = browser
        .visible(params.kind.as_deref(), params.q.as_deref())
        .iter()
        .map(|p| {
            serde_json::json!({
                "number": p.number,
                "name": p.name,
                "types": p.types,
                "image": p.image,
                "shiny": p.shiny,
                "description": p.description,
                "displayed_image": browser.palette().displayed(p),
                "variant": browser.palette().variant(p),
            })
        })
        .collect();

    Json(serde_json::json!({
        "count": records.len(),
        "pokemon": records,
    }))
    .into_response()
}

/// Type names for the selector
async fn types_handler(State(state): State<Arc<AppState>>) -> Response {
    let Ok(browser) = state.browser.read() else {
        return state_unavailable();
    };
    Json(serde_json::json!({ "types": browser.store().categories() })).into_response()
}

/// Versioned export of the whole loaded catalog
async fn catalog_handler(State(state): State<Arc<AppState>>) -> Response {
    let Ok(browser) = state.browser.read() else {
        return state_unavailable();
    };
    Json(browser.store().snapshot()).into_response()
}

/// Flip one card's palette and report the sprite to show
async fn toggle_handler(
    State(state): State<Arc<AppState>>,
    Path(number): Path<u32>,
) -> Response {
    let Ok(mut browser) = state.browser.write() else {
        return state_unavailable();
    };

    match browser.handle(BrowserEvent::ToggleRequested(PokemonNumber(number))) {
        ViewUpdate::ImageSwap {
            number,
            image,
            variant,
        } => Json(serde_json::json!({
            "number": number,
            "image": image,
            "variant": variant,
        }))
        .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(create_safe_error_response(
                "not_found",
                "No Pokémon with that number is loaded",
                None,
            )),
        )
            .into_response(),
    }
}

/// Static CSS handler
async fn styles_css_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("static/css/styles.css"),
    )
}

async fn main_js_handler() -> impl IntoResponse {
    (
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        include_str!("static/js/main.js"),
    )
}
