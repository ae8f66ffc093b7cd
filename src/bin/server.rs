//! TA-Lib indicator server
//!
//! Run: cargo run --release --bin server -- --addr 127.0.0.1:3030
//! Test: curl -X POST http://localhost:3030/rsi -H "Content-Type: application/json" -d '{"series":[44,44.5,45,44.5,45.5,46,45.5,46.5,47,46,45,44,43,44,45,46],"period":14}'

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use talib_facade::{
    Category, Error, HelpCatalog, HelpFormat, HelpOutput, HelpRequest, Params, SeriesSet, Tai,
    TaLib, TaLibConfig,
};

#[derive(Parser, Debug)]
#[command(name = "server", version, about = "HTTP server for TA-Lib indicators")]
struct Args {
    /// Address to listen on
    #[arg(long, env = "TALIB_SERVER_ADDR", default_value = "127.0.0.1:3030")]
    addr: SocketAddr,

    /// Path to the TA-Lib shared library (searched before TA_LIB_PATH)
    #[arg(long)]
    library: Option<PathBuf>,
}

struct AppState {
    tai: Tai<TaLib>,
    catalog: HelpCatalog,
}

/// Request failure rendered as a JSON body with a matching status code.
enum ApiError {
    Facade(Error),
    Task(tokio::task::JoinError),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::Facade(err)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Facade(err) => {
                let status = match &err {
                    Error::InvalidParameter(_) | Error::Json(_) => StatusCode::BAD_REQUEST,
                    Error::UnknownIndicator(_) => StatusCode::NOT_FOUND,
                    Error::NotInstalled => StatusCode::SERVICE_UNAVAILABLE,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, err.to_string())
            }
            Self::Task(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };
        if status.is_server_error() {
            tracing::error!(%status, error = %message, "request failed");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[derive(Deserialize)]
struct ComputeRequest {
    #[serde(default, alias = "values")]
    series: Value,
    #[serde(flatten)]
    params: Params,
}

async fn compute(
    State(state): State<Arc<AppState>>,
    Path(indicator): Path<String>,
    Json(req): Json<ComputeRequest>,
) -> Result<Json<Value>, ApiError> {
    let series = SeriesSet::from_json(&req.series)?;
    let result = tokio::task::spawn_blocking(move || {
        state.tai.compute(&indicator, &series, &req.params)
    })
    .await??;
    Ok(Json(result))
}

async fn help_indicator(
    State(state): State<Arc<AppState>>,
    Path(indicator): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let request = HelpRequest::indicator(indicator).with_format(HelpFormat::Hash);
    match state.catalog.query(&request)? {
        HelpOutput::Summary(summary) => Ok(Json(json!(summary))),
        HelpOutput::Listing(listing) => Ok(Json(json!(listing))),
        HelpOutput::Resource(resource) => Ok(Json(json!({ "url": resource.url() }))),
        HelpOutput::Uri(uri) => Ok(Json(json!({ "url": uri.as_str() }))),
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct HelpQuery {
    category: Option<Category>,
    search: Option<String>,
}

async fn help_listing(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HelpQuery>,
) -> Json<Value> {
    let listing = match (query.category, query.search) {
        (Some(category), _) => state.catalog.by_category(category),
        (None, Some(search)) => state.catalog.search(&search),
        (None, None) => state.catalog.all(),
    };
    Json(json!(listing))
}

#[derive(Serialize)]
struct AvailableResponse {
    available: bool,
    library: Option<String>,
}

async fn available(State(state): State<Arc<AppState>>) -> Json<AvailableResponse> {
    Json(AvailableResponse {
        available: state.tai.available(),
        library: state
            .tai
            .engine()
            .library_path()
            .map(|p| p.display().to_string()),
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut config = TaLibConfig::from_env();
    if let Some(path) = args.library {
        config = config.with_library(path);
    }
    let state = Arc::new(AppState {
        tai: Tai::with_engine(TaLib::with_config(&config)),
        catalog: HelpCatalog::bundled()?,
    });
    if !state.tai.available() {
        tracing::warn!("{}", talib_facade::INSTALL_HINT);
    }

    let app = Router::new()
        .route("/available", get(available))
        .route("/help", get(help_listing))
        .route("/help/{indicator}", get(help_indicator))
        .route("/{indicator}", post(compute))
        .layer(DefaultBodyLimit::max(50 * 1024 * 1024))
        .with_state(state);

    tracing::info!(addr = %args.addr, "TA-Lib indicator server listening");
    println!("  GET  /available            - TA-Lib load status");
    println!("  GET  /help?category=&search= - documentation listing");
    println!("  GET  /help/:indicator      - documentation for one indicator");
    println!("  POST /:indicator           - compute an indicator");

    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
