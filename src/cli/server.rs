//! HTTP server mode exposing the endpoint bindings as JSON
//!
//! Routes:
//! - `GET /health` - liveness plus a check of the upstream service
//! - `GET /metrics` - request counters
//! - `GET /api/v1/stats/{endpoint}` - one of the typed bindings; the query
//!   string uses the stats API parameter names (`GameID`, `Season`, ...)

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::cli::metrics::Metrics;
use crate::cli::runner::call;
use crate::endpoints::{
    fetch, BoxScoreTraditionalRequest, CommonAllPlayersRequest, CommonPlayerInfoRequest,
    LeagueLeadersRequest, PlayerGameLogRequest, ScoreboardRequest,
};
use crate::error::{Error, Result};
use crate::http::StatsTransport;
use crate::params::{LeagueId, PerMode, Season, SeasonType, StatCategory};

/// Endpoints reachable under `/api/v1/stats/`
pub const SERVED_ENDPOINTS: [&str; 6] = [
    "boxscoretraditionalv2",
    "commonallplayers",
    "commonplayerinfo",
    "leagueleaders",
    "playergamelog",
    "scoreboardv2",
];

const UPSTREAM_CHECK_TIMEOUT: Duration = Duration::from_secs(3);

/// Server configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

/// App state shared across handlers
struct AppState {
    transport: Arc<dyn StatsTransport>,
    metrics: Metrics,
}

type Params = HashMap<String, String>;

/// Build the router over any transport
pub fn router(transport: Arc<dyn StatsTransport>) -> Router {
    let state = Arc::new(AppState {
        transport,
        metrics: Metrics::new(),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route(
            "/api/v1/stats/:endpoint",
            get(stats).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), track))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, transport: Arc<dyn StatsTransport>) -> Result<()> {
    let addr = SocketAddr::new(config.host, config.port);
    info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to {addr}: {e}")))?;

    axum::serve(listener, router(transport))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn track(State(state): State<Arc<AppState>>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let started = Instant::now();
    let response = next.run(request).await;
    let elapsed = started.elapsed();
    debug!(%path, status = response.status().as_u16(), ?elapsed, "Handled request");
    state
        .metrics
        .record(&path, response.status().as_u16(), elapsed);
    response
}

async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let check = CommonAllPlayersRequest::new(Season::current()).only_current_season(true);
    let upstream = match tokio::time::timeout(
        UPSTREAM_CHECK_TIMEOUT,
        fetch(&*state.transport, &check),
    )
    .await
    {
        Ok(Ok(_)) => "operational",
        Ok(Err(e)) => {
            warn!("Upstream check failed: {e}");
            "degraded"
        }
        Err(_) => {
            warn!("Upstream check timed out");
            "degraded"
        }
    };

    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "endpoints": SERVED_ENDPOINTS,
        "upstream": upstream,
        "timestamp": chrono::Utc::now().timestamp(),
    }))
}

async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.metrics.snapshot())
}

async fn stats(
    State(state): State<Arc<AppState>>,
    Path(endpoint): Path<String>,
    Query(params): Query<Params>,
) -> Response {
    let transport = &*state.transport;
    let endpoint = endpoint.to_ascii_lowercase();

    let result = match endpoint.as_str() {
        "boxscoretraditionalv2" => match box_score(&params) {
            Ok(request) => call(transport, &request).await,
            Err(e) => Err(e),
        },
        "scoreboardv2" => match scoreboard(&params) {
            Ok(request) => call(transport, &request).await,
            Err(e) => Err(e),
        },
        "commonallplayers" => match all_players(&params) {
            Ok(request) => call(transport, &request).await,
            Err(e) => Err(e),
        },
        "leagueleaders" => match league_leaders(&params) {
            Ok(request) => call(transport, &request).await,
            Err(e) => Err(e),
        },
        "playergamelog" => match game_log(&params) {
            Ok(request) => call(transport, &request).await,
            Err(e) => Err(e),
        },
        "commonplayerinfo" => match player_info(&params) {
            Ok(request) => call(transport, &request).await,
            Err(e) => Err(e),
        },
        _ => {
            return error_response(
                StatusCode::NOT_FOUND,
                "unknown_endpoint",
                format!("Unknown endpoint: {endpoint}"),
            )
        }
    };

    match result {
        Ok(data) => success_response(data),
        Err(e) => {
            let (status, code) = classify(&e);
            if status.is_server_error() {
                warn!("{endpoint} failed: {e}");
            }
            error_response(status, code, e.to_string())
        }
    }
}

async fn method_not_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        "method_not_allowed",
        "Only GET requests are supported",
    )
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "not_found", "No such route")
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ApiError>,
}

#[derive(Debug, Serialize)]
struct ApiError {
    code: &'static str,
    message: String,
}

fn success_response(data: Value) -> Response {
    let body = ApiResponse {
        success: true,
        data: Some(data),
        error: None,
    };
    (StatusCode::OK, Json(body)).into_response()
}

fn error_response(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    let body = ApiResponse::<()> {
        success: false,
        data: None,
        error: Some(ApiError {
            code,
            message: message.into(),
        }),
    };
    (status, Json(body)).into_response()
}

/// Status and error code for a failed request
fn classify(error: &Error) -> (StatusCode, &'static str) {
    match error {
        Error::MissingParameter { .. } => (StatusCode::BAD_REQUEST, "missing_parameter"),
        Error::InvalidParameter { .. } => (StatusCode::BAD_REQUEST, "invalid_parameter"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "api_error"),
    }
}

// ============================================================================
// Query string to typed requests
// ============================================================================

/// Non-empty value of a query parameter
fn text(params: &Params, key: &str) -> Option<String> {
    params
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Parse an optional parameter with the parser of a parameter type
fn typed<T>(params: &Params, key: &str) -> Result<Option<T>>
where
    T: FromStr<Err = Error>,
{
    text(params, key).map(|value| value.parse()).transpose()
}

/// Parse an optional numeric parameter
fn number<T>(params: &Params, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    text(params, key)
        .map(|value| value.parse().map_err(|e: T::Err| Error::invalid(key, e.to_string())))
        .transpose()
}

/// `1`/`0`, `Y`/`N` or `true`/`false`
fn flag(params: &Params, key: &str) -> Result<Option<bool>> {
    match text(params, key) {
        None => Ok(None),
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "1" | "y" | "true" => Ok(Some(true)),
            "0" | "n" | "false" => Ok(Some(false)),
            other => Err(Error::invalid(key, format!("'{other}' is not a flag"))),
        },
    }
}

fn box_score(params: &Params) -> Result<BoxScoreTraditionalRequest> {
    Ok(BoxScoreTraditionalRequest {
        game_id: text(params, "GameID").unwrap_or_default(),
        start_period: number(params, "StartPeriod")?,
        end_period: number(params, "EndPeriod")?,
        start_range: number(params, "StartRange")?,
        end_range: number(params, "EndRange")?,
        range_type: number(params, "RangeType")?,
    })
}

fn scoreboard(params: &Params) -> Result<ScoreboardRequest> {
    Ok(ScoreboardRequest {
        game_date: text(params, "GameDate").unwrap_or_default(),
        league_id: typed::<LeagueId>(params, "LeagueID")?,
        day_offset: number(params, "DayOffset")?,
    })
}

fn all_players(params: &Params) -> Result<CommonAllPlayersRequest> {
    Ok(CommonAllPlayersRequest {
        season: typed::<Season>(params, "Season")?.unwrap_or_else(Season::current),
        league_id: typed::<LeagueId>(params, "LeagueID")?,
        only_current_season: flag(params, "IsOnlyCurrentSeason")?,
    })
}

fn league_leaders(params: &Params) -> Result<LeagueLeadersRequest> {
    let mut request = LeagueLeadersRequest::new();
    if let Some(league_id) = typed::<LeagueId>(params, "LeagueID")? {
        request.league_id = league_id;
    }
    if let Some(per_mode) = typed::<PerMode>(params, "PerMode")? {
        request = request.per_mode(per_mode);
    }
    if let Some(season) = typed::<Season>(params, "Season")? {
        request = request.season(season);
    }
    if let Some(season_type) = typed::<SeasonType>(params, "SeasonType")? {
        request = request.season_type(season_type);
    }
    if let Some(stat_category) = typed::<StatCategory>(params, "StatCategory")? {
        request = request.stat_category(stat_category);
    }
    if flag(params, "ActiveFlag")? == Some(true) {
        request = request.active_only();
    }
    Ok(request)
}

fn game_log(params: &Params) -> Result<PlayerGameLogRequest> {
    Ok(PlayerGameLogRequest {
        player_id: text(params, "PlayerID").unwrap_or_default(),
        season: typed::<Season>(params, "Season")?,
        season_type: typed::<SeasonType>(params, "SeasonType")?.unwrap_or_default(),
        date_from: text(params, "DateFrom"),
        date_to: text(params, "DateTo"),
        league_id: typed::<LeagueId>(params, "LeagueID")?,
    })
}

fn player_info(params: &Params) -> Result<CommonPlayerInfoRequest> {
    Ok(CommonPlayerInfoRequest {
        player_id: text(params, "PlayerID").unwrap_or_default(),
        league_id: typed::<LeagueId>(params, "LeagueID")?,
    })
}
