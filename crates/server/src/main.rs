// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::Date;
use tokio::sync::Mutex;
use tracing::{error, info};
use yukiyama_roster_api::{
    ApiError, CreateShiftRequest, CreateShiftResponse, DeleteShiftResponse, EditDataQuery,
    EditDataResponse, ShiftReportResponse, UpdateShiftRequest, UpdateShiftResponse,
    edit_data::load_edit_data, mutations, reports::load_shift_report, translate_domain_error,
};
use yukiyama_roster_domain::{month_range, validate_date_string, week_range};
use yukiyama_roster_persistence::Persistence;

/// Yukiyama Roster Server - HTTP server for the duty roster
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The persistence layer is wrapped in a Mutex: every request takes the
/// lock for the duration of its reads and writes, so each request observes
/// a consistent store. Cross-operator last-save-wins is accepted.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for roster entities.
    persistence: Arc<Mutex<Persistence>>,
}

/// Raw query parameters for the report endpoint.
///
/// Exactly one range form is expected: `from`+`to`, `year`+`month`, or
/// `week_start`.
#[derive(Debug, Clone, Default, Deserialize)]
struct ReportQuery {
    /// First day of an explicit range, `YYYY-MM-DD`.
    from: Option<String>,
    /// Last day of an explicit range, `YYYY-MM-DD`.
    to: Option<String>,
    /// Calendar year for a month range.
    year: Option<String>,
    /// Month number (1-12) for a month range.
    month: Option<String>,
    /// First day of a 7-day window, `YYYY-MM-DD`.
    week_start: Option<String>,
}

/// JSON error payload returned for every non-success response.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handles `GET /shifts/edit_data`.
async fn handle_edit_data(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<EditDataQuery>,
) -> Result<Json<EditDataResponse>, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let response: EditDataResponse = load_edit_data(&persistence, &query)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handles `POST /shifts`.
async fn handle_create_shift(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<CreateShiftRequest>,
) -> Result<Json<CreateShiftResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: CreateShiftResponse = mutations::create_shift(&mut persistence, &request)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handles `PUT /shifts/{shift_id}`.
async fn handle_update_shift(
    AxumState(app_state): AxumState<AppState>,
    Path(shift_id): Path<i64>,
    Json(request): Json<UpdateShiftRequest>,
) -> Result<Json<UpdateShiftResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: UpdateShiftResponse =
        mutations::update_shift(&mut persistence, shift_id, &request)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handles `DELETE /shifts/{shift_id}`.
async fn handle_delete_shift(
    AxumState(app_state): AxumState<AppState>,
    Path(shift_id): Path<i64>,
) -> Result<Json<DeleteShiftResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteShiftResponse = mutations::delete_shift(&mut persistence, shift_id)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handles `GET /shifts/report`.
async fn handle_shift_report(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ShiftReportResponse>, HttpError> {
    let (from, to): (Date, Date) = resolve_report_range(&query)?;
    let persistence = app_state.persistence.lock().await;
    let response: ShiftReportResponse = load_shift_report(&persistence, from, to)?;
    drop(persistence);
    Ok(Json(response))
}

/// Resolves the report query into an inclusive date range.
///
/// Precedence when several forms are present: explicit `from`/`to` first,
/// then `year`/`month`, then `week_start`.
fn resolve_report_range(query: &ReportQuery) -> Result<(Date, Date), HttpError> {
    if let (Some(from_raw), Some(to_raw)) = (&query.from, &query.to) {
        let from: Date = parse_date_param("from", from_raw)?;
        let to: Date = parse_date_param("to", to_raw)?;
        return Ok((from, to));
    }
    if let (Some(year_raw), Some(month_raw)) = (&query.year, &query.month) {
        let year: i32 = year_raw.parse().map_err(|_| HttpError {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid year: '{year_raw}'"),
        })?;
        let month: u8 = month_raw.parse().map_err(|_| HttpError {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid month: '{month_raw}'"),
        })?;
        return month_range(year, month)
            .map_err(translate_domain_error)
            .map_err(HttpError::from);
    }
    if let Some(start_raw) = &query.week_start {
        let start: Date = parse_date_param("week_start", start_raw)?;
        return week_range(start)
            .map_err(translate_domain_error)
            .map_err(HttpError::from);
    }
    Err(HttpError {
        status: StatusCode::BAD_REQUEST,
        message: String::from(
            "Specify a range: from+to, year+month, or week_start",
        ),
    })
}

fn parse_date_param(field: &str, raw: &str) -> Result<Date, HttpError> {
    validate_date_string(raw).map_err(|e| HttpError {
        status: StatusCode::BAD_REQUEST,
        message: format!("Invalid {field}: {e}"),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/shifts/edit_data", get(handle_edit_data))
        .route("/shifts", post(handle_create_shift))
        .route("/shifts/{shift_id}", put(handle_update_shift))
        .route("/shifts/{shift_id}", delete(handle_delete_shift))
        .route("/shifts/report", get(handle_shift_report))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Yukiyama Roster Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
