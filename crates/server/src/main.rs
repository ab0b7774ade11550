// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP server for the U-Planner scheduling engine.
//!
//! Exposes the catalog bootstrap, schedule transition, query, and
//! occupancy operations over an axum router. All schedule state lives
//! in memory behind a single `RwLock`; write handlers install the new
//! catalog/state produced by the API layer only after the operation
//! succeeds, so a rejected request never mutates anything.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::EnvFilter;
use u_planner::{Catalog, ScheduleState};
use u_planner_api::{
    ApiError, ApiResult, BulkEntriesRequest, BulkEntriesResponse, CatalogApiResult,
    ClearTermResponse, CreateEntryRequest, CreateEntryResponse, DeclareAvailabilityRequest,
    DeclareAvailabilityResponse, DefineRoomGroupRequest, DefineRoomGroupResponse,
    ListRoomsResponse, ListSchedulesResponse, ListSubjectsResponse, ListTeachersResponse,
    OccupancyRequest, OccupancyResponse, RegisterDayRequest, RegisterDayResponse,
    RegisterFacultyRequest, RegisterFacultyResponse, RegisterRoomRequest, RegisterRoomResponse,
    RegisterRoomTypeRequest, RegisterRoomTypeResponse, RegisterSubjectRequest,
    RegisterSubjectResponse, RegisterTeacherRequest, RegisterTeacherResponse,
    RegisterTimeModuleRequest, RegisterTimeModuleResponse, ReplaceEntryResponse,
    RetractEntryResponse, bulk_entries, clear_term, create_entry, declare_availability,
    define_room_group, list_rooms, list_schedules, list_subjects, list_teachers, occupancy,
    register_day, register_faculty, register_room, register_room_type, register_subject,
    register_teacher, register_time_module, replace_entry, retract_entry,
};
use u_planner_audit::{Actor, AuditEvent, Cause};
use u_planner_domain::{Semester, Term};

/// Command-line arguments for the server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the HTTP server to.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Academic year of the planning period.
    #[arg(long, default_value_t = 2026)]
    year: u16,

    /// Semester of the planning period ("1" or "2").
    #[arg(long, default_value = "1")]
    semester: Semester,
}

/// The in-memory engine: catalog, schedule state, and the audit trail.
struct Engine {
    catalog: Catalog,
    state: ScheduleState,
    audit_log: Vec<AuditEvent>,
}

impl Engine {
    fn new(term: Term) -> Self {
        Self {
            catalog: Catalog::new(),
            state: ScheduleState::new(term),
            audit_log: Vec::new(),
        }
    }
}

/// Shared application state for the axum router.
#[derive(Clone)]
struct AppState {
    engine: Arc<RwLock<Engine>>,
}

impl AppState {
    fn new(term: Term) -> Self {
        Self {
            engine: Arc::new(RwLock::new(Engine::new(term))),
        }
    }
}

/// Wire-level error body.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct ErrorResponse {
    error: bool,
    message: String,
}

/// An HTTP error with a status code and message.
struct HttpError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: true,
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self {
            status,
            message: err.to_string(),
        }
    }
}

fn default_actor_id() -> String {
    String::from("anonymous")
}

fn default_actor_role() -> String {
    String::from("user")
}

fn default_cause_id() -> String {
    String::from("unspecified")
}

/// A request body carrying an operation payload plus its provenance.
///
/// The actor and cause fields feed the audit trail; all of them default
/// so callers that do not track provenance can omit them.
#[derive(Debug, Clone, serde::Deserialize)]
struct AuthoredRequest<T> {
    /// The identifier of the actor performing this action.
    #[serde(default = "default_actor_id")]
    actor_id: String,
    /// The role of the actor (e.g., "user", "system").
    #[serde(default = "default_actor_role")]
    actor_role: String,
    /// A request identifier for the audit trail.
    #[serde(default = "default_cause_id")]
    cause_id: String,
    /// A description of why this action is happening.
    #[serde(default)]
    cause_description: String,
    /// The operation payload.
    #[serde(flatten)]
    request: T,
}

impl<T> AuthoredRequest<T> {
    fn into_parts(self) -> (Actor, Cause, T) {
        (
            Actor::new(self.actor_id, self.actor_role),
            Cause::new(self.cause_id, self.cause_description),
            self.request,
        )
    }
}

/// Provenance for bodyless mutations (retract, clear).
fn system_provenance() -> (Actor, Cause) {
    (
        Actor::new(default_actor_id(), default_actor_role()),
        Cause::new(default_cause_id(), String::new()),
    )
}

/// Runs a catalog bootstrap operation and installs its outcome.
fn run_catalog<T, F>(engine: &mut Engine, operation: F) -> Result<Json<T>, HttpError>
where
    F: FnOnce(&Catalog) -> Result<CatalogApiResult<T>, ApiError>,
{
    let result: CatalogApiResult<T> = operation(&engine.catalog)?;
    engine.catalog = result.new_catalog;
    engine.audit_log.push(result.audit_event);
    Ok(Json(result.response))
}

/// Runs a schedule transition and installs its outcome.
fn run_schedule<T, F>(engine: &mut Engine, operation: F) -> Result<Json<T>, HttpError>
where
    F: FnOnce(&Catalog, &ScheduleState) -> Result<ApiResult<T>, ApiError>,
{
    let result: ApiResult<T> = operation(&engine.catalog, &engine.state)?;
    engine.state = result.new_state;
    engine.audit_log.push(result.audit_event);
    Ok(Json(result.response))
}

async fn handle_register_day(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AuthoredRequest<RegisterDayRequest>>,
) -> Result<Json<RegisterDayResponse>, HttpError> {
    let (actor, cause, request) = req.into_parts();
    info!(code = %request.code, "Registering day");

    let mut engine = app_state.engine.write().await;
    run_catalog(&mut engine, |catalog| {
        register_day(catalog, request, actor, cause)
    })
}

async fn handle_register_time_module(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AuthoredRequest<RegisterTimeModuleRequest>>,
) -> Result<Json<RegisterTimeModuleResponse>, HttpError> {
    let (actor, cause, request) = req.into_parts();
    info!(mod_hor = %request.mod_hor, "Registering time module");

    let mut engine = app_state.engine.write().await;
    run_catalog(&mut engine, |catalog| {
        register_time_module(catalog, request, actor, cause)
    })
}

async fn handle_register_room_type(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AuthoredRequest<RegisterRoomTypeRequest>>,
) -> Result<Json<RegisterRoomTypeResponse>, HttpError> {
    let (actor, cause, request) = req.into_parts();
    info!(name = %request.name, "Registering room type");

    let mut engine = app_state.engine.write().await;
    run_catalog(&mut engine, |catalog| {
        register_room_type(catalog, request, actor, cause)
    })
}

async fn handle_register_room(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AuthoredRequest<RegisterRoomRequest>>,
) -> Result<Json<RegisterRoomResponse>, HttpError> {
    let (actor, cause, request) = req.into_parts();
    info!(code = %request.code, "Registering room");

    let mut engine = app_state.engine.write().await;
    run_catalog(&mut engine, |catalog| {
        register_room(catalog, request, actor, cause)
    })
}

async fn handle_define_room_group(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AuthoredRequest<DefineRoomGroupRequest>>,
) -> Result<Json<DefineRoomGroupResponse>, HttpError> {
    let (actor, cause, request) = req.into_parts();
    info!(name = %request.name, "Defining room group");

    let mut engine = app_state.engine.write().await;
    run_catalog(&mut engine, |catalog| {
        define_room_group(catalog, request, actor, cause)
    })
}

async fn handle_register_teacher(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AuthoredRequest<RegisterTeacherRequest>>,
) -> Result<Json<RegisterTeacherResponse>, HttpError> {
    let (actor, cause, request) = req.into_parts();
    info!(full_name = %request.full_name, "Registering teacher");

    let mut engine = app_state.engine.write().await;
    run_catalog(&mut engine, |catalog| {
        register_teacher(catalog, request, actor, cause)
    })
}

async fn handle_declare_availability(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AuthoredRequest<DeclareAvailabilityRequest>>,
) -> Result<Json<DeclareAvailabilityResponse>, HttpError> {
    let (actor, cause, request) = req.into_parts();
    info!(
        teacher_id = request.teacher_id,
        day_id = request.day_id,
        time_module_id = request.time_module_id,
        "Declaring teacher availability"
    );

    let mut engine = app_state.engine.write().await;
    run_catalog(&mut engine, |catalog| {
        declare_availability(catalog, request, actor, cause)
    })
}

async fn handle_register_faculty(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AuthoredRequest<RegisterFacultyRequest>>,
) -> Result<Json<RegisterFacultyResponse>, HttpError> {
    let (actor, cause, request) = req.into_parts();
    info!(name = %request.name, "Registering faculty");

    let mut engine = app_state.engine.write().await;
    run_catalog(&mut engine, |catalog| {
        register_faculty(catalog, request, actor, cause)
    })
}

async fn handle_register_subject(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AuthoredRequest<RegisterSubjectRequest>>,
) -> Result<Json<RegisterSubjectResponse>, HttpError> {
    let (actor, cause, request) = req.into_parts();
    info!(name = %request.name, "Registering subject");

    let mut engine = app_state.engine.write().await;
    run_catalog(&mut engine, |catalog| {
        register_subject(catalog, request, actor, cause)
    })
}

async fn handle_create_entry(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AuthoredRequest<CreateEntryRequest>>,
) -> Result<Json<CreateEntryResponse>, HttpError> {
    let (actor, cause, request) = req.into_parts();
    info!(
        subject_id = request.subject_id,
        room_id = request.room_id,
        day_id = request.day_id,
        time_module_id = request.time_module_id,
        "Creating schedule entry"
    );

    let mut engine = app_state.engine.write().await;
    run_schedule(&mut engine, |catalog, state| {
        create_entry(catalog, state, request, actor, cause)
    })
}

async fn handle_replace_entry(
    AxumState(app_state): AxumState<AppState>,
    Path(entry_id): Path<i64>,
    Json(req): Json<AuthoredRequest<CreateEntryRequest>>,
) -> Result<Json<ReplaceEntryResponse>, HttpError> {
    let (actor, cause, request) = req.into_parts();
    info!(entry_id, "Replacing schedule entry");

    let mut engine = app_state.engine.write().await;
    run_schedule(&mut engine, |catalog, state| {
        replace_entry(catalog, state, entry_id, request, actor, cause)
    })
}

async fn handle_retract_entry(
    AxumState(app_state): AxumState<AppState>,
    Path(entry_id): Path<i64>,
) -> Result<Json<RetractEntryResponse>, HttpError> {
    let (actor, cause) = system_provenance();
    info!(entry_id, "Retracting schedule entry");

    let mut engine = app_state.engine.write().await;
    run_schedule(&mut engine, |catalog, state| {
        retract_entry(catalog, state, entry_id, actor, cause)
    })
}

async fn handle_clear_term(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ClearTermResponse>, HttpError> {
    let (actor, cause) = system_provenance();
    info!("Clearing planning period");

    let mut engine = app_state.engine.write().await;
    run_schedule(&mut engine, |catalog, state| {
        clear_term(catalog, state, actor, cause)
    })
}

async fn handle_bulk_entries(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AuthoredRequest<BulkEntriesRequest>>,
) -> Result<Json<BulkEntriesResponse>, HttpError> {
    let (actor, cause, request) = req.into_parts();
    info!(
        rows = request.entries.len(),
        atomic = request.atomic,
        "Bulk-admitting schedule entries"
    );

    let mut engine = app_state.engine.write().await;
    let result: ApiResult<BulkEntriesResponse> =
        bulk_entries(&engine.catalog, &engine.state, request, actor, cause);
    engine.state = result.new_state;
    engine.audit_log.push(result.audit_event);
    Ok(Json(result.response))
}

async fn handle_list_teachers(
    AxumState(app_state): AxumState<AppState>,
    Query(filters): Query<BTreeMap<String, String>>,
) -> Result<Json<ListTeachersResponse>, HttpError> {
    let engine = app_state.engine.read().await;
    let response: ListTeachersResponse = list_teachers(&engine.catalog, &filters)?;
    Ok(Json(response))
}

async fn handle_list_rooms(
    AxumState(app_state): AxumState<AppState>,
    Query(filters): Query<BTreeMap<String, String>>,
) -> Result<Json<ListRoomsResponse>, HttpError> {
    let engine = app_state.engine.read().await;
    let response: ListRoomsResponse = list_rooms(&engine.catalog, &filters)?;
    Ok(Json(response))
}

async fn handle_list_subjects(
    AxumState(app_state): AxumState<AppState>,
    Query(filters): Query<BTreeMap<String, String>>,
) -> Result<Json<ListSubjectsResponse>, HttpError> {
    let engine = app_state.engine.read().await;
    let response: ListSubjectsResponse = list_subjects(&engine.catalog, &filters)?;
    Ok(Json(response))
}

async fn handle_list_schedules(
    AxumState(app_state): AxumState<AppState>,
    Query(filters): Query<BTreeMap<String, String>>,
) -> Result<Json<ListSchedulesResponse>, HttpError> {
    let engine = app_state.engine.read().await;
    let response: ListSchedulesResponse = list_schedules(&engine.catalog, &engine.state, &filters)?;
    Ok(Json(response))
}

/// Query parameters for the occupancy endpoint.
///
/// `days` and `modules` are comma-separated id lists.
#[derive(Debug, Clone, Default, serde::Deserialize)]
struct OccupancyQuery {
    days: Option<String>,
    modules: Option<String>,
    group: Option<String>,
}

fn parse_id_list(field: &str, raw: Option<&str>) -> Result<Option<Vec<i64>>, HttpError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let mut ids: Vec<i64> = Vec::new();
    for part in raw.split(',') {
        let trimmed: &str = part.trim();
        if trimmed.is_empty() {
            continue;
        }
        let id: i64 = trimmed.parse().map_err(|_| HttpError {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid id '{trimmed}' in query parameter '{field}'"),
        })?;
        ids.push(id);
    }

    Ok(Some(ids))
}

async fn handle_occupancy(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<OccupancyQuery>,
) -> Result<Json<OccupancyResponse>, HttpError> {
    let request: OccupancyRequest = OccupancyRequest {
        day_ids: parse_id_list("days", query.days.as_deref())?,
        time_module_ids: parse_id_list("modules", query.modules.as_deref())?,
        group: query.group,
    };

    let engine = app_state.engine.read().await;
    let response: OccupancyResponse = occupancy(&engine.catalog, &engine.state, &request)?;
    Ok(Json(response))
}

/// Wire representation of one audit trail event.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct AuditEventInfo {
    actor_id: String,
    actor_type: String,
    cause_id: String,
    cause_description: String,
    action: String,
    details: Option<String>,
    before: String,
    after: String,
    term: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct AuditTimelineResponse {
    events: Vec<AuditEventInfo>,
}

async fn handle_audit_timeline(
    AxumState(app_state): AxumState<AppState>,
) -> Json<AuditTimelineResponse> {
    let engine = app_state.engine.read().await;
    let events: Vec<AuditEventInfo> = engine
        .audit_log
        .iter()
        .map(|event| AuditEventInfo {
            actor_id: event.actor.id.clone(),
            actor_type: event.actor.actor_type.clone(),
            cause_id: event.cause.id.clone(),
            cause_description: event.cause.description.clone(),
            action: event.action.name.clone(),
            details: event.action.details.clone(),
            before: event.before.data.clone(),
            after: event.after.data.clone(),
            term: event.term.map(|term| term.to_string()),
        })
        .collect();

    Json(AuditTimelineResponse { events })
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/days", post(handle_register_day))
        .route("/time-modules", post(handle_register_time_module))
        .route("/room-types", post(handle_register_room_type))
        .route("/rooms", post(handle_register_room).get(handle_list_rooms))
        .route("/room-groups", post(handle_define_room_group))
        .route(
            "/teachers",
            post(handle_register_teacher).get(handle_list_teachers),
        )
        .route("/availability", post(handle_declare_availability))
        .route("/faculties", post(handle_register_faculty))
        .route(
            "/subjects",
            post(handle_register_subject).get(handle_list_subjects),
        )
        .route(
            "/schedules",
            post(handle_create_entry)
                .get(handle_list_schedules)
                .delete(handle_clear_term),
        )
        .route(
            "/schedules/{entry_id}",
            put(handle_replace_entry).delete(handle_retract_entry),
        )
        .route("/schedules/bulk", post(handle_bulk_entries))
        .route("/occupancy", get(handle_occupancy))
        .route("/audit/timeline", get(handle_audit_timeline))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let term: Term = Term::new(args.year, args.semester);
    info!(%term, "Starting U-Planner server");

    let app_state: AppState = AppState::new(term);
    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
