use crate::backend::PortalBackend;
use crate::configuration::Configuration;
use crate::error::PortalError;
use crate::schedule::{parse_date, Schedule};
use crate::types::{Appointment, ClosureOutcome, Slot, SlotFilter};
use axum::extract::{Path, Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{Html, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use axum_valid::Valid;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use uuid::Uuid;
use validator::{Validate, ValidationError};

lazy_static! {
    static ref HEURE_FORMAT: Regex = Regex::new(r"^\d{2}:\d{2}$").unwrap();
}

fn validate_heures(heures: &[String]) -> Result<(), ValidationError> {
    for heure in heures {
        if !HEURE_FORMAT.is_match(heure) {
            return Err(ValidationError::new("heure_format"));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
struct CloseSlotsRequest {
    date: String,
    #[validate(length(min = 1), custom(function = validate_heures))]
    heures: Vec<String>,
    #[validate(length(max = 500))]
    reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct AddAppointmentRequest {
    date: String,
    heure: String,
    #[validate(length(min = 1, max = 200))]
    client_name: String,
    #[validate(length(max = 500))]
    motif: String,
}

#[derive(Debug, Clone, Deserialize)]
struct SlotsQuery {
    date: Option<String>,
    closed: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
struct DateQuery {
    date: String,
}

#[derive(Debug, Clone, Deserialize)]
struct AppointmentsQuery {
    date: Option<String>,
}

#[derive(Clone)]
pub struct AppState<B: PortalBackend, C: Configuration> {
    backend: B,
    configuration: C,
    schedule: Schedule,
}

pub fn create_app<B: PortalBackend, C: Configuration>(backend: B, configuration: C) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // The schedule is read once and injected; handlers never re-derive it.
    let schedule = configuration.schedule();
    let state = AppState {
        backend,
        configuration,
        schedule,
    };

    let public = Router::new()
        .route("/frontend", get(get_frontend::<B, C>))
        .route("/slots", get(get_slots::<B, C>))
        .route("/slots/available", get(get_available_slots::<B, C>))
        .route(
            "/appointments",
            get(get_appointments::<B, C>).post(add_appointment::<B, C>),
        );

    let admin = Router::new()
        .route("/slots", post(close_slots::<B, C>))
        .route("/slots/:id", delete(reopen_slot::<B, C>))
        .route("/appointments/:id", delete(cancel_appointment::<B, C>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth::<B, C>,
        ));

    Router::new()
        .merge(public)
        .merge(admin)
        .with_state(state)
        .layer(cors)
}

async fn admin_auth<B: PortalBackend, C: Configuration>(
    State(state): State<AppState<B, C>>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    match request.headers().get("x-admin-password") {
        Some(header) if header.to_str().unwrap_or("") == state.configuration.password() => {
            Ok(next.run(request).await)
        }
        Some(_) => Err((StatusCode::UNAUTHORIZED, "Unauthorized".to_string())),
        None => Err((StatusCode::UNAUTHORIZED, "Missing credentials".to_string())),
    }
}

async fn get_slots<B: PortalBackend, C: Configuration>(
    State(state): State<AppState<B, C>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<Vec<Slot>>, PortalError> {
    let date = query.date.as_deref().map(parse_date).transpose()?;
    let slots = state.backend.slots(SlotFilter {
        date,
        ferme: query.closed,
    })?;
    Ok(Json(slots))
}

async fn get_available_slots<B: PortalBackend, C: Configuration>(
    State(state): State<AppState<B, C>>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<String>>, PortalError> {
    let date = parse_date(&query.date)?;
    let closed = state.backend.slots(SlotFilter {
        date: Some(date),
        ferme: Some(true),
    })?;
    Ok(Json(state.schedule.open_labels(&closed)))
}

async fn close_slots<B: PortalBackend, C: Configuration>(
    State(state): State<AppState<B, C>>,
    Valid(Json(request)): Valid<Json<CloseSlotsRequest>>,
) -> Result<Json<ClosureOutcome>, PortalError> {
    let date = parse_date(&request.date)?;
    // Full validation happens before any write.
    state.schedule.validate_labels(&request.heures)?;
    let motif = request
        .reason
        .as_deref()
        .map(str::trim)
        .filter(|reason| !reason.is_empty())
        .map(String::from);

    let outcome = state.backend.close_slots(date, &request.heures, motif)?;
    info!(%date, closed_count = outcome.closed_count, "closed slots");
    Ok(Json(outcome))
}

async fn reopen_slot<B: PortalBackend, C: Configuration>(
    State(state): State<AppState<B, C>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PortalError> {
    state.backend.reopen_slot(id)?;
    info!(%id, "reopened slot");
    Ok(StatusCode::NO_CONTENT)
}

async fn get_appointments<B: PortalBackend, C: Configuration>(
    State(state): State<AppState<B, C>>,
    Query(query): Query<AppointmentsQuery>,
) -> Result<Json<Vec<Appointment>>, PortalError> {
    let date = query.date.as_deref().map(parse_date).transpose()?;
    Ok(Json(state.backend.appointments(date)?))
}

async fn add_appointment<B: PortalBackend, C: Configuration>(
    State(state): State<AppState<B, C>>,
    Valid(Json(request)): Valid<Json<AddAppointmentRequest>>,
) -> Result<(StatusCode, Json<Appointment>), PortalError> {
    let date = parse_date(&request.date)?;
    if !state.schedule.contains(&request.heure) {
        return Err(PortalError::InvalidArgument(format!(
            "unknown time label: {}",
            request.heure
        )));
    }
    let appointment =
        state
            .backend
            .add_appointment(date, request.heure, request.client_name, request.motif)?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

async fn cancel_appointment<B: PortalBackend, C: Configuration>(
    State(state): State<AppState<B, C>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PortalError> {
    state.backend.cancel_appointment(id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_frontend<B: PortalBackend, C: Configuration>(
    State(state): State<AppState<B, C>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let path = state.configuration.frontend_path();
    match tokio::fs::read_to_string(&path).await {
        Ok(contents) => Ok(Html(contents)),
        Err(err) => {
            let error_message = format!("Failed to read frontend file: {}", err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, error_message))
        }
    }
}
