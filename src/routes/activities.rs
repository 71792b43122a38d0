//! Activity listing and enrollment routes.

use std::collections::BTreeMap;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::roster::{Activity, RosterError};
use crate::services::enrollment::{ActivityName, Confirmation, Email, EnrollmentError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// Error body shared by every failing enrollment call.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

pub type ApiError = (StatusCode, Json<ErrorDetail>);

const MISSING_EMAIL: &str = "Missing required query parameter: email";

fn api_error(status: StatusCode, detail: impl Into<String>) -> ApiError {
    (status, Json(ErrorDetail { detail: detail.into() }))
}

/// `GET /activities`: full catalog with current rosters.
pub async fn list_activities(State(state): State<AppState>) -> Json<BTreeMap<String, Activity>> {
    Json(state.enrollment.list_activities())
}

/// `POST /activities/:activity_name/signup?email=`: enroll a student.
pub async fn sign_up(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<Confirmation>, ApiError> {
    let (activity, email) = extract_target(path, query)?;
    state
        .enrollment
        .sign_up(&activity, &email)
        .map(Json)
        .map_err(enrollment_error_to_response)
}

/// `DELETE /activities/:activity_name/unregister?email=`: drop a student.
pub async fn unregister(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<Confirmation>, ApiError> {
    let (activity, email) = extract_target(path, query)?;
    state
        .enrollment
        .unregister(&activity, &email)
        .map(Json)
        .map_err(enrollment_error_to_response)
}

// Extractor failures (bad UTF-8 in the path, repeated `email` keys) still
// answer with a `{detail}` body, distinct from the 400s of the roster rules.
fn extract_target(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<(ActivityName, Email), ApiError> {
    let Path(activity_name) = path.map_err(|e| api_error(StatusCode::UNPROCESSABLE_ENTITY, e.body_text()))?;
    let Query(query) = query.map_err(|e| api_error(StatusCode::UNPROCESSABLE_ENTITY, e.body_text()))?;
    parse_target(&activity_name, query)
}

fn parse_target(activity_name: &str, query: EmailQuery) -> Result<(ActivityName, Email), ApiError> {
    let Some(raw_email) = query.email else {
        return Err(api_error(StatusCode::UNPROCESSABLE_ENTITY, MISSING_EMAIL));
    };
    let activity = ActivityName::parse(activity_name).map_err(enrollment_error_to_response)?;
    let email = Email::parse(&raw_email).map_err(enrollment_error_to_response)?;
    Ok((activity, email))
}

pub(crate) fn enrollment_error_to_status(err: &EnrollmentError) -> StatusCode {
    match err {
        EnrollmentError::InvalidActivityName | EnrollmentError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
        EnrollmentError::Roster(RosterError::ActivityNotFound(_)) => StatusCode::NOT_FOUND,
        EnrollmentError::Roster(
            RosterError::AlreadyRegistered { .. } | RosterError::NotRegistered { .. } | RosterError::ActivityFull { .. },
        ) => StatusCode::BAD_REQUEST,
    }
}

pub(crate) fn enrollment_error_to_response(err: EnrollmentError) -> ApiError {
    api_error(enrollment_error_to_status(&err), err.to_string())
}

#[cfg(test)]
#[path = "activities_test.rs"]
mod tests;
