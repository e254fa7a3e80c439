use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{StatusCode, Uri},
    Json,
};
use chrono::Utc;
use shared::{
    domain::SessionId,
    error::{ApiError, ErrorCode},
    protocol::{
        ControllerRequest, ControllerResponse, HealthReport, OperationResult, SessionCreated,
        SetColorRequest, SetNumberRequest, StatusReport,
    },
};
use tracing::warn;
use uuid::Uuid;

use crate::app_state::{AppState, SharedController};

pub(crate) type Fault = (StatusCode, Json<ApiError>);
pub(crate) type ApiResult<T> = Result<Json<T>, Fault>;

pub(crate) async fn http_health(State(state): State<Arc<AppState>>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "healthy".into(),
        message: "Fiber Tester Backend Running".into(),
        port: state.port,
        timestamp: Utc::now(),
    })
}

pub(crate) async fn http_status(State(state): State<Arc<AppState>>) -> Json<StatusReport> {
    let controller = state.sessions.default_session();
    let status = controller.lock().await.status();
    Json(status)
}

pub(crate) async fn http_set_color(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SetColorRequest>, JsonRejection>,
) -> ApiResult<OperationResult> {
    let Json(req) = payload.map_err(malformed)?;
    let controller = state.sessions.default_session();
    let result = controller.lock().await.set_color(&req.color);
    Ok(Json(result))
}

pub(crate) async fn http_set_number(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SetNumberRequest>, JsonRejection>,
) -> ApiResult<OperationResult> {
    let Json(req) = payload.map_err(malformed)?;
    let controller = state.sessions.default_session();
    let result = controller.lock().await.set_number(&req.number);
    Ok(Json(result))
}

pub(crate) async fn http_prepare(State(state): State<Arc<AppState>>) -> Json<OperationResult> {
    let controller = state.sessions.default_session();
    let result = controller.lock().await.prepare();
    Json(result)
}

pub(crate) async fn http_complete(State(state): State<Arc<AppState>>) -> Json<OperationResult> {
    let controller = state.sessions.default_session();
    let result = controller.lock().await.complete();
    Json(result)
}

pub(crate) async fn http_clear(State(state): State<Arc<AppState>>) -> Json<OperationResult> {
    let controller = state.sessions.default_session();
    let result = controller.lock().await.clear();
    Json(result)
}

pub(crate) async fn http_rpc(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ControllerRequest>, JsonRejection>,
) -> ApiResult<ControllerResponse> {
    let Json(request) = payload.map_err(malformed)?;
    Ok(Json(dispatch(&state.sessions.default_session(), request).await))
}

pub(crate) async fn http_create_session(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<SessionCreated>), Fault> {
    let session_id = state
        .sessions
        .create()
        .await
        .map_err(|e| fault(StatusCode::SERVICE_UNAVAILABLE, e))?;
    Ok((StatusCode::CREATED, Json(SessionCreated { session_id })))
}

pub(crate) async fn http_session_rpc(
    State(state): State<Arc<AppState>>,
    session_id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<ControllerRequest>, JsonRejection>,
) -> ApiResult<ControllerResponse> {
    let controller = lookup_session(&state, session_id).await?;
    let Json(request) = payload.map_err(malformed)?;
    Ok(Json(dispatch(&controller, request).await))
}

pub(crate) async fn http_delete_session(
    State(state): State<Arc<AppState>>,
    session_id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, Fault> {
    let session_id = session_path(session_id)?;
    if state.sessions.remove(session_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(unknown_session(session_id))
    }
}

pub(crate) async fn not_found(uri: Uri) -> Fault {
    fault(
        StatusCode::NOT_FOUND,
        ApiError::new(
            ErrorCode::NotFound,
            format!("endpoint not found: {}", uri.path()),
        ),
    )
}

async fn dispatch(controller: &SharedController, request: ControllerRequest) -> ControllerResponse {
    controller.lock().await.handle(request)
}

async fn lookup_session(
    state: &AppState,
    session_id: Result<Path<Uuid>, PathRejection>,
) -> Result<SharedController, Fault> {
    let session_id = session_path(session_id)?;
    state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| unknown_session(session_id))
}

fn session_path(session_id: Result<Path<Uuid>, PathRejection>) -> Result<SessionId, Fault> {
    let Path(raw) = session_id.map_err(|rejection| {
        fault(
            StatusCode::BAD_REQUEST,
            ApiError::new(ErrorCode::BadRequest, rejection.body_text()),
        )
    })?;
    Ok(SessionId(raw))
}

fn unknown_session(session_id: SessionId) -> Fault {
    fault(
        StatusCode::NOT_FOUND,
        ApiError::new(ErrorCode::NotFound, format!("unknown session {session_id}")),
    )
}

fn malformed(rejection: JsonRejection) -> Fault {
    fault(
        rejection.status(),
        ApiError::new(ErrorCode::BadRequest, rejection.body_text()),
    )
}

fn fault(status: StatusCode, error: ApiError) -> Fault {
    warn!(%status, code = ?error.error, message = %error.message, "request rejected");
    (status, Json(error))
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
