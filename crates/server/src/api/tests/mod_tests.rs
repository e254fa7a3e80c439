use super::*;
use shared::protocol::OperationStatus;

fn state() -> Arc<AppState> {
    Arc::new(AppState::new(8000, 2))
}

#[tokio::test]
async fn health_reports_configured_port() {
    let Json(report) = http_health(State(state())).await;
    assert_eq!(report.status, "healthy");
    assert_eq!(report.port, 8000);
}

#[tokio::test]
async fn default_session_flow_through_handlers() {
    let state = state();

    let Json(result) = http_set_color(
        State(Arc::clone(&state)),
        Ok(Json(SetColorRequest {
            color: "Red".into(),
        })),
    )
    .await
    .expect("set color");
    assert_eq!(result.status, OperationStatus::ColorSelected);

    let Json(result) = http_set_number(
        State(Arc::clone(&state)),
        Ok(Json(SetNumberRequest {
            number: "42".into(),
        })),
    )
    .await
    .expect("set number");
    assert_eq!(result.message, "Red 42 ready");

    let Json(prepared) = http_prepare(State(Arc::clone(&state))).await;
    assert_eq!(prepared.total_duration, Some(9400));

    let Json(status) = http_status(State(Arc::clone(&state))).await;
    assert!(status.is_transmitting);

    let Json(completed) = http_complete(State(Arc::clone(&state))).await;
    assert_eq!(completed.history, Some(vec!["Red 42 sent".to_string()]));

    let Json(cleared) = http_clear(State(state)).await;
    assert_eq!(cleared.status, OperationStatus::Cleared);
}

#[tokio::test]
async fn validation_failure_is_a_successful_response() {
    let Json(result) = http_set_color(
        State(state()),
        Ok(Json(SetColorRequest {
            color: "Purple".into(),
        })),
    )
    .await
    .expect("business failures are not faults");
    assert!(!result.success);
    assert_eq!(result.status, OperationStatus::Error);
}

#[tokio::test]
async fn sessions_are_isolated_and_capped() {
    let state = state();
    let (status, Json(first)) = http_create_session(State(Arc::clone(&state)))
        .await
        .expect("first");
    assert_eq!(status, StatusCode::CREATED);
    let (_, Json(second)) = http_create_session(State(Arc::clone(&state)))
        .await
        .expect("second");

    let (status, Json(error)) = http_create_session(State(Arc::clone(&state)))
        .await
        .expect_err("capacity");
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(error.error, ErrorCode::Capacity);

    let Json(response) = http_session_rpc(
        State(Arc::clone(&state)),
        Ok(Path(first.session_id.0)),
        Ok(Json(ControllerRequest::SetColor {
            color: "Blue".into(),
        })),
    )
    .await
    .expect("rpc");
    assert!(matches!(response, ControllerResponse::Operation(ref r) if r.success));

    let Json(response) = http_session_rpc(
        State(Arc::clone(&state)),
        Ok(Path(second.session_id.0)),
        Ok(Json(ControllerRequest::Status)),
    )
    .await
    .expect("status");
    let ControllerResponse::Status(report) = response else {
        panic!("expected status report");
    };
    assert_eq!(report.color, None);

    let Json(default_status) = http_status(State(Arc::clone(&state))).await;
    assert_eq!(default_status.color, None);

    let status = http_delete_session(State(Arc::clone(&state)), Ok(Path(first.session_id.0)))
        .await
        .expect("delete");
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, Json(error)) = http_session_rpc(
        State(state),
        Ok(Path(first.session_id.0)),
        Ok(Json(ControllerRequest::Status)),
    )
    .await
    .expect_err("deleted session");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error.error, ErrorCode::NotFound);
}
