use super::*;

#[test]
fn controller_request_uses_tagged_payload() {
    let request: ControllerRequest = serde_json::from_value(serde_json::json!({
        "type": "set_color",
        "payload": { "color": "Red" }
    }))
    .expect("request");
    assert_eq!(
        request,
        ControllerRequest::SetColor {
            color: "Red".into()
        }
    );

    let request: ControllerRequest =
        serde_json::from_value(serde_json::json!({ "type": "prepare" })).expect("request");
    assert_eq!(request, ControllerRequest::Prepare);
}

#[test]
fn set_number_accepts_json_integers_and_strings() {
    let from_int: SetNumberRequest =
        serde_json::from_value(serde_json::json!({ "number": 42 })).expect("int");
    let from_text: SetNumberRequest =
        serde_json::from_value(serde_json::json!({ "number": "42" })).expect("text");
    assert_eq!(from_int.number, "42");
    assert_eq!(from_text.number, "42");

    let negative: SetNumberRequest =
        serde_json::from_value(serde_json::json!({ "number": -3 })).expect("negative");
    assert_eq!(negative.number, "-3");

    assert!(serde_json::from_value::<SetNumberRequest>(serde_json::json!({ "number": true })).is_err());
}

#[test]
fn failure_result_omits_operation_fields() {
    let value = serde_json::to_value(OperationResult::failure("No color selected")).expect("json");
    assert_eq!(
        value,
        serde_json::json!({
            "success": false,
            "message": "No color selected",
            "status": "error"
        })
    );
}

#[test]
fn pulse_event_serializes_with_type_tag() {
    let event = TransmissionEvent::Pulse {
        symbol: Symbol::Dash,
        role: PulseRole::Digit,
        value: Some('7'),
        duration: 600,
        description: "Dash (digit)".into(),
    };
    let value = serde_json::to_value(&event).expect("json");
    assert_eq!(value["type"], "pulse");
    assert_eq!(value["symbol"], "dash");
    assert_eq!(value["role"], "digit");
    assert_eq!(value["value"], "7");
    assert_eq!(event.duration(), 600);
}

#[test]
fn status_response_round_trips_through_untagged_envelope() {
    let report = StatusReport {
        color: Some(Color::Green),
        number: None,
        is_transmitting: false,
        history: vec!["Red 1 sent".into()],
        ready_to_send: false,
    };
    let text = serde_json::to_string(&ControllerResponse::Status(report.clone())).expect("json");
    let parsed: ControllerResponse = serde_json::from_str(&text).expect("parse");
    assert_eq!(parsed, ControllerResponse::Status(report));
}
