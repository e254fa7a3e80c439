use super::*;

fn parse(args: &[&str]) -> Command {
    Cli::try_parse_from(std::iter::once("fiber-tester").chain(args.iter().copied()))
        .expect("args")
        .command
}

#[test]
fn one_shot_commands_run_on_fresh_controller() {
    let output = run(parse(&["set-color", "Red"])).expect("run");
    assert_eq!(output["status"], "color_selected");

    let output = run(parse(&["prepare"])).expect("run");
    assert_eq!(output["success"], false);
    assert_eq!(output["message"], "No color selected");

    let output = run(parse(&["status"])).expect("run");
    assert_eq!(output["ready_to_send"], false);
}

#[test]
fn negative_numbers_reach_validation() {
    let output = run(parse(&["set-number", "-5"])).expect("run");
    assert_eq!(output["message"], "Invalid number: -5. Must be 0-100.");
}

#[test]
fn send_runs_the_whole_exchange() {
    let output = run(parse(&["send", "Green", "12"])).expect("run");
    let steps = output.as_array().expect("steps");
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[2]["status"], "transmitting");
    assert_eq!(steps[3]["message"], "Green 12 sent");
}

#[test]
fn send_stops_at_first_refusal() {
    let output = run(parse(&["send", "Pink", "12"])).expect("run");
    let steps = output.as_array().expect("steps");
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0]["status"], "error");
}

#[test]
fn encode_renders_or_fails() {
    let output = run(parse(&["encode", "b7"])).expect("run");
    assert_eq!(output["pattern"], "−··· −−···");
    assert!(run(parse(&["encode", "SOS"])).is_err());
}
