use super::{ConsoleCommand, Flow, apply_command, format_view, parse_command, run};
use crate::config::OutputFormat;
use crate::nfc::SimulatedNfc;
use crate::screen::{Screen, Step};
use crate::tag::TagIdentifier;

async fn drive(
    provider: Option<SimulatedNfc>,
    events: tokio::sync::mpsc::UnboundedReceiver<crate::nfc::NfcEvent>,
    script: &str,
    format: OutputFormat,
) -> (Screen<SimulatedNfc>, String) {
    let screen = Screen::mount(provider);
    let mut out = Vec::new();
    let screen = run(screen, events, script.as_bytes(), &mut out, format)
        .await
        .expect("console run");
    (screen, String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn parses_tagged_commands() {
    assert_eq!(parse_command(r#"{"type":"press"}"#).unwrap(), ConsoleCommand::Press);
    assert_eq!(
        parse_command(r#"{"type":"go_to_settings"}"#).unwrap(),
        ConsoleCommand::GoToSettings
    );
    assert_eq!(
        parse_command(r#"{"type":"scan","id":[4,63,92,17]}"#).unwrap(),
        ConsoleCommand::Scan {
            id: TagIdentifier::from([4u8, 63, 92, 17])
        }
    );
    assert_eq!(
        parse_command(r#"{"type":"set_enabled","enabled":false}"#).unwrap(),
        ConsoleCommand::SetEnabled { enabled: false }
    );
    assert!(parse_command(r#"{"type":"write_tag"}"#).is_err());
    assert!(parse_command("scan").is_err());
}

#[test]
fn quit_stops_the_loop() {
    let (nfc, _rx) = SimulatedNfc::new(true, true);
    let mut screen = Screen::mount(Some(nfc));
    assert_eq!(apply_command(&mut screen, ConsoleCommand::Reset), Flow::Continue);
    assert_eq!(apply_command(&mut screen, ConsoleCommand::Quit), Flow::Quit);
}

#[test]
fn scan_without_reader_is_harmless() {
    let mut screen = Screen::<SimulatedNfc>::mount(None);
    let flow = apply_command(
        &mut screen,
        ConsoleCommand::Scan {
            id: TagIdentifier::from([1u8]),
        },
    );
    assert_eq!(flow, Flow::Continue);
    assert_eq!(screen.step(), &Step::NoNfc);
}

#[tokio::test]
async fn scan_script_shows_tag_content() {
    let (nfc, rx) = SimulatedNfc::new(true, true);
    let script = "{\"type\":\"scan\",\"id\":[4,63,92,17]}\n";
    let (screen, out) = drive(Some(nfc), rx, script, OutputFormat::Text).await;

    assert_eq!(screen.tag_content(), "4,63,92,17");
    assert!(out.contains("Scan a card with an NFC tag."));
    assert!(out.contains("Scanned! Content:\n4,63,92,17\n"));
    assert!(out.contains("[ Scan another tag ]"));
}

#[tokio::test]
async fn settings_flow_through_button_presses() {
    let (nfc, rx) = SimulatedNfc::new(false, true);
    let script = concat!(
        "{\"type\":\"press\"}\n",
        "{\"type\":\"set_enabled\",\"enabled\":true}\n",
        "{\"type\":\"press\"}\n",
        "{\"type\":\"scan\",\"id\":[1,2,3]}\n",
        "{\"type\":\"press\"}\n",
    );
    let (screen, out) = drive(Some(nfc), rx, script, OutputFormat::Text).await;

    assert_eq!(screen.step(), &Step::WaitingForTag);
    assert_eq!(screen.tag_content(), "");
    assert!(out.contains("[ Go to NFC Settings ]"));
    assert!(out.contains("[ Initialize NFC reader ]"));
    assert!(out.contains("1,2,3"));
}

#[tokio::test]
async fn invalid_lines_are_skipped() {
    let (nfc, rx) = SimulatedNfc::new(true, true);
    let script = "not json\n\n{\"type\":\"scan\",\"id\":[7]}\n";
    let (screen, _) = drive(Some(nfc), rx, script, OutputFormat::Text).await;
    assert_eq!(screen.tag_content(), "7");
}

#[tokio::test]
async fn quit_ignores_remaining_input() {
    let (nfc, rx) = SimulatedNfc::new(true, true);
    let script = "{\"type\":\"quit\"}\n{\"type\":\"scan\",\"id\":[7]}\n";
    let (screen, _) = drive(Some(nfc), rx, script, OutputFormat::Text).await;
    assert_eq!(screen.step(), &Step::WaitingForTag);
}

#[tokio::test]
async fn settings_failure_shows_alert_in_json() {
    let (nfc, rx) = SimulatedNfc::new(false, false);
    let script = "{\"type\":\"press\"}\n{\"type\":\"dismiss\"}\n";
    let (screen, out) = drive(Some(nfc), rx, script, OutputFormat::Json).await;

    assert_eq!(screen.step(), &Step::NfcNotEnabled);
    let updates: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).expect("json line"))
        .collect();
    assert_eq!(updates.len(), 3);
    assert!(updates.iter().all(|u| u["type"] == "screen"));
    assert!(updates[0].get("alert").is_none());
    assert!(updates[1]["alert"].is_string());
    assert!(updates[2].get("alert").is_none());
}

#[tokio::test]
async fn unchanged_screen_is_not_redrawn() {
    let (nfc, rx) = SimulatedNfc::new(true, true);
    let script = "{\"type\":\"press\"}\n{\"type\":\"go_to_settings\"}\n";
    let (_, out) = drive(Some(nfc), rx, script, OutputFormat::Json).await;
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn json_update_is_single_line() {
    let view = crate::view::render(&Step::NoNfc, None);
    let line = format_view(&view, OutputFormat::Json).expect("json update");
    assert!(line.ends_with('\n'));
    assert_eq!(line.trim_end().lines().count(), 1);
    let value: serde_json::Value = serde_json::from_str(&line).expect("json");
    assert_eq!(value["step"], "no_nfc");
}

#[test]
fn json_update_is_tagged_as_screen() {
    let view = crate::view::render(&Step::NfcNotEnabled, Some("boom"));
    let line = format_view(&view, OutputFormat::Json).expect("json update");
    let value: serde_json::Value = serde_json::from_str(&line).expect("json");
    assert_eq!(value["type"], "screen");
    assert_eq!(value["alert"], "boom");

    let text = format_view(&view, OutputFormat::Text).expect("text update");
    assert!(text.ends_with("\n\n"));
}
