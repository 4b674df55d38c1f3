//! What the screen shows for each step.

use serde::Serialize;

use crate::screen::Step;

pub const TITLE: &str = "NFC Reader";

/// What a button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    GoToSettings,
    Initialize,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub label: &'static str,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenView {
    pub title: &'static str,
    pub step: &'static str,
    pub lines: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<Button>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

pub fn render(step: &Step, alert: Option<&str>) -> ScreenView {
    let (lines, content) = match step {
        Step::Initializing => (vec!["Initializing..."], None),
        Step::NoNfc => (
            vec![
                "This device does not seem to have NFC, or the NFC plugin is not configured correctly.",
            ],
            None,
        ),
        Step::NfcNotEnabled => (
            vec![
                "NFC is not enabled on this device. Press the button below to open the settings and turn NFC on.",
            ],
            None,
        ),
        Step::WaitingForNfcEnabled => (
            vec!["Once NFC is enabled, press the button below."],
            None,
        ),
        Step::WaitingForTag => (vec!["Scan a card with an NFC tag."], None),
        Step::TagRead { content } => (vec!["Scanned! Content:"], Some(content.clone())),
    };

    ScreenView {
        title: TITLE,
        step: step.name(),
        lines,
        content,
        button: button_for(step),
        alert: alert.map(str::to_string),
    }
}

pub fn action_for(step: &Step) -> Option<Action> {
    button_for(step).map(|b| b.action)
}

fn button_for(step: &Step) -> Option<Button> {
    let (label, action) = match step {
        Step::NfcNotEnabled => ("Go to NFC Settings", Action::GoToSettings),
        Step::WaitingForNfcEnabled => ("Initialize NFC reader", Action::Initialize),
        Step::TagRead { .. } => ("Scan another tag", Action::Reset),
        Step::Initializing | Step::NoNfc | Step::WaitingForTag => return None,
    };
    Some(Button { label, action })
}

impl ScreenView {
    /// Plain-text rendering for a terminal.
    pub fn to_text(&self) -> String {
        let mut out = format!("== {} ==\n", self.title);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        if let Some(content) = &self.content {
            out.push_str(content);
            out.push('\n');
        }
        if let Some(button) = &self.button {
            out.push_str(&format!("[ {} ]\n", button.label));
        }
        if let Some(alert) = &self.alert {
            out.push_str(&format!("!! {alert}\n"));
        }
        out
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
