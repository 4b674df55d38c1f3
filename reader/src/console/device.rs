use serde::Deserialize;
use tracing::{info, warn};

use crate::nfc::SimulatedNfc;
use crate::screen::Screen;
use crate::tag::TagIdentifier;

/// Commands read from the console, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConsoleCommand {
    /// Press the button currently shown
    Press,
    /// Close the alert
    Dismiss,
    Initialize,
    GoToSettings,
    Reset,
    /// Present a tag to the simulated reader
    Scan { id: TagIdentifier },
    /// Toggle the simulated NFC radio
    SetEnabled { enabled: bool },
    SetSettingsAvailable { available: bool },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn parse_command(line: &str) -> Result<ConsoleCommand, serde_json::Error> {
    serde_json::from_str(line)
}

pub fn apply_command(screen: &mut Screen<SimulatedNfc>, cmd: ConsoleCommand) -> Flow {
    match cmd {
        ConsoleCommand::Press => {
            if let Some(action) = screen.press() {
                info!(?action, "Button pressed");
            }
        }
        ConsoleCommand::Dismiss => screen.dismiss_alert(),
        ConsoleCommand::Initialize => screen.initialize(),
        ConsoleCommand::GoToSettings => screen.go_to_settings(),
        ConsoleCommand::Reset => screen.reset(),
        ConsoleCommand::Scan { id } => match screen.provider_mut() {
            Some(nfc) => {
                if nfc.scan(id) == 0 {
                    info!(listeners = nfc.listener_count(), "Scan reached no listener");
                }
            }
            None => warn!("No NFC reader to scan with"),
        },
        ConsoleCommand::SetEnabled { enabled } => match screen.provider_mut() {
            Some(nfc) => nfc.set_enabled(enabled),
            None => warn!("No NFC reader to toggle"),
        },
        ConsoleCommand::SetSettingsAvailable { available } => {
            if let Some(nfc) = screen.provider_mut() {
                nfc.set_settings_available(available);
            }
        }
        ConsoleCommand::Quit => return Flow::Quit,
    }
    Flow::Continue
}
