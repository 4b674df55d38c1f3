//! Tag reader screen state machine.
//!
//! The screen owns one session: the current [`Step`] and, inside
//! [`Step::TagRead`] only, the display string of the last scanned tag. All
//! transitions run on the caller's thread in response to one UI action or one
//! provider event.

use tracing::{debug, info, warn};

use crate::nfc::{ListenerId, NfcCapability, NfcEvent};
use crate::tag::TagIdentifier;
use crate::view::{self, Action, ScreenView};

pub const SETTINGS_ERROR_ALERT: &str = "An error occurred while trying to open NFC settings.";

/// Current step of the reader session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Initializing,
    /// No provider: the device lacks NFC or the plugin is not set up.
    NoNfc,
    NfcNotEnabled,
    WaitingForNfcEnabled,
    WaitingForTag,
    TagRead { content: String },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Initializing => "initializing",
            Step::NoNfc => "no_nfc",
            Step::NfcNotEnabled => "nfc_not_enabled",
            Step::WaitingForNfcEnabled => "waiting_for_nfc_enabled",
            Step::WaitingForTag => "waiting_for_tag",
            Step::TagRead { .. } => "tag_read",
        }
    }
}

pub struct Screen<P> {
    provider: Option<P>,
    step: Step,
    listener: Option<ListenerId>,
    alert: Option<String>,
}

impl<P: NfcCapability> Screen<P> {
    /// A screen in `Initializing`; nothing is registered until [`Screen::initialize`].
    pub fn new(provider: Option<P>) -> Self {
        Self {
            provider,
            step: Step::Initializing,
            listener: None,
            alert: None,
        }
    }

    /// Create the screen and run initialization, like a UI mount.
    pub fn mount(provider: Option<P>) -> Self {
        let mut screen = Self::new(provider);
        screen.initialize();
        screen
    }

    pub fn step(&self) -> &Step {
        &self.step
    }

    /// Display string of the last scan; empty unless the step is `TagRead`.
    pub fn tag_content(&self) -> &str {
        match &self.step {
            Step::TagRead { content } => content,
            _ => "",
        }
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn listener(&self) -> Option<ListenerId> {
        self.listener
    }

    pub fn provider(&self) -> Option<&P> {
        self.provider.as_ref()
    }

    pub fn provider_mut(&mut self) -> Option<&mut P> {
        self.provider.as_mut()
    }

    pub fn view(&self) -> ScreenView {
        view::render(&self.step, self.alert.as_deref())
    }

    /// Detect the provider and register a standing tag listener.
    ///
    /// Any previous registration is removed first, so re-running this never
    /// leaves two listeners firing for the same scan.
    pub fn initialize(&mut self) {
        let Some(provider) = self.provider.as_mut() else {
            self.set_step(Step::NoNfc);
            return;
        };

        if let Some(previous) = self.listener.take() {
            debug!(listener = %previous, "Removing previous tag listener");
            provider.remove_tag_listener(previous);
        }

        match provider.add_tag_listener() {
            Ok(id) => {
                self.listener = Some(id);
                self.set_step(Step::WaitingForTag);
            }
            Err(e) => {
                warn!("Tag listener registration failed: {}", e);
                self.set_step(Step::NfcNotEnabled);
            }
        }
    }

    /// Ask the provider to open system NFC settings.
    pub fn go_to_settings(&mut self) {
        if self.step != Step::NfcNotEnabled {
            debug!(step = self.step.name(), "Settings navigation ignored");
            return;
        }
        let Some(provider) = self.provider.as_mut() else {
            return;
        };

        match provider.show_settings() {
            Ok(()) => {
                self.alert = None;
                self.set_step(Step::WaitingForNfcEnabled);
            }
            Err(e) => {
                warn!("Opening NFC settings failed: {}", e);
                self.alert = Some(SETTINGS_ERROR_ALERT.to_string());
            }
        }
    }

    /// Provider callback for one physical scan.
    ///
    /// Accepted while the standing listener is active (`WaitingForTag`, or
    /// `TagRead` where a new scan replaces the shown content).
    pub fn on_tag_discovered(&mut self, identifier: &TagIdentifier) {
        if !matches!(self.step, Step::WaitingForTag | Step::TagRead { .. }) {
            debug!(step = self.step.name(), "Tag ignored");
            return;
        }
        if identifier.is_empty() {
            warn!("Tag reported an empty identifier, ignoring");
            return;
        }

        let content = identifier.to_display_string();
        info!("Tag read: {}", content);
        self.set_step(Step::TagRead { content });
    }

    /// Route a provider event; events from stale registrations are dropped.
    pub fn handle_nfc_event(&mut self, event: NfcEvent) {
        match event {
            NfcEvent::TagDiscovered {
                listener,
                identifier,
            } => {
                if self.listener != Some(listener) {
                    debug!(listener = %listener, "Event from stale listener ignored");
                    return;
                }
                self.on_tag_discovered(&identifier);
            }
        }
    }

    /// Clear the session and run initialization again.
    pub fn reset(&mut self) {
        info!("Resetting tag reader");
        self.set_step(Step::Initializing);
        self.initialize();
    }

    /// Press the button of the current view. Returns the action taken, if any.
    ///
    /// Nothing happens while an alert is showing.
    pub fn press(&mut self) -> Option<Action> {
        if self.alert.is_some() {
            debug!("Alert showing, press ignored");
            return None;
        }
        let action = view::action_for(&self.step)?;
        self.perform(action);
        Some(action)
    }

    pub fn perform(&mut self, action: Action) {
        match action {
            Action::GoToSettings => self.go_to_settings(),
            Action::Initialize => self.initialize(),
            Action::Reset => self.reset(),
        }
    }

    /// Moving to another step also closes the alert raised in the old one.
    fn set_step(&mut self, step: Step) {
        if self.step != step {
            info!(from = self.step.name(), to = step.name(), "Step changed");
            self.alert = None;
        }
        self.step = step;
    }
}

#[cfg(test)]
#[path = "tests/screen_tests.rs"]
mod tests;
