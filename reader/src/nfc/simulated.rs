//! In-memory NFC provider used by the console binary.
//!
//! Radio state and settings availability are plain flags toggled from the
//! console; a simulated scan fans out to every registered listener over an
//! unbounded channel.

use tokio::sync::mpsc;
use tracing::{debug, info};

use super::{ListenerId, NfcCapability, NfcEvent};
use crate::config::Config;
use crate::error::NfcError;
use crate::tag::TagIdentifier;

pub struct SimulatedNfc {
    enabled: bool,
    settings_available: bool,
    listeners: Vec<ListenerId>,
    events: mpsc::UnboundedSender<NfcEvent>,
}

impl SimulatedNfc {
    pub fn new(enabled: bool, settings_available: bool) -> (Self, mpsc::UnboundedReceiver<NfcEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let nfc = Self {
            enabled,
            settings_available,
            listeners: Vec::new(),
            events,
        };
        (nfc, rx)
    }

    /// Provider described by the configuration, or `None` when configured absent.
    pub fn from_config(config: &Config) -> (Option<Self>, mpsc::UnboundedReceiver<NfcEvent>) {
        let (nfc, rx) = Self::new(config.nfc_enabled, config.settings_available);
        (config.nfc_present.then_some(nfc), rx)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        info!(enabled, "Simulated NFC radio toggled");
        self.enabled = enabled;
    }

    pub fn set_settings_available(&mut self, available: bool) {
        self.settings_available = available;
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Present a tag to the reader. Returns how many listeners were notified.
    pub fn scan(&mut self, identifier: TagIdentifier) -> usize {
        if !self.enabled {
            debug!("Radio disabled, scan not seen");
            return 0;
        }

        let mut delivered = 0;
        for &listener in &self.listeners {
            let event = NfcEvent::TagDiscovered {
                listener,
                identifier: identifier.clone(),
            };
            if self.events.send(event).is_ok() {
                delivered += 1;
            }
        }
        debug!(delivered, "Tag presented to simulated reader");
        delivered
    }
}

impl NfcCapability for SimulatedNfc {
    fn add_tag_listener(&mut self) -> Result<ListenerId, NfcError> {
        if !self.enabled {
            return Err(NfcError::Disabled);
        }
        let id = ListenerId::new();
        self.listeners.push(id);
        debug!(listener = %id, "Tag listener registered");
        Ok(id)
    }

    fn remove_tag_listener(&mut self, listener: ListenerId) {
        self.listeners.retain(|&id| id != listener);
    }

    fn show_settings(&mut self) -> Result<(), NfcError> {
        if self.settings_available {
            info!("Opening NFC settings");
            Ok(())
        } else {
            Err(NfcError::SettingsUnavailable(
                "settings activity not found".into(),
            ))
        }
    }
}

#[cfg(test)]
#[path = "../tests/simulated_tests.rs"]
mod tests;
