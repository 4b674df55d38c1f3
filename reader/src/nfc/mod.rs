//! NFC capability provider interface.
//!
//! The screen never talks to hardware directly. It holds an optional provider
//! (absent when the device has no NFC or the plugin is missing) and consumes:
//! - listener registration, which fails when the radio is disabled
//! - settings navigation, best effort
//! - tag events, delivered out of band as [`NfcEvent`]s

pub mod simulated;

use std::fmt;

use uuid::Uuid;

use crate::error::NfcError;
use crate::tag::TagIdentifier;

pub use simulated::SimulatedNfc;

/// Handle of a standing tag-discovered registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

impl ListenerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Events pushed by a provider to its registered listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NfcEvent {
    TagDiscovered {
        listener: ListenerId,
        identifier: TagIdentifier,
    },
}

/// Whatever native facility exposes NFC tag discovery and settings navigation.
pub trait NfcCapability {
    /// Register a standing tag listener. Stays active until removed.
    fn add_tag_listener(&mut self) -> Result<ListenerId, NfcError>;

    /// Drop a registration. Unknown ids are ignored.
    fn remove_tag_listener(&mut self, listener: ListenerId);

    /// Send the user to the system NFC settings.
    fn show_settings(&mut self) -> Result<(), NfcError>;
}

impl<P: NfcCapability + ?Sized> NfcCapability for Box<P> {
    fn add_tag_listener(&mut self) -> Result<ListenerId, NfcError> {
        (**self).add_tag_listener()
    }

    fn remove_tag_listener(&mut self, listener: ListenerId) {
        (**self).remove_tag_listener(listener)
    }

    fn show_settings(&mut self) -> Result<(), NfcError> {
        (**self).show_settings()
    }
}
