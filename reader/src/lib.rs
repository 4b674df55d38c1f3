//! NFC tag reader screen.
//!
//! A small presentation state machine that reports whether the device can
//! read NFC tags and shows the identifier of the last scanned tag. The NFC
//! hardware sits behind [`nfc::NfcCapability`]; the binary plugs in
//! [`nfc::SimulatedNfc`] and drives the screen from the console.

pub mod config;
pub mod console;
pub mod error;
pub mod nfc;
pub mod screen;
pub mod tag;
pub mod view;

pub use error::{ConfigError, NfcError};
pub use nfc::{ListenerId, NfcCapability, NfcEvent};
pub use screen::{Screen, Step};
pub use tag::TagIdentifier;
