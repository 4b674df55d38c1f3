//! Tag identifiers as reported by the NFC provider.
//!
//! Providers disagree on byte signedness: a signed platform reports `0x90` as
//! `-112`, an unsigned one as `144`. Values are kept exactly as reported so the
//! display matches what the provider handed over.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TagValueOutOfRange;

/// Raw identifier bytes of one scanned tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i16>", into = "Vec<i16>")]
pub struct TagIdentifier(Vec<i16>);

impl TagIdentifier {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Comma-joined decimal values, e.g. `4,63,92,17`.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TagIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl From<&[u8]> for TagIdentifier {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.iter().map(|&b| i16::from(b)).collect())
    }
}

impl From<&[i8]> for TagIdentifier {
    fn from(bytes: &[i8]) -> Self {
        Self(bytes.iter().map(|&b| i16::from(b)).collect())
    }
}

impl<const N: usize> From<[u8; N]> for TagIdentifier {
    fn from(bytes: [u8; N]) -> Self {
        Self::from(&bytes[..])
    }
}

impl TryFrom<Vec<i16>> for TagIdentifier {
    type Error = TagValueOutOfRange;

    fn try_from(values: Vec<i16>) -> Result<Self, Self::Error> {
        if let Some(&bad) = values.iter().find(|v| !(-128..=255).contains(*v)) {
            return Err(TagValueOutOfRange(bad));
        }
        Ok(Self(values))
    }
}

impl From<TagIdentifier> for Vec<i16> {
    fn from(id: TagIdentifier) -> Self {
        id.0
    }
}

#[cfg(test)]
#[path = "tests/tag_tests.rs"]
mod tests;
