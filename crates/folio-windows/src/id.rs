//! Window identifiers
//!
//! The shell knows a fixed set of panels. [`WindowId`] enumerates them in
//! registration order, which is also the tie-break order for painting.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier of a known desktop window
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WindowId {
    /// Portfolio file browser
    Finder,
    /// Contact card
    Contact,
    /// Resume viewer
    Resume,
    /// Articles browser
    Safari,
    /// Photo gallery
    Photos,
    /// Skills terminal
    Terminal,
    /// Text file viewer
    TextFile,
    /// Image file viewer
    ImgFile,
    /// Instagram clone
    Instagram,
    /// Chat assistant
    ChatGpt,
    /// Trash bin
    Trash,
}

impl WindowId {
    /// Every known window, in registration order
    pub const ALL: [WindowId; 11] = [
        WindowId::Finder,
        WindowId::Contact,
        WindowId::Resume,
        WindowId::Safari,
        WindowId::Photos,
        WindowId::Terminal,
        WindowId::TextFile,
        WindowId::ImgFile,
        WindowId::Instagram,
        WindowId::ChatGpt,
        WindowId::Trash,
    ];

    /// Canonical string key
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Finder => "finder",
            Self::Contact => "contact",
            Self::Resume => "resume",
            Self::Safari => "safari",
            Self::Photos => "photos",
            Self::Terminal => "terminal",
            Self::TextFile => "textfile",
            Self::ImgFile => "imgfile",
            Self::Instagram => "instagram",
            Self::ChatGpt => "chatgpt",
            Self::Trash => "trash",
        }
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key did not name a known window
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown window: {0}")]
pub struct ParseWindowIdError(pub String);

impl FromStr for WindowId {
    type Err = ParseWindowIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Finder derives `txtfile` from file type + kind
        if s == "txtfile" {
            return Ok(Self::TextFile);
        }
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseWindowIdError(s.to_string()))
    }
}

impl Serialize for WindowId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WindowId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}
