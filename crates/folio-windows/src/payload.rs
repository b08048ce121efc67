//! Typed window payloads
//!
//! Data handed to a window when it opens. Each variant belongs to exactly one
//! data-dependent panel; the serialized form keeps the `fileType` tag the
//! Finder uses for its files.

use crate::catalog::{FileType, FinderFile};
use crate::id::WindowId;
use serde::{Deserialize, Serialize};

/// Image shown by the image viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFile {
    /// Item id within its source list
    pub id: u32,
    /// Window title
    pub name: String,
    /// Icon path
    pub icon: String,
    /// Image location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Document shown by the text viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFile {
    /// Item id within its folder
    pub id: u32,
    /// Window title
    pub name: String,
    /// Icon path
    pub icon: String,
    /// Heading under the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Optional header image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Body paragraphs
    #[serde(default)]
    pub description: Vec<String>,
}

/// Payload carried by an open window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "fileType")]
pub enum WindowPayload {
    /// For [`WindowId::ImgFile`]
    #[serde(rename = "img")]
    Image(ImageFile),
    /// For [`WindowId::TextFile`]
    #[serde(rename = "txt")]
    Text(TextFile),
}

impl WindowPayload {
    /// Window this payload is meant for
    #[inline]
    #[must_use]
    pub fn target(&self) -> WindowId {
        match self {
            Self::Image(_) => WindowId::ImgFile,
            Self::Text(_) => WindowId::TextFile,
        }
    }

    /// Display name of the carried item
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Image(image) => &image.name,
            Self::Text(text) => &text.name,
        }
    }

    /// Image payload, if this is one
    #[inline]
    #[must_use]
    pub fn as_image(&self) -> Option<&ImageFile> {
        match self {
            Self::Image(image) => Some(image),
            Self::Text(_) => None,
        }
    }

    /// Text payload, if this is one
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&TextFile> {
        match self {
            Self::Text(text) => Some(text),
            Self::Image(_) => None,
        }
    }

    /// Build the payload a Finder file opens with
    ///
    /// Only `txt` and `img` files have a viewer window.
    #[must_use]
    pub fn from_finder_file(file: &FinderFile) -> Option<Self> {
        match file.file_type {
            FileType::Img => Some(Self::Image(ImageFile {
                id: file.id,
                name: file.name.clone(),
                icon: file.icon.clone(),
                image_url: file.image_url.clone(),
            })),
            FileType::Txt => Some(Self::Text(TextFile {
                id: file.id,
                name: file.name.clone(),
                icon: file.icon.clone(),
                subtitle: file.subtitle.clone(),
                image_url: file.image_url.clone(),
                description: file.description.clone(),
            })),
            FileType::Url | FileType::Fig | FileType::Pdf => None,
        }
    }
}
