//! Texture descriptor models
//!
//! The payload shape shared by the upstream providers and the JSON endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single texture reference as returned by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Texture {
    /// Location of the PNG resource
    pub url: String,
    /// Provider-specific extras (e.g. `{"model": "slim"}`), passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Texture {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            metadata: None,
        }
    }
}

/// The textures a provider knows for one player.
///
/// Serialized with the upper-case field names the providers use, so the
/// JSON endpoint returns the same shape it received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextureDescriptor {
    #[serde(rename = "SKIN", default, skip_serializing_if = "Option::is_none")]
    pub skin: Option<Texture>,
    #[serde(rename = "CAPE", default, skip_serializing_if = "Option::is_none")]
    pub cape: Option<Texture>,
}

impl TextureDescriptor {
    /// True when neither a skin nor a cape is present.
    pub fn is_empty(&self) -> bool {
        self.skin.is_none() && self.cape.is_none()
    }

    /// Returns the texture of the requested kind, if any.
    pub fn texture(&self, kind: TextureKind) -> Option<&Texture> {
        match kind {
            TextureKind::Skin => self.skin.as_ref(),
            TextureKind::Cape => self.cape.as_ref(),
        }
    }
}

/// Which texture an image endpoint serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    Skin,
    Cape,
}

impl TextureKind {
    /// Lower-case name as used in routes and log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextureKind::Skin => "skin",
            TextureKind::Cape => "cape",
        }
    }
}

impl fmt::Display for TextureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureKind::Skin => write!(f, "Skin"),
            TextureKind::Cape => write!(f, "Cape"),
        }
    }
}
