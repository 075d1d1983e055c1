use serde::{Deserialize, Serialize};

/// A request to change the background or the character sprite.
///
/// Both paths are always written; the one not being changed is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageChange {
    #[serde(default)]
    background_image: String,
    #[serde(default)]
    character_image: String,
}

impl ImageChange {
    pub fn background(path: impl Into<String>) -> Self {
        Self {
            background_image: path.into(),
            character_image: String::new(),
        }
    }

    pub fn sprite(path: impl Into<String>) -> Self {
        Self {
            background_image: String::new(),
            character_image: path.into(),
        }
    }

    /// Background image path; empty when the background is unchanged.
    pub fn background_image(&self) -> &str {
        &self.background_image
    }

    /// Sprite image path; empty when the sprite is unchanged.
    pub fn character_image(&self) -> &str {
        &self.character_image
    }
}
