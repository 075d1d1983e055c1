/// Speakers and the dialogue lines they produce.
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{require_non_empty, SceneError};

/// Name of the reserved speaker used by `narrate`.
pub const NARRATOR: &str = "narrator";

/// Key that carries the optional image cue of a dialogue line.
pub const IMAGE_KEY: &str = "image";

/// A named character that can speak lines of dialogue.
///
/// Speakers are not part of the serialized document; each line they speak
/// carries the speaker's name as its key.
///
/// ```
/// use kspeak::Speaker;
///
/// let amy = Speaker::new("Amy").unwrap();
/// let line = amy.speak_with_image("Hello, world!", "wave").unwrap();
/// assert_eq!(line.speaker(), "Amy");
/// assert_eq!(line.image(), Some("wave"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Speaker {
    name: String,
}

impl Speaker {
    /// Create a speaker. The name must be non-empty and must not be the
    /// reserved `"image"` key.
    pub fn new(name: impl Into<String>) -> Result<Self, SceneError> {
        let name = name.into();
        require_non_empty(&name, "speaker name")?;
        if name == IMAGE_KEY {
            return Err(SceneError::invalid(format!(
                "speaker name '{IMAGE_KEY}' is reserved for image cues"
            )));
        }
        Ok(Self { name })
    }

    /// The reserved narrator speaker.
    pub fn narrator() -> Self {
        Self {
            name: NARRATOR.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Speak a line with no image cue.
    pub fn speak(&self, text: impl Into<String>) -> Result<DialogueLine, SceneError> {
        self.speak_with_image(text, "")
    }

    /// Speak a line, showing `image_name` while it is on screen. An empty
    /// image name means no image cue.
    pub fn speak_with_image(
        &self,
        text: impl Into<String>,
        image_name: impl Into<String>,
    ) -> Result<DialogueLine, SceneError> {
        let text = text.into();
        require_non_empty(&text, "dialogue text")?;
        let image_name = image_name.into();
        Ok(DialogueLine {
            speaker: self.name.clone(),
            text,
            image: if image_name.is_empty() {
                None
            } else {
                Some(image_name)
            },
        })
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One spoken line: `{"<speaker>": "<text>", "image"?: "<name>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueLine {
    speaker: String,
    text: String,
    image: Option<String>,
}

impl DialogueLine {
    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

impl Serialize for DialogueLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.image.is_some() { 2 } else { 1 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry(&self.speaker, &self.text)?;
        if let Some(image) = &self.image {
            map.serialize_entry(IMAGE_KEY, image)?;
        }
        map.end()
    }
}

struct DialogueLineVisitor;

impl<'de> Visitor<'de> for DialogueLineVisitor {
    type Value = DialogueLine;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map with one speaker key and an optional \"image\" key")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut spoken: Option<(String, String)> = None;
        let mut image: Option<String> = None;

        while let Some((key, value)) = access.next_entry::<String, String>()? {
            if key == IMAGE_KEY {
                if image.replace(value).is_some() {
                    return Err(de::Error::duplicate_field(IMAGE_KEY));
                }
            } else if let Some((existing, _)) = &spoken {
                return Err(de::Error::custom(format!(
                    "dialogue line has more than one speaker: '{existing}' and '{key}'"
                )));
            } else {
                spoken = Some((key, value));
            }
        }

        let (speaker, text) =
            spoken.ok_or_else(|| de::Error::custom("dialogue line has no speaker"))?;
        if speaker.is_empty() {
            return Err(de::Error::custom("dialogue line has an empty speaker name"));
        }
        if text.is_empty() {
            return Err(de::Error::custom(format!(
                "dialogue line from '{speaker}' has empty text"
            )));
        }
        if image.as_deref() == Some("") {
            return Err(de::Error::custom(format!(
                "dialogue line from '{speaker}' has an empty image name"
            )));
        }
        Ok(DialogueLine {
            speaker,
            text,
            image,
        })
    }
}

impl<'de> Deserialize<'de> for DialogueLine {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DialogueLineVisitor)
    }
}
