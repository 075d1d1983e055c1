use serde::{Deserialize, Serialize};

use super::branch::{BranchOptions, OptionSet};
use super::dialogue::DialogueBlock;
use super::image::ImageChange;

/// One unit of a scene. The `kind` tag decides which payload key is
/// written; payloads of other kinds never appear, and parsing rejects
/// them.
///
/// ```json
/// {"kind": "DIALOGUE", "dialogue": [...]}
/// {"kind": "BRANCH", "branch": [...], "options": {"waitForAll": "false"}}
/// {"kind": "IMAGE_CHANGE", "imageChangeRequest": {...}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
pub enum ScenePart {
    Dialogue {
        dialogue: DialogueBlock,
    },
    Branch {
        branch: OptionSet,
        options: BranchOptions,
    },
    ImageChange {
        #[serde(rename = "imageChangeRequest")]
        image_change_request: ImageChange,
    },
}

/// The discriminant of a [`ScenePart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Dialogue,
    Branch,
    ImageChange,
}

impl Kind {
    /// The tag written to the `kind` field (e.g., "IMAGE_CHANGE").
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Dialogue => "DIALOGUE",
            Self::Branch => "BRANCH",
            Self::ImageChange => "IMAGE_CHANGE",
        }
    }
}

impl ScenePart {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Dialogue { .. } => Kind::Dialogue,
            Self::Branch { .. } => Kind::Branch,
            Self::ImageChange { .. } => Kind::ImageChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::branch::BranchOption;
    use crate::schema::speaker::Speaker;

    fn narrated(text: &str) -> DialogueBlock {
        let mut block = DialogueBlock::default();
        block.push(Speaker::narrator().speak(text).unwrap());
        block
    }

    #[test]
    fn dialogue_part_has_only_dialogue_payload() {
        let part = ScenePart::Dialogue {
            dialogue: narrated("Hi"),
        };
        assert_eq!(part.kind(), Kind::Dialogue);
        assert_eq!(
            serde_json::to_string(&part).unwrap(),
            r#"{"kind":"DIALOGUE","dialogue":[{"narrator":"Hi"}]}"#
        );
    }

    #[test]
    fn branch_part_carries_options_map() {
        let mut branch = OptionSet::default();
        branch.push(BranchOption::new("A".to_string(), narrated("x")));
        let part = ScenePart::Branch {
            branch,
            options: BranchOptions { wait_for_all: true },
        };
        assert_eq!(part.kind(), Kind::Branch);
        assert_eq!(
            serde_json::to_string(&part).unwrap(),
            r#"{"kind":"BRANCH","branch":[{"name":"A","dialogue":[{"narrator":"x"}]}],"options":{"waitForAll":"true"}}"#
        );
    }

    #[test]
    fn image_change_part() {
        let part = ScenePart::ImageChange {
            image_change_request: ImageChange::sprite("amy.png"),
        };
        assert_eq!(part.kind().tag(), "IMAGE_CHANGE");
        assert_eq!(
            serde_json::to_string(&part).unwrap(),
            r#"{"kind":"IMAGE_CHANGE","imageChangeRequest":{"backgroundImage":"","characterImage":"amy.png"}}"#
        );
    }

    #[test]
    fn parse_tagged_parts() {
        let part: ScenePart = serde_json::from_str(
            r#"{"kind":"DIALOGUE","dialogue":[{"Amy":"Hello","image":"wave"}]}"#,
        )
        .unwrap();
        match part {
            ScenePart::Dialogue { dialogue } => {
                assert_eq!(dialogue.len(), 1);
                assert_eq!(dialogue.lines()[0].image(), Some("wave"));
            }
            other => panic!("expected dialogue, got {:?}", other),
        }

        let unknown: Result<ScenePart, _> = serde_json::from_str(r#"{"kind":"CUTSCENE"}"#);
        assert!(unknown.is_err());
    }

    #[test]
    fn foreign_payload_keys_rejected() {
        let mixed: Result<ScenePart, _> = serde_json::from_str(
            r#"{"kind":"DIALOGUE","dialogue":[],"branch":[]}"#,
        );
        assert!(mixed.is_err());

        let with_image: Result<ScenePart, _> = serde_json::from_str(
            r#"{"kind":"DIALOGUE","dialogue":[],"imageChangeRequest":{"backgroundImage":"a"}}"#,
        );
        assert!(with_image.is_err());

        let options_on_image: Result<ScenePart, _> = serde_json::from_str(
            r#"{"kind":"IMAGE_CHANGE","imageChangeRequest":{"backgroundImage":"a"},"options":{"waitForAll":"true"}}"#,
        );
        assert!(options_on_image.is_err());
    }
}
