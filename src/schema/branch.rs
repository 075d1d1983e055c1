/// Decision branches: selectable options and the settings of a branch.
use serde::{Deserialize, Serialize};

use super::dialogue::DialogueBlock;

/// A choice the player can make, plus the dialogue that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchOption {
    #[serde(deserialize_with = "non_empty_name")]
    name: String,
    dialogue: DialogueBlock,
}

impl BranchOption {
    pub(crate) fn new(name: String, dialogue: DialogueBlock) -> Self {
        Self { name, dialogue }
    }

    /// The option's text as shown on screen.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dialogue(&self) -> &DialogueBlock {
        &self.dialogue
    }
}

fn non_empty_name<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let name = String::deserialize(deserializer)?;
    if name.is_empty() {
        return Err(serde::de::Error::custom("option name must not be empty"));
    }
    Ok(name)
}

/// Options of a branch, in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSet {
    options: Vec<BranchOption>,
}

impl OptionSet {
    pub fn options(&self) -> &[BranchOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub(crate) fn push(&mut self, option: BranchOption) {
        self.options.push(option);
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a BranchOption;
    type IntoIter = std::slice::Iter<'a, BranchOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

/// Branch settings, written as the `options` map of a BRANCH part.
///
/// Values are stringified on the wire: `{"waitForAll": "false"}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchOptions {
    /// The player must visit every option before the scene advances.
    #[serde(rename = "waitForAll", with = "stringified_bool")]
    pub wait_for_all: bool,
}

mod stringified_bool {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(de::Error::invalid_value(
                de::Unexpected::Str(other),
                &"\"true\" or \"false\"",
            )),
        }
    }
}
