/// Option builder — collects the options of a decision branch.
use log::debug;

use crate::core::dialogue::DialogueBuilder;
use crate::error::{require_non_empty, SceneError};
use crate::schema::branch::{BranchOption, OptionSet};

/// Builder handed to `branch` closures.
#[derive(Debug, Default)]
pub struct OptionBuilder {
    options: OptionSet,
}

impl OptionBuilder {
    pub(crate) fn build<F>(build: F) -> Result<OptionSet, SceneError>
    where
        F: FnOnce(&mut OptionBuilder) -> Result<(), SceneError>,
    {
        let mut builder = OptionBuilder::default();
        build(&mut builder)?;
        Ok(builder.options)
    }

    /// Add an option named `name`, with the dialogue built by `build`
    /// shown when the player picks it.
    pub fn option<F>(&mut self, name: impl Into<String>, build: F) -> Result<(), SceneError>
    where
        F: FnOnce(&mut DialogueBuilder) -> Result<(), SceneError>,
    {
        let name = name.into();
        require_non_empty(&name, "option name")?;
        let dialogue = DialogueBuilder::build(build)?;
        debug!("option '{}' closed with {} lines", name, dialogue.len());
        self.options.push(BranchOption::new(name, dialogue));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
