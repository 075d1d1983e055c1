/// Scene part builder — the body of `Scene::parts`.
use log::debug;

use crate::core::branch::OptionBuilder;
use crate::core::dialogue::DialogueBuilder;
use crate::error::{require_non_empty, SceneError};
use crate::schema::branch::BranchOptions;
use crate::schema::image::ImageChange;
use crate::schema::scene_part::ScenePart;

/// Appends scene parts in call order. Parts cannot be edited or removed
/// once appended.
#[derive(Debug, Default)]
pub struct ScenePartBuilder {
    parts: Vec<ScenePart>,
}

impl ScenePartBuilder {
    pub(crate) fn build<F>(build: F) -> Result<Vec<ScenePart>, SceneError>
    where
        F: FnOnce(&mut ScenePartBuilder) -> Result<(), SceneError>,
    {
        let mut builder = ScenePartBuilder::default();
        build(&mut builder)?;
        Ok(builder.parts)
    }

    fn push(&mut self, part: ScenePart) {
        debug!(
            "appending {} part #{}",
            part.kind().tag(),
            self.parts.len() + 1
        );
        self.parts.push(part);
    }

    /// Add a block of dialogue.
    pub fn dialogue<F>(&mut self, build: F) -> Result<(), SceneError>
    where
        F: FnOnce(&mut DialogueBuilder) -> Result<(), SceneError>,
    {
        let dialogue = DialogueBuilder::build(build)?;
        self.push(ScenePart::Dialogue { dialogue });
        Ok(())
    }

    /// Add a decision branch the player can leave after picking any one
    /// option.
    pub fn branch<F>(&mut self, build: F) -> Result<(), SceneError>
    where
        F: FnOnce(&mut OptionBuilder) -> Result<(), SceneError>,
    {
        self.branch_with(BranchOptions::default(), build)
    }

    /// Add a decision branch with explicit settings.
    ///
    /// With `wait_for_all` set, the player must click through every option
    /// before the scene moves on.
    pub fn branch_with<F>(&mut self, options: BranchOptions, build: F) -> Result<(), SceneError>
    where
        F: FnOnce(&mut OptionBuilder) -> Result<(), SceneError>,
    {
        let branch = OptionBuilder::build(build)?;
        self.push(ScenePart::Branch { branch, options });
        Ok(())
    }

    /// Change the background image.
    pub fn background(&mut self, path: impl Into<String>) -> Result<(), SceneError> {
        let path = path.into();
        require_non_empty(&path, "background path")?;
        self.push(ScenePart::ImageChange {
            image_change_request: ImageChange::background(path),
        });
        Ok(())
    }

    /// Change the character sprite drawn over the background.
    pub fn sprite(&mut self, path: impl Into<String>) -> Result<(), SceneError> {
        let path = path.into();
        require_non_empty(&path, "sprite path")?;
        self.push(ScenePart::ImageChange {
            image_change_request: ImageChange::sprite(path),
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
