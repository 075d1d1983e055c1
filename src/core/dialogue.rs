/// Dialogue builder — accumulates lines, narration, and monologues into a
/// [`DialogueBlock`].
use log::debug;

use crate::error::SceneError;
use crate::schema::dialogue::DialogueBlock;
use crate::schema::speaker::{DialogueLine, Speaker};

/// Builder handed to `dialogue` and `option` closures.
///
/// ```
/// use kspeak::{build_scene, Speaker};
///
/// let amy = Speaker::new("Amy").unwrap();
/// let scene = build_scene(|scene| {
///     scene.parts(|parts| {
///         parts.dialogue(|d| {
///             d.narrate("Amy paces in the room.")?;
///             d.line(amy.speak("What's the matter?")?);
///             Ok(())
///         })?;
///         Ok(())
///     })
/// })
/// .unwrap();
/// assert_eq!(scene.part_list().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DialogueBuilder {
    block: DialogueBlock,
}

impl DialogueBuilder {
    /// Run `build` against a fresh builder and return the finished block.
    pub(crate) fn build<F>(build: F) -> Result<DialogueBlock, SceneError>
    where
        F: FnOnce(&mut DialogueBuilder) -> Result<(), SceneError>,
    {
        let mut builder = DialogueBuilder::default();
        build(&mut builder)?;
        Ok(builder.block)
    }

    /// Append a line of dialogue.
    pub fn line(&mut self, line: DialogueLine) {
        self.block.push(line);
    }

    /// Append a line spoken by the narrator.
    pub fn narrate(&mut self, text: impl Into<String>) -> Result<(), SceneError> {
        self.line(Speaker::narrator().speak(text)?);
        Ok(())
    }

    /// Collect several lines in a nested scope and append them, in order,
    /// once the scope closes.
    pub fn monologue<F>(&mut self, build: F) -> Result<(), SceneError>
    where
        F: FnOnce(&mut Monologue) -> Result<(), SceneError>,
    {
        let lines = Monologue::collect(build)?;
        debug!("flattening monologue of {} lines", lines.len());
        self.block.extend(lines);
        Ok(())
    }

    /// Lines appended so far.
    pub fn len(&self) -> usize {
        self.block.len()
    }

    pub fn is_empty(&self) -> bool {
        self.block.is_empty()
    }
}

/// A batch of lines flattened into the enclosing dialogue block.
#[derive(Debug, Default)]
pub struct Monologue {
    lines: Vec<DialogueLine>,
}

impl Monologue {
    fn collect<F>(build: F) -> Result<Vec<DialogueLine>, SceneError>
    where
        F: FnOnce(&mut Monologue) -> Result<(), SceneError>,
    {
        let mut monologue = Monologue::default();
        build(&mut monologue)?;
        Ok(monologue.lines)
    }

    pub fn say(&mut self, line: DialogueLine) -> &mut Self {
        self.lines.push(line);
        self
    }

    /// Nested monologue; its lines land here when it closes.
    pub fn monologue<F>(&mut self, build: F) -> Result<(), SceneError>
    where
        F: FnOnce(&mut Monologue) -> Result<(), SceneError>,
    {
        let lines = Monologue::collect(build)?;
        self.lines.extend(lines);
        Ok(())
    }
}
