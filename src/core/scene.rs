/// The scene root: version, ordered parts, and the write-out step.
///
/// `build_scene` is the entry point: it creates an empty scene, runs the
/// caller's construction closure against it, writes the result if an
/// output path was set, and returns the scene.
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::config::WriteConfig;
use crate::core::parts::ScenePartBuilder;
use crate::error::SceneError;
use crate::schema::scene_part::ScenePart;

/// Schema version stamped on new scenes.
pub const DEFAULT_VERSION: &str = "1";

/// A scriptable scene: a schema version plus an ordered list of parts.
///
/// The output path is a build-time setting and is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    version: String,
    parts: Vec<ScenePart>,
    #[serde(skip)]
    output_path: Option<PathBuf>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            parts: Vec::new(),
            output_path: None,
        }
    }
}

/// Destination for rendered scene documents.
pub trait SceneWriter {
    /// Write `contents` to `path`, replacing anything already there.
    fn write_scene(
        &mut self,
        path: &Path,
        contents: &str,
        config: &WriteConfig,
    ) -> std::io::Result<()>;
}

/// Writes scene documents to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWriter;

impl SceneWriter for FsWriter {
    fn write_scene(
        &mut self,
        path: &Path,
        contents: &str,
        config: &WriteConfig,
    ) -> std::io::Result<()> {
        if config.create_parent_dirs {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, contents)
    }
}

impl Scene {
    /// Set the script schema version. The last call wins.
    pub fn version(&mut self, version: u32) {
        self.version = version.to_string();
    }

    /// Set the file the scene is written to once built. An empty path
    /// means the scene is not written.
    pub fn output_to_file(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.output_path = if path.as_os_str().is_empty() {
            None
        } else {
            Some(path.to_path_buf())
        };
    }

    /// Build the scene's parts. Replaces any parts built by an earlier call.
    pub fn parts<F>(&mut self, build: F) -> Result<(), SceneError>
    where
        F: FnOnce(&mut ScenePartBuilder) -> Result<(), SceneError>,
    {
        let parts = ScenePartBuilder::build(build)?;
        if !self.parts.is_empty() {
            warn!(
                "replacing {} previously built scene parts",
                self.parts.len()
            );
        }
        self.parts = parts;
        Ok(())
    }

    pub fn version_str(&self) -> &str {
        &self.version
    }

    pub fn part_list(&self) -> &[ScenePart] {
        &self.parts
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    /// Compact JSON form of the scene.
    pub fn to_json_string(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pretty-printed JSON form of the scene.
    pub fn to_json_pretty(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a scene document. The parsed scene has no output path.
    pub fn from_json_str(source: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Write the scene to its output path, if one is set.
    pub fn write(&self) -> Result<(), SceneError> {
        self.write_with(&mut FsWriter, &WriteConfig::default())
    }

    /// Write the scene through `writer`, if an output path is set.
    pub fn write_with<W: SceneWriter>(
        &self,
        writer: &mut W,
        config: &WriteConfig,
    ) -> Result<(), SceneError> {
        let Some(path) = self.output_path.as_deref() else {
            debug!("no output path set; skipping scene write");
            return Ok(());
        };

        let contents = if config.pretty {
            self.to_json_pretty()?
        } else {
            self.to_json_string()?
        };

        writer
            .write_scene(path, &contents, config)
            .map_err(|source| SceneError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        info!("wrote scene to '{}' ({} bytes)", path.display(), contents.len());
        Ok(())
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scene(version = {}", self.version)?;
        if let Some(path) = &self.output_path {
            write!(f, ", outputPath = {}", path.display())?;
        }
        if !self.parts.is_empty() {
            write!(f, ", parts = {:?}", self.parts)?;
        }
        f.write_str(")")
    }
}

/// Build a scene, write it to its output path (if set), and return it.
///
/// ```
/// use kspeak::build_scene;
///
/// let scene = build_scene(|scene| {
///     scene.version(1);
///     scene.parts(|parts| parts.dialogue(|d| d.narrate("Hi")))
/// })
/// .unwrap();
///
/// assert_eq!(
///     scene.to_json_string().unwrap(),
///     r#"{"version":"1","parts":[{"kind":"DIALOGUE","dialogue":[{"narrator":"Hi"}]}]}"#
/// );
/// ```
pub fn build_scene<F>(build: F) -> Result<Scene, SceneError>
where
    F: FnOnce(&mut Scene) -> Result<(), SceneError>,
{
    build_scene_with(&mut FsWriter, &WriteConfig::default(), build)
}

/// Like [`build_scene`], with an explicit writer and output configuration.
pub fn build_scene_with<W, F>(
    writer: &mut W,
    config: &WriteConfig,
    build: F,
) -> Result<Scene, SceneError>
where
    W: SceneWriter,
    F: FnOnce(&mut Scene) -> Result<(), SceneError>,
{
    let mut scene = Scene::default();
    build(&mut scene)?;
    scene.write_with(writer, config)?;
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records writes instead of touching the filesystem.
    #[derive(Default)]
    struct RecordingWriter {
        writes: Vec<(PathBuf, String)>,
    }

    impl SceneWriter for RecordingWriter {
        fn write_scene(
            &mut self,
            path: &Path,
            contents: &str,
            _config: &WriteConfig,
        ) -> std::io::Result<()> {
            self.writes.push((path.to_path_buf(), contents.to_string()));
            Ok(())
        }
    }

    struct FailingWriter;

    impl SceneWriter for FailingWriter {
        fn write_scene(&mut self, _: &Path, _: &str, _: &WriteConfig) -> std::io::Result<()> {
            Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            ))
        }
    }

    #[test]
    fn default_scene() {
        let scene = Scene::default();
        assert_eq!(scene.version_str(), "1");
        assert!(scene.part_list().is_empty());
        assert!(scene.output_path().is_none());
        assert_eq!(
            scene.to_json_string().unwrap(),
            r#"{"version":"1","parts":[]}"#
        );
    }

    #[test]
    fn version_last_call_wins() {
        let mut scene = Scene::default();
        scene.version(3);
        scene.version(2);
        assert_eq!(scene.version_str(), "2");
    }

    #[test]
    fn parts_replaces_previous_result() {
        let mut scene = Scene::default();
        scene.parts(|p| p.dialogue(|d| d.narrate("first"))).unwrap();
        scene
            .parts(|p| {
                p.background("bg.png")?;
                p.sprite("amy.png")
            })
            .unwrap();
        assert_eq!(scene.part_list().len(), 2);
    }

    #[test]
    fn failed_parts_keep_previous_result() {
        let mut scene = Scene::default();
        scene.parts(|p| p.dialogue(|d| d.narrate("kept"))).unwrap();
        assert!(scene.parts(|p| p.background("")).is_err());
        assert_eq!(scene.part_list().len(), 1);
    }

    #[test]
    fn output_path_is_not_serialized() {
        let mut scene = Scene::default();
        scene.output_to_file("out/scene.json");
        assert_eq!(scene.output_path(), Some(Path::new("out/scene.json")));
        assert!(!scene.to_json_string().unwrap().contains("scene.json"));

        scene.output_to_file("");
        assert!(scene.output_path().is_none());
    }

    #[test]
    fn no_output_path_means_no_write() {
        let mut writer = RecordingWriter::default();
        build_scene_with(&mut writer, &WriteConfig::default(), |scene| {
            scene.parts(|p| p.dialogue(|d| d.narrate("Hi")))
        })
        .unwrap();
        assert!(writer.writes.is_empty());
    }

    #[test]
    fn writes_pretty_by_default() {
        let mut writer = RecordingWriter::default();
        let scene = build_scene_with(&mut writer, &WriteConfig::default(), |scene| {
            scene.output_to_file("scene.json");
            scene.parts(|p| p.dialogue(|d| d.narrate("Hi")))
        })
        .unwrap();

        assert_eq!(writer.writes.len(), 1);
        let (path, contents) = &writer.writes[0];
        assert_eq!(path, Path::new("scene.json"));
        assert_eq!(contents, &scene.to_json_pretty().unwrap());
        assert!(contents.contains('\n'));
    }

    #[test]
    fn writes_compact_when_configured() {
        let mut writer = RecordingWriter::default();
        let config = WriteConfig {
            pretty: false,
            ..WriteConfig::default()
        };
        let scene = build_scene_with(&mut writer, &config, |scene| {
            scene.output_to_file("scene.json");
            Ok(())
        })
        .unwrap();
        assert_eq!(writer.writes[0].1, scene.to_json_string().unwrap());
    }

    #[test]
    fn write_failure_is_reported_with_path() {
        let result = build_scene_with(&mut FailingWriter, &WriteConfig::default(), |scene| {
            scene.output_to_file("locked/scene.json");
            Ok(())
        });
        match result {
            Err(SceneError::Write { path, source }) => {
                assert_eq!(path, PathBuf::from("locked/scene.json"));
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected write failure, got {:?}", other),
        }
    }

    #[test]
    fn construction_error_skips_write() {
        let mut writer = RecordingWriter::default();
        let result = build_scene_with(&mut writer, &WriteConfig::default(), |scene| {
            scene.output_to_file("scene.json");
            scene.parts(|p| p.dialogue(|d| d.narrate("")))
        });
        assert!(matches!(result, Err(SceneError::InvalidInput(_))));
        assert!(writer.writes.is_empty());
    }

    #[test]
    fn display_matches_scene_shape() {
        let mut scene = Scene::default();
        assert_eq!(scene.to_string(), "Scene(version = 1)");
        scene.output_to_file("output.json");
        assert_eq!(scene.to_string(), "Scene(version = 1, outputPath = output.json)");
        scene.parts(|p| p.sprite("amy.png")).unwrap();
        assert!(scene.to_string().contains(", parts = ["));
    }

    #[test]
    fn fs_writer_round_trip() {
        let dir = std::env::temp_dir().join(format!("kspeak_scene_{}", std::process::id()));
        let path = dir.join("nested").join("scene.json");
        let config = WriteConfig {
            create_parent_dirs: true,
            ..WriteConfig::default()
        };

        let scene = build_scene_with(&mut FsWriter, &config, |scene| {
            scene.output_to_file(&path);
            scene.parts(|p| p.branch(|b| b.option("A", |d| d.narrate("x"))))
        })
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed = Scene::from_json_str(&written).unwrap();
        assert_eq!(parsed.part_list(), scene.part_list());
        assert_eq!(parsed.version_str(), scene.version_str());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_parent_dir_is_write_failure() {
        let dir = std::env::temp_dir().join(format!("kspeak_missing_{}", std::process::id()));
        let path = dir.join("absent").join("scene.json");
        let result = build_scene(|scene| {
            scene.output_to_file(&path);
            Ok(())
        });
        assert!(matches!(result, Err(SceneError::Write { .. })));
    }
}
