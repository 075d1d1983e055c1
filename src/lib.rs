//! kspeak — a builder DSL for visual novel scene scripts.
//!
//! Writers compose scenes from dialogue blocks, monologues, decision
//! branches, and image changes through nested builder closures. The built
//! scene serializes to a versioned JSON document that a game engine reads.

pub mod core;
pub mod error;
pub mod schema;

pub use crate::core::config::WriteConfig;
pub use crate::core::scene::{build_scene, build_scene_with, FsWriter, Scene, SceneWriter};
pub use crate::error::SceneError;
pub use crate::schema::branch::BranchOptions;
pub use crate::schema::speaker::Speaker;
