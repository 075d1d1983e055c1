pub mod branch;
pub mod dialogue;
pub mod image;
pub mod scene_part;
pub mod speaker;
