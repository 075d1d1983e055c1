pub mod branch;
pub mod config;
pub mod dialogue;
pub mod parts;
pub mod scene;
