//! Application-layer use cases.
//!
//! Glue between the domain crate and the adapters: takes domain state plus
//! style configuration and produces the structures the outer layers consume.

pub mod scene;

pub use scene::{build_scene, Scene, SceneRect};
