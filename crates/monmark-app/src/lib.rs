//! # monmark-app
//!
//! Application layers around `monmark-core`: display discovery via `xrandr`,
//! TOML style configuration, and render-scene building for whatever drawing
//! surface hosts the picker.
//!
//! The crate follows the usual layering: `infrastructure` adapts the OS
//! (process spawning, config files) into domain types, `application` builds
//! renderer-facing views from domain state, and `main.rs` wires the two
//! together for the headless CLI.

pub mod application;
pub mod infrastructure;

pub use application::scene::{build_scene, Scene, SceneRect};
pub use infrastructure::discovery::{
    DiscoveryError, DisplayDiscovery, MockDiscovery, XrandrDiscovery,
};
pub use infrastructure::storage::{load_config, save_config, AppConfig, ConfigError};
