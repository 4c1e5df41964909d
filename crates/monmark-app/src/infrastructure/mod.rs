//! Infrastructure adapters: everything that touches the OS.
//!
//! The domain crate never imports from here; these modules adapt the outside
//! world (the `xrandr` process, the config file) into domain types.

pub mod discovery;
pub mod storage;
