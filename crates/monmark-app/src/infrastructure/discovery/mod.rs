//! Display discovery adapters.
//!
//! Produces the [`DisplayPlacement`] snapshot the layout model is built
//! from.  The production adapter shells out to `xrandr`; a mock adapter is
//! always compiled so every other layer can be tested without a running X
//! server.
//!
//! Discovery happens once at startup.  The snapshot is treated as immutable
//! for the rest of the session; hot-plugging a monitor means restarting the
//! picker.

use monmark_core::DisplayPlacement;
use thiserror::Error;

pub mod xrandr;

pub use xrandr::XrandrDiscovery;

/// Errors raised while discovering displays.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The discovery executable is not installed or not on PATH.
    #[error("the {0} executable is missing")]
    MissingExecutable(&'static str),

    /// The discovery process ran but exited with a failure status.
    #[error("{command} exited with {status}")]
    CommandFailed {
        command: &'static str,
        status: std::process::ExitStatus,
    },

    /// Spawning or reading the discovery process failed.
    #[error("I/O error running {command}: {source}")]
    Io {
        command: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Discovery succeeded but reported zero connected displays.
    #[error("no connected displays were reported")]
    NoDisplays,
}

/// Trait for enumerating connected displays.
///
/// Implementors return placements in the order the underlying source reports
/// them; that order becomes the picker's draw order and hit-test order, so
/// it must be stable within a session.
pub trait DisplayDiscovery {
    /// Returns the connected displays with their desktop geometry.
    ///
    /// # Errors
    ///
    /// Returns a [`DiscoveryError`] when the underlying source is
    /// unavailable, fails, or reports nothing.
    fn discover(&self) -> Result<Vec<DisplayPlacement>, DiscoveryError>;
}

/// A discovery double that returns a fixed placement list.
///
/// Always compiled (not test-gated) so integration tests and the demo mode
/// can run without any display server.
pub struct MockDiscovery {
    placements: Vec<DisplayPlacement>,
}

impl MockDiscovery {
    /// Creates a mock that reports the given placements.
    pub fn new(placements: Vec<DisplayPlacement>) -> Self {
        Self { placements }
    }

    /// A typical laptop-plus-external setup, handy as a default fixture.
    pub fn dual_full_hd() -> Self {
        Self::new(vec![
            DisplayPlacement {
                name: "eDP-1".to_string(),
                width: 1920,
                height: 1080,
                x_offset: 0,
                y_offset: 0,
                is_primary: true,
            },
            DisplayPlacement {
                name: "HDMI-0".to_string(),
                width: 1920,
                height: 1080,
                x_offset: 1920,
                y_offset: 0,
                is_primary: false,
            },
        ])
    }
}

impl DisplayDiscovery for MockDiscovery {
    fn discover(&self) -> Result<Vec<DisplayPlacement>, DiscoveryError> {
        if self.placements.is_empty() {
            return Err(DiscoveryError::NoDisplays);
        }
        Ok(self.placements.clone())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
