//! Virtual-space extent calculation.
//!
//! The "virtual space" is the smallest origin-anchored rectangle containing
//! every display placement.  A dual 1920×1080 setup side by side spans
//! 3840×1080; stacked vertically it spans 1920×2160.  The extent feeds the
//! ratio mapper as its source dimensions, so it must be recomputed whenever
//! the placement set changes.

use thiserror::Error;

use super::layout::DisplayPlacement;

/// Errors raised while computing the virtual space.
#[derive(Debug, Error, PartialEq)]
pub enum VirtualSpaceError {
    /// The placement set is empty; no bounding extent exists.
    #[error("cannot compute a virtual space over zero display placements")]
    EmptyCollection,
}

/// The bounding extent of all placements, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualSpace {
    /// Farthest horizontal extent across all placements, in desktop pixels.
    pub width: f64,
    /// Farthest vertical extent across all placements, in desktop pixels.
    pub height: f64,
}

impl VirtualSpace {
    /// Computes the bounding extent of a placement set.
    ///
    /// Each axis takes the maximum of `offset + size` over all placements
    /// independently; the widest display and the tallest display need not be
    /// the same one.  A display whose offset is small but whose far edge
    /// reaches past every higher-offset display still governs the extent.
    ///
    /// # Errors
    ///
    /// Returns [`VirtualSpaceError::EmptyCollection`] when `placements` is
    /// empty.
    pub fn from_placements(placements: &[DisplayPlacement]) -> Result<Self, VirtualSpaceError> {
        if placements.is_empty() {
            return Err(VirtualSpaceError::EmptyCollection);
        }

        let mut far_x = i64::MIN;
        let mut far_y = i64::MIN;
        for placement in placements {
            far_x = far_x.max(i64::from(placement.x_offset) + i64::from(placement.width));
            far_y = far_y.max(i64::from(placement.y_offset) + i64::from(placement.height));
        }

        Ok(Self {
            width: far_x as f64,
            height: far_y as f64,
        })
    }

    /// The extent as a `(width, height)` pair, the shape mappers take.
    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
