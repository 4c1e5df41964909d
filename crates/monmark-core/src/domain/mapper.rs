//! Interval and coordinate mappers.
//!
//! The layout canvas is usually far smaller than the virtual desktop it
//! depicts (a 3840×1080 dual-monitor desktop drawn inside an 800×450 widget),
//! so every rectangle the renderer sees has been pushed through one of the
//! mappers in this module.
//!
//! - [`DomainMapper`] is a 1-D affine transform between two numeric
//!   intervals.  It is the only place a division happens, which is why it is
//!   also the only place a degenerate (zero-width) interval can be rejected.
//! - [`LinearMapper`] pairs two `DomainMapper`s, one per axis.  Scaling is
//!   independent per axis, so the image may be stretched.
//! - [`RatioMapper`] additionally preserves the source aspect ratio: it
//!   scales uniformly by the largest factor that still fits, then centers the
//!   scaled rectangle in the leftover slack.
//!
//! Mappers are immutable once built.  When the canvas is resized or the
//! virtual space changes, callers build a fresh mapper instead of mutating
//! the old one; see [`LayoutModel::rebuild_mapper`].
//!
//! [`LayoutModel::rebuild_mapper`]: crate::domain::layout::LayoutModel::rebuild_mapper

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while constructing a mapper.
#[derive(Debug, Error, PartialEq)]
pub enum MapperError {
    /// The source interval has zero width, so no finite slope exists.
    ///
    /// Construction fails here rather than letting an infinite or NaN slope
    /// leak into every subsequent `map` call.
    #[error("degenerate source interval: both endpoints are {0}")]
    DegenerateInterval(f64),
}

/// Per-edge padding in canvas pixels: `(top, right, bottom, left)`, CSS order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    /// No padding on any edge.
    pub const ZERO: Padding = Padding {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// The same padding on all four edges.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A 1-D affine transform from a source interval onto a target interval.
///
/// `map(from_low) == to_low` and `map(from_high) == to_high`; values outside
/// the source interval extrapolate linearly.  Callers rely on the
/// extrapolation (padding insets routinely push mapped values past the
/// nominal target endpoints), so `map` never clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainMapper {
    from_low: f64,
    to_low: f64,
    slope: f64,
}

impl DomainMapper {
    /// Builds a mapper from the source interval `from` onto the target
    /// interval `to`.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError::DegenerateInterval`] when `from` has zero
    /// width.  The target interval may be degenerate (slope 0 is finite).
    pub fn new(from: (f64, f64), to: (f64, f64)) -> Result<Self, MapperError> {
        let (from_low, from_high) = from;
        let (to_low, to_high) = to;

        if from_high == from_low {
            return Err(MapperError::DegenerateInterval(from_low));
        }

        Ok(Self {
            from_low,
            to_low,
            slope: (to_high - to_low) / (from_high - from_low),
        })
    }

    /// Maps a source-interval value onto the target interval.
    pub fn map(&self, value: f64) -> f64 {
        (value - self.from_low) * self.slope + self.to_low
    }
}

/// Independent-axis 2-D mapper.
///
/// Maps the rectangle `(0, 0)..(from_w, from_h)` onto the target rectangle
/// shrunk by `padding`.  The two axes scale independently, so the image of a
/// square is generally not square.  Used where filling the whole target area
/// matters more than proportions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMapper {
    x: DomainMapper,
    y: DomainMapper,
}

impl LinearMapper {
    /// Builds a mapper from source dimensions onto padded target dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError::DegenerateInterval`] when either source
    /// dimension is zero.
    pub fn new(
        from: (f64, f64),
        to: (f64, f64),
        padding: Padding,
    ) -> Result<Self, MapperError> {
        let (from_w, from_h) = from;
        let (to_w, to_h) = to;

        Ok(Self {
            x: DomainMapper::new((0.0, from_w), (padding.left, to_w - padding.right))?,
            y: DomainMapper::new((0.0, from_h), (padding.top, to_h - padding.bottom))?,
        })
    }

    /// Maps a source point onto the target rectangle.
    pub fn map(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x.map(x), self.y.map(y))
    }
}

/// Aspect-ratio-preserving 2-D mapper.
///
/// Scales the source rectangle uniformly by
/// `min(to_w / from_w, to_h / from_h)` — the largest factor that fits the
/// whole source inside the target without distortion or clipping — and, when
/// `center` is set, offsets the scaled rectangle by half the leftover slack
/// on each axis.  Padding is applied inside the already-positioned scaled
/// rectangle: it shrinks the usable drawing area but does not shift the
/// centering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioMapper {
    x: DomainMapper,
    y: DomainMapper,
}

impl RatioMapper {
    /// Builds a centered ratio-preserving mapper.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError::DegenerateInterval`] when either source
    /// dimension is zero.
    pub fn new(from: (f64, f64), to: (f64, f64), padding: Padding) -> Result<Self, MapperError> {
        Self::with_centering(from, to, padding, true)
    }

    /// Builds a ratio-preserving mapper with explicit centering control.
    ///
    /// With `center == false` the scaled rectangle is anchored at the target
    /// origin instead of floating in the middle of the slack.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError::DegenerateInterval`] when either source
    /// dimension is zero.
    pub fn with_centering(
        from: (f64, f64),
        to: (f64, f64),
        padding: Padding,
        center: bool,
    ) -> Result<Self, MapperError> {
        let (from_w, from_h) = from;
        let (to_w, to_h) = to;

        if from_w == 0.0 {
            return Err(MapperError::DegenerateInterval(0.0));
        }
        if from_h == 0.0 {
            return Err(MapperError::DegenerateInterval(0.0));
        }

        let ratio = f64::min(to_w / from_w, to_h / from_h);
        let (scaled_w, scaled_h) = (from_w * ratio, from_h * ratio);

        let (offset_x, offset_y) = if center {
            ((to_w - scaled_w) / 2.0, (to_h - scaled_h) / 2.0)
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            x: DomainMapper::new(
                (0.0, from_w),
                (offset_x + padding.left, offset_x + scaled_w - padding.right),
            )?,
            y: DomainMapper::new(
                (0.0, from_h),
                (offset_y + padding.top, offset_y + scaled_h - padding.bottom),
            )?,
        })
    }

    /// Maps a source point onto the target rectangle.
    pub fn map(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x.map(x), self.y.map(y))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
