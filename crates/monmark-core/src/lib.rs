//! # monmark-core
//!
//! Display-layout geometry and interaction state for monmark, a tool for
//! marking a subset of the connected displays as targets for a downstream
//! action (for example, mapping a pen tablet across chosen outputs).
//!
//! The picker shows the physical display arrangement scaled down onto a
//! canvas; the user hovers and clicks the miniature displays to toggle them.
//! This crate holds everything with real invariants behind that interaction:
//!
//! - **`domain::mapper`** – affine interval mappers and the two coordinate
//!   mapper variants (independent-axis and aspect-ratio-preserving) that
//!   translate desktop pixels into canvas pixels.
//! - **`domain::virtual_space`** – the bounding extent spanned by the
//!   placement snapshot.
//! - **`domain::layout`** – the layout model: placements in draw order,
//!   hover selection, the assigned set, mapped-rectangle queries, and
//!   hit-testing.
//! - **`domain::controller`** – the event state machine that turns pointer
//!   motion, clicks, and canvas resizes into model transitions and redraw
//!   requests.
//!
//! Display discovery, configuration, and the renderer-facing scene DTOs live
//! in the `monmark-app` crate; this crate never touches the OS.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `monmark_core::LayoutModel` instead of spelling out the module path.
pub use domain::controller::{InputEvent, InteractionController, RedrawRequest, PRIMARY_BUTTON};
pub use domain::layout::{DisplayPlacement, Highlight, LayoutError, LayoutModel, MappedRect};
pub use domain::mapper::{DomainMapper, LinearMapper, MapperError, Padding, RatioMapper};
pub use domain::virtual_space::{VirtualSpace, VirtualSpaceError};
