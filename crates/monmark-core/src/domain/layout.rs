//! Display layout model: placements, selection, assignment, hit-testing.
//!
//! [`LayoutModel`] is the core state of the picker.  It owns the immutable
//! placement snapshot taken at startup, the single hovered display
//! (`selected`), the set of displays the user has toggled on (`assigned`),
//! and the current [`RatioMapper`] built for the last known canvas size.
//!
//! Placement order matters twice and must be the same both times: renderers
//! draw placements in collection order (last drawn wins visually) and
//! [`LayoutModel::hit_test`] scans in collection order (first match wins).
//! Using a `Vec` keeps the two trivially consistent; a hash map's iteration
//! order would not.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::mapper::{MapperError, Padding, RatioMapper};
use super::virtual_space::{VirtualSpace, VirtualSpaceError};

/// Errors raised by layout queries and mapper lifecycle operations.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// Geometry was queried before the first canvas size was known.
    #[error("no coordinate mapper has been built yet; resize the canvas first")]
    NoMapper,

    /// The named display is not part of the placement snapshot.
    #[error("unknown display: {0}")]
    UnknownDisplay(String),

    /// Mapper construction failed during a rebuild.
    #[error(transparent)]
    Mapper(#[from] MapperError),

    /// The placement snapshot cannot produce a virtual space.
    #[error(transparent)]
    VirtualSpace(#[from] VirtualSpaceError),
}

/// One physical display's size and position within the desktop layout.
///
/// Immutable per session; produced by the display-discovery collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPlacement {
    /// Output name, e.g. `"eDP-1"` or `"HDMI-0"`.  Unique within a snapshot.
    pub name: String,
    /// Width in desktop pixels.  Always positive.
    pub width: u32,
    /// Height in desktop pixels.  Always positive.
    pub height: u32,
    /// Horizontal offset of the top-left corner in desktop pixels.
    pub x_offset: i32,
    /// Vertical offset of the top-left corner in desktop pixels.
    pub y_offset: i32,
    /// Whether the desktop environment marks this display as primary.
    pub is_primary: bool,
}

/// A placement's rectangle in canvas pixel coordinates, after mapping and
/// padding inset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MappedRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl MappedRect {
    /// Containment with inclusive bounds on all four edges, matching the
    /// picker's hover semantics (a pointer resting exactly on a border still
    /// hovers the display).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Combined hover/assignment state of one display, as a renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    Unselected,
    Selected,
    Assigned,
    Both,
}

impl Highlight {
    /// Derives the highlight category from the two state flags.
    ///
    /// Total over all four flag combinations; hover and assignment are
    /// independent and their intersection is its own category.
    pub fn of(is_selected: bool, is_assigned: bool) -> Self {
        match (is_selected, is_assigned) {
            (true, true) => Highlight::Both,
            (true, false) => Highlight::Selected,
            (false, true) => Highlight::Assigned,
            (false, false) => Highlight::Unselected,
        }
    }
}

/// The display collection plus all interaction state.
///
/// Mutated only through the interaction controller; lives for the process
/// lifetime.  The mapper is absent until the first canvas resize.
#[derive(Debug, Clone)]
pub struct LayoutModel {
    placements: Vec<DisplayPlacement>,
    selected: Option<String>,
    assigned: HashSet<String>,
    mapper: Option<RatioMapper>,
}

impl LayoutModel {
    /// Creates a model over a placement snapshot with nothing selected,
    /// nothing assigned, and no mapper built.
    pub fn new(placements: Vec<DisplayPlacement>) -> Self {
        Self {
            placements,
            selected: None,
            assigned: HashSet::new(),
            mapper: None,
        }
    }

    /// The placements in insertion order (draw order and hit-test order).
    pub fn placements(&self) -> &[DisplayPlacement] {
        &self.placements
    }

    /// The display currently under the pointer, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Replaces the current hover selection.
    pub fn set_selected(&mut self, name: Option<String>) {
        self.selected = name;
    }

    /// Whether the named display has been toggled on.
    pub fn is_assigned(&self, name: &str) -> bool {
        self.assigned.contains(name)
    }

    /// The assigned display names, in no particular order.
    pub fn assigned(&self) -> impl Iterator<Item = &str> {
        self.assigned.iter().map(String::as_str)
    }

    /// The current virtual space of the placement snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`VirtualSpaceError::EmptyCollection`] for an empty snapshot.
    pub fn virtual_space(&self) -> Result<VirtualSpace, VirtualSpaceError> {
        VirtualSpace::from_placements(&self.placements)
    }

    /// Builds a fresh ratio mapper for a new canvas size.
    ///
    /// Must be called on every canvas resize before any geometry query; the
    /// previous mapper is discarded, never mutated.
    ///
    /// # Errors
    ///
    /// Propagates [`VirtualSpaceError::EmptyCollection`] for an empty
    /// snapshot and [`MapperError::DegenerateInterval`] for a degenerate
    /// virtual space.
    pub fn rebuild_mapper(
        &mut self,
        canvas_width: f64,
        canvas_height: f64,
        canvas_padding: Padding,
    ) -> Result<(), LayoutError> {
        let vspace = self.virtual_space()?;
        self.mapper = Some(RatioMapper::new(
            vspace.dimensions(),
            (canvas_width, canvas_height),
            canvas_padding,
        )?);
        debug!(
            canvas_width,
            canvas_height,
            vspace_width = vspace.width,
            vspace_height = vspace.height,
            "coordinate mapper rebuilt"
        );
        Ok(())
    }

    /// Whether a mapper has been built since construction.
    pub fn has_mapper(&self) -> bool {
        self.mapper.is_some()
    }

    /// The named placement's rectangle in canvas coordinates, inset by
    /// `inset` (the per-display style padding, passed explicitly so the core
    /// stays free of style state).
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NoMapper`] before the first
    /// [`rebuild_mapper`](Self::rebuild_mapper) call and
    /// [`LayoutError::UnknownDisplay`] for a name outside the snapshot.
    pub fn mapped_rect(&self, name: &str, inset: Padding) -> Result<MappedRect, LayoutError> {
        let placement = self
            .placements
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| LayoutError::UnknownDisplay(name.to_string()))?;
        self.map_placement(placement, inset)
    }

    /// Finds the first placement, in collection order, whose mapped and
    /// inset rectangle contains the point.  Bounds are inclusive on all four
    /// edges.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NoMapper`] before the first mapper build.
    pub fn hit_test(&self, x: f64, y: f64, inset: Padding) -> Result<Option<String>, LayoutError> {
        for placement in &self.placements {
            if self.map_placement(placement, inset)?.contains(x, y) {
                return Ok(Some(placement.name.clone()));
            }
        }
        Ok(None)
    }

    /// Toggles the named display in or out of the assigned set.
    ///
    /// Unknown names are ignored: the controller only toggles the current
    /// selection, which is always a known name, but the contract does not
    /// depend on that.
    pub fn toggle_assignment(&mut self, name: &str) {
        if !self.placements.iter().any(|p| p.name == name) {
            debug!(name, "ignoring toggle for unknown display");
            return;
        }
        if !self.assigned.remove(name) {
            self.assigned.insert(name.to_string());
        }
    }

    /// The renderer-facing highlight category of the named display.
    pub fn highlight_for(&self, name: &str) -> Highlight {
        Highlight::of(self.selected.as_deref() == Some(name), self.is_assigned(name))
    }

    fn map_placement(
        &self,
        placement: &DisplayPlacement,
        inset: Padding,
    ) -> Result<MappedRect, LayoutError> {
        let mapper = self.mapper.as_ref().ok_or(LayoutError::NoMapper)?;

        let x0 = f64::from(placement.x_offset);
        let y0 = f64::from(placement.y_offset);
        let x1 = x0 + f64::from(placement.width);
        let y1 = y0 + f64::from(placement.height);

        let (left, top) = mapper.map(x0, y0);
        let (right, bottom) = mapper.map(x1, y1);

        Ok(MappedRect {
            left: left + inset.left,
            top: top + inset.top,
            right: right - inset.right,
            bottom: bottom - inset.bottom,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(name: &str, w: u32, h: u32, x: i32, y: i32) -> DisplayPlacement {
        DisplayPlacement {
            name: name.to_string(),
            width: w,
            height: h,
            x_offset: x,
            y_offset: y,
            is_primary: false,
        }
    }

    /// Two 1920×1080 displays side by side, mapped onto a 384×108 canvas so
    /// the scale factor is exactly 0.1 with no slack on either axis.
    fn dual_model() -> LayoutModel {
        let mut model = LayoutModel::new(vec![
            placement("A", 1920, 1080, 0, 0),
            placement("B", 1920, 1080, 1920, 0),
        ]);
        model.rebuild_mapper(384.0, 108.0, Padding::ZERO).unwrap();
        model
    }

    // ── Highlight ─────────────────────────────────────────────────────────────

    #[test]
    fn test_highlight_covers_all_four_flag_combinations() {
        assert_eq!(Highlight::of(false, false), Highlight::Unselected);
        assert_eq!(Highlight::of(true, false), Highlight::Selected);
        assert_eq!(Highlight::of(false, true), Highlight::Assigned);
        assert_eq!(Highlight::of(true, true), Highlight::Both);
    }

    // ── MappedRect ────────────────────────────────────────────────────────────

    #[test]
    fn test_mapped_rect_contains_is_inclusive_on_all_edges() {
        let rect = MappedRect {
            left: 10.0,
            top: 20.0,
            right: 30.0,
            bottom: 40.0,
        };
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(30.0, 40.0));
        assert!(rect.contains(10.0, 40.0));
        assert!(rect.contains(20.0, 30.0));
        assert!(!rect.contains(9.999, 30.0));
        assert!(!rect.contains(30.001, 30.0));
    }

    // ── mapped_rect ───────────────────────────────────────────────────────────

    #[test]
    fn test_mapped_rect_fails_before_first_mapper_build() {
        let model = LayoutModel::new(vec![placement("A", 1920, 1080, 0, 0)]);
        let result = model.mapped_rect("A", Padding::ZERO);
        assert_eq!(result, Err(LayoutError::NoMapper));
    }

    #[test]
    fn test_mapped_rect_fails_for_unknown_display() {
        let model = dual_model();
        let result = model.mapped_rect("DP-9", Padding::ZERO);
        assert_eq!(result, Err(LayoutError::UnknownDisplay("DP-9".to_string())));
    }

    #[test]
    fn test_mapped_rect_scales_placement_corners() {
        let model = dual_model();
        let rect = model.mapped_rect("B", Padding::ZERO).unwrap();
        assert_eq!(rect.left, 192.0);
        assert_eq!(rect.top, 0.0);
        assert_eq!(rect.right, 384.0);
        assert_eq!(rect.bottom, 108.0);
    }

    #[test]
    fn test_mapped_rect_applies_padding_inset() {
        let model = dual_model();
        let inset = Padding {
            top: 1.0,
            right: 2.0,
            bottom: 3.0,
            left: 4.0,
        };
        let rect = model.mapped_rect("A", inset).unwrap();
        assert_eq!(rect.left, 4.0);
        assert_eq!(rect.top, 1.0);
        assert_eq!(rect.right, 190.0);
        assert_eq!(rect.bottom, 105.0);
    }

    // ── hit_test ──────────────────────────────────────────────────────────────

    #[test]
    fn test_hit_test_finds_display_under_point() {
        let model = dual_model();
        let hit = model.hit_test(100.0, 50.0, Padding::ZERO).unwrap();
        assert_eq!(hit.as_deref(), Some("A"));

        let hit = model.hit_test(300.0, 50.0, Padding::ZERO).unwrap();
        assert_eq!(hit.as_deref(), Some("B"));
    }

    #[test]
    fn test_hit_test_returns_none_outside_every_display() {
        let mut model = LayoutModel::new(vec![placement("A", 1920, 1080, 0, 0)]);
        // 16:9 source inside a square canvas leaves slack above and below.
        model.rebuild_mapper(400.0, 400.0, Padding::ZERO).unwrap();

        let hit = model.hit_test(200.0, 10.0, Padding::ZERO).unwrap();
        assert_eq!(hit, None);
    }

    #[test]
    fn test_hit_test_fails_before_first_mapper_build() {
        let model = LayoutModel::new(vec![placement("A", 1920, 1080, 0, 0)]);
        let result = model.hit_test(0.0, 0.0, Padding::ZERO);
        assert_eq!(result, Err(LayoutError::NoMapper));
    }

    #[test]
    fn test_hit_test_prefers_first_placement_in_collection_order() {
        // Both placements occupy the same desktop rectangle, so their mapped
        // rectangles coincide exactly; the scan must settle on the first.
        let mut model = LayoutModel::new(vec![
            placement("first", 1920, 1080, 0, 0),
            placement("second", 1920, 1080, 0, 0),
        ]);
        model.rebuild_mapper(384.0, 216.0, Padding::ZERO).unwrap();

        for &(x, y) in &[(0.0, 0.0), (192.0, 108.0), (384.0, 216.0)] {
            let hit = model.hit_test(x, y, Padding::ZERO).unwrap();
            assert_eq!(hit.as_deref(), Some("first"), "overlap point ({x}, {y})");
        }
    }

    #[test]
    fn test_hit_test_edge_points_are_inclusive() {
        let model = dual_model();
        // The exact right/bottom corner of B maps to the canvas corner.
        let hit = model.hit_test(384.0, 108.0, Padding::ZERO).unwrap();
        assert_eq!(hit.as_deref(), Some("B"));
    }

    // ── toggle_assignment ─────────────────────────────────────────────────────

    #[test]
    fn test_toggle_assignment_adds_then_removes() {
        let mut model = dual_model();
        model.toggle_assignment("A");
        assert!(model.is_assigned("A"));
        model.toggle_assignment("A");
        assert!(!model.is_assigned("A"));
    }

    #[test]
    fn test_toggle_assignment_twice_restores_prior_state() {
        let mut model = dual_model();
        model.toggle_assignment("B");
        let before: HashSet<String> = model.assigned().map(str::to_string).collect();

        model.toggle_assignment("A");
        model.toggle_assignment("A");

        let after: HashSet<String> = model.assigned().map(str::to_string).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_toggle_assignment_ignores_unknown_display() {
        let mut model = dual_model();
        model.toggle_assignment("DP-9");
        assert_eq!(model.assigned().count(), 0);
    }

    #[test]
    fn test_assignments_are_independent_per_display() {
        let mut model = dual_model();
        model.toggle_assignment("A");
        model.toggle_assignment("B");
        model.toggle_assignment("A");
        assert!(!model.is_assigned("A"));
        assert!(model.is_assigned("B"));
    }

    // ── highlight_for ─────────────────────────────────────────────────────────

    #[test]
    fn test_highlight_for_combines_selection_and_assignment() {
        let mut model = dual_model();
        model.set_selected(Some("A".to_string()));
        model.toggle_assignment("B");

        assert_eq!(model.highlight_for("A"), Highlight::Selected);
        assert_eq!(model.highlight_for("B"), Highlight::Assigned);

        model.toggle_assignment("A");
        assert_eq!(model.highlight_for("A"), Highlight::Both);

        model.set_selected(None);
        assert_eq!(model.highlight_for("A"), Highlight::Assigned);
        assert_eq!(model.highlight_for("DP-9"), Highlight::Unselected);
    }

    // ── mapper lifecycle ──────────────────────────────────────────────────────

    #[test]
    fn test_rebuild_mapper_fails_on_empty_snapshot() {
        let mut model = LayoutModel::new(vec![]);
        let result = model.rebuild_mapper(800.0, 600.0, Padding::ZERO);
        assert_eq!(
            result,
            Err(LayoutError::VirtualSpace(VirtualSpaceError::EmptyCollection))
        );
    }

    #[test]
    fn test_rebuild_mapper_replaces_geometry_on_resize() {
        let mut model = dual_model();
        let before = model.mapped_rect("A", Padding::ZERO).unwrap();

        model.rebuild_mapper(768.0, 216.0, Padding::ZERO).unwrap();
        let after = model.mapped_rect("A", Padding::ZERO).unwrap();

        assert_eq!(after.width(), before.width() * 2.0);
        assert_eq!(after.height(), before.height() * 2.0);
    }

    #[test]
    fn test_selection_and_assignment_survive_resize() {
        let mut model = dual_model();
        model.set_selected(Some("A".to_string()));
        model.toggle_assignment("B");

        model.rebuild_mapper(1920.0, 540.0, Padding::ZERO).unwrap();

        assert_eq!(model.selected(), Some("A"));
        assert!(model.is_assigned("B"));
    }
}
