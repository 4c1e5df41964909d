//! Render-scene building.
//!
//! The picker core knows geometry and state; it knows nothing about pixels.
//! This module flattens both into a [`Scene`]: a serializable description of
//! everything the rendering collaborator must draw, with all geometry already
//! resolved into canvas coordinates.  A renderer consumes the scene without
//! touching the mapper or the model again, which keeps the resize ordering
//! guarantee trivial: a scene built after a resize can only contain
//! post-resize geometry.

use monmark_core::{Highlight, InteractionController, LayoutError, MappedRect};
use serde::Serialize;

use crate::infrastructure::storage::config::{AppConfig, BorderStyle, FontStyle};

/// The primary-indicator bar inside a display rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneBar {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Fill color, `#rrggbb`.
    pub color: String,
}

/// One display rectangle, fully resolved for drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneRect {
    /// Output name, also the name label text.
    pub name: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Background fill for the current highlight category, `#rrggbb`.
    pub fill: String,
    pub highlight: Highlight,
    pub is_primary: bool,
    /// The primary-indicator bar; present only on the primary display when
    /// its rectangle is large enough to hold one.
    pub primary_bar: Option<SceneBar>,
    /// Resolution label text, e.g. `"1920 x 1080"`.
    pub resolution_label: String,
}

/// Everything the renderer needs for one repaint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Canvas background fill, `#rrggbb`.
    pub background: String,
    pub border: BorderStyle,
    pub name_font: FontStyle,
    pub resolution_font: FontStyle,
    /// Display rectangles in draw order (same order hit-testing uses).
    pub rects: Vec<SceneRect>,
}

/// Builds the scene for the controller's current state.
///
/// `canvas` must be the size delivered by the most recent
/// [`InputEvent::CanvasResized`]; the mapped rectangles are only meaningful
/// against that canvas.
///
/// # Errors
///
/// Returns [`LayoutError::NoMapper`] when no resize event has been handled
/// yet.
///
/// [`InputEvent::CanvasResized`]: monmark_core::InputEvent::CanvasResized
pub fn build_scene(
    controller: &InteractionController,
    config: &AppConfig,
    canvas: (f64, f64),
) -> Result<Scene, LayoutError> {
    let model = controller.model();
    let style = &config.display;

    let mut rects = Vec::with_capacity(model.placements().len());
    for placement in model.placements() {
        let rect = model.mapped_rect(&placement.name, controller.display_padding())?;
        let highlight = model.highlight_for(&placement.name);

        rects.push(SceneRect {
            name: placement.name.clone(),
            left: rect.left,
            top: rect.top,
            width: rect.width(),
            height: rect.height(),
            fill: fill_for(highlight, config).to_string(),
            highlight,
            is_primary: placement.is_primary,
            primary_bar: placement
                .is_primary
                .then(|| primary_bar(&rect, config))
                .flatten(),
            resolution_label: format!("{} x {}", placement.width, placement.height),
        });
    }

    Ok(Scene {
        canvas_width: canvas.0,
        canvas_height: canvas.1,
        background: config.canvas.background.clone(),
        border: style.border.clone(),
        name_font: style.name_label.clone(),
        resolution_font: style.resolution_label.clone(),
        rects,
    })
}

/// Resolves a highlight category to its configured background fill.
pub fn fill_for(highlight: Highlight, config: &AppConfig) -> &str {
    let colors = &config.display.background;
    match highlight {
        Highlight::Unselected => &colors.unselected,
        Highlight::Selected => &colors.selected,
        Highlight::Assigned => &colors.assigned,
        Highlight::Both => &colors.both,
    }
}

/// The primary-indicator bar for a display rectangle, or `None` when the
/// rectangle is too small to hold one.
pub fn primary_bar(rect: &MappedRect, config: &AppConfig) -> Option<SceneBar> {
    let style = &config.display.primary;
    let width = rect.width() - style.padding.left - style.padding.right;
    let height = rect.height() * style.proportion - style.padding.bottom;
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(SceneBar {
        left: rect.left + style.padding.left,
        top: rect.top + style.padding.top,
        width,
        height,
        color: style.color.clone(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
