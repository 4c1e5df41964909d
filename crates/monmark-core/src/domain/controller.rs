//! Interaction controller: raw input events in, redraw requests out.
//!
//! The host environment (whatever windowing toolkit embeds the picker) feeds
//! [`InputEvent`]s to [`InteractionController::handle_event`] as they arrive.
//! Every handler runs to completion before the next event is processed, so
//! the controller serializes all access to the [`LayoutModel`] by
//! construction; there is no other path to the model's mutable state.
//!
//! The return value tells the host whether the picker's appearance changed.
//! Redundant pointer motion inside the same display produces `None`, which
//! is what keeps hover tracking from redrawing on every mouse packet.

use tracing::debug;

use super::layout::{LayoutError, LayoutModel};
use super::mapper::Padding;

/// The pointer button that toggles assignment.  Other buttons are ignored.
pub const PRIMARY_BUTTON: u8 = 1;

/// A raw interaction event in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer moved to `(x, y)`.
    PointerMoved { x: f64, y: f64 },
    /// A pointer button was pressed at `(x, y)`.
    ButtonPressed { button: u8, x: f64, y: f64 },
    /// The canvas was resized to `width` × `height` pixels.
    CanvasResized { width: f64, height: f64 },
}

/// A request for the host to repaint the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawRequest;

/// Translates input events into [`LayoutModel`] state transitions.
///
/// Owns the model for the process lifetime.  The two paddings come from the
/// style configuration: `canvas_padding` frames the whole layout inside the
/// canvas, `display_padding` insets each display rectangle so neighbouring
/// displays stay visually separated.
#[derive(Debug, Clone)]
pub struct InteractionController {
    model: LayoutModel,
    canvas_padding: Padding,
    display_padding: Padding,
}

impl InteractionController {
    /// Creates a controller over a freshly built model.
    ///
    /// No mapper exists yet; the host must deliver the initial
    /// [`InputEvent::CanvasResized`] before pointer events can hit-test.
    pub fn new(model: LayoutModel, canvas_padding: Padding, display_padding: Padding) -> Self {
        Self {
            model,
            canvas_padding,
            display_padding,
        }
    }

    /// Read access to the model, for scene building.
    pub fn model(&self) -> &LayoutModel {
        &self.model
    }

    /// The per-display inset the controller hit-tests with; scene builders
    /// must use the same value so visuals and hovering agree.
    pub fn display_padding(&self) -> Padding {
        self.display_padding
    }

    /// Applies one event and reports whether a repaint is needed.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NoMapper`] for pointer events delivered before
    /// the first resize, and propagates mapper-rebuild failures from resize
    /// events.  These are host programming errors, not recoverable states.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<Option<RedrawRequest>, LayoutError> {
        match event {
            InputEvent::PointerMoved { x, y } => self.on_pointer_moved(x, y),
            InputEvent::ButtonPressed { button, x, y } => self.on_button_pressed(button, x, y),
            InputEvent::CanvasResized { width, height } => self.on_canvas_resized(width, height),
        }
    }

    fn on_pointer_moved(&mut self, x: f64, y: f64) -> Result<Option<RedrawRequest>, LayoutError> {
        let hit = self.model.hit_test(x, y, self.display_padding)?;

        if hit.as_deref() == self.model.selected() {
            return Ok(None);
        }

        debug!(selected = ?hit, "hover selection changed");
        self.model.set_selected(hit);
        Ok(Some(RedrawRequest))
    }

    fn on_button_pressed(
        &mut self,
        button: u8,
        _x: f64,
        _y: f64,
    ) -> Result<Option<RedrawRequest>, LayoutError> {
        if button != PRIMARY_BUTTON {
            return Ok(None);
        }

        // A click lands on whatever the preceding motion event selected;
        // clicking outside every display is a no-op.
        let Some(selected) = self.model.selected().map(str::to_string) else {
            return Ok(None);
        };

        self.model.toggle_assignment(&selected);
        debug!(
            display = %selected,
            assigned = self.model.is_assigned(&selected),
            "assignment toggled"
        );
        Ok(Some(RedrawRequest))
    }

    fn on_canvas_resized(
        &mut self,
        width: f64,
        height: f64,
    ) -> Result<Option<RedrawRequest>, LayoutError> {
        self.model.rebuild_mapper(width, height, self.canvas_padding)?;
        // Every mapped rectangle just changed, so a repaint is always due
        // even though selection and assignment are untouched.
        Ok(Some(RedrawRequest))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
