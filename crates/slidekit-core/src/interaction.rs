//! Transient, widget-global interaction state.

use serde::{Deserialize, Serialize};

/// An in-progress pointer gesture on one handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drag {
    /// Handle being dragged
    pub handle: usize,
    /// Pointer offset ratio at press time
    pub pointer_origin: f64,
    /// Handle offset ratio at press time
    pub handle_origin: f64,
}

impl Drag {
    /// Offset ratio the handle should move to for a pointer at `ratio`.
    ///
    /// Moves are relative to the press point, so grabbing a handle off-center
    /// does not make it jump.
    #[must_use]
    pub fn target_ratio(&self, ratio: f64) -> f64 {
        self.handle_origin + (ratio - self.pointer_origin)
    }
}

/// Which handle is active, which holds focus, and any gesture in flight.
///
/// Reset on pointer-up, pointer-cancel and blur. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    active_handle: Option<usize>,
    focused_handle: Option<usize>,
    drag: Option<Drag>,
}

impl InteractionState {
    /// Handle targeted by tooltips and keyboard input.
    #[must_use]
    pub const fn active_handle(&self) -> Option<usize> {
        self.active_handle
    }

    /// Handle holding keyboard focus.
    #[must_use]
    pub const fn focused_handle(&self) -> Option<usize> {
        self.focused_handle
    }

    /// Gesture in flight.
    #[must_use]
    pub const fn drag(&self) -> Option<Drag> {
        self.drag
    }

    /// Pointer offset ratio recorded at press time.
    #[must_use]
    pub fn pointer_origin(&self) -> Option<f64> {
        self.drag.map(|d| d.pointer_origin)
    }

    pub(crate) fn start_drag(&mut self, drag: Drag) {
        self.active_handle = Some(drag.handle);
        self.drag = Some(drag);
    }

    /// End the gesture. The active handle survives only if it holds focus.
    pub(crate) fn end_drag(&mut self) -> Option<Drag> {
        self.active_handle = self.focused_handle;
        self.drag.take()
    }

    pub(crate) fn activate(&mut self, handle: usize) {
        self.active_handle = Some(handle);
    }

    pub(crate) fn focus(&mut self, handle: usize) {
        self.focused_handle = Some(handle);
        self.active_handle = Some(handle);
    }

    pub(crate) fn blur(&mut self) {
        self.focused_handle = None;
        self.active_handle = self.drag.map(|d| d.handle);
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
