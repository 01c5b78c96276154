//! The slider value-interaction engine.
//!
//! [`Slider`] consumes [`SliderEvent`]s one at a time, in arrival order, and
//! answers each with at most one [`SliderChanged`]. Rendering and tooltip
//! positioning read [`Slider::snapshot`].
//!
//! # Examples
//!
//! ```
//! use slidekit_core::{PointerTarget, Slider, SliderChanged, SliderConfig, SliderEvent};
//!
//! let config = SliderConfig::new().step_unset().mark(0.0, "0").mark(48.0, "48").mark(100.0, "100");
//! let mut slider = Slider::new(&config).expect("valid config");
//!
//! let changed = slider.handle_event(SliderEvent::PointerDown {
//!     target: PointerTarget::Track,
//!     ratio: 0.45,
//! });
//! assert_eq!(changed, Some(SliderChanged::commit(0, 48.0)));
//! ```

use crate::config::SliderConfig;
use crate::error::ConfigError;
use crate::event::{HandleState, Key, PointerTarget, SliderChanged, SliderEvent};
use crate::handles::{Handle, HandleSet};
use crate::interaction::{Drag, InteractionState};
use crate::range::{clamp_ratio, Orientation};
use crate::tooltip::{TooltipConfig, TooltipPlacement, TooltipVisibility};
use serde::{Deserialize, Serialize};

/// Keyboard delta, as a fraction of the span, when neither step nor marks
/// define one.
const CONTINUOUS_KEY_FRACTION: f64 = 0.01;

/// Page keys move this many deltas.
const PAGE_MULTIPLIER: f64 = 2.0;

/// Read-only view of one handle for renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandleSnapshot {
    /// Current value
    pub value: f64,
    /// Interaction state
    pub state: HandleState,
    /// Tooltip triggers
    pub tooltip: TooltipVisibility,
    /// Tooltip title, `None` when hidden by the formatter
    pub title: Option<String>,
}

/// Read-only view of the whole slider for renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshot {
    /// Values in handle order
    pub values: Vec<f64>,
    /// Handle targeted by tooltips and keyboard input
    pub active_handle: Option<usize>,
    /// Handle holding keyboard focus
    pub focused_handle: Option<usize>,
    /// Resolved tooltip placement
    pub placement: TooltipPlacement,
    /// Per-handle details
    pub handles: Vec<HandleSnapshot>,
}

/// Slider engine: handle values plus the interaction state machine.
#[derive(Debug, Clone)]
pub struct Slider {
    handles: HandleSet,
    interaction: InteractionState,
    tooltip: TooltipConfig,
    orientation: Orientation,
    disabled: bool,
}

impl Slider {
    /// Build an engine, refusing invalid configurations.
    pub fn new(config: &SliderConfig) -> Result<Self, ConfigError> {
        let snapper = config.snapper()?;
        let initial = config.initial_values()?;
        let collision = config.collision(initial.len())?;
        let handles = HandleSet::new(&initial, snapper, collision);

        tracing::debug!(
            min = config.min,
            max = config.max,
            handles = handles.len(),
            values = ?handles.values(),
            "slider created"
        );

        Ok(Self {
            handles,
            interaction: InteractionState::default(),
            tooltip: config.tooltip.clone(),
            orientation: config.orientation(),
            disabled: config.disabled,
        })
    }

    // =========================================================================
    // Read-only state
    // =========================================================================

    /// Values in handle order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.handles.values()
    }

    /// Value of one handle.
    #[must_use]
    pub fn value(&self, handle: usize) -> f64 {
        self.handles.value(handle)
    }

    /// The handle set.
    #[must_use]
    pub const fn handles(&self) -> &HandleSet {
        &self.handles
    }

    /// Handle records, for renderers that want raw flags.
    pub fn iter_handles(&self) -> impl Iterator<Item = &Handle> {
        self.handles.iter()
    }

    /// Transient interaction state.
    #[must_use]
    pub const fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Handle targeted by tooltips and keyboard input.
    #[must_use]
    pub const fn active_handle(&self) -> Option<usize> {
        self.interaction.active_handle()
    }

    /// Handle holding keyboard focus.
    #[must_use]
    pub const fn focused_handle(&self) -> Option<usize> {
        self.interaction.focused_handle()
    }

    /// Track orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether input is ignored.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Interaction state of one handle.
    #[must_use]
    pub fn handle_state(&self, handle: usize) -> HandleState {
        let h = self.handles.handle(handle);
        if h.is_dragging() {
            HandleState::Dragging
        } else if h.is_hovered() {
            HandleState::Hovering
        } else {
            HandleState::Idle
        }
    }

    /// Tooltip triggers for one handle.
    #[must_use]
    pub fn tooltip_visibility(&self, handle: usize) -> TooltipVisibility {
        let h = self.handles.handle(handle);
        let enabled = !self.disabled;
        TooltipVisibility {
            hover_visible: enabled && (h.is_hovered() || h.is_dragging()),
            focus_visible: enabled && h.is_focused(),
            forced_open: self.tooltip.forced_open(),
        }
    }

    /// Tooltip title for one handle.
    #[must_use]
    pub fn tooltip_title(&self, handle: usize) -> Option<String> {
        self.tooltip.formatter.title(self.value(handle))
    }

    /// Resolved tooltip placement.
    #[must_use]
    pub fn tooltip_placement(&self) -> TooltipPlacement {
        self.tooltip
            .resolved_placement(self.orientation == Orientation::Vertical)
    }

    /// Everything a renderer needs, in one serializable value.
    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            values: self.values(),
            active_handle: self.active_handle(),
            focused_handle: self.focused_handle(),
            placement: self.tooltip_placement(),
            handles: (0..self.handles.len())
                .map(|i| HandleSnapshot {
                    value: self.value(i),
                    state: self.handle_state(i),
                    tooltip: self.tooltip_visibility(i),
                    title: self.tooltip_title(i),
                })
                .collect(),
        }
    }

    // =========================================================================
    // External updates
    // =========================================================================

    /// Apply controlled values from the presentation layer. No event is
    /// emitted.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not have one entry per handle.
    pub fn set_values(&mut self, values: &[f64]) {
        self.handles.set_values(values);
    }

    /// Drop all transient state: hover, drag, focus, active handle.
    pub fn reset_interaction(&mut self) {
        self.interaction.reset();
        for handle in self.handles.iter_mut() {
            handle.dragging = false;
            handle.focused = false;
            handle.hovered = false;
        }
    }

    // =========================================================================
    // State machine
    // =========================================================================

    /// React to one input event.
    ///
    /// # Panics
    ///
    /// Panics if the event names a handle that does not exist.
    pub fn handle_event(&mut self, event: SliderEvent) -> Option<SliderChanged> {
        if self.disabled {
            tracing::trace!(?event, "slider disabled, event ignored");
            return None;
        }
        tracing::trace!(?event, "slider event");

        match event {
            SliderEvent::PointerEnter { handle } => {
                self.handles.handle_mut(handle).hovered = true;
                None
            }
            SliderEvent::PointerLeave { handle } => {
                self.handles.handle_mut(handle).hovered = false;
                None
            }
            SliderEvent::PointerDown {
                target: PointerTarget::Handle(handle),
                ratio,
            } => {
                self.press_handle(handle, ratio);
                None
            }
            SliderEvent::PointerDown {
                target: PointerTarget::Track,
                ratio,
            } => self.click_track(ratio),
            SliderEvent::PointerMove { ratio } => self.drag_to(ratio),
            SliderEvent::PointerUp { ratio } => self.release(Some(ratio)),
            SliderEvent::PointerCancel => self.release(None),
            SliderEvent::KeyDown { key } => self.key_down(key),
            SliderEvent::Focus { handle } => {
                self.handles.set_focus(Some(handle));
                self.interaction.focus(handle);
                None
            }
            SliderEvent::Blur => {
                self.handles.set_focus(None);
                self.interaction.blur();
                None
            }
        }
    }

    fn press_handle(&mut self, handle: usize, ratio: f64) {
        if self.interaction.drag().is_some() {
            tracing::debug!(handle, "press during an active gesture ignored");
            return;
        }
        let value = self.handles.value(handle);
        let domain = *self.handles.snapper().domain();
        self.handles.handle_mut(handle).dragging = true;
        self.interaction.start_drag(Drag {
            handle,
            pointer_origin: clamp_ratio(ratio),
            handle_origin: domain.to_offset_ratio(value),
        });
    }

    fn click_track(&mut self, ratio: f64) -> Option<SliderChanged> {
        if self.interaction.drag().is_some() {
            tracing::debug!(ratio, "track press during an active gesture ignored");
            return None;
        }
        let value = self.handles.snapper().domain().to_value(ratio);
        let handle = self.handles.nearest_handle(value);
        self.interaction.activate(handle);
        let applied = self.handles.set_handle_value(handle, value);
        Some(SliderChanged::commit(handle, applied))
    }

    /// Move the dragged handle; `None` when nothing is dragged or the value
    /// did not change.
    fn drag_to(&mut self, ratio: f64) -> Option<SliderChanged> {
        let drag = self.interaction.drag()?;
        let previous = self.handles.value(drag.handle);
        let applied = self.apply_drag(drag, ratio);
        (applied != previous).then(|| SliderChanged::preview(drag.handle, applied))
    }

    fn apply_drag(&mut self, drag: Drag, ratio: f64) -> f64 {
        let target = drag.target_ratio(clamp_ratio(ratio));
        let value = self.handles.snapper().domain().to_value(target);
        self.handles.set_handle_value(drag.handle, value)
    }

    /// End the gesture. A final ratio is applied first; cancel passes `None`.
    fn release(&mut self, ratio: Option<f64>) -> Option<SliderChanged> {
        let drag = self.interaction.end_drag()?;
        if let Some(ratio) = ratio {
            self.apply_drag(drag, ratio);
        }
        self.handles.handle_mut(drag.handle).dragging = false;
        Some(SliderChanged::commit(
            drag.handle,
            self.handles.value(drag.handle),
        ))
    }

    fn key_down(&mut self, key: Key) -> Option<SliderChanged> {
        let handle = self.interaction.focused_handle()?;
        let previous = self.handles.value(handle);
        let target = self.key_target(key, previous)?;

        self.interaction.activate(handle);
        let applied = self.handles.set_handle_value(handle, target);
        (applied != previous).then(|| SliderChanged::commit(handle, applied))
    }

    /// Legal value a key press moves `current` to.
    fn key_target(&self, key: Key, current: f64) -> Option<f64> {
        let snapper = self.handles.snapper();
        let domain = snapper.domain();

        let flip_horizontal = domain.is_reversed();
        let flip_vertical = flip_horizontal && self.orientation == Orientation::Vertical;
        let steps = match key {
            Key::ArrowRight if flip_horizontal => -1.0,
            Key::ArrowLeft if flip_horizontal => 1.0,
            Key::ArrowUp if flip_vertical => -1.0,
            Key::ArrowDown if flip_vertical => 1.0,
            Key::ArrowRight | Key::ArrowUp => 1.0,
            Key::ArrowLeft | Key::ArrowDown => -1.0,
            Key::PageUp => PAGE_MULTIPLIER,
            Key::PageDown => -PAGE_MULTIPLIER,
            Key::Home => return Some(snapper.lowest()),
            Key::End => return Some(snapper.highest()),
            Key::Other => return None,
        };

        let delta = snapper
            .step()
            .size()
            .or_else(|| snapper.marks().min_delta())
            .unwrap_or_else(|| domain.span() * CONTINUOUS_KEY_FRACTION);
        let candidate = steps.mul_add(delta, current);
        let snapped = snapper.snap(candidate);
        // Uneven marks can snap back onto the current value.
        let target = if steps > 0.0 {
            if snapped > current {
                snapped
            } else {
                snapper
                    .at_or_above(candidate)
                    .unwrap_or_else(|| snapper.highest())
            }
        } else if snapped < current {
            snapped
        } else {
            snapper
                .at_or_below(candidate)
                .unwrap_or_else(|| snapper.lowest())
        };
        Some(target)
    }
}
