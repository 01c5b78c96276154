//! Input events consumed by the engine and messages it emits.

use serde::{Deserialize, Serialize};

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// The hit region of a handle
    Handle(usize),
    /// Empty track
    Track,
}

/// Keys the engine reacts to. Everything else arrives as `Other` and is
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Left arrow
    ArrowLeft,
    /// Right arrow
    ArrowRight,
    /// Up arrow
    ArrowUp,
    /// Down arrow
    ArrowDown,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Home
    Home,
    /// End
    End,
    /// Any other key
    Other,
}

/// Input events, already translated to track-relative offset ratios by the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SliderEvent {
    /// Pointer entered a handle's hit region
    PointerEnter {
        /// Handle index
        handle: usize,
    },
    /// Pointer left a handle's hit region
    PointerLeave {
        /// Handle index
        handle: usize,
    },
    /// Pointer pressed
    PointerDown {
        /// What was pressed
        target: PointerTarget,
        /// Offset ratio along the track
        ratio: f64,
    },
    /// Pointer moved
    PointerMove {
        /// Offset ratio along the track
        ratio: f64,
    },
    /// Pointer released
    PointerUp {
        /// Offset ratio along the track
        ratio: f64,
    },
    /// Gesture interrupted by the platform
    PointerCancel,
    /// Key pressed on the focused handle
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Handle gained keyboard focus
    Focus {
        /// Handle index
        handle: usize,
    },
    /// Keyboard focus left the slider
    Blur,
}

/// Emitted on every accepted value update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderChanged {
    /// Handle index
    pub handle: usize,
    /// Applied value
    pub value: f64,
    /// `false` for live drag previews, `true` for the final value of a
    /// gesture or a keyboard commit
    pub is_final: bool,
}

impl SliderChanged {
    /// Intermediate drag update.
    #[must_use]
    pub const fn preview(handle: usize, value: f64) -> Self {
        Self {
            handle,
            value,
            is_final: false,
        }
    }

    /// Final update of a gesture.
    #[must_use]
    pub const fn commit(handle: usize, value: f64) -> Self {
        Self {
            handle,
            value,
            is_final: true,
        }
    }
}

/// Per-handle interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HandleState {
    /// No pointer interaction
    #[default]
    Idle,
    /// Pointer over the handle
    Hovering,
    /// Pointer gesture in progress
    Dragging,
}
