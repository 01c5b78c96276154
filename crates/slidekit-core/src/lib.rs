//! Value-interaction engine for range and value sliders.
//!
//! This crate holds everything a slider does apart from drawing itself:
//! - Value space: [`Domain`], [`Orientation`], [`Step`], [`Marks`], [`Snapper`]
//! - Handles and collisions: [`HandleSet`], [`Collision`]
//! - The event state machine: [`Slider`], [`SliderEvent`], [`SliderChanged`]
//! - Tooltip policy: [`TooltipConfig`], [`TooltipVisibility`]
//! - Configuration: [`SliderConfig`] with [`ConfigError`]
//!
//! A presentation layer translates pointer and keyboard input into
//! [`SliderEvent`]s with track-relative offset ratios, feeds them to
//! [`Slider::handle_event`], and renders from [`Slider::snapshot`].

mod config;
mod error;
mod event;
mod handles;
mod interaction;
mod marks;
mod range;
mod slider;
mod snap;
mod tooltip;

pub use config::{Pushable, SliderConfig, Values};
pub use error::ConfigError;
pub use event::{HandleState, Key, PointerTarget, SliderChanged, SliderEvent};
pub use handles::{Collision, Handle, HandleSet};
pub use interaction::{Drag, InteractionState};
pub use marks::{Mark, Marks};
pub use range::{clamp_ratio, Domain, Orientation};
pub use slider::{HandleSnapshot, Slider, SliderSnapshot};
pub use snap::{legal_at_or_above, legal_at_or_below, precision_of, snap, Snapper, Step};
pub use tooltip::{
    format_value, TooltipConfig, TooltipFormatter, TooltipPlacement, TooltipVisibility,
};
