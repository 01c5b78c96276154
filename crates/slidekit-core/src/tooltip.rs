//! Tooltip policy for slider handles.
//!
//! The engine does not render or position tooltips. It exposes, per handle,
//! the triggers a tooltip adapter needs ([`TooltipVisibility`]) plus the
//! resolved title and placement.

use serde::{Deserialize, Serialize};

/// Tooltip placement relative to the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipPlacement {
    /// Above the handle
    #[default]
    Top,
    /// Below the handle
    Bottom,
    /// Left of the handle
    Left,
    /// Right of the handle
    Right,
    /// Top left corner
    TopLeft,
    /// Top right corner
    TopRight,
    /// Bottom left corner
    BottomLeft,
    /// Bottom right corner
    BottomRight,
}

/// Template equivalent to [`TooltipFormatter::Default`].
const DEFAULT_TEMPLATE: &str = "{value}";

/// How the tooltip title is produced from a handle value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum TooltipFormatter {
    /// Plain decimal rendering of the value
    #[default]
    Default,
    /// Template where `{value}` is replaced by the value
    Template(String),
    /// No title: the tooltip never renders
    Hidden,
}

impl TooltipFormatter {
    /// Title for `value`, or `None` when tooltips are hidden.
    #[must_use]
    pub fn title(&self, value: f64) -> Option<String> {
        match self {
            Self::Default => Some(format_value(value)),
            Self::Template(template) => Some(template.replace("{value}", &format_value(value))),
            Self::Hidden => None,
        }
    }
}

impl From<Option<String>> for TooltipFormatter {
    fn from(template: Option<String>) -> Self {
        match template {
            None => Self::Hidden,
            Some(template) if template == DEFAULT_TEMPLATE => Self::Default,
            Some(template) => Self::Template(template),
        }
    }
}

impl From<TooltipFormatter> for Option<String> {
    fn from(formatter: TooltipFormatter) -> Self {
        match formatter {
            TooltipFormatter::Default => Some(DEFAULT_TEMPLATE.to_string()),
            TooltipFormatter::Template(template) => Some(template),
            TooltipFormatter::Hidden => None,
        }
    }
}

/// Tooltip configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Force the tooltip open (`true`) or closed (`false`); `None` follows
    /// hover and focus
    pub open: Option<bool>,
    /// Explicit placement; `None` picks one from the orientation
    pub placement: Option<TooltipPlacement>,
    /// Title formatter
    pub formatter: TooltipFormatter,
}

impl TooltipConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Force visibility.
    #[must_use]
    pub const fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    /// Set the placement.
    #[must_use]
    pub const fn placement(mut self, placement: TooltipPlacement) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Set the formatter.
    #[must_use]
    pub fn formatter(mut self, formatter: TooltipFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Configuration-forced visibility. A hidden formatter always wins.
    #[must_use]
    pub fn forced_open(&self) -> Option<bool> {
        match self.formatter {
            TooltipFormatter::Hidden => Some(false),
            _ => self.open,
        }
    }

    /// Placement to use: explicit, else `Right` for vertical and `Top` for
    /// horizontal sliders.
    #[must_use]
    pub fn resolved_placement(&self, vertical: bool) -> TooltipPlacement {
        self.placement.unwrap_or(if vertical {
            TooltipPlacement::Right
        } else {
            TooltipPlacement::Top
        })
    }
}

/// The three independent tooltip triggers of one handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TooltipVisibility {
    /// Handle is hovered or dragged
    pub hover_visible: bool,
    /// Handle holds keyboard focus
    pub focus_visible: bool,
    /// Configuration override
    pub forced_open: Option<bool>,
}

impl TooltipVisibility {
    /// Forced state wins; otherwise hover or focus shows the tooltip.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        match self.forced_open {
            Some(forced) => forced,
            None => self.hover_visible || self.focus_visible,
        }
    }
}

/// Shortest decimal rendering of a value (`48`, `0.3`, `-2.5`).
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forced_open_overrides_hover() {
        let forced = TooltipVisibility {
            hover_visible: false,
            focus_visible: false,
            forced_open: Some(true),
        };
        assert!(forced.is_visible());

        let closed = TooltipVisibility {
            hover_visible: true,
            focus_visible: true,
            forced_open: Some(false),
        };
        assert!(!closed.is_visible());
    }

    #[test]
    fn test_hover_or_focus_shows() {
        let mut v = TooltipVisibility::default();
        assert!(!v.is_visible());
        v.hover_visible = true;
        assert!(v.is_visible());
        v.hover_visible = false;
        v.focus_visible = true;
        assert!(v.is_visible());
    }

    #[test]
    fn test_hidden_formatter_forces_closed() {
        let config = TooltipConfig::new()
            .open(true)
            .formatter(TooltipFormatter::Hidden);
        assert_eq!(config.forced_open(), Some(false));
        assert_eq!(TooltipConfig::new().forced_open(), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(TooltipFormatter::Default.title(48.0), Some("48".to_string()));
        assert_eq!(TooltipFormatter::Default.title(0.3), Some("0.3".to_string()));
        assert_eq!(
            TooltipFormatter::Template("{value}%".to_string()).title(30.0),
            Some("30%".to_string())
        );
        assert_eq!(TooltipFormatter::Hidden.title(30.0), None);
    }

    #[test]
    fn test_format_value_negative_zero() {
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(-2.5), "-2.5");
    }

    #[test]
    fn test_placement_defaults_by_orientation() {
        let config = TooltipConfig::new();
        assert_eq!(config.resolved_placement(false), TooltipPlacement::Top);
        assert_eq!(config.resolved_placement(true), TooltipPlacement::Right);

        let config = config.placement(TooltipPlacement::Left);
        assert_eq!(config.resolved_placement(true), TooltipPlacement::Left);
    }

    #[test]
    fn test_tooltip_config_json() {
        let json = r#"{"open": true, "placement": "topLeft", "formatter": "{value}°C"}"#;
        let config: TooltipConfig = serde_json::from_str(json).expect("valid json");
        assert_eq!(config.open, Some(true));
        assert_eq!(config.placement, Some(TooltipPlacement::TopLeft));
        assert_eq!(config.formatter.title(26.0), Some("26°C".to_string()));

        let hidden: TooltipConfig =
            serde_json::from_str(r#"{"formatter": null}"#).expect("valid json");
        assert_eq!(hidden.formatter, TooltipFormatter::Hidden);

        let absent: TooltipConfig = serde_json::from_str("{}").expect("valid json");
        assert_eq!(absent.formatter, TooltipFormatter::Default);
    }
}
