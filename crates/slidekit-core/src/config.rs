//! Slider configuration and its validation.

use crate::error::ConfigError;
use crate::handles::Collision;
use crate::marks::{Mark, Marks};
use crate::range::{Domain, Orientation};
use crate::snap::{Snapper, Step};
use crate::tooltip::TooltipConfig;
use serde::{Deserialize, Serialize};

/// One value or a list of values (one per handle).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Values {
    /// Single handle
    Single(f64),
    /// One value per handle
    Many(Vec<f64>),
}

impl Values {
    /// Values as a list.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            Self::Single(v) => vec![*v],
            Self::Many(vs) => vs.clone(),
        }
    }
}

impl From<f64> for Values {
    fn from(value: f64) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<f64>> for Values {
    fn from(values: Vec<f64>) -> Self {
        Self::Many(values)
    }
}

/// Push-on-collision setting: a flag, or the minimum handle distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pushable {
    /// `false` clamps to the neighbor, `true` pushes with no gap
    Flag(bool),
    /// Push, keeping handles this far apart
    Distance(f64),
}

impl Default for Pushable {
    fn default() -> Self {
        Self::Flag(false)
    }
}

/// Complete slider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Domain minimum
    pub min: f64,
    /// Domain maximum
    pub max: f64,
    /// Snapping step; `null` in a config file unsets it
    pub step: Step,
    /// Named marks
    #[serde(skip_serializing_if = "Marks::is_empty")]
    pub marks: Marks,
    /// Track runs from max to min
    pub reverse: bool,
    /// Vertical track
    pub vertical: bool,
    /// Two (or more) handles
    pub range: bool,
    /// Collision policy
    pub pushable: Pushable,
    /// Controlled value(s)
    pub value: Option<Values>,
    /// Fallback when `value` is absent
    pub default_value: Option<Values>,
    /// Ignore all input
    pub disabled: bool,
    /// Tooltip policy
    pub tooltip: TooltipConfig,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: Step::default(),
            marks: Marks::new(),
            reverse: false,
            vertical: false,
            range: false,
            pushable: Pushable::default(),
            value: None,
            default_value: None,
            disabled: false,
            tooltip: TooltipConfig::default(),
        }
    }
}

impl SliderConfig {
    /// Create the default configuration: `[0, 100]`, step 1, one handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum.
    #[must_use]
    pub const fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    /// Set the maximum.
    #[must_use]
    pub const fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Set a fixed step.
    #[must_use]
    pub const fn step(mut self, step: f64) -> Self {
        self.step = Step::Fixed(step);
        self
    }

    /// Remove the step grid.
    #[must_use]
    pub const fn step_unset(mut self) -> Self {
        self.step = Step::Unset;
        self
    }

    /// Replace all marks.
    #[must_use]
    pub fn marks(mut self, marks: Marks) -> Self {
        self.marks = marks;
        self
    }

    /// Add a single mark.
    #[must_use]
    pub fn mark(mut self, value: f64, label: impl Into<String>) -> Self {
        self.marks.insert(Mark::new(value, label));
        self
    }

    /// Set reverse direction.
    #[must_use]
    pub const fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Set vertical orientation.
    #[must_use]
    pub const fn vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    /// Enable range mode.
    #[must_use]
    pub const fn range(mut self, range: bool) -> Self {
        self.range = range;
        self
    }

    /// Set the collision policy.
    #[must_use]
    pub const fn pushable(mut self, pushable: Pushable) -> Self {
        self.pushable = pushable;
        self
    }

    /// Set the controlled value(s).
    #[must_use]
    pub fn value(mut self, value: impl Into<Values>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the default value(s).
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Values>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the tooltip policy.
    #[must_use]
    pub fn tooltip(mut self, tooltip: TooltipConfig) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// Track orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        Orientation::from_vertical(self.vertical)
    }

    /// Validated domain.
    pub fn domain(&self) -> Result<Domain, ConfigError> {
        Ok(Domain::new(self.min, self.max)?.with_reverse(self.reverse))
    }

    /// Validated snapping rules.
    pub fn snapper(&self) -> Result<Snapper, ConfigError> {
        let domain = self.domain()?;
        if let Step::Fixed(step) = self.step {
            if !(step.is_finite() && step > 0.0) {
                return Err(ConfigError::InvalidStep(step));
            }
        }
        self.marks.validate(&domain)?;
        Ok(Snapper::new(domain, self.step, self.marks.clone()))
    }

    /// Initial handle values, before snapping.
    ///
    /// `value` wins over `default_value`; with neither, every handle starts
    /// at `min`.
    pub fn initial_values(&self) -> Result<Vec<f64>, ConfigError> {
        let given = self
            .value
            .as_ref()
            .or(self.default_value.as_ref())
            .map(Values::to_vec)
            .filter(|values| !values.is_empty());

        match (self.range, given) {
            (false, None) => Ok(vec![self.min]),
            (false, Some(values)) if values.len() == 1 => Ok(values),
            (false, Some(values)) => Err(ConfigError::HandleCount {
                expected: "exactly 1",
                found: values.len(),
            }),
            (true, None) => Ok(vec![self.min, self.min]),
            (true, Some(values)) if values.len() >= 2 => Ok(values),
            (true, Some(values)) => Err(ConfigError::HandleCount {
                expected: "at least 2",
                found: values.len(),
            }),
        }
    }

    /// Validated collision policy for `handles` handles.
    pub fn collision(&self, handles: usize) -> Result<Collision, ConfigError> {
        let distance = match self.pushable {
            Pushable::Flag(false) => return Ok(Collision::Clamp),
            Pushable::Flag(true) => 0.0,
            Pushable::Distance(distance) => distance,
        };
        if !(distance.is_finite() && distance >= 0.0) {
            return Err(ConfigError::InvalidPushDistance(distance));
        }
        // Every gap must be reachable over legal values, not just the span.
        let snapper = self.snapper()?;
        let too_large = ConfigError::PushDistanceTooLarge {
            distance,
            handles,
            span: self.max - self.min,
        };
        let mut previous = snapper.lowest();
        for _ in 1..handles {
            match snapper.at_or_above(previous + distance) {
                Some(next) if next <= snapper.highest() => previous = next,
                _ => return Err(too_large),
            }
        }
        Ok(Collision::Push { distance })
    }

    /// Run every configuration check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.snapper()?;
        let values = self.initial_values()?;
        self.collision(values.len())?;
        Ok(())
    }
}
