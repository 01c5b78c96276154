//! Snapping raw values to the nearest legal slider value.
//!
//! Legal values depend on the step and the marks:
//!
//! | step  | marks     | legal values                       |
//! |-------|-----------|------------------------------------|
//! | unset | empty     | anything in `[min, max]`           |
//! | unset | non-empty | mark keys only                     |
//! | set   | any       | grid points, `max`, and mark keys  |

use crate::marks::Marks;
use crate::range::Domain;
use serde::{Deserialize, Serialize};

const GRID_TOLERANCE: f64 = 1e-9;
const MAX_PRECISION: usize = 15;

/// Snapping granularity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Step {
    /// No grid: continuous values, or mark-only snapping when marks exist
    Unset,
    /// Uniform grid anchored at `min`
    Fixed(f64),
}

impl Default for Step {
    fn default() -> Self {
        Self::Fixed(1.0)
    }
}

impl Step {
    /// Step size, if set.
    #[must_use]
    pub const fn size(self) -> Option<f64> {
        match self {
            Self::Unset => None,
            Self::Fixed(step) => Some(step),
        }
    }

    /// Whether no grid is configured.
    #[must_use]
    pub const fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl From<Option<f64>> for Step {
    fn from(step: Option<f64>) -> Self {
        step.map_or(Self::Unset, Self::Fixed)
    }
}

impl From<Step> for Option<f64> {
    fn from(step: Step) -> Self {
        step.size()
    }
}

/// Snap `raw` to the nearest legal value.
///
/// Mark-only ties go to the lower mark; grid/mark ties go to the grid value.
/// The result always lies in `[min, max]`, and snapping is idempotent.
#[must_use]
pub fn snap(raw: f64, domain: &Domain, step: Step, marks: &Marks) -> f64 {
    let value = domain.clamp(raw);
    match step.size() {
        None if marks.is_empty() => value,
        None => marks.nearest(value).unwrap_or(value),
        Some(step) => {
            let grid = Grid::new(domain, step).nearest(value);
            match marks.nearest(value) {
                Some(mark) if (mark - value).abs() < (grid - value).abs() => mark,
                _ => grid,
            }
        }
    }
}

/// Smallest legal value `>= value`, if any.
#[must_use]
pub fn legal_at_or_above(value: f64, domain: &Domain, step: Step, marks: &Marks) -> Option<f64> {
    if value.is_nan() || value > domain.max() {
        return None;
    }
    match step.size() {
        None if marks.is_empty() => Some(value.max(domain.min())),
        None => marks.first_at_or_above(value),
        Some(step) => {
            let grid = Grid::new(domain, step).at_or_above(value);
            let mark = marks.first_at_or_above(value);
            match (grid, mark) {
                (Some(g), Some(m)) => Some(g.min(m)),
                (g, m) => g.or(m),
            }
        }
    }
}

/// Largest legal value `<= value`, if any.
#[must_use]
pub fn legal_at_or_below(value: f64, domain: &Domain, step: Step, marks: &Marks) -> Option<f64> {
    if value.is_nan() || value < domain.min() {
        return None;
    }
    match step.size() {
        None if marks.is_empty() => Some(value.min(domain.max())),
        None => marks.first_at_or_below(value),
        Some(step) => {
            let grid = Grid::new(domain, step).at_or_below(value);
            let mark = marks.first_at_or_below(value);
            match (grid, mark) {
                (Some(g), Some(m)) => Some(g.max(m)),
                (g, m) => g.or(m),
            }
        }
    }
}

/// Domain, step and marks bundled together: everything needed to decide
/// which values a handle may hold.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapper {
    domain: Domain,
    step: Step,
    marks: Marks,
}

impl Snapper {
    /// Bundle snapping rules.
    #[must_use]
    pub const fn new(domain: Domain, step: Step, marks: Marks) -> Self {
        Self {
            domain,
            step,
            marks,
        }
    }

    /// The domain.
    #[must_use]
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// The step.
    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// The marks.
    #[must_use]
    pub const fn marks(&self) -> &Marks {
        &self.marks
    }

    /// See [`snap`].
    #[must_use]
    pub fn snap(&self, raw: f64) -> f64 {
        snap(raw, &self.domain, self.step, &self.marks)
    }

    /// See [`legal_at_or_above`].
    #[must_use]
    pub fn at_or_above(&self, value: f64) -> Option<f64> {
        legal_at_or_above(value, &self.domain, self.step, &self.marks)
    }

    /// See [`legal_at_or_below`].
    #[must_use]
    pub fn at_or_below(&self, value: f64) -> Option<f64> {
        legal_at_or_below(value, &self.domain, self.step, &self.marks)
    }

    /// Smallest legal value.
    #[must_use]
    pub fn lowest(&self) -> f64 {
        self.snap(self.domain.min())
    }

    /// Largest legal value.
    #[must_use]
    pub fn highest(&self) -> f64 {
        self.snap(self.domain.max())
    }

    /// Whether `value` is a fixed point of [`Snapper::snap`].
    #[must_use]
    pub fn is_legal(&self, value: f64) -> bool {
        self.snap(value) == value
    }
}

/// Number of decimal digits needed to represent `value` exactly.
#[must_use]
pub fn precision_of(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    let text = value.to_string();
    text.split_once('.')
        .map_or(0, |(_, frac)| frac.len().min(MAX_PRECISION))
}

fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let scaled = value * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    }
}

/// Step grid anchored at the domain minimum.
struct Grid {
    min: f64,
    max: f64,
    step: f64,
    precision: usize,
}

impl Grid {
    fn new(domain: &Domain, step: f64) -> Self {
        Self {
            min: domain.min(),
            max: domain.max(),
            step,
            precision: precision_of(step).max(precision_of(domain.min())),
        }
    }

    fn point(&self, k: f64) -> f64 {
        round_to(k.mul_add(self.step, self.min), self.precision)
    }

    fn index(&self, value: f64) -> f64 {
        (value - self.min) / self.step
    }

    /// Nearest of the surrounding grid points; the upper one is replaced by
    /// `max` when it overshoots. Ties go up.
    fn nearest(&self, value: f64) -> f64 {
        let k = self.index(value);
        let lo = self.point(k.floor());
        let hi = self.point(k.ceil()).min(self.max);
        if hi - value <= value - lo {
            hi
        } else {
            lo
        }
    }

    fn at_or_above(&self, value: f64) -> Option<f64> {
        if value > self.max {
            return None;
        }
        if value <= self.min {
            return Some(self.min);
        }
        let k = self.index(value);
        let rounded = k.round();
        let k = if (k - rounded).abs() < GRID_TOLERANCE {
            rounded
        } else {
            k.ceil()
        };
        Some(self.point(k).min(self.max))
    }

    fn at_or_below(&self, value: f64) -> Option<f64> {
        if value < self.min {
            return None;
        }
        if value >= self.max {
            return Some(self.max);
        }
        let k = self.index(value);
        let rounded = k.round();
        let k = if (k - rounded).abs() < GRID_TOLERANCE {
            rounded
        } else {
            k.floor()
        };
        Some(self.point(k).max(self.min))
    }
}
