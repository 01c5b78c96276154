//! Named, labeled positions on the slider track.

use crate::error::ConfigError;
use crate::range::Domain;
use crate::tooltip::format_value;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single mark: a legal value with display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    /// Position in the domain
    pub value: f64,
    /// Display text
    pub label: String,
    /// Opaque style hint passed through to the renderer
    pub style: Option<String>,
}

impl Mark {
    /// Create a mark with a label and no style.
    #[must_use]
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            style: None,
        }
    }

    /// Attach a style hint.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

/// Ordered set of marks, sorted by value with no duplicate keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Marks {
    marks: Vec<Mark>,
}

impl Marks {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { marks: Vec::new() }
    }

    /// Build marks labeled with their own values.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut marks = Self::new();
        for value in values {
            marks.insert(Mark::new(value, format_value(value)));
        }
        marks
    }

    /// Add a labeled mark (builder form of [`Marks::insert`]).
    #[must_use]
    pub fn with(mut self, value: f64, label: impl Into<String>) -> Self {
        self.insert(Mark::new(value, label));
        self
    }

    /// Insert a mark, replacing any mark already at the same value.
    pub fn insert(&mut self, mark: Mark) {
        match self
            .marks
            .binary_search_by(|m| m.value.total_cmp(&mark.value))
        {
            Ok(idx) => self.marks[idx] = mark,
            Err(idx) => self.marks.insert(idx, mark),
        }
    }

    /// Number of marks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Whether there are no marks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Iterate marks in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter()
    }

    /// Mark values in ascending order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.marks.iter().map(|m| m.value)
    }

    /// Mark at exactly `value`, if any.
    #[must_use]
    pub fn get(&self, value: f64) -> Option<&Mark> {
        self.marks
            .binary_search_by(|m| m.value.total_cmp(&value))
            .ok()
            .map(|idx| &self.marks[idx])
    }

    /// Mark value nearest to `value`. Ties go to the lower key.
    #[must_use]
    pub fn nearest(&self, value: f64) -> Option<f64> {
        let idx = self.marks.partition_point(|m| m.value < value);
        let above = self.marks.get(idx).map(|m| m.value);
        let below = idx.checked_sub(1).map(|i| self.marks[i].value);
        match (below, above) {
            (Some(lo), Some(hi)) => {
                if hi - value < value - lo {
                    Some(hi)
                } else {
                    Some(lo)
                }
            }
            (lo, hi) => lo.or(hi),
        }
    }

    /// Smallest mark value `>= value`.
    #[must_use]
    pub fn first_at_or_above(&self, value: f64) -> Option<f64> {
        let idx = self.marks.partition_point(|m| m.value < value);
        self.marks.get(idx).map(|m| m.value)
    }

    /// Largest mark value `<= value`.
    #[must_use]
    pub fn first_at_or_below(&self, value: f64) -> Option<f64> {
        let idx = self.marks.partition_point(|m| m.value <= value);
        idx.checked_sub(1).map(|i| self.marks[i].value)
    }

    /// Smallest gap between adjacent marks.
    #[must_use]
    pub fn min_delta(&self) -> Option<f64> {
        self.marks
            .windows(2)
            .map(|w| w[1].value - w[0].value)
            .reduce(f64::min)
    }

    /// Check every key is finite and inside the domain.
    pub fn validate(&self, domain: &Domain) -> Result<(), ConfigError> {
        for mark in &self.marks {
            if !mark.value.is_finite() {
                return Err(ConfigError::NonFiniteMark);
            }
            if !domain.contains(mark.value) {
                return Err(ConfigError::MarkOutOfDomain {
                    value: mark.value,
                    min: domain.min(),
                    max: domain.max(),
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<Mark> for Marks {
    fn from_iter<I: IntoIterator<Item = Mark>>(iter: I) -> Self {
        let mut marks = Self::new();
        for mark in iter {
            marks.insert(mark);
        }
        marks
    }
}

// =============================================================================
// Serde: marks are a mapping from value to label or {label, style}
// =============================================================================

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum MarkSpec {
    Label(String),
    Number(f64),
    Full {
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },
}

impl Serialize for Marks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.marks.len()))?;
        for mark in &self.marks {
            let spec = match &mark.style {
                None => MarkSpec::Label(mark.label.clone()),
                Some(style) => MarkSpec::Full {
                    label: mark.label.clone(),
                    style: Some(style.clone()),
                },
            };
            map.serialize_entry(&mark.value, &spec)?;
        }
        map.end()
    }
}

struct MarksVisitor;

impl<'de> Visitor<'de> for MarksVisitor {
    type Value = Marks;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping from numeric mark values to labels")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Marks, A::Error> {
        let mut marks = Marks::new();
        while let Some((value, spec)) = access.next_entry::<f64, MarkSpec>()? {
            let mark = match spec {
                MarkSpec::Label(label) => Mark::new(value, label),
                MarkSpec::Number(n) => Mark::new(value, format_value(n)),
                MarkSpec::Full { label, style } => Mark {
                    value,
                    label,
                    style,
                },
            };
            marks.insert(mark);
        }
        Ok(marks)
    }
}

impl<'de> Deserialize<'de> for Marks {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MarksVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Marks {
        Marks::new().with(0.0, "0").with(48.0, "48").with(100.0, "100")
    }

    #[test]
    fn test_marks_sorted_and_deduplicated() {
        let marks = Marks::new()
            .with(100.0, "max")
            .with(0.0, "min")
            .with(50.0, "half")
            .with(50.0, "middle");
        let values: Vec<f64> = marks.values().collect();
        assert_eq!(values, vec![0.0, 50.0, 100.0]);
        assert_eq!(marks.get(50.0).map(|m| m.label.as_str()), Some("middle"));
    }

    #[test]
    fn test_nearest() {
        let marks = sample();
        assert_eq!(marks.nearest(40.0), Some(48.0));
        assert_eq!(marks.nearest(10.0), Some(0.0));
        assert_eq!(marks.nearest(90.0), Some(100.0));
        assert_eq!(marks.nearest(-20.0), Some(0.0));
        assert_eq!(marks.nearest(250.0), Some(100.0));
    }

    #[test]
    fn test_nearest_tie_goes_to_lower() {
        let marks = Marks::from_values([0.0, 10.0]);
        assert_eq!(marks.nearest(5.0), Some(0.0));
    }

    #[test]
    fn test_nearest_empty() {
        assert_eq!(Marks::new().nearest(3.0), None);
    }

    #[test]
    fn test_directional_lookup() {
        let marks = sample();
        assert_eq!(marks.first_at_or_above(48.0), Some(48.0));
        assert_eq!(marks.first_at_or_above(49.0), Some(100.0));
        assert_eq!(marks.first_at_or_above(101.0), None);
        assert_eq!(marks.first_at_or_below(47.0), Some(0.0));
        assert_eq!(marks.first_at_or_below(-1.0), None);
    }

    #[test]
    fn test_min_delta() {
        assert_eq!(sample().min_delta(), Some(48.0));
        assert_eq!(Marks::from_values([3.0]).min_delta(), None);
    }

    #[test]
    fn test_validate() {
        let domain = Domain::new(0.0, 100.0).expect("valid");
        assert!(sample().validate(&domain).is_ok());

        let err = sample().with(120.0, "too far").validate(&domain);
        assert_eq!(
            err,
            Err(ConfigError::MarkOutOfDomain {
                value: 120.0,
                min: 0.0,
                max: 100.0
            })
        );

        let err = Marks::from_values([f64::NAN]).validate(&domain);
        assert_eq!(err, Err(ConfigError::NonFiniteMark));
    }

    #[test]
    fn test_style_passthrough() {
        let marks: Marks = [Mark::new(26.0, "26°C").with_style("color: #f50")]
            .into_iter()
            .collect();
        assert_eq!(
            marks.get(26.0).and_then(|m| m.style.as_deref()),
            Some("color: #f50")
        );
    }
}
