//! The ordered set of slider handles.
//!
//! Handles live in a fixed-size arena indexed by position. Every mutation
//! goes through the [`Snapper`] and then re-establishes the ordering
//! invariant: values never decrease with the index.

use crate::snap::Snapper;
use serde::{Deserialize, Serialize};

/// What happens when a handle runs into its neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Collision {
    /// Stop at the neighbor's value
    #[default]
    Clamp,
    /// Push neighbors along, keeping them at least `distance` apart
    Push {
        /// Minimum gap between adjacent handles
        distance: f64,
    },
}

/// A single draggable value marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Handle {
    pub(crate) index: usize,
    pub(crate) value: f64,
    pub(crate) dragging: bool,
    pub(crate) focused: bool,
    pub(crate) hovered: bool,
}

impl Handle {
    const fn new(index: usize, value: f64) -> Self {
        Self {
            index,
            value,
            dragging: false,
            focused: false,
            hovered: false,
        }
    }

    /// Position of this handle in the set.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Whether a pointer gesture is dragging this handle.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether this handle holds keyboard focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the pointer is over this handle.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }
}

/// Ordered collection of 1..N handles.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleSet {
    handles: Vec<Handle>,
    snapper: Snapper,
    collision: Collision,
}

impl HandleSet {
    /// Create a handle set from initial values.
    ///
    /// Values are snapped, sorted, and (under push) spread to the minimum
    /// distance.
    ///
    /// # Panics
    ///
    /// Panics if `initial` is empty; the handle count is fixed by a validated
    /// configuration.
    #[must_use]
    pub fn new(initial: &[f64], snapper: Snapper, collision: Collision) -> Self {
        assert!(!initial.is_empty(), "a handle set needs at least one handle");

        let mut values: Vec<f64> = initial.iter().map(|&v| snapper.snap(v)).collect();
        values.sort_by(f64::total_cmp);

        let mut set = Self {
            handles: values
                .into_iter()
                .enumerate()
                .map(|(i, v)| Handle::new(i, v))
                .collect(),
            snapper,
            collision,
        };
        set.spread();
        set
    }

    /// Number of handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Always false: a handle set holds at least one handle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Handle at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn handle(&self, index: usize) -> &Handle {
        self.check_index(index);
        &self.handles[index]
    }

    pub(crate) fn handle_mut(&mut self, index: usize) -> &mut Handle {
        self.check_index(index);
        &mut self.handles[index]
    }

    /// Iterate handles in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Handle> {
        self.handles.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Handle> {
        self.handles.iter_mut()
    }

    /// Give keyboard focus to one handle, or to none.
    pub(crate) fn set_focus(&mut self, index: Option<usize>) {
        if let Some(index) = index {
            self.check_index(index);
        }
        for handle in &mut self.handles {
            handle.focused = Some(handle.index) == index;
        }
    }

    /// Value of handle `index`.
    #[must_use]
    pub fn value(&self, index: usize) -> f64 {
        self.handle(index).value
    }

    /// All values in index order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.handles.iter().map(|h| h.value).collect()
    }

    /// Snapping rules.
    #[must_use]
    pub const fn snapper(&self) -> &Snapper {
        &self.snapper
    }

    /// Collision policy.
    #[must_use]
    pub const fn collision(&self) -> Collision {
        self.collision
    }

    /// Snap `candidate`, enforce ordering against the neighbors, store it,
    /// and return the value actually applied.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_handle_value(&mut self, index: usize, candidate: f64) -> f64 {
        self.check_index(index);
        let target = self.snapper.snap(candidate);

        let applied = match self.collision {
            Collision::Clamp => {
                let lo = index
                    .checked_sub(1)
                    .map_or(f64::NEG_INFINITY, |i| self.handles[i].value);
                let hi = self
                    .handles
                    .get(index + 1)
                    .map_or(f64::INFINITY, |h| h.value);
                self.handles[index].value = target.max(lo).min(hi);
                self.handles[index].value
            }
            Collision::Push { distance } => self.push(index, target, distance),
        };

        tracing::trace!(index, candidate, applied, "handle value applied");
        applied
    }

    /// Replace all values at once, as a controlled update from outside.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not have one entry per handle.
    pub fn set_values(&mut self, values: &[f64]) {
        assert_eq!(
            values.len(),
            self.handles.len(),
            "expected {} values, got {}",
            self.handles.len(),
            values.len()
        );
        let mut snapped: Vec<f64> = values.iter().map(|&v| self.snapper.snap(v)).collect();
        snapped.sort_by(f64::total_cmp);
        for (handle, value) in self.handles.iter_mut().zip(snapped) {
            handle.value = value;
        }
        self.spread();
    }

    /// Index of the handle nearest to `value`.
    ///
    /// When several handles share a position, a value above it picks the
    /// last of them and anything else picks the first, so coincident handles
    /// can be pulled apart.
    #[must_use]
    pub fn nearest_handle(&self, value: f64) -> usize {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (i, handle) in self.handles.iter().enumerate() {
            let distance = (handle.value - value).abs();
            let coincident = i > 0 && handle.value == self.handles[best].value;
            if distance < best_distance
                || (distance == best_distance && coincident && value > handle.value)
            {
                best = i;
                best_distance = distance;
            }
        }
        best
    }

    fn push(&mut self, index: usize, target: f64, distance: f64) -> f64 {
        let n = self.handles.len();

        // Room left for the handles the chain would push ahead of us.
        let mut hi = self.snapper.highest();
        for _ in index + 1..n {
            hi = self
                .snapper
                .at_or_below(hi - distance)
                .unwrap_or_else(|| self.snapper.lowest());
        }
        let mut lo = self.snapper.lowest();
        for _ in 0..index {
            lo = self
                .snapper
                .at_or_above(lo + distance)
                .unwrap_or_else(|| self.snapper.highest());
        }

        let applied = if lo > hi {
            self.handles[index].value
        } else {
            target.max(lo).min(hi)
        };
        self.handles[index].value = applied;

        for j in index + 1..n {
            let needed = self.handles[j - 1].value + distance;
            if self.handles[j].value < needed {
                self.handles[j].value = self
                    .snapper
                    .at_or_above(needed)
                    .unwrap_or_else(|| self.snapper.highest());
            }
        }
        for j in (0..index).rev() {
            let needed = self.handles[j + 1].value - distance;
            if self.handles[j].value > needed {
                self.handles[j].value = self
                    .snapper
                    .at_or_below(needed)
                    .unwrap_or_else(|| self.snapper.lowest());
            }
        }
        applied
    }

    /// Enforce the push distance over already sorted values.
    fn spread(&mut self) {
        let Collision::Push { distance } = self.collision else {
            return;
        };
        let n = self.handles.len();
        for j in 1..n {
            let needed = self.handles[j - 1].value + distance;
            if self.handles[j].value < needed {
                self.handles[j].value = self
                    .snapper
                    .at_or_above(needed)
                    .unwrap_or_else(|| self.snapper.highest());
            }
        }
        for j in (0..n.saturating_sub(1)).rev() {
            let needed = self.handles[j + 1].value - distance;
            if self.handles[j].value > needed {
                self.handles[j].value = self
                    .snapper
                    .at_or_below(needed)
                    .unwrap_or_else(|| self.snapper.lowest());
            }
        }
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.handles.len(),
            "handle index {index} out of range for {} handle(s)",
            self.handles.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marks::Marks;
    use crate::range::Domain;
    use crate::snap::Step;
    use proptest::prelude::*;

    fn snapper(step: Step) -> Snapper {
        Snapper::new(
            Domain::new(0.0, 100.0).expect("valid"),
            step,
            Marks::new(),
        )
    }

    fn range(a: f64, b: f64) -> HandleSet {
        HandleSet::new(&[a, b], snapper(Step::Fixed(1.0)), Collision::Clamp)
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn test_new_snaps_and_sorts() {
        let set = HandleSet::new(&[80.4, 19.6], snapper(Step::Fixed(1.0)), Collision::Clamp);
        assert_eq!(set.values(), vec![20.0, 80.0]);
        assert_eq!(set.handle(0).index(), 0);
        assert_eq!(set.handle(1).index(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_new_collapses_to_nearest_mark() {
        let snapper = Snapper::new(
            Domain::new(0.0, 100.0).expect("valid"),
            Step::Unset,
            Marks::from_values([0.0, 48.0, 100.0]),
        );
        let set = HandleSet::new(&[40.0], snapper, Collision::Clamp);
        assert_eq!(set.value(0), 48.0);
    }

    #[test]
    fn test_new_spreads_under_push() {
        let set = HandleSet::new(
            &[50.0, 50.0, 50.0],
            snapper(Step::Fixed(1.0)),
            Collision::Push { distance: 10.0 },
        );
        assert_eq!(set.values(), vec![50.0, 60.0, 70.0]);

        let set = HandleSet::new(
            &[95.0, 100.0],
            snapper(Step::Fixed(1.0)),
            Collision::Push { distance: 10.0 },
        );
        assert_eq!(set.values(), vec![90.0, 100.0]);
    }

    #[test]
    #[should_panic(expected = "at least one handle")]
    fn test_new_empty_panics() {
        let _ = HandleSet::new(&[], snapper(Step::Unset), Collision::Clamp);
    }

    // =========================================================================
    // Clamp collision
    // =========================================================================

    #[test]
    fn test_clamp_to_neighbor() {
        let mut set = range(20.0, 80.0);
        assert_eq!(set.set_handle_value(0, 90.0), 80.0);
        assert_eq!(set.values(), vec![80.0, 80.0]);
    }

    #[test]
    fn test_clamp_upper_handle() {
        let mut set = range(20.0, 80.0);
        assert_eq!(set.set_handle_value(1, 5.0), 20.0);
        assert_eq!(set.set_handle_value(1, 150.0), 100.0);
    }

    #[test]
    fn test_applied_value_is_snapped() {
        let mut set = range(20.0, 80.0);
        assert_eq!(set.set_handle_value(0, 33.7), 34.0);
    }

    #[test]
    #[should_panic(expected = "handle index 2 out of range for 2 handle(s)")]
    fn test_out_of_range_index_panics() {
        let mut set = range(20.0, 80.0);
        set.set_handle_value(2, 50.0);
    }

    // =========================================================================
    // Push collision
    // =========================================================================

    #[test]
    fn test_push_moves_neighbor() {
        let mut set = HandleSet::new(
            &[20.0, 40.0, 60.0],
            snapper(Step::Fixed(1.0)),
            Collision::Push { distance: 5.0 },
        );
        assert_eq!(set.set_handle_value(0, 50.0), 50.0);
        assert_eq!(set.values(), vec![50.0, 55.0, 60.0]);

        assert_eq!(set.set_handle_value(0, 58.0), 58.0);
        assert_eq!(set.values(), vec![58.0, 63.0, 68.0]);
    }

    #[test]
    fn test_push_stops_at_domain_edge() {
        let mut set = HandleSet::new(
            &[20.0, 80.0],
            snapper(Step::Fixed(1.0)),
            Collision::Push { distance: 10.0 },
        );
        assert_eq!(set.set_handle_value(0, 100.0), 90.0);
        assert_eq!(set.values(), vec![90.0, 100.0]);
    }

    #[test]
    fn test_push_downward() {
        let mut set = HandleSet::new(
            &[20.0, 80.0],
            snapper(Step::Fixed(1.0)),
            Collision::Push { distance: 0.0 },
        );
        assert_eq!(set.set_handle_value(1, 10.0), 10.0);
        assert_eq!(set.values(), vec![10.0, 10.0]);
    }

    // =========================================================================
    // Controlled values and lookup
    // =========================================================================

    #[test]
    fn test_set_values() {
        let mut set = range(20.0, 80.0);
        set.set_values(&[70.2, 10.0]);
        assert_eq!(set.values(), vec![10.0, 70.0]);
    }

    #[test]
    fn test_nearest_handle() {
        let set = range(20.0, 80.0);
        assert_eq!(set.nearest_handle(10.0), 0);
        assert_eq!(set.nearest_handle(60.0), 1);
        assert_eq!(set.nearest_handle(50.0), 0);
    }

    #[test]
    fn test_nearest_handle_coincident() {
        let set = range(50.0, 50.0);
        assert_eq!(set.nearest_handle(70.0), 1);
        assert_eq!(set.nearest_handle(30.0), 0);
        assert_eq!(set.nearest_handle(50.0), 0);
    }

    proptest! {
        #[test]
        fn prop_ordering_holds(
            moves in prop::collection::vec((0usize..3, -50.0f64..150.0), 1..40),
            push in prop_oneof![Just(None), Just(Some(0.0)), Just(Some(5.0))],
        ) {
            let collision = push.map_or(Collision::Clamp, |distance| Collision::Push { distance });
            let mut set = HandleSet::new(&[10.0, 50.0, 90.0], snapper(Step::Fixed(1.0)), collision);
            for (index, candidate) in moves {
                let applied = set.set_handle_value(index, candidate);
                prop_assert_eq!(applied, set.value(index));
                let values = set.values();
                for w in values.windows(2) {
                    prop_assert!(w[0] <= w[1]);
                }
                for v in &values {
                    prop_assert!((0.0..=100.0).contains(v));
                    prop_assert!(set.snapper().is_legal(*v));
                }
            }
        }
    }
}
