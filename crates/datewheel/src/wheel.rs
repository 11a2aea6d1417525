//! Per-axis wheel state.
//!
//! Each axis (year, month, day) is rendered by the presentation layer as a
//! scrollable list of candidate values. The controller owns one
//! [`WheelState`] per axis: a finite ascending value list plus the selected
//! index. The loop flag is carried for the renderer only; index arithmetic
//! always operates on the finite list.

use std::fmt;

/// One of the three wheel axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelAxis {
    Year,
    Month,
    Day,
}

impl fmt::Display for WheelAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year => write!(f, "year"),
            Self::Month => write!(f, "month"),
            Self::Day => write!(f, "day"),
        }
    }
}

/// Per-axis loop flags, supplied by the embedding presentation layer.
///
/// Looping controls only whether the rendered list wraps visually. Defaults
/// follow the usual picker convention: the year wheel does not loop, the
/// month and day wheels do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    pub year: bool,
    pub month: bool,
    pub day: bool,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            year: false,
            month: true,
            day: true,
        }
    }
}

/// The state of a single wheel: its candidate values, the selected index,
/// and the presentation-only loop flag.
///
/// Invariants (maintained by the controller, which is the sole mutator):
/// `values` is non-empty, strictly ascending, and contiguous;
/// `selected_index < values.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelState {
    values: Vec<i32>,
    selected_index: usize,
    looping: bool,
}

impl WheelState {
    /// Build a wheel spanning `min..=max` with `selected` as the selected
    /// value. `selected` must lie within the bounds.
    pub(crate) fn from_bounds(min: i32, max: i32, selected: i32, looping: bool) -> Self {
        debug_assert!(min <= max);
        debug_assert!((min..=max).contains(&selected));
        Self {
            values: (min..=max).collect(),
            selected_index: (selected - min) as usize,
            looping,
        }
    }

    /// The candidate values, in ascending order.
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Number of candidate values. Never zero.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; present for the conventional `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The index of the selected value.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// The selected value itself.
    pub fn selected_value(&self) -> i32 {
        self.values[self.selected_index]
    }

    /// The smallest candidate value.
    pub fn min_value(&self) -> i32 {
        self.values[0]
    }

    /// The largest candidate value.
    pub fn max_value(&self) -> i32 {
        self.values[self.values.len() - 1]
    }

    /// Whether the rendered list should wrap visually.
    pub fn looping(&self) -> bool {
        self.looping
    }

    /// Whether `value` is one of the candidates.
    pub fn contains(&self, value: i32) -> bool {
        (self.min_value()..=self.max_value()).contains(&value)
    }

    /// Position of `value` in the candidate list, if present.
    pub fn index_of(&self, value: i32) -> Option<usize> {
        self.contains(value)
            .then(|| (value - self.min_value()) as usize)
    }

    pub(crate) fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bounds() {
        let wheel = WheelState::from_bounds(1, 12, 4, true);
        assert_eq!(wheel.len(), 12);
        assert_eq!(wheel.min_value(), 1);
        assert_eq!(wheel.max_value(), 12);
        assert_eq!(wheel.selected_index(), 3);
        assert_eq!(wheel.selected_value(), 4);
        assert!(wheel.looping());
        assert!(!wheel.is_empty());
    }

    #[test]
    fn test_single_value_wheel() {
        let wheel = WheelState::from_bounds(3, 3, 3, false);
        assert_eq!(wheel.values(), &[3]);
        assert_eq!(wheel.selected_index(), 0);
        assert_eq!(wheel.selected_value(), 3);
    }

    #[test]
    fn test_contains_and_index_of() {
        let wheel = WheelState::from_bounds(15, 20, 17, true);
        assert!(wheel.contains(15));
        assert!(wheel.contains(20));
        assert!(!wheel.contains(14));
        assert!(!wheel.contains(21));
        assert_eq!(wheel.index_of(15), Some(0));
        assert_eq!(wheel.index_of(20), Some(5));
        assert_eq!(wheel.index_of(21), None);
    }

    #[test]
    fn test_loop_config_defaults() {
        let loops = LoopConfig::default();
        assert!(!loops.year);
        assert!(loops.month);
        assert!(loops.day);
    }
}
