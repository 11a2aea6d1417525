//! The date-wheel coordination controller.
//!
//! [`DateWheelController`] owns the current (year, month, day) selection,
//! the allowed date range, and one [`WheelState`] per axis. Every mutating
//! operation is total: it either moves the controller from one consistent
//! state to another and emits exactly one change notification, or it is
//! rejected and leaves the state untouched.
//!
//! # Example
//!
//! ```
//! use datewheel::{CalendarDate, DateWheelController};
//!
//! let start = CalendarDate::from_ymd(2020, 6, 15).unwrap();
//! let last = CalendarDate::from_ymd(2030, 6, 15).unwrap();
//! let initial = CalendarDate::from_ymd(2024, 1, 31).unwrap();
//!
//! let mut controller = DateWheelController::new()
//!     .with_range(start, last)
//!     .unwrap()
//!     .with_initial_date(initial);
//!
//! // Connect to date changes
//! controller.changed.connect(|date| {
//!     println!("Date changed: {}", date);
//! });
//!
//! // April has 30 days, so the day clamps from 31 down to 30.
//! controller.set_month(4).unwrap();
//! assert_eq!(controller.current_date().day, 30);
//! ```

use datewheel_core::Signal;

use crate::date::{days_in_month, CalendarDate, DateRange};
use crate::error::{Result, WheelError};
use crate::wheel::{LoopConfig, WheelAxis, WheelState};

/// Coordinates three wheel axes (year, month, day) against a shared date
/// value and an allowed date range.
///
/// The controller is the sole owner and mutator of its wheel states; the
/// presentation layer holds read references and feeds committed index
/// changes back through [`select_index`](Self::select_index). All
/// operations are synchronous and single-threaded; observers receive the
/// update in the same call stack as the triggering operation, only after
/// all three wheels are consistent.
///
/// # Signals
///
/// - `changed(CalendarDate)`: Emitted once per successful state-changing
///   operation, carrying the fully-updated composite date. Re-selecting
///   the already-current value on an axis is an accepted no-op and stays
///   silent; range mutations and re-seeding always notify, since the wheel
///   lists can change even when the date does not
pub struct DateWheelController {
    /// Current composite date. Always within `range`.
    current: CalendarDate,

    /// Allowed date range.
    range: DateRange,

    /// Externally supplied per-axis loop flags.
    loops: LoopConfig,

    /// Year wheel: every year of the range.
    year: WheelState,

    /// Month wheel: 1-12, narrowed at the range's boundary years.
    month: WheelState,

    /// Day wheel: 1 to days-in-month, narrowed at the boundary year+month.
    day: WheelState,

    /// Whether `dispose` has already run.
    disposed: bool,

    /// Signal emitted when the composite date changes.
    pub changed: Signal<CalendarDate>,
}

impl DateWheelController {
    /// Create a controller selecting today's date, with the widest
    /// representable range (0001-01-01 through 9999-12-31) and default loop
    /// flags.
    pub fn new() -> Self {
        let range = DateRange::sentinel();
        let current = range.clamp(CalendarDate::today());
        let loops = LoopConfig::default();
        let (year, month, day) = Self::build_wheels(current, &range, loops);
        Self {
            current,
            range,
            loops,
            year,
            month,
            day,
            disposed: false,
            changed: Signal::new(),
        }
    }

    /// Set the allowed date range using the builder pattern.
    ///
    /// The current date is clamped into the new range and all wheels are
    /// rebuilt. Fails with [`WheelError::InvalidRange`] if `start > last`.
    pub fn with_range(mut self, start: CalendarDate, last: CalendarDate) -> Result<Self> {
        self.range = DateRange::new(start, last)?;
        self.current = self.range.clamp(self.current);
        self.rebuild_wheels();
        Ok(self)
    }

    /// Set the initially selected date using the builder pattern.
    ///
    /// The date is clamped into the active range.
    pub fn with_initial_date(mut self, date: CalendarDate) -> Self {
        self.current = self.range.clamp(date);
        self.rebuild_wheels();
        self
    }

    /// Set the per-axis loop flags using the builder pattern.
    pub fn with_looping(mut self, loops: LoopConfig) -> Self {
        self.loops = loops;
        self.year.set_looping(loops.year);
        self.month.set_looping(loops.month);
        self.day.set_looping(loops.day);
        self
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    /// The current composite date.
    pub fn current_date(&self) -> CalendarDate {
        self.current
    }

    /// The active date range.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// The wheel state for the given axis.
    pub fn wheel(&self, axis: WheelAxis) -> &WheelState {
        match axis {
            WheelAxis::Year => &self.year,
            WheelAxis::Month => &self.month,
            WheelAxis::Day => &self.day,
        }
    }

    /// The year wheel.
    pub fn year_wheel(&self) -> &WheelState {
        &self.year
    }

    /// The month wheel.
    pub fn month_wheel(&self) -> &WheelState {
        &self.month
    }

    /// The day wheel.
    pub fn day_wheel(&self) -> &WheelState {
        &self.day
    }

    /// Index of the selected year within the year wheel.
    pub fn selected_year_index(&self) -> usize {
        self.year.selected_index()
    }

    /// Index of the selected month within the month wheel.
    pub fn selected_month_index(&self) -> usize {
        self.month.selected_index()
    }

    /// Index of the selected day within the day wheel.
    pub fn selected_day_index(&self) -> usize {
        self.day.selected_index()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Select a new year.
    ///
    /// Fails with [`WheelError::OutOfRange`] if `year` lies outside the
    /// range's years. On success the month and day wheels are rebuilt for
    /// the new year: boundary narrowing may shrink the month bounds, and
    /// the day bounds follow the (possibly clamped) month's day count. The
    /// previously selected month and day are kept when still legal,
    /// otherwise clamped to the violated bound. Emits `changed` once, after
    /// all three wheels are consistent; re-selecting the current year is an
    /// accepted no-op that emits nothing.
    pub fn set_year(&mut self, year: i32) -> Result<()> {
        let (min, max) = (self.range.start().year, self.range.last().year);
        if !(min..=max).contains(&year) {
            return Err(WheelError::out_of_range(WheelAxis::Year, year, min, max));
        }

        let (month_min, month_max) = Self::month_bounds(&self.range, year);
        let month = self.current.month.clamp(month_min, month_max);
        let (day_min, day_max) = Self::day_bounds(&self.range, year, month);
        let day = self.current.day.clamp(day_min, day_max);

        let next = CalendarDate { year, month, day };
        if self.current != next {
            self.current = next;
            self.rebuild_wheels();
            tracing::debug!(target: "datewheel::controller", date = %self.current, "year selected");
            self.changed.emit(self.current);
        }
        Ok(())
    }

    /// Select a new month.
    ///
    /// Fails with [`WheelError::OutOfRange`] if `month` lies outside the
    /// current month wheel's bounds. On success only the day wheel is
    /// rebuilt (its day count depends on year and month); the previously
    /// selected day is kept when still legal, otherwise clamped. Emits
    /// `changed` once; re-selecting the current month emits nothing.
    pub fn set_month(&mut self, month: u32) -> Result<()> {
        if !self.month.contains(month as i32) {
            return Err(WheelError::out_of_range(
                WheelAxis::Month,
                month as i32,
                self.month.min_value(),
                self.month.max_value(),
            ));
        }

        let (day_min, day_max) = Self::day_bounds(&self.range, self.current.year, month);
        let day = self.current.day.clamp(day_min, day_max);

        let next = CalendarDate {
            year: self.current.year,
            month,
            day,
        };
        if self.current != next {
            self.current = next;
            self.rebuild_wheels();
            tracing::debug!(target: "datewheel::controller", date = %self.current, "month selected");
            self.changed.emit(self.current);
        }
        Ok(())
    }

    /// Select a new day.
    ///
    /// Fails with [`WheelError::OutOfRange`] if `day` lies outside the
    /// current day wheel's bounds. The day axis is the leaf: no downstream
    /// wheel recompute is needed. Emits `changed` once; re-selecting the
    /// current day emits nothing.
    pub fn set_day(&mut self, day: u32) -> Result<()> {
        if !self.day.contains(day as i32) {
            return Err(WheelError::out_of_range(
                WheelAxis::Day,
                day as i32,
                self.day.min_value(),
                self.day.max_value(),
            ));
        }

        let next = CalendarDate {
            year: self.current.year,
            month: self.current.month,
            day,
        };
        if self.current != next {
            self.current = next;
            self.rebuild_wheels();
            tracing::debug!(target: "datewheel::controller", date = %self.current, "day selected");
            self.changed.emit(self.current);
        }
        Ok(())
    }

    /// Replace the start of the allowed range.
    ///
    /// Fails with [`WheelError::InvalidRange`] if the resulting range would
    /// have `start > last`. On success all three wheels are rebuilt around
    /// the current date, clamped into the new range if it now falls
    /// outside. Emits `changed` once.
    pub fn set_start_date(&mut self, date: CalendarDate) -> Result<()> {
        self.range = DateRange::new(date, self.range.last())?;
        self.reset_to(self.current);
        Ok(())
    }

    /// Replace the end of the allowed range.
    ///
    /// Fails with [`WheelError::InvalidRange`] if the resulting range would
    /// have `start > last`. On success all three wheels are rebuilt around
    /// the current date, clamped into the new range if it now falls
    /// outside. Emits `changed` once.
    pub fn set_last_date(&mut self, date: CalendarDate) -> Result<()> {
        self.range = DateRange::new(self.range.start(), date)?;
        self.reset_to(self.current);
        Ok(())
    }

    /// Re-seed the selection, as at construction.
    ///
    /// `date` is clamped into the active range and all wheels are rebuilt
    /// around it. Unlike construction the controller already exists, so
    /// observers are informed: emits `changed` once.
    pub fn set_initial_date(&mut self, date: CalendarDate) {
        self.reset_to(date);
    }

    /// Apply a committed, list-relative index change from the renderer.
    ///
    /// Translates `index` into the axis value and applies the matching
    /// setter. An index outside the wheel's list surfaces
    /// [`WheelError::OutOfRange`]; it is never silently clamped, since
    /// clamping is reserved for the range-mutation operations.
    pub fn select_index(&mut self, axis: WheelAxis, index: usize) -> Result<()> {
        let wheel = self.wheel(axis);
        let value = wheel.values().get(index).copied().ok_or_else(|| {
            WheelError::out_of_range(axis, index as i32, 0, wheel.len() as i32 - 1)
        })?;
        match axis {
            WheelAxis::Year => self.set_year(value),
            WheelAxis::Month => self.set_month(value as u32),
            WheelAxis::Day => self.set_day(value as u32),
        }
    }

    /// Release all observer subscriptions. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.changed.disconnect_all();
        tracing::debug!(target: "datewheel::controller", "controller disposed");
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Clamp `date` into the range, rebuild every wheel around it, and
    /// notify. The shared tail of the range-mutation and re-seed paths.
    fn reset_to(&mut self, date: CalendarDate) {
        self.current = self.range.clamp(date);
        self.rebuild_wheels();
        tracing::debug!(target: "datewheel::controller", date = %self.current, "wheels rebuilt");
        self.changed.emit(self.current);
    }

    /// Month bounds for `year`: 1-12, narrowed to the range's start/last
    /// month in the boundary years.
    fn month_bounds(range: &DateRange, year: i32) -> (u32, u32) {
        let min = if year == range.start().year {
            range.start().month
        } else {
            1
        };
        let max = if year == range.last().year {
            range.last().month
        } else {
            12
        };
        (min, max)
    }

    /// Day bounds for `(year, month)`: 1 to days-in-month, narrowed to the
    /// range's start/last day only when both year and month sit on the
    /// respective boundary.
    fn day_bounds(range: &DateRange, year: i32, month: u32) -> (u32, u32) {
        let start = range.start();
        let last = range.last();
        let min = if year == start.year && month == start.month {
            start.day
        } else {
            1
        };
        let max = if year == last.year && month == last.month {
            last.day
        } else {
            days_in_month(year, month)
        };
        (min, max)
    }

    /// Build all three wheels for a date already clamped into `range`.
    ///
    /// A date within the range always satisfies its own wheel bounds, so
    /// this never needs to clamp.
    fn build_wheels(
        current: CalendarDate,
        range: &DateRange,
        loops: LoopConfig,
    ) -> (WheelState, WheelState, WheelState) {
        let (month_min, month_max) = Self::month_bounds(range, current.year);
        let (day_min, day_max) = Self::day_bounds(range, current.year, current.month);
        (
            WheelState::from_bounds(
                range.start().year,
                range.last().year,
                current.year,
                loops.year,
            ),
            WheelState::from_bounds(
                month_min as i32,
                month_max as i32,
                current.month as i32,
                loops.month,
            ),
            WheelState::from_bounds(day_min as i32, day_max as i32, current.day as i32, loops.day),
        )
    }

    fn rebuild_wheels(&mut self) {
        let (year, month, day) = Self::build_wheels(self.current, &self.range, self.loops);
        self.year = year;
        self.month = month;
        self.day = day;
    }
}

impl Default for DateWheelController {
    fn default() -> Self {
        Self::new()
    }
}
