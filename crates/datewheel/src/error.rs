//! Error types for the date-wheel controller.

use crate::date::CalendarDate;
use crate::wheel::WheelAxis;

/// Result type alias for wheel-controller operations.
pub type Result<T> = std::result::Result<T, WheelError>;

/// Errors that can occur while mutating a wheel controller.
///
/// Every failure is local, synchronous, and non-retryable: the controller
/// state is left exactly as it was before the failing call. Clamping is a
/// policy reserved for the range-mutation operations; the per-axis setters
/// reject out-of-bounds values instead of silently adjusting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WheelError {
    /// A date range would have its start after its last date.
    #[error("invalid date range: start {start} is after last {last}")]
    InvalidRange {
        start: CalendarDate,
        last: CalendarDate,
    },

    /// A requested value falls outside the valid bounds for an axis.
    #[error("{axis} value {value} is outside the allowed range {min}..={max}")]
    OutOfRange {
        axis: WheelAxis,
        value: i32,
        min: i32,
        max: i32,
    },
}

impl WheelError {
    /// Create an invalid-range error.
    pub fn invalid_range(start: CalendarDate, last: CalendarDate) -> Self {
        Self::InvalidRange { start, last }
    }

    /// Create an out-of-range error for the given axis.
    pub fn out_of_range(axis: WheelAxis, value: i32, min: i32, max: i32) -> Self {
        Self::OutOfRange {
            axis,
            value,
            min,
            max,
        }
    }
}
