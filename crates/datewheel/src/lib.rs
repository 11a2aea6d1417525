//! datewheel: a date-wheel coordination controller.
//!
//! A date-wheel picker renders three independently scrolling lists (year,
//! month, day). This crate provides the headless controller behind such a
//! picker: it owns the composite date, the allowed `[start, last]` range,
//! and one wheel state per axis, and it recomputes the legal bounds and
//! day count of every wheel whenever any other wheel changes (selecting
//! February forces the day wheel down to 28 or 29, the range's boundary
//! year narrows the month wheel, and so on).
//!
//! Rendering, scroll physics, and theming belong to the embedding
//! presentation layer. It reads the wheel states, renders them however it
//! likes (looping or not, flat or curved), and feeds committed index
//! changes back through [`DateWheelController::select_index`].
//!
//! # Example
//!
//! ```
//! use datewheel::{CalendarDate, DateWheelController, WheelAxis};
//!
//! let start = CalendarDate::from_ymd(2024, 3, 15).unwrap();
//! let last = CalendarDate::from_ymd(2024, 3, 20).unwrap();
//!
//! let mut controller = DateWheelController::new()
//!     .with_range(start, last)
//!     .unwrap();
//!
//! // The whole range sits inside March 2024, so the month wheel narrows
//! // to a single entry and the day wheel to 15..=20.
//! assert_eq!(controller.month_wheel().values(), &[3]);
//! assert_eq!(controller.day_wheel().values(), &[15, 16, 17, 18, 19, 20]);
//!
//! // The renderer reports the user settling on list index 2 (day 17).
//! controller.select_index(WheelAxis::Day, 2).unwrap();
//! assert_eq!(controller.current_date(), CalendarDate::from_ymd(2024, 3, 17).unwrap());
//! ```

pub mod controller;
pub mod date;
pub mod error;
pub mod wheel;

pub use controller::DateWheelController;
pub use date::{days_in_month, is_leap_year, CalendarDate, DateRange};
pub use error::{Result, WheelError};
pub use wheel::{LoopConfig, WheelAxis, WheelState};

// Re-export the signal types so embedders can manage subscriptions without
// depending on the core crate directly.
pub use datewheel_core::{ConnectionGuard, ConnectionId, Signal};
