//! Integration tests for the date-wheel controller.

use std::sync::Arc;

use parking_lot::Mutex;

use datewheel::{CalendarDate, DateWheelController, WheelAxis, WheelError};

fn ymd(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).unwrap()
}

/// Install the env-filtered fmt subscriber so `RUST_LOG` surfaces the
/// controller's transition logs during test runs. Safe to call from every
/// test; only the first call wins.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Collects every emitted date for notification assertions.
fn record_changes(controller: &DateWheelController) -> Arc<Mutex<Vec<CalendarDate>>> {
    init_logging();
    let received = Arc::new(Mutex::new(Vec::new()));
    let received_clone = received.clone();
    controller.changed.connect(move |&date| {
        received_clone.lock().push(date);
    });
    received
}

#[test]
fn default_controller_selects_today() {
    let controller = DateWheelController::new();
    assert_eq!(controller.current_date(), CalendarDate::today());
    assert_eq!(controller.range().start(), CalendarDate::MIN);
    assert_eq!(controller.range().last(), CalendarDate::MAX);
    assert_eq!(controller.year_wheel().len(), 9999);
}

#[test]
fn construction_rejects_inverted_range() {
    let result = DateWheelController::new().with_range(ymd(2025, 1, 1), ymd(2024, 1, 1));
    assert_eq!(
        result.err(),
        Some(WheelError::invalid_range(ymd(2025, 1, 1), ymd(2024, 1, 1)))
    );
}

#[test]
fn initial_date_clamps_to_nearer_endpoint() {
    let start = ymd(2022, 4, 10);
    let last = ymd(2026, 9, 5);

    let controller = DateWheelController::new()
        .with_range(start, last)
        .unwrap()
        .with_initial_date(ymd(2000, 1, 1));
    assert_eq!(controller.current_date(), start);

    let controller = DateWheelController::new()
        .with_range(start, last)
        .unwrap()
        .with_initial_date(ymd(2050, 1, 1));
    assert_eq!(controller.current_date(), last);
}

#[test]
fn edge_narrowing_single_month_range() {
    let controller = DateWheelController::new()
        .with_range(ymd(2024, 3, 15), ymd(2024, 3, 20))
        .unwrap();

    assert_eq!(controller.year_wheel().values(), &[2024]);
    assert_eq!(controller.month_wheel().values(), &[3]);
    assert_eq!(controller.day_wheel().values(), &[15, 16, 17, 18, 19, 20]);
}

#[test]
fn day_of_month_clamps_when_month_shrinks() {
    let mut controller = DateWheelController::new()
        .with_range(ymd(2020, 1, 1), ymd(2030, 12, 31))
        .unwrap()
        .with_initial_date(ymd(2024, 1, 31));

    // April has 30 days: day clamps to the new upper bound, not an error.
    controller.set_month(4).unwrap();
    assert_eq!(controller.current_date(), ymd(2024, 4, 30));
    assert_eq!(controller.day_wheel().len(), 30);
}

#[test]
fn day_of_month_is_preserved_when_month_grows() {
    let mut controller = DateWheelController::new()
        .with_range(ymd(2020, 1, 1), ymd(2030, 12, 31))
        .unwrap()
        .with_initial_date(ymd(2023, 2, 28));

    // March has room for 31 days, but the previous day value is kept.
    controller.set_month(3).unwrap();
    assert_eq!(controller.current_date(), ymd(2023, 3, 28));
}

#[test]
fn leap_year_transition_clamps_february() {
    let mut controller = DateWheelController::new()
        .with_range(ymd(2020, 1, 1), ymd(2030, 12, 31))
        .unwrap()
        .with_initial_date(ymd(2024, 2, 29));

    controller.set_year(2023).unwrap();
    assert_eq!(controller.current_date(), ymd(2023, 2, 28));
    assert_eq!(controller.day_wheel().len(), 28);

    controller.set_year(2024).unwrap();
    // The clamped day stays at 28; no snapping back to 29.
    assert_eq!(controller.current_date(), ymd(2024, 2, 28));
    assert_eq!(controller.day_wheel().len(), 29);
}

#[test]
fn set_year_rejection_leaves_state_unchanged() {
    let mut controller = DateWheelController::new()
        .with_range(ymd(2022, 4, 10), ymd(2026, 9, 5))
        .unwrap()
        .with_initial_date(ymd(2024, 6, 15));
    let received = record_changes(&controller);

    let before = controller.current_date();
    assert_eq!(
        controller.set_year(2021),
        Err(WheelError::out_of_range(WheelAxis::Year, 2021, 2022, 2026))
    );
    assert_eq!(controller.current_date(), before);
    assert_eq!(controller.year_wheel().selected_value(), 2024);
    assert!(received.lock().is_empty());
}

#[test]
fn set_month_rejects_value_outside_narrowed_bounds() {
    let mut controller = DateWheelController::new()
        .with_range(ymd(2022, 4, 10), ymd(2026, 9, 5))
        .unwrap()
        .with_initial_date(ymd(2022, 6, 15));

    // 2022 is the boundary year: months narrow to 4..=12.
    assert_eq!(
        controller.set_month(3),
        Err(WheelError::out_of_range(WheelAxis::Month, 3, 4, 12))
    );
    assert_eq!(controller.current_date(), ymd(2022, 6, 15));
}

#[test]
fn set_day_rejects_out_of_bounds_without_clamping() {
    let mut controller = DateWheelController::new()
        .with_range(ymd(2020, 1, 1), ymd(2030, 12, 31))
        .unwrap()
        .with_initial_date(ymd(2023, 2, 10));

    assert_eq!(
        controller.set_day(29),
        Err(WheelError::out_of_range(WheelAxis::Day, 29, 1, 28))
    );
    assert_eq!(controller.current_date(), ymd(2023, 2, 10));

    controller.set_day(28).unwrap();
    assert_eq!(controller.current_date(), ymd(2023, 2, 28));
}

#[test]
fn year_change_cascades_month_and_day_clamps() {
    // Moving to the last year forces month 12->1 range... here: last year
    // is 2026 with last month 1, so month clamps from 6 down to 1 and the
    // day clamps from 20 down to 10.
    let mut controller = DateWheelController::new()
        .with_range(ymd(2024, 3, 15), ymd(2026, 1, 10))
        .unwrap()
        .with_initial_date(ymd(2025, 6, 20));

    controller.set_year(2026).unwrap();
    assert_eq!(controller.current_date(), ymd(2026, 1, 10));
    assert_eq!(controller.month_wheel().values(), &[1]);
    assert_eq!(controller.day_wheel().values().len(), 10);
}

#[test]
fn year_change_clamps_month_up_to_start_bound() {
    let mut controller = DateWheelController::new()
        .with_range(ymd(2024, 6, 15), ymd(2030, 12, 31))
        .unwrap()
        .with_initial_date(ymd(2025, 2, 10));

    controller.set_year(2024).unwrap();
    // Month clamps up to the narrowed lower bound, day up to its start day.
    assert_eq!(controller.current_date(), ymd(2024, 6, 15));
    assert_eq!(controller.month_wheel().values(), &[6, 7, 8, 9, 10, 11, 12]);
    assert_eq!(controller.day_wheel().min_value(), 15);
}

#[test]
fn notification_atomicity_on_cascading_change() {
    let mut controller = DateWheelController::new()
        .with_range(ymd(2024, 3, 15), ymd(2026, 1, 10))
        .unwrap()
        .with_initial_date(ymd(2025, 6, 20));
    let received = record_changes(&controller);

    controller.set_year(2026).unwrap();

    // Exactly one notification, carrying the fully re-clamped date.
    assert_eq!(*received.lock(), vec![ymd(2026, 1, 10)]);
}

#[test]
fn observer_sees_consistent_wheels_in_same_call_stack() {
    let mut controller = DateWheelController::new()
        .with_range(ymd(2020, 1, 1), ymd(2030, 12, 31))
        .unwrap()
        .with_initial_date(ymd(2024, 1, 31));

    let seen = Arc::new(Mutex::new(None));
    let seen_clone = seen.clone();
    controller.changed.connect(move |&date| {
        *seen_clone.lock() = Some(date);
    });

    controller.set_month(2).unwrap();
    // Dispatch was synchronous: the observer has already run.
    assert_eq!(*seen.lock(), Some(ymd(2024, 2, 29)));
}

#[test]
fn reselecting_current_values_is_a_silent_no_op() {
    let mut controller = DateWheelController::new()
        .with_range(ymd(2022, 4, 10), ymd(2026, 9, 5))
        .unwrap()
        .with_initial_date(ymd(2024, 6, 15));
    let received = record_changes(&controller);

    // Each setter accepts its already-selected value, leaves the state
    // consistent, and does not notify.
    controller.set_year(2024).unwrap();
    controller.set_month(6).unwrap();
    controller.set_day(15).unwrap();

    assert_eq!(controller.current_date(), ymd(2024, 6, 15));
    assert_eq!(controller.year_wheel().selected_value(), 2024);
    assert_eq!(controller.month_wheel().selected_value(), 6);
    assert_eq!(controller.day_wheel().selected_value(), 15);
    assert!(received.lock().is_empty());
}

#[test]
fn reseeding_with_the_current_date_still_notifies() {
    // Unlike the per-axis setters, re-seeding always informs observers:
    // the range may have changed underneath even if the date did not.
    let mut controller = DateWheelController::new()
        .with_range(ymd(2022, 4, 10), ymd(2026, 9, 5))
        .unwrap()
        .with_initial_date(ymd(2024, 6, 15));
    let received = record_changes(&controller);

    controller.set_initial_date(ymd(2024, 6, 15));
    assert_eq!(*received.lock(), vec![ymd(2024, 6, 15)]);
}

#[test]
fn set_start_date_rebuilds_and_reclamps() {
    let mut controller = DateWheelController::new()
        .with_range(ymd(2020, 1, 1), ymd(2030, 12, 31))
        .unwrap()
        .with_initial_date(ymd(2024, 6, 15));
    let received = record_changes(&controller);

    controller.set_start_date(ymd(2025, 2, 10)).unwrap();
    assert_eq!(controller.current_date(), ymd(2025, 2, 10));
    assert_eq!(controller.year_wheel().values().first(), Some(&2025));
    assert_eq!(controller.month_wheel().min_value(), 2);
    assert_eq!(controller.day_wheel().min_value(), 10);
    assert_eq!(*received.lock(), vec![ymd(2025, 2, 10)]);

    // Inverting the range is rejected and changes nothing.
    assert!(matches!(
        controller.set_start_date(ymd(2031, 1, 1)),
        Err(WheelError::InvalidRange { .. })
    ));
    assert_eq!(controller.range().start(), ymd(2025, 2, 10));
    assert_eq!(received.lock().len(), 1);
}

#[test]
fn set_last_date_rebuilds_and_reclamps() {
    let mut controller = DateWheelController::new()
        .with_range(ymd(2020, 1, 1), ymd(2030, 12, 31))
        .unwrap()
        .with_initial_date(ymd(2024, 6, 15));

    controller.set_last_date(ymd(2023, 3, 5)).unwrap();
    assert_eq!(controller.current_date(), ymd(2023, 3, 5));
    assert_eq!(controller.year_wheel().values().last(), Some(&2023));
    assert_eq!(controller.month_wheel().max_value(), 3);
    assert_eq!(controller.day_wheel().max_value(), 5);

    assert!(matches!(
        controller.set_last_date(ymd(2019, 1, 1)),
        Err(WheelError::InvalidRange { .. })
    ));
    assert_eq!(controller.range().last(), ymd(2023, 3, 5));
}

#[test]
fn set_initial_date_reseeds_and_notifies() {
    let mut controller = DateWheelController::new()
        .with_range(ymd(2022, 4, 10), ymd(2026, 9, 5))
        .unwrap()
        .with_initial_date(ymd(2024, 6, 15));
    let received = record_changes(&controller);

    controller.set_initial_date(ymd(2030, 1, 1));
    assert_eq!(controller.current_date(), ymd(2026, 9, 5));
    assert_eq!(*received.lock(), vec![ymd(2026, 9, 5)]);
}

#[test]
fn select_index_translates_list_relative_indices() {
    let mut controller = DateWheelController::new()
        .with_range(ymd(2022, 4, 10), ymd(2026, 9, 5))
        .unwrap()
        .with_initial_date(ymd(2024, 6, 15));

    // Year wheel is [2022..=2026]; index 3 is 2025.
    controller.select_index(WheelAxis::Year, 3).unwrap();
    assert_eq!(controller.current_date().year, 2025);

    controller.select_index(WheelAxis::Month, 0).unwrap();
    assert_eq!(controller.current_date().month, 1);

    controller.select_index(WheelAxis::Day, 30).unwrap();
    assert_eq!(controller.current_date().day, 31);
}

#[test]
fn select_index_rejects_out_of_bounds_index() {
    let mut controller = DateWheelController::new()
        .with_range(ymd(2022, 4, 10), ymd(2026, 9, 5))
        .unwrap()
        .with_initial_date(ymd(2024, 6, 15));

    let before = controller.current_date();
    assert_eq!(
        controller.select_index(WheelAxis::Year, 5),
        Err(WheelError::out_of_range(WheelAxis::Year, 5, 0, 4))
    );
    assert_eq!(controller.current_date(), before);
}

#[test]
fn dispose_is_idempotent_and_releases_observers() {
    let mut controller = DateWheelController::new()
        .with_range(ymd(2020, 1, 1), ymd(2030, 12, 31))
        .unwrap()
        .with_initial_date(ymd(2024, 6, 15));
    let received = record_changes(&controller);
    assert_eq!(controller.changed.connection_count(), 1);

    controller.dispose();
    controller.dispose();
    assert_eq!(controller.changed.connection_count(), 0);

    // Operations still work; observers are simply gone.
    controller.set_day(16).unwrap();
    assert!(received.lock().is_empty());
}
