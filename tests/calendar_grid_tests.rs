use chrono::NaiveDate;
use roadmap_rs::core::{CalendarGrid, Viewport, days_in_month};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn first_of_january_maps_to_left_edge() {
    let viewport = Viewport::new(1200, 600);
    let grid = CalendarGrid::new(2026).expect("valid grid");

    let x = grid
        .date_to_pixel(date(2026, 1, 1), viewport)
        .expect("to pixel");
    assert_eq!(x, 0.0);
}

#[test]
fn month_slots_are_equal_twelfths_regardless_of_day_count() {
    let viewport = Viewport::new(1200, 600);
    let grid = CalendarGrid::new(2026).expect("valid grid");

    // The 1st of each month starts a new slot of exactly width/12.
    for (month, expected_x) in [(1, 0.0), (2, 100.0), (3, 200.0), (7, 600.0), (12, 1100.0)] {
        let x = grid
            .date_to_pixel(date(2026, month, 1), viewport)
            .expect("to pixel");
        assert!(
            (x - expected_x).abs() <= 1e-9,
            "month {month} start: {x} != {expected_x}"
        );
    }
}

#[test]
fn day_of_month_contributes_a_fraction_of_one_slot() {
    let viewport = Viewport::new(1200, 600);
    let grid = CalendarGrid::new(2026).expect("valid grid");

    // June has 30 days; June 16 sits 15/30 into the June slot.
    let x = grid
        .date_to_pixel(date(2026, 6, 16), viewport)
        .expect("to pixel");
    let expected = (5.0 + 15.0 / 30.0) / 12.0 * 1200.0;
    assert!((x - expected).abs() <= 1e-9);
}

#[test]
fn forward_mapping_uses_the_dates_own_month_length() {
    let viewport = Viewport::new(1200, 600);
    let grid = CalendarGrid::new(2026).expect("valid grid");

    // 2024 is a leap year, so Feb 15 2024 sits 14/29 into the slot while
    // Feb 15 2026 sits 14/28 into it.
    let leap = grid
        .date_to_pixel(date(2024, 2, 15), viewport)
        .expect("leap to pixel");
    let common = grid
        .date_to_pixel(date(2026, 2, 15), viewport)
        .expect("common to pixel");
    assert!(leap < common);
}

#[test]
fn out_of_year_dates_land_on_their_month_of_year_slot() {
    let viewport = Viewport::new(1200, 600);
    let grid = CalendarGrid::new(2026).expect("valid grid");

    let in_year = grid
        .date_to_pixel(date(2026, 12, 8), viewport)
        .expect("to pixel");
    let prior_year = grid
        .date_to_pixel(date(2025, 12, 8), viewport)
        .expect("to pixel");
    assert!((in_year - prior_year).abs() <= 1e-9);
}

#[test]
fn inverse_mapping_round_trips_to_the_same_day() {
    let viewport = Viewport::new(1200, 600);
    let grid = CalendarGrid::new(2026).expect("valid grid");

    for original in [
        date(2026, 1, 1),
        date(2026, 2, 28),
        date(2026, 5, 15),
        date(2026, 6, 20),
        date(2026, 9, 10),
        date(2026, 12, 25),
    ] {
        let x = grid.date_to_pixel(original, viewport).expect("to pixel");
        let recovered = grid.pixel_to_date(x, viewport).expect("from pixel");
        assert_eq!(recovered, original, "round trip for {original}");
    }
}

#[test]
fn inverse_mapping_builds_dates_in_the_grid_year() {
    let viewport = Viewport::new(1200, 600);
    let grid = CalendarGrid::new(2026).expect("valid grid");

    let x = grid
        .date_to_pixel(date(2025, 12, 8), viewport)
        .expect("to pixel");
    let recovered = grid.pixel_to_date(x, viewport).expect("from pixel");
    assert_eq!(recovered, date(2026, 12, 8));
}

#[test]
fn inverse_mapping_clamps_pixels_to_the_grid() {
    let viewport = Viewport::new(1200, 600);
    let grid = CalendarGrid::new(2026).expect("valid grid");

    let before_left = grid.pixel_to_date(-250.0, viewport).expect("left clamp");
    assert_eq!(before_left, date(2026, 1, 1));

    let past_right = grid.pixel_to_date(5000.0, viewport).expect("right clamp");
    assert_eq!(past_right, date(2026, 12, 31));
}

#[test]
fn inverse_mapping_never_produces_day_zero() {
    let viewport = Viewport::new(1200, 600);
    let grid = CalendarGrid::new(2026).expect("valid grid");

    // A pixel just past a slot boundary rounds its day fraction down to 0,
    // which maps to the first day of the month.
    let slot_start = grid.slot_start_x(3, viewport).expect("slot start");
    let recovered = grid
        .pixel_to_date(slot_start + 0.01, viewport)
        .expect("from pixel");
    assert_eq!(recovered, date(2026, 4, 1));
}

#[test]
fn slot_centers_sit_half_a_slot_after_starts() {
    let viewport = Viewport::new(1200, 600);
    let grid = CalendarGrid::new(2026).expect("valid grid");

    for month_index in 0..12 {
        let start = grid.slot_start_x(month_index, viewport).expect("start");
        let center = grid.slot_center_x(month_index, viewport).expect("center");
        assert!((center - start - 50.0).abs() <= 1e-9);
    }

    assert!(grid.slot_start_x(12, viewport).is_err());
    assert!(grid.slot_center_x(12, viewport).is_err());
}

#[test]
fn non_finite_pixels_are_rejected() {
    let viewport = Viewport::new(1200, 600);
    let grid = CalendarGrid::new(2026).expect("valid grid");

    assert!(grid.pixel_to_date(f64::NAN, viewport).is_err());
    assert!(grid.pixel_to_date(f64::INFINITY, viewport).is_err());
}

#[test]
fn invalid_viewport_is_rejected() {
    let grid = CalendarGrid::new(2026).expect("valid grid");
    let result = grid.date_to_pixel(date(2026, 6, 1), Viewport::new(0, 600));
    assert!(result.is_err());
}

#[test]
fn days_in_month_is_leap_year_aware() {
    assert_eq!(days_in_month(2026, 2).expect("feb"), 28);
    assert_eq!(days_in_month(2024, 2).expect("leap feb"), 29);
    assert_eq!(days_in_month(2026, 12).expect("dec"), 31);
    assert!(days_in_month(2026, 13).is_err());
}
