#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn iso_date_takes_date_prefix() {
    assert_eq!(iso_date("2024-03-02T11:30:00.123456"), "2024-03-02");
}

#[test]
fn iso_date_passes_short_input_through() {
    assert_eq!(iso_date("2024"), "2024");
    assert_eq!(iso_date(""), "");
}

#[test]
fn iso_datetime_joins_date_and_minutes() {
    assert_eq!(iso_datetime("2024-03-02T11:30:59"), "2024-03-02 11:30");
    assert_eq!(iso_datetime("2024-03-02"), "2024-03-02");
}

#[test]
fn labels_fall_back_to_iso_outside_browser() {
    assert_eq!(date_label("2024-03-02T11:30:00"), "2024-03-02");
    assert_eq!(datetime_label("2024-03-02T11:30:00"), "2024-03-02 11:30");
}
