use chairtime_core::models::unavailability::UnavailableHourRow;
use chairtime_core::models::working_hours::WorkingHoursRow;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::{from_str, to_string};

#[test]
fn working_hours_row_serialization() {
    let row = WorkingHoursRow {
        start_time: "09:00".to_string(),
        end_time: "17:30".to_string(),
    };

    let json = to_string(&row).expect("Failed to serialize working hours row");
    let deserialized: WorkingHoursRow = from_str(&json).expect("Failed to deserialize working hours row");

    assert_eq!(deserialized.start_time, row.start_time);
    assert_eq!(deserialized.end_time, row.end_time);
}

#[test]
fn unavailable_hour_row_serialization() {
    let row = UnavailableHourRow {
        date: NaiveDate::from_ymd_opt(2030, 6, 3).unwrap(),
        hour: "10:00".to_string(),
    };

    let json = to_string(&row).expect("Failed to serialize unavailable hour row");
    let deserialized: UnavailableHourRow = from_str(&json).expect("Failed to deserialize unavailable hour row");

    assert_eq!(deserialized.date, row.date);
    assert_eq!(deserialized.hour, row.hour);
}

#[test]
fn unavailable_hour_row_uses_iso_dates() {
    let row = UnavailableHourRow {
        date: NaiveDate::from_ymd_opt(2030, 6, 3).unwrap(),
        hour: "10:00".to_string(),
    };

    let json = to_string(&row).unwrap();
    assert!(json.contains("2030-06-03"));
}
