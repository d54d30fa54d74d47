//! Tests for availability slot validation and wire record conversion.

use booking_engine::error::BookingError;
use booking_engine::slot::{slots_from_records, weekday_from_index, weekday_index};
use booking_engine::{AvailabilitySlot, SlotPolicy, SlotRecord, TimeOfDay};
use chrono::Weekday;

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn record(day: i64, start: &str, end: &str) -> SlotRecord {
    SlotRecord {
        id: None,
        service_type_id: None,
        day_of_week: day,
        start_time: start.to_string(),
        end_time: end.to_string(),
        created_at: None,
    }
}

// ── Weekday indexing ────────────────────────────────────────────────────────

#[test]
fn day_index_counts_from_sunday() {
    assert_eq!(weekday_from_index(0).unwrap(), Weekday::Sun);
    assert_eq!(weekday_from_index(1).unwrap(), Weekday::Mon);
    assert_eq!(weekday_from_index(6).unwrap(), Weekday::Sat);
    assert_eq!(weekday_index(Weekday::Sun), 0);
    assert_eq!(weekday_index(Weekday::Sat), 6);
}

#[test]
fn day_index_out_of_range_is_rejected() {
    assert_eq!(weekday_from_index(7), Err(BookingError::InvalidWeekday(7)));
    assert_eq!(weekday_from_index(-1), Err(BookingError::InvalidWeekday(-1)));
}

// ── Construction ────────────────────────────────────────────────────────────

#[test]
fn valid_slot_keeps_its_bounds() {
    let slot = AvailabilitySlot::parse(1, "09:00", "17:00").unwrap();
    assert_eq!(slot.day(), Weekday::Mon);
    assert_eq!(slot.start(), t("09:00"));
    assert_eq!(slot.end(), t("17:00"));
    assert_eq!(slot.duration_minutes(), 480);
}

#[test]
fn empty_slot_is_rejected() {
    let err = AvailabilitySlot::parse(1, "09:00", "09:00").unwrap_err();
    assert_eq!(
        err,
        BookingError::EmptyOrInvertedSlot {
            start: t("09:00"),
            end: t("09:00")
        }
    );
}

#[test]
fn inverted_slot_is_rejected() {
    let err = AvailabilitySlot::parse(2, "17:00", "09:00").unwrap_err();
    assert!(matches!(err, BookingError::EmptyOrInvertedSlot { .. }));
    assert_eq!(err.to_string(), "Empty or inverted availability slot: 17:00-09:00");
}

#[test]
fn malformed_time_in_slot_is_rejected() {
    let err = AvailabilitySlot::parse(1, "9am", "17:00").unwrap_err();
    assert_eq!(err, BookingError::InvalidTimeFormat("9am".to_string()));
}

#[test]
fn containment_is_half_open() {
    let slot = AvailabilitySlot::parse(1, "09:00", "09:30").unwrap();
    assert!(!slot.contains(t("08:59")));
    assert!(slot.contains(t("09:00")));
    assert!(slot.contains(t("09:29")));
    assert!(!slot.contains(t("09:30")));
}

// ── Wire records ────────────────────────────────────────────────────────────

#[test]
fn parses_backend_json() {
    let json = r#"[
        {
            "id": "6f1c3f36-5d2e-4a57-9d0e-8d1b1f0c2a11",
            "service_type_id": "0b7e6a0e-2a8b-4c55-a1c9-5a3f1f4b8e22",
            "day_of_week": 1,
            "start_time": "09:00:00",
            "end_time": "17:00:00",
            "created_at": "2026-02-01T10:00:00Z"
        },
        {"day_of_week": 3, "start_time": "10:00", "end_time": "12:00"}
    ]"#;
    let records = SlotRecord::parse_list(json).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[0].id.is_some());
    assert!(records[1].created_at.is_none());

    let slots = slots_from_records(&records, SlotPolicy::Strict).unwrap();
    assert_eq!(slots[0], AvailabilitySlot::parse(1, "09:00", "17:00").unwrap());
    assert_eq!(slots[1].day(), Weekday::Wed);
}

#[test]
fn invalid_json_is_reported() {
    let err = SlotRecord::parse_list("{not json").unwrap_err();
    assert!(matches!(err, BookingError::InvalidSlotJson(_)));
}

#[test]
fn strict_policy_fails_on_first_bad_record() {
    let records = vec![
        record(1, "09:00", "12:00"),
        record(1, "17:00", "09:00"),
        record(9, "09:00", "12:00"),
    ];
    let err = slots_from_records(&records, SlotPolicy::Strict).unwrap_err();
    assert!(matches!(err, BookingError::EmptyOrInvertedSlot { .. }));
}

#[test]
fn lenient_policy_drops_inverted_and_empty_windows() {
    let records = vec![
        record(1, "09:00", "12:00"),
        record(1, "17:00", "09:00"),
        record(2, "10:00", "10:00"),
        record(2, "13:00", "15:00"),
    ];
    let slots = slots_from_records(&records, SlotPolicy::Lenient).unwrap();
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].day(), Weekday::Mon);
    assert_eq!(slots[1].day(), Weekday::Tue);
}

#[test]
fn lenient_policy_still_rejects_malformed_times() {
    let records = vec![record(1, "09:00", "12:00"), record(1, "9am", "17:00")];
    let err = slots_from_records(&records, SlotPolicy::Lenient).unwrap_err();
    assert_eq!(err, BookingError::InvalidTimeFormat("9am".to_string()));

    let records = vec![record(2, "xx:00", "12:00")];
    let err = slots_from_records(&records, SlotPolicy::default()).unwrap_err();
    assert_eq!(err, BookingError::InvalidTimeFormat("xx:00".to_string()));
}

#[test]
fn lenient_policy_still_rejects_out_of_range_weekday() {
    let records = vec![record(9, "09:00", "12:00")];
    let err = slots_from_records(&records, SlotPolicy::Lenient).unwrap_err();
    assert_eq!(err, BookingError::InvalidWeekday(9));
}

#[test]
fn default_policy_is_lenient() {
    assert_eq!(SlotPolicy::default(), SlotPolicy::Lenient);
}

#[test]
fn slot_converts_back_to_record() {
    let slot = AvailabilitySlot::parse(0, "8:00", "12:30").unwrap();
    let rec = SlotRecord::from(&slot);
    assert_eq!(rec, record(0, "08:00", "12:30"));

    let json = serde_json::to_string(&rec).unwrap();
    assert_eq!(
        json,
        r#"{"day_of_week":0,"start_time":"08:00","end_time":"12:30"}"#
    );
}
