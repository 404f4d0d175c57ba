use super::*;

// 2023-11-14T22:13:20Z
const T0: Millis = 1_700_000_000_000;

#[test]
fn clock_label_in_utc() {
    assert_eq!(clock_label(T0, 0), "22:13");
}

#[test]
fn clock_label_applies_offset_across_midnight() {
    assert_eq!(clock_label(T0, 180), "01:13");
    assert_eq!(date_label(T0, 180), "15.11.2023");
}

#[test]
fn negative_offsets_roll_back() {
    assert_eq!(clock_label(T0, -300), "17:13");
    assert_eq!(date_label(T0, -300), "14.11.2023");
}

#[test]
fn date_label_pads_day_and_month() {
    // 2024-03-05T00:00:00Z
    assert_eq!(date_label(1_709_596_800_000, 0), "05.03.2024");
}

#[test]
fn out_of_range_inputs_use_placeholders() {
    assert_eq!(clock_label(Millis::MAX, 0), "--:--");
    assert_eq!(date_label(T0, 100_000), "--.--.----");
}
