use chairtime_core::slots::{generate_slots, has_contiguous_run, slots_needed};
use chairtime_core::time::TimeOfDay;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn t(s: &str) -> TimeOfDay {
    TimeOfDay::parse(s).expect("test times are well-formed")
}

fn labels(slots: &[TimeOfDay]) -> Vec<String> {
    slots.iter().map(ToString::to_string).collect()
}

#[test]
fn generates_the_morning_grid() {
    let slots = generate_slots(t("09:00"), t("12:00"), 30);
    assert_eq!(
        labels(&slots),
        vec!["09:00", "09:30", "10:00", "10:30", "11:00", "11:30"]
    );
}

#[test]
fn last_slot_start_may_overhang_the_end() {
    // 10:30 starts before 10:45, so it belongs even though it spans past it.
    let slots = generate_slots(t("09:00"), t("10:45"), 30);
    assert_eq!(labels(&slots), vec!["09:00", "09:30", "10:00", "10:30"]);
}

#[test]
fn start_at_or_after_end_yields_nothing() {
    assert!(generate_slots(t("12:00"), t("12:00"), 30).is_empty());
    assert!(generate_slots(t("14:00"), t("12:00"), 30).is_empty());
}

#[test]
fn zero_interval_yields_nothing() {
    assert!(generate_slots(t("09:00"), t("12:00"), 0).is_empty());
}

#[test]
fn interval_larger_than_the_window_yields_the_opening_slot() {
    let slots = generate_slots(t("09:00"), t("09:20"), 45);
    assert_eq!(labels(&slots), vec!["09:00"]);
}

#[test]
fn grid_is_evenly_spaced_from_the_start() {
    let slots = generate_slots(t("08:15"), t("11:00"), 25);
    assert_eq!(slots[0], t("08:15"));
    for pair in slots.windows(2) {
        assert_eq!(pair[1].minutes_since(pair[0]), Some(25));
    }
    assert!(*slots.last().unwrap() < t("11:00"));
}

#[rstest]
#[case(0, 30, 1)]
#[case(15, 30, 1)]
#[case(30, 30, 1)]
#[case(31, 30, 2)]
#[case(45, 30, 2)]
#[case(60, 30, 2)]
#[case(61, 30, 3)]
#[case(90, 20, 5)]
fn slots_needed_rounds_up_with_a_floor_of_one(
    #[case] duration: u32,
    #[case] interval: u32,
    #[case] expected: usize,
) {
    assert_eq!(slots_needed(duration, interval), expected);
}

#[test]
fn slots_needed_grows_with_duration() {
    let mut previous = 0;
    for duration in (0..=240).step_by(10) {
        let needed = slots_needed(duration, 30);
        assert!(needed >= previous);
        previous = needed;
    }
}

#[test]
fn detects_an_unbroken_run() {
    let hours = [t("09:00"), t("09:30"), t("11:00")];
    assert!(has_contiguous_run(&hours, 2, 30));
    assert!(!has_contiguous_run(&hours, 3, 30));
}

#[test]
fn gapped_hours_are_not_a_run() {
    // The elapsed span matches, the grid steps do not.
    let hours = [t("09:00"), t("10:00")];
    assert!(!has_contiguous_run(&hours, 2, 30));
    assert!(has_contiguous_run(&hours, 2, 60));
}

#[test]
fn a_single_hour_is_a_run_of_one() {
    assert!(has_contiguous_run(&[t("13:00")], 1, 30));
    assert!(!has_contiguous_run(&[], 1, 30));
    assert!(!has_contiguous_run(&[t("13:00")], 2, 30));
}
