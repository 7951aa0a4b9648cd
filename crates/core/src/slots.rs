use crate::time::TimeOfDay;

/// Generates a day's candidate slot starts on the interval grid.
///
/// Labels run from `start` in `interval_minutes` steps while strictly less
/// than `end`: a slot belongs to the day when its *start* falls inside the
/// working window, even if its span overhangs `end`. Returns an empty
/// sequence when `start >= end` or the interval is zero.
pub fn generate_slots(start: TimeOfDay, end: TimeOfDay, interval_minutes: u32) -> Vec<TimeOfDay> {
    let mut slots = Vec::new();
    if interval_minutes == 0 {
        return slots;
    }

    let mut current = start;
    while current < end {
        slots.push(current);
        match current.checked_add_minutes(interval_minutes) {
            Some(next) => current = next,
            None => break,
        }
    }
    slots
}

/// Number of consecutive grid slots a service of `duration_minutes` occupies.
///
/// Rounds up and never returns less than one. `interval_minutes` must be
/// non-zero; both query entry points validate that before calling in.
pub fn slots_needed(duration_minutes: u32, interval_minutes: u32) -> usize {
    duration_minutes.div_ceil(interval_minutes).max(1) as usize
}

/// Whether `hours` contains `run_len` consecutive entries in which every
/// adjacent pair is exactly `interval_minutes` apart.
///
/// The slice must already be sorted ascending and deduplicated; a lone entry
/// is a run of one.
pub fn has_contiguous_run(hours: &[TimeOfDay], run_len: usize, interval_minutes: u32) -> bool {
    if run_len == 0 {
        return false;
    }

    hours.windows(run_len).any(|window| {
        window
            .windows(2)
            .all(|pair| pair[1].minutes_since(pair[0]) == Some(interval_minutes))
    })
}
