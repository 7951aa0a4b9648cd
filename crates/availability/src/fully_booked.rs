use std::collections::{BTreeMap, BTreeSet};

use chairtime_core::errors::{ScheduleError, ScheduleResult};
use chairtime_core::slots::{has_contiguous_run, slots_needed};
use chairtime_core::store::AvailabilityStore;
use chairtime_core::time::TimeOfDay;
use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

/// Finds the calendar dates on which a barber cannot take a booking of the
/// requested duration.
///
/// One bulk read fetches every taken hour on record; hours are grouped per
/// date, deduplicated, and sorted chronologically. A date is reported when
/// some window of `ceil(duration / interval)` consecutive taken hours forms
/// an unbroken grid run — every adjacent pair exactly one interval apart.
/// Results are sorted by date.
///
/// Only the taken hours themselves are examined; the barber's working-hours
/// window is not consulted. A short working day whose scattered taken hours
/// leave no usable gap is therefore not detected here — that case surfaces
/// through [`crate::resolver::resolve_available_slots`] returning nothing
/// for the date.
pub async fn fully_booked_dates<S>(
    store: &S,
    barber_id: Uuid,
    interval_minutes: u32,
    duration_minutes: u32,
) -> ScheduleResult<Vec<NaiveDate>>
where
    S: AvailabilityStore + ?Sized,
{
    if interval_minutes == 0 {
        return Err(ScheduleError::Validation(
            "slot interval must be positive".to_string(),
        ));
    }

    let rows = store.all_unavailable_hours(barber_id).await?;

    // Group taken hours by date; the set dedupes and orders chronologically.
    let mut taken_by_date: BTreeMap<NaiveDate, BTreeSet<TimeOfDay>> = BTreeMap::new();
    for row in &rows {
        let hour = TimeOfDay::parse(&row.hour)?;
        taken_by_date.entry(row.date).or_default().insert(hour);
    }

    let needed = slots_needed(duration_minutes, interval_minutes);
    let candidate_dates = taken_by_date.len();

    let mut fully_booked = Vec::new();
    for (date, hours) in taken_by_date {
        let hours: Vec<TimeOfDay> = hours.into_iter().collect();
        if has_contiguous_run(&hours, needed, interval_minutes) {
            fully_booked.push(date);
        }
    }

    debug!(
        "Barber {barber_id}: {} of {candidate_dates} dates with taken hours are fully booked",
        fully_booked.len()
    );
    Ok(fully_booked)
}
