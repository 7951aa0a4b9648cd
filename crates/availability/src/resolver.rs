use std::collections::HashSet;

use chairtime_core::clock::Clock;
use chairtime_core::errors::ScheduleResult;
use chairtime_core::slots::{generate_slots, slots_needed};
use chairtime_core::store::AvailabilityStore;
use chairtime_core::time::TimeOfDay;
use chrono::{Datelike, NaiveDate, Timelike};
use tracing::debug;
use uuid::Uuid;

/// Service duration assumed when a caller does not specify one.
pub const DEFAULT_SERVICE_DURATION_MINUTES: u32 = 30;

/// Computes the bookable slot starts for a barber on one calendar day.
///
/// The day's slot grid comes from the working hours configured for the
/// date's weekday and the barber's slot interval. A candidate is the first
/// slot of a window of `ceil(duration / interval)` consecutive grid
/// positions; it survives only if no slot in the window is already taken
/// and, when `date` is the clock's current day, only if it starts strictly
/// after the current minute.
///
/// A barber with no interval or no working hours for the weekday is closed:
/// the result is an empty list, not an error. Store failures and malformed
/// stored time strings do surface as errors, so callers can tell "nothing
/// free" apart from "could not answer".
pub async fn resolve_available_slots<S, C>(
    store: &S,
    clock: &C,
    barber_id: Uuid,
    date: NaiveDate,
    duration_minutes: u32,
) -> ScheduleResult<Vec<TimeOfDay>>
where
    S: AvailabilityStore + ?Sized,
    C: Clock + ?Sized,
{
    let Some(interval) = store
        .slot_interval_minutes(barber_id)
        .await?
        .filter(|minutes| *minutes > 0)
    else {
        debug!("No usable slot interval for barber {barber_id}");
        return Ok(Vec::new());
    };

    let weekday = date.weekday().num_days_from_sunday() as u8;
    let Some(hours) = store.working_hours(barber_id, weekday).await? else {
        debug!("Barber {barber_id} is closed on weekday {weekday}");
        return Ok(Vec::new());
    };

    let open = TimeOfDay::parse(&hours.start_time)?;
    let close = TimeOfDay::parse(&hours.end_time)?;
    let base_slots = generate_slots(open, close, interval);
    let needed = slots_needed(duration_minutes, interval);

    let taken: HashSet<TimeOfDay> = store
        .unavailable_hours(barber_id, date)
        .await?
        .iter()
        .map(|hour| TimeOfDay::parse(hour))
        .collect::<Result<_, _>>()?;

    // Same-day requests must start strictly after the current minute.
    let now = clock.now();
    let cutoff = (now.date() == date)
        .then(|| TimeOfDay::from_minutes((now.time().hour() * 60 + now.time().minute()) as u16))
        .flatten();

    let mut available = Vec::new();
    for window in base_slots.windows(needed) {
        if window.iter().any(|slot| taken.contains(slot)) {
            continue;
        }
        let first = window[0];
        if cutoff.is_some_and(|cutoff| first <= cutoff) {
            continue;
        }
        available.push(first);
    }

    debug!(
        "Barber {barber_id} on {date}: {} of {} base slots bookable",
        available.len(),
        base_slots.len()
    );
    Ok(available)
}
