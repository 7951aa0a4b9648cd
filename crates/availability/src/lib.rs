//! # Chairtime Availability
//!
//! The query side of the chairtime booking service: which time slots a
//! barber can still take on a given day, and which calendar dates have no
//! bookable window left at all.
//!
//! ## Slot model
//!
//! A barber's day is divided into a fixed grid of slots, anchored at the
//! weekday's opening time and stepping by the barber's configured interval.
//! A service longer than one interval occupies a run of consecutive slots,
//! so a booking request for `duration` minutes is matched against sliding
//! windows of `ceil(duration / interval)` grid positions.
//!
//! ## Queries
//!
//! - [`resolver::resolve_available_slots`] filters the day's slot grid
//!   against the hours already taken and, for same-day requests, against the
//!   current time.
//! - [`fully_booked::fully_booked_dates`] scans every taken hour a barber
//!   has on record and reports the dates blocked by an unbroken run of taken
//!   slots long enough to exclude the requested duration.
//!
//! Both queries are pure functions of what they read through the
//! [`chairtime_core::store::AvailabilityStore`] port and the injected
//! [`chairtime_core::clock::Clock`]; they hold no state and perform no
//! writes.

/// Fully-booked date aggregation
pub mod fully_booked;
/// Per-day open-slot resolution
pub mod resolver;

pub use fully_booked::fully_booked_dates;
pub use resolver::{DEFAULT_SERVICE_DURATION_MINUTES, resolve_available_slots};
