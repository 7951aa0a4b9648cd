//! # Chairtime Core
//!
//! Domain primitives shared by the chairtime crates: the minutes-since-midnight
//! [`time::TimeOfDay`] type, slot-grid arithmetic in [`slots`], the
//! [`store::AvailabilityStore`] port onto the booking data store, the
//! injectable [`clock::Clock`] capability, and the error taxonomy in
//! [`errors`].

/// Injectable source of the current wall-clock time
pub mod clock;
/// Error taxonomy for scheduling queries
pub mod errors;
/// Row types crossing the store port
pub mod models;
/// Slot-grid arithmetic
pub mod slots;
/// Port onto the booking data store
pub mod store;
/// Wall-clock time-of-day representation
pub mod time;
