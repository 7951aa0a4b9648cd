pub mod barber;
pub mod unavailability;
pub mod working_hours;
