use serde::{Deserialize, Serialize};

/// A barber's open and close times for one weekday, as stored.
///
/// The strings are raw wall-clock values; the resolver parses them and fails
/// fast on malformed data rather than treating it as a closed day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHoursRow {
    pub start_time: String,
    pub end_time: String,
}
