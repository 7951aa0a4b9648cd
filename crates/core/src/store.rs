use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use uuid::Uuid;

use crate::models::unavailability::UnavailableHourRow;
use crate::models::working_hours::WorkingHoursRow;

/// Read side of the booking data store, as the availability queries see it.
///
/// Implementations surface only hours actually marked taken; the queries
/// treat every returned hour as blocked. All methods are plain reads with no
/// ordering or snapshot guarantees between calls.
#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    /// The barber's slot-grid granularity in minutes, if configured.
    async fn slot_interval_minutes(&self, barber_id: Uuid) -> Result<Option<u32>>;

    /// Working hours for a weekday (0 = Sunday through 6 = Saturday), if the
    /// barber is open that day.
    async fn working_hours(
        &self,
        barber_id: Uuid,
        weekday: u8,
    ) -> Result<Option<WorkingHoursRow>>;

    /// Taken hours for a single date, as raw wall-clock strings.
    async fn unavailable_hours(&self, barber_id: Uuid, date: NaiveDate) -> Result<Vec<String>>;

    /// Taken hours across all dates, fetched in one bulk query.
    async fn all_unavailable_hours(&self, barber_id: Uuid) -> Result<Vec<UnavailableHourRow>>;
}
