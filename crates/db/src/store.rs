use async_trait::async_trait;
use chairtime_core::models::unavailability::UnavailableHourRow;
use chairtime_core::models::working_hours::WorkingHoursRow;
use chairtime_core::store::AvailabilityStore;
use chrono::NaiveDate;
use eyre::Result;
use uuid::Uuid;

use crate::repositories::{barber, unavailability, working_hours};
use crate::DbPool;

/// Postgres-backed implementation of the availability store port.
pub struct PgAvailabilityStore {
    pool: DbPool,
}

impl PgAvailabilityStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityStore for PgAvailabilityStore {
    async fn slot_interval_minutes(&self, barber_id: Uuid) -> Result<Option<u32>> {
        let raw = barber::get_slot_interval_minutes(&self.pool, barber_id).await?;
        Ok(raw.and_then(interval_minutes))
    }

    async fn working_hours(
        &self,
        barber_id: Uuid,
        weekday: u8,
    ) -> Result<Option<WorkingHoursRow>> {
        let row = working_hours::get_working_hours(&self.pool, barber_id, i16::from(weekday)).await?;
        Ok(row.map(|row| WorkingHoursRow {
            start_time: row.start_time,
            end_time: row.end_time,
        }))
    }

    async fn unavailable_hours(&self, barber_id: Uuid, date: NaiveDate) -> Result<Vec<String>> {
        let rows = unavailability::get_unavailable_hours(&self.pool, barber_id, date).await?;
        Ok(rows.into_iter().map(|row| row.hour).collect())
    }

    async fn all_unavailable_hours(&self, barber_id: Uuid) -> Result<Vec<UnavailableHourRow>> {
        let rows = unavailability::get_all_unavailable_hours(&self.pool, barber_id).await?;
        Ok(rows
            .into_iter()
            .map(|row| UnavailableHourRow {
                date: row.date,
                hour: row.hour,
            })
            .collect())
    }
}

/// A stored interval is usable only when strictly positive.
fn interval_minutes(raw: i32) -> Option<u32> {
    u32::try_from(raw).ok().filter(|minutes| *minutes > 0)
}

#[cfg(test)]
mod tests {
    use super::interval_minutes;
    use pretty_assertions::assert_eq;

    #[test]
    fn non_positive_intervals_read_as_unconfigured() {
        assert_eq!(interval_minutes(30), Some(30));
        assert_eq!(interval_minutes(0), None);
        assert_eq!(interval_minutes(-15), None);
    }
}
