use std::collections::HashMap;

use async_trait::async_trait;
use chairtime_core::models::unavailability::UnavailableHourRow;
use chairtime_core::models::working_hours::WorkingHoursRow;
use chairtime_core::store::AvailabilityStore;
use chrono::NaiveDate;
use eyre::Result;
use mockall::mock;
use uuid::Uuid;

// Mockall double for expectation-driven tests, e.g. store failures.
mock! {
    pub Store {}

    #[async_trait]
    impl AvailabilityStore for Store {
        async fn slot_interval_minutes(&self, barber_id: Uuid) -> Result<Option<u32>>;

        async fn working_hours(
            &self,
            barber_id: Uuid,
            weekday: u8,
        ) -> Result<Option<WorkingHoursRow>>;

        async fn unavailable_hours(&self, barber_id: Uuid, date: NaiveDate) -> Result<Vec<String>>;

        async fn all_unavailable_hours(&self, barber_id: Uuid) -> Result<Vec<UnavailableHourRow>>;
    }
}

/// In-memory fake of the booking store.
///
/// Populated through the setters, then handed to the availability queries by
/// shared reference. Rows are scoped per barber, mirroring the table layout.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    intervals: HashMap<Uuid, u32>,
    working_hours: HashMap<(Uuid, u8), WorkingHoursRow>,
    unavailable: Vec<(Uuid, UnavailableHourRow)>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_slot_interval(&mut self, barber_id: Uuid, minutes: u32) {
        self.intervals.insert(barber_id, minutes);
    }

    pub fn set_working_hours(
        &mut self,
        barber_id: Uuid,
        weekday: u8,
        start_time: &str,
        end_time: &str,
    ) {
        self.working_hours.insert(
            (barber_id, weekday),
            WorkingHoursRow {
                start_time: start_time.to_string(),
                end_time: end_time.to_string(),
            },
        );
    }

    pub fn mark_unavailable(&mut self, barber_id: Uuid, date: NaiveDate, hour: &str) {
        self.unavailable.push((
            barber_id,
            UnavailableHourRow {
                date,
                hour: hour.to_string(),
            },
        ));
    }
}

#[async_trait]
impl AvailabilityStore for InMemoryStore {
    async fn slot_interval_minutes(&self, barber_id: Uuid) -> Result<Option<u32>> {
        Ok(self.intervals.get(&barber_id).copied())
    }

    async fn working_hours(
        &self,
        barber_id: Uuid,
        weekday: u8,
    ) -> Result<Option<WorkingHoursRow>> {
        Ok(self.working_hours.get(&(barber_id, weekday)).cloned())
    }

    async fn unavailable_hours(&self, barber_id: Uuid, date: NaiveDate) -> Result<Vec<String>> {
        Ok(self
            .unavailable
            .iter()
            .filter(|(owner, row)| *owner == barber_id && row.date == date)
            .map(|(_, row)| row.hour.clone())
            .collect())
    }

    async fn all_unavailable_hours(&self, barber_id: Uuid) -> Result<Vec<UnavailableHourRow>> {
        Ok(self
            .unavailable
            .iter()
            .filter(|(owner, _)| *owner == barber_id)
            .map(|(_, row)| row.clone())
            .collect())
    }
}
