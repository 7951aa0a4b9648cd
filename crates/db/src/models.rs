use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBarber {
    pub id: Uuid,
    pub name: String,
    pub slot_interval_minutes: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWorkingHours {
    pub barber_id: Uuid,
    pub weekday: i16,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUnavailableHour {
    pub barber_id: Uuid,
    pub date: NaiveDate,
    pub hour: String,
    pub is_available: bool,
}
