use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One taken slot-grid position: `hour` on `date` is not bookable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnavailableHourRow {
    pub date: NaiveDate,
    pub hour: String,
}
