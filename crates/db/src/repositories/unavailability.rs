use crate::models::DbUnavailableHour;
use chrono::NaiveDate;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn set_hour_availability(
    pool: &Pool<Postgres>,
    barber_id: Uuid,
    date: NaiveDate,
    hour: &str,
    is_available: bool,
) -> Result<DbUnavailableHour> {
    tracing::debug!(
        "Setting hour availability: barber_id={}, date={}, hour={}, is_available={}",
        barber_id,
        date,
        hour,
        is_available
    );

    let row = sqlx::query_as::<_, DbUnavailableHour>(
        r#"
        INSERT INTO availability (barber_id, date, hour, is_available)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (barber_id, date, hour)
        DO UPDATE SET is_available = EXCLUDED.is_available
        RETURNING barber_id, date, hour, is_available
        "#,
    )
    .bind(barber_id)
    .bind(date)
    .bind(hour)
    .bind(is_available)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_unavailable_hours(
    pool: &Pool<Postgres>,
    barber_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbUnavailableHour>> {
    let rows = sqlx::query_as::<_, DbUnavailableHour>(
        r#"
        SELECT barber_id, date, hour, is_available
        FROM availability
        WHERE barber_id = $1 AND date = $2 AND is_available = FALSE
        ORDER BY hour ASC
        "#,
    )
    .bind(barber_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_all_unavailable_hours(
    pool: &Pool<Postgres>,
    barber_id: Uuid,
) -> Result<Vec<DbUnavailableHour>> {
    let rows = sqlx::query_as::<_, DbUnavailableHour>(
        r#"
        SELECT barber_id, date, hour, is_available
        FROM availability
        WHERE barber_id = $1 AND is_available = FALSE
        ORDER BY date ASC, hour ASC
        "#,
    )
    .bind(barber_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
