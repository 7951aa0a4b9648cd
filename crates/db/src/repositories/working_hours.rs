use crate::models::DbWorkingHours;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn set_working_hours(
    pool: &Pool<Postgres>,
    barber_id: Uuid,
    weekday: i16,
    start_time: &str,
    end_time: &str,
) -> Result<DbWorkingHours> {
    tracing::debug!(
        "Setting working hours: barber_id={}, weekday={}, {}-{}",
        barber_id,
        weekday,
        start_time,
        end_time
    );

    let hours = sqlx::query_as::<_, DbWorkingHours>(
        r#"
        INSERT INTO barber_working_hours (barber_id, weekday, start_time, end_time)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (barber_id, weekday)
        DO UPDATE SET start_time = EXCLUDED.start_time, end_time = EXCLUDED.end_time
        RETURNING barber_id, weekday, start_time, end_time
        "#,
    )
    .bind(barber_id)
    .bind(weekday)
    .bind(start_time)
    .bind(end_time)
    .fetch_one(pool)
    .await?;

    Ok(hours)
}

pub async fn get_working_hours(
    pool: &Pool<Postgres>,
    barber_id: Uuid,
    weekday: i16,
) -> Result<Option<DbWorkingHours>> {
    let hours = sqlx::query_as::<_, DbWorkingHours>(
        r#"
        SELECT barber_id, weekday, start_time, end_time
        FROM barber_working_hours
        WHERE barber_id = $1 AND weekday = $2
        "#,
    )
    .bind(barber_id)
    .bind(weekday)
    .fetch_optional(pool)
    .await?;

    Ok(hours)
}
