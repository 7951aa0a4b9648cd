use crate::models::DbBarber;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_barber(
    pool: &Pool<Postgres>,
    name: &str,
    slot_interval_minutes: i32,
) -> Result<DbBarber> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating barber: id={}, name={}, slot_interval_minutes={}",
        id,
        name,
        slot_interval_minutes
    );

    let barber = sqlx::query_as::<_, DbBarber>(
        r#"
        INSERT INTO barbers (id, name, slot_interval_minutes, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, slot_interval_minutes, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(slot_interval_minutes)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(barber)
}

pub async fn get_barber_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBarber>> {
    let barber = sqlx::query_as::<_, DbBarber>(
        r#"
        SELECT id, name, slot_interval_minutes, created_at
        FROM barbers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(barber)
}

pub async fn get_slot_interval_minutes(
    pool: &Pool<Postgres>,
    barber_id: Uuid,
) -> Result<Option<i32>> {
    let interval = sqlx::query_scalar::<_, i32>(
        r#"
        SELECT slot_interval_minutes
        FROM barbers
        WHERE id = $1
        "#,
    )
    .bind(barber_id)
    .fetch_optional(pool)
    .await?;

    Ok(interval)
}
