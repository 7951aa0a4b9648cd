use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create barbers table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS barbers (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            slot_interval_minutes INTEGER NOT NULL DEFAULT 30,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT positive_slot_interval CHECK (slot_interval_minutes > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create barber_working_hours table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS barber_working_hours (
            barber_id UUID NOT NULL REFERENCES barbers(id),
            weekday SMALLINT NOT NULL,
            start_time VARCHAR(8) NOT NULL,
            end_time VARCHAR(8) NOT NULL,
            PRIMARY KEY (barber_id, weekday),
            CONSTRAINT valid_weekday CHECK (weekday BETWEEN 0 AND 6)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create availability table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS availability (
            barber_id UUID NOT NULL REFERENCES barbers(id),
            date DATE NOT NULL,
            hour VARCHAR(8) NOT NULL,
            is_available BOOLEAN NOT NULL DEFAULT FALSE,
            PRIMARY KEY (barber_id, date, hour)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_availability_barber_date ON availability(barber_id, date);
        CREATE INDEX IF NOT EXISTS idx_availability_is_available ON availability(is_available);
        CREATE INDEX IF NOT EXISTS idx_working_hours_barber_id ON barber_working_hours(barber_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
