//! # Chairtime DB
//!
//! Postgres adapter for the chairtime booking data: `sqlx` repositories over
//! the `barbers`, `barber_working_hours`, and `availability` tables, the
//! schema bootstrap, and [`store::PgAvailabilityStore`], which implements the
//! [`chairtime_core::store::AvailabilityStore`] port. Test doubles for the
//! port live in [`mock`].

pub mod mock;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}
