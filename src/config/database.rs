//! Database configuration module.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs. Creation uses `IF NOT EXISTS`, which makes
//! it safe to run on every start against an existing database file.

use crate::entities::{Room, RoomAvailability};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

const DEFAULT_DATABASE_URL: &str = "sqlite://rooms.sqlite?mode=rwc";

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a local `SQLite` file (created if missing) when it is not set.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database named by `DATABASE_URL`.
#[instrument]
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    debug!("Connecting to database at {}", database_url);

    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates the `rooms` and `room_availability` tables if they do not exist yet.
///
/// The availability table gets its `(room_id, date)` uniqueness from the composite
/// primary key. No foreign key towards `rooms` is created.
#[instrument(skip(db))]
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut room_table = schema.create_table_from_entity(Room);
    let mut availability_table = schema.create_table_from_entity(RoomAvailability);

    room_table.if_not_exists();
    availability_table.if_not_exists();

    db.execute(builder.build(&room_table)).await?;
    db.execute(builder.build(&availability_table)).await?;

    info!("Database tables ensured.");
    Ok(())
}
