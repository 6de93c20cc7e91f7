//! Shared test utilities.
//!
//! This module provides helper functions for setting up test databases, creating test
//! rooms and availability rows, and a `RoomQueries` wrapper that injects failures.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{
        RoomQueries,
        availability::{self, AvailabilityArgs},
        random::{random_bool, random_price},
        room::{self, CreateRoomArgs},
        stats::OccupancyRow,
    },
    entities,
    errors::{Error, Result},
};
use async_trait::async_trait;
use chrono::{Days, NaiveDate, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sea_orm::{DatabaseConnection, DbErr};
use std::sync::Mutex;

/// The four queries the aggregator is allowed to lose.
pub const STATISTICS_QUERIES: &[&str] = &[
    "get_availability_percentage",
    "get_average_rate",
    "get_maximum_rate",
    "get_minimum_rate",
];

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Deterministic generator for tests.
pub fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(0x5eed)
}

/// Today's UTC date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Creates a room with random attributes.
pub async fn create_test_room(db: &DatabaseConnection, room_id: i32) -> Result<entities::RoomModel> {
    let mut rng = test_rng();
    room::create_room(db, CreateRoomArgs::random(room_id, &mut rng)).await
}

/// Sets up a database with room 1.
/// Returns (db, room) for common test scenarios.
pub async fn setup_with_room() -> Result<(DatabaseConnection, entities::RoomModel)> {
    let db = setup_test_db().await?;
    let room = create_test_room(&db, 1).await?;
    Ok((db, room))
}

/// Creates one availability row.
pub async fn create_test_availability(
    db: &DatabaseConnection,
    room_id: i32,
    date: NaiveDate,
    is_available: bool,
    night_rate: i32,
) -> Result<entities::RoomAvailabilityModel> {
    availability::create_room_availability(
        db,
        room_id,
        AvailabilityArgs {
            date,
            is_available,
            night_rate,
        },
    )
    .await
}

/// Creates `days` consecutive random rows for a room starting at `start`.
pub async fn create_consecutive_availability<R: Rng>(
    db: &DatabaseConnection,
    room_id: i32,
    start: NaiveDate,
    days: u64,
    rng: &mut R,
) -> Result<Vec<entities::RoomAvailabilityModel>> {
    let mut rows = Vec::new();
    for offset in 0..days {
        let date = start.checked_add_days(Days::new(offset)).unwrap();
        let row =
            create_test_availability(db, room_id, date, random_bool(rng), random_price(rng))
                .await?;
        rows.push(row);
    }
    Ok(rows)
}

/// Wraps a real connection, failing the named operations and recording every call.
pub struct FaultyQueries {
    /// The wrapped connection, usable directly for assertions
    pub db: DatabaseConnection,
    failing: Vec<&'static str>,
    calls: Mutex<Vec<&'static str>>,
}

impl FaultyQueries {
    /// Fails every operation listed in `failing`.
    pub fn new(db: DatabaseConnection, failing: &[&'static str]) -> Self {
        Self {
            db,
            failing: failing.to_vec(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Operations called so far, in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn enter(&self, operation: &'static str) -> Result<()> {
        self.calls.lock().unwrap().push(operation);
        if self.failing.contains(&operation) {
            return Err(Error::Database(DbErr::Custom(format!(
                "injected failure in {operation}"
            ))));
        }
        Ok(())
    }
}

#[async_trait]
impl RoomQueries for FaultyQueries {
    async fn get_room(&self, room_id: i32) -> Result<Option<entities::RoomModel>> {
        self.enter("get_room")?;
        self.db.get_room(room_id).await
    }

    async fn list_room_availability(
        &self,
        room_id: i32,
    ) -> Result<Vec<entities::RoomAvailabilityModel>> {
        self.enter("list_room_availability")?;
        self.db.list_room_availability(room_id).await
    }

    async fn list_available_dates(&self, room_id: i32) -> Result<Vec<NaiveDate>> {
        self.enter("list_available_dates")?;
        self.db.list_available_dates(room_id).await
    }

    async fn get_availability_percentage(&self, room_id: i32) -> Result<Vec<OccupancyRow>> {
        self.enter("get_availability_percentage")?;
        self.db.get_availability_percentage(room_id).await
    }

    async fn get_average_rate(&self, room_id: i32) -> Result<Option<f64>> {
        self.enter("get_average_rate")?;
        self.db.get_average_rate(room_id).await
    }

    async fn get_maximum_rate(&self, room_id: i32) -> Result<Option<i32>> {
        self.enter("get_maximum_rate")?;
        self.db.get_maximum_rate(room_id).await
    }

    async fn get_minimum_rate(&self, room_id: i32) -> Result<Option<i32>> {
        self.enter("get_minimum_rate")?;
        self.db.get_minimum_rate(room_id).await
    }

    async fn delete_old_room_availability_data(&self, before: NaiveDate) -> Result<u64> {
        self.enter("delete_old_room_availability_data")?;
        self.db.delete_old_room_availability_data(before).await
    }

    async fn list_all_room_ids(&self) -> Result<Vec<i32>> {
        self.enter("list_all_room_ids")?;
        self.db.list_all_room_ids().await
    }

    async fn get_max_date(&self) -> Result<Option<NaiveDate>> {
        self.enter("get_max_date")?;
        self.db.get_max_date().await
    }

    async fn get_date_count(&self) -> Result<i64> {
        self.enter("get_date_count")?;
        self.db.get_date_count().await
    }

    async fn create_room_availability(
        &self,
        room_id: i32,
        args: AvailabilityArgs,
    ) -> Result<entities::RoomAvailabilityModel> {
        self.enter("create_room_availability")?;
        self.db.create_room_availability(room_id, args).await
    }
}
