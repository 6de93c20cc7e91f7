//! The store operations the aggregator and the feeder depend on.
//!
//! `RoomQueries` is implemented for `DatabaseConnection` by delegating to the functions in
//! [`crate::core::room`], [`crate::core::availability`] and [`crate::core::stats`]. Tests
//! wrap a connection in their own implementation to inject failures.

use crate::{
    core::{
        availability::{self, AvailabilityArgs},
        room,
        stats::{self, OccupancyRow},
    },
    entities::{room as room_entity, room_availability},
    errors::Result,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Read and write operations on rooms and their availability.
#[async_trait]
pub trait RoomQueries: Send + Sync {
    /// Looks up a room by id.
    async fn get_room(&self, room_id: i32) -> Result<Option<room_entity::Model>>;

    /// All availability rows of a room, ascending by date.
    async fn list_room_availability(&self, room_id: i32)
    -> Result<Vec<room_availability::Model>>;

    /// Days on which the room is available, ascending.
    async fn list_available_dates(&self, room_id: i32) -> Result<Vec<NaiveDate>>;

    /// Per-month share of available days.
    async fn get_availability_percentage(&self, room_id: i32) -> Result<Vec<OccupancyRow>>;

    /// Average nightly rate, `None` without rows.
    async fn get_average_rate(&self, room_id: i32) -> Result<Option<f64>>;

    /// Highest nightly rate, `None` without rows.
    async fn get_maximum_rate(&self, room_id: i32) -> Result<Option<i32>>;

    /// Lowest nightly rate, `None` without rows.
    async fn get_minimum_rate(&self, room_id: i32) -> Result<Option<i32>>;

    /// Deletes all rows dated strictly before `before`; returns how many were deleted.
    async fn delete_old_room_availability_data(&self, before: NaiveDate) -> Result<u64>;

    /// Ids of every known room.
    async fn list_all_room_ids(&self) -> Result<Vec<i32>>;

    /// Latest stored day across all rooms.
    async fn get_max_date(&self) -> Result<Option<NaiveDate>>;

    /// Number of distinct stored days across all rooms.
    async fn get_date_count(&self) -> Result<i64>;

    /// Creates one availability row; fails if the room already has a row for that day.
    async fn create_room_availability(
        &self,
        room_id: i32,
        args: AvailabilityArgs,
    ) -> Result<room_availability::Model>;
}

#[async_trait]
impl RoomQueries for DatabaseConnection {
    async fn get_room(&self, room_id: i32) -> Result<Option<room_entity::Model>> {
        room::get_room_by_id(self, room_id).await
    }

    async fn list_room_availability(
        &self,
        room_id: i32,
    ) -> Result<Vec<room_availability::Model>> {
        availability::list_room_availability(self, room_id).await
    }

    async fn list_available_dates(&self, room_id: i32) -> Result<Vec<NaiveDate>> {
        availability::list_available_dates(self, room_id).await
    }

    async fn get_availability_percentage(&self, room_id: i32) -> Result<Vec<OccupancyRow>> {
        stats::get_availability_percentage(self, room_id).await
    }

    async fn get_average_rate(&self, room_id: i32) -> Result<Option<f64>> {
        stats::get_average_rate(self, room_id).await
    }

    async fn get_maximum_rate(&self, room_id: i32) -> Result<Option<i32>> {
        stats::get_maximum_rate(self, room_id).await
    }

    async fn get_minimum_rate(&self, room_id: i32) -> Result<Option<i32>> {
        stats::get_minimum_rate(self, room_id).await
    }

    async fn delete_old_room_availability_data(&self, before: NaiveDate) -> Result<u64> {
        availability::delete_old_room_availability_data(self, before).await
    }

    async fn list_all_room_ids(&self) -> Result<Vec<i32>> {
        room::list_all_room_ids(self).await
    }

    async fn get_max_date(&self) -> Result<Option<NaiveDate>> {
        availability::get_max_date(self).await
    }

    async fn get_date_count(&self) -> Result<i64> {
        availability::get_date_count(self).await
    }

    async fn create_room_availability(
        &self,
        room_id: i32,
        args: AvailabilityArgs,
    ) -> Result<room_availability::Model> {
        availability::create_room_availability(self, room_id, args).await
    }
}
