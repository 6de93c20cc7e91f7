//! Room availability entity - One row per room and calendar day.
//!
//! The composite primary key `(room_id, date)` is what rejects duplicate
//! rows for the same room and day.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Room availability database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "room_availability")]
pub struct Model {
    /// Room this row belongs to (weak reference to `rooms.room_id`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub room_id: i32,
    /// Calendar day, no time-of-day component
    #[sea_orm(primary_key, auto_increment = false)]
    pub date: Date,
    /// Whether the room can be booked on this day
    pub is_available: bool,
    /// Nightly rate in the smallest currency unit (e.g. cents)
    pub night_rate: i32,
}

/// `RoomAvailability` has no declared relations (see [`super::room::Relation`])
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
