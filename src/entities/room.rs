//! Room entity - Represents a bookable room and its static attributes.
//!
//! Room ids are assigned by the caller (seed data or external management),
//! so the primary key is not auto-incremented.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Room database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    /// Caller-assigned room identifier
    #[sea_orm(primary_key, auto_increment = false)]
    pub room_id: i32,
    /// Maximum number of guests the room can host
    pub max_guests: i32,
    /// Whether the room has a balcony
    pub balcony: bool,
    /// Whether the room has a mini-fridge
    pub fridge: bool,
    /// Whether the room has access to an indoor pool
    pub indoor_pool: bool,
    /// Whether the room has a gaming console
    pub gaming_console: bool,
}

/// Rooms have no declared relations.
///
/// Availability rows reference rooms by id only; no foreign key is created,
/// so deleting a room leaves its availability rows in place.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
