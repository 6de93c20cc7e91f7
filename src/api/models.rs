//! JSON payloads returned by the API.

use crate::{
    core::{RoomAggregate, stats::OccupancyRow},
    entities::room_availability,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Room attributes, availability and statistics returned by `GET /{room_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomData {
    /// Room identifier
    pub room_id: i32,
    /// Availability and nightly rate for every stored day
    pub rate_per_night: Vec<DateData>,
    /// Maximum number of guests
    pub max_guests: i32,
    /// Available days as `YYYY-MM-DD`
    pub available_dates: Vec<String>,
    /// Per-month occupancy, empty when it could not be computed
    pub occupancy_percentage: Vec<OccupancyRow>,
    /// Average nightly rate, 0 when it could not be computed
    pub average_rate: f64,
    /// Highest nightly rate, 0 when it could not be computed
    pub highest_rate: i32,
    /// Lowest nightly rate, 0 when it could not be computed
    pub lowest_rate: i32,
    /// Balcony amenity
    pub balcony: bool,
    /// Mini-fridge amenity
    pub fridge: bool,
    /// Indoor pool amenity
    pub indoor_pool: bool,
    /// Gaming console amenity
    pub gaming_console: bool,
}

/// Availability and nightly rate of a room on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateData {
    /// Calendar day
    pub date: NaiveDate,
    /// Whether the room can be booked
    pub is_available: bool,
    /// Nightly rate in the smallest currency unit
    pub night_rate: i32,
}

impl From<room_availability::Model> for DateData {
    fn from(row: room_availability::Model) -> Self {
        Self {
            date: row.date,
            is_available: row.is_available,
            night_rate: row.night_rate,
        }
    }
}

impl From<RoomAggregate> for RoomData {
    fn from(aggregate: RoomAggregate) -> Self {
        let RoomAggregate {
            room,
            rate_per_night,
            available_dates,
            occupancy_percentage,
            average_rate,
            highest_rate,
            lowest_rate,
        } = aggregate;

        Self {
            room_id: room.room_id,
            rate_per_night: rate_per_night.into_iter().map(DateData::from).collect(),
            max_guests: room.max_guests,
            available_dates,
            occupancy_percentage: occupancy_percentage.into_value(),
            average_rate: average_rate.into_value(),
            highest_rate: highest_rate.into_value(),
            lowest_rate: lowest_rate.into_value(),
            balcony: room.balcony,
            fridge: room.fridge,
            indoor_pool: room.indoor_pool,
            gaming_console: room.gaming_console,
        }
    }
}

/// Body of every non-200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason
    pub error: String,
}
