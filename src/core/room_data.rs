//! Room data aggregation - Everything the API returns about one room.
//!
//! The room itself, its availability rows and its available dates are essential: if any of
//! them cannot be read the whole call fails. Occupancy and rate statistics are not: each is
//! fetched independently and replaced by an empty/zero value when its query fails, so a
//! broken statistic never takes the response down with it.

use crate::{
    core::{queries::RoomQueries, stats::OccupancyRow},
    entities::{room, room_availability},
    errors::{Error, Result},
};
use tracing::{debug, warn};

/// A statistic that was either computed or replaced after its query failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Stat<T> {
    /// The computed value (a room without rows has a legitimate zero/empty value)
    Value(T),
    /// The query failed; callers see the default value
    Degraded,
}

impl<T: Default> Stat<T> {
    /// The computed value, or `T::default()` for a degraded statistic.
    pub fn into_value(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Degraded => T::default(),
        }
    }
}

impl<T> Stat<T> {
    /// Whether the value was substituted after a failure.
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded)
    }

    fn from_result(room_id: i32, what: &'static str, result: Result<Option<T>>) -> Self
    where
        T: Default,
    {
        match result {
            Ok(value) => Self::Value(value.unwrap_or_default()),
            Err(e) => {
                warn!(room_id, statistic = what, error = %e, "Failed to fetch {what}, using default");
                Self::Degraded
            }
        }
    }
}

/// Aggregated data for one room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomAggregate {
    /// Static room attributes
    pub room: room::Model,
    /// Every stored availability row, ascending by date
    pub rate_per_night: Vec<room_availability::Model>,
    /// Available days formatted as `YYYY-MM-DD`, ascending
    pub available_dates: Vec<String>,
    /// Per-month occupancy
    pub occupancy_percentage: Stat<Vec<OccupancyRow>>,
    /// Average nightly rate
    pub average_rate: Stat<f64>,
    /// Highest nightly rate
    pub highest_rate: Stat<i32>,
    /// Lowest nightly rate
    pub lowest_rate: Stat<i32>,
}

impl RoomAggregate {
    /// Names of the statistics that were substituted.
    #[must_use]
    pub fn degraded_fields(&self) -> Vec<&'static str> {
        [
            ("occupancy_percentage", self.occupancy_percentage.is_degraded()),
            ("average_rate", self.average_rate.is_degraded()),
            ("highest_rate", self.highest_rate.is_degraded()),
            ("lowest_rate", self.lowest_rate.is_degraded()),
        ]
        .into_iter()
        .filter_map(|(name, degraded)| degraded.then_some(name))
        .collect()
    }
}

/// Collects the data of one room.
///
/// # Errors
/// * [`Error::RoomNotFound`] when the room does not exist or cannot be looked up; no other
///   query is issued in that case
/// * [`Error::Fetch`] when the availability rows or the available dates cannot be read
pub async fn get_room_data<Q>(queries: &Q, room_id: i32) -> Result<RoomAggregate>
where
    Q: RoomQueries + ?Sized,
{
    let room = match queries.get_room(room_id).await {
        Ok(Some(room)) => room,
        Ok(None) => return Err(Error::RoomNotFound { room_id }),
        Err(e) => {
            warn!(room_id, error = %e, "Room lookup failed");
            return Err(Error::RoomNotFound { room_id });
        }
    };

    let rate_per_night = queries
        .list_room_availability(room_id)
        .await
        .map_err(|e| Error::fetch("room availability", room_id, e))?;

    let available_dates = queries
        .list_available_dates(room_id)
        .await
        .map_err(|e| Error::fetch("available dates", room_id, e))?
        .into_iter()
        .map(|date| date.format("%Y-%m-%d").to_string())
        .collect();

    let (occupancy, average, highest, lowest) = tokio::join!(
        queries.get_availability_percentage(room_id),
        queries.get_average_rate(room_id),
        queries.get_maximum_rate(room_id),
        queries.get_minimum_rate(room_id),
    );

    let aggregate = RoomAggregate {
        room,
        rate_per_night,
        available_dates,
        occupancy_percentage: Stat::from_result(
            room_id,
            "occupancy percentage",
            occupancy.map(Some),
        ),
        average_rate: Stat::from_result(room_id, "average rate", average),
        highest_rate: Stat::from_result(room_id, "highest rate", highest),
        lowest_rate: Stat::from_result(room_id, "lowest rate", lowest),
    };

    debug!(
        room_id,
        days = aggregate.rate_per_night.len(),
        degraded = ?aggregate.degraded_fields(),
        "Room data aggregated"
    );

    Ok(aggregate)
}
