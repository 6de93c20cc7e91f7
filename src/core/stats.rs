//! Rate and occupancy statistics for a room.
//!
//! Rate statistics are computed by the database over the rows currently stored for the
//! room. They return `None` when the room has no rows at all. Occupancy is grouped per
//! calendar month; months without rows are simply absent.

use crate::{
    entities::{RoomAvailability, room_availability},
    errors::Result,
};
use chrono::{Datelike, NaiveDate};
use sea_orm::{
    QueryOrder, QuerySelect,
    prelude::*,
    sea_query::{Expr, Func, SimpleExpr},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Share of available days in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyRow {
    /// Year, e.g. `"2026"`
    pub year: String,
    /// Month number without padding, e.g. `"7"`
    pub month: String,
    /// Percentage of available days with two decimals, e.g. `"66.67"`
    pub availability_percentage: String,
}

/// Computes the per-month availability percentage for a room, oldest month first.
pub async fn get_availability_percentage<C>(db: &C, room_id: i32) -> Result<Vec<OccupancyRow>>
where
    C: ConnectionTrait,
{
    let days = RoomAvailability::find()
        .select_only()
        .column(room_availability::Column::Date)
        .column(room_availability::Column::IsAvailable)
        .filter(room_availability::Column::RoomId.eq(room_id))
        .order_by_asc(room_availability::Column::Date)
        .into_tuple::<(NaiveDate, bool)>()
        .all(db)
        .await?;

    Ok(occupancy_by_month(&days))
}

/// Groups `(date, is_available)` pairs by month and formats the available share.
#[must_use]
pub fn occupancy_by_month(days: &[(NaiveDate, bool)]) -> Vec<OccupancyRow> {
    // (year, month) -> (available, total)
    let mut months: BTreeMap<(i32, u32), (u32, u32)> = BTreeMap::new();

    for (date, is_available) in days {
        let entry = months.entry((date.year(), date.month())).or_default();
        if *is_available {
            entry.0 += 1;
        }
        entry.1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month), (available, total))| OccupancyRow {
            year: year.to_string(),
            month: month.to_string(),
            availability_percentage: format_percentage(available, total),
        })
        .collect()
}

fn format_percentage(available: u32, total: u32) -> String {
    let percentage = if total == 0 {
        0.0
    } else {
        f64::from(available) * 100.0 / f64::from(total)
    };
    format!("{percentage:.2}")
}

/// Average nightly rate of a room, unrounded.
pub async fn get_average_rate<C>(db: &C, room_id: i32) -> Result<Option<f64>>
where
    C: ConnectionTrait,
{
    let average = SimpleExpr::from(Func::avg(Expr::col(room_availability::Column::NightRate)));
    rate_aggregate::<C, f64>(db, room_id, average).await
}

/// Highest nightly rate of a room.
pub async fn get_maximum_rate<C>(db: &C, room_id: i32) -> Result<Option<i32>>
where
    C: ConnectionTrait,
{
    let maximum = Expr::col(room_availability::Column::NightRate).max();
    rate_aggregate::<C, i32>(db, room_id, maximum).await
}

/// Lowest nightly rate of a room.
pub async fn get_minimum_rate<C>(db: &C, room_id: i32) -> Result<Option<i32>>
where
    C: ConnectionTrait,
{
    let minimum = Expr::col(room_availability::Column::NightRate).min();
    rate_aggregate::<C, i32>(db, room_id, minimum).await
}

async fn rate_aggregate<C, T>(db: &C, room_id: i32, aggregate: SimpleExpr) -> Result<Option<T>>
where
    C: ConnectionTrait,
    T: sea_orm::TryGetable,
{
    let value = RoomAvailability::find()
        .select_only()
        .column_as(aggregate, "rate")
        .filter(room_availability::Column::RoomId.eq(room_id))
        .into_tuple::<Option<T>>()
        .one(db)
        .await?;

    Ok(value.flatten())
}
