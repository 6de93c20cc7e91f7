//! Availability business logic - Per-day availability rows for each room.
//!
//! Every row is addressed by `(room_id, date)`. Dates are plain calendar days (`NaiveDate`),
//! which `SQLite` stores as `YYYY-MM-DD` text, so ordering and comparisons on the column
//! follow calendar order.

use crate::{
    entities::{RoomAvailability, room_availability},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*, sea_query::Expr};

/// Values written to an availability row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityArgs {
    /// Calendar day of the row
    pub date: NaiveDate,
    /// Whether the room can be booked on that day
    pub is_available: bool,
    /// Nightly rate in the smallest currency unit
    pub night_rate: i32,
}

/// Creates the availability row for `room_id` on `args.date`.
///
/// Fails with a database error when a row for the same room and day already exists.
pub async fn create_room_availability<C>(
    db: &C,
    room_id: i32,
    args: AvailabilityArgs,
) -> Result<room_availability::Model>
where
    C: ConnectionTrait,
{
    let availability = room_availability::ActiveModel {
        room_id: Set(room_id),
        date: Set(args.date),
        is_available: Set(args.is_available),
        night_rate: Set(args.night_rate),
    };

    Ok(availability.insert(db).await?)
}

/// Finds the availability row for a room on a given day.
pub async fn get_room_availability_by_date<C>(
    db: &C,
    room_id: i32,
    date: NaiveDate,
) -> Result<Option<room_availability::Model>>
where
    C: ConnectionTrait,
{
    RoomAvailability::find_by_id((room_id, date))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists every stored availability row for a room, ascending by date.
pub async fn list_room_availability<C>(
    db: &C,
    room_id: i32,
) -> Result<Vec<room_availability::Model>>
where
    C: ConnectionTrait,
{
    RoomAvailability::find()
        .filter(room_availability::Column::RoomId.eq(room_id))
        .order_by_asc(room_availability::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists the days on which a room is available, ascending.
pub async fn list_available_dates<C>(db: &C, room_id: i32) -> Result<Vec<NaiveDate>>
where
    C: ConnectionTrait,
{
    RoomAvailability::find()
        .select_only()
        .column(room_availability::Column::Date)
        .filter(room_availability::Column::RoomId.eq(room_id))
        .filter(room_availability::Column::IsAvailable.eq(true))
        .order_by_asc(room_availability::Column::Date)
        .into_tuple::<NaiveDate>()
        .all(db)
        .await
        .map_err(Into::into)
}

/// Rewrites the row of `room_id` on `date` with `args`, which may move it to a new day.
///
/// Moving onto a day that already has a row for the room fails with a database error.
pub async fn update_room_availability<C>(
    db: &C,
    room_id: i32,
    date: NaiveDate,
    args: AvailabilityArgs,
) -> Result<room_availability::Model>
where
    C: ConnectionTrait,
{
    let result = RoomAvailability::update_many()
        .col_expr(room_availability::Column::Date, Expr::value(args.date))
        .col_expr(
            room_availability::Column::IsAvailable,
            Expr::value(args.is_available),
        )
        .col_expr(
            room_availability::Column::NightRate,
            Expr::value(args.night_rate),
        )
        .filter(room_availability::Column::RoomId.eq(room_id))
        .filter(room_availability::Column::Date.eq(date))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::Database(DbErr::RecordNotFound(format!(
            "no availability for room {room_id} on {date}"
        ))));
    }

    get_room_availability_by_date(db, room_id, args.date)
        .await?
        .ok_or_else(|| {
            Error::Database(DbErr::RecordNotFound(format!(
                "no availability for room {room_id} on {}",
                args.date
            )))
        })
}

/// Deletes every availability row dated strictly before `before`, for all rooms.
///
/// Returns the number of deleted rows.
pub async fn delete_old_room_availability_data<C>(db: &C, before: NaiveDate) -> Result<u64>
where
    C: ConnectionTrait,
{
    let result = RoomAvailability::delete_many()
        .filter(room_availability::Column::Date.lt(before))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}

/// Deletes all availability rows of one room.
pub async fn delete_all_availability_for_room<C>(db: &C, room_id: i32) -> Result<u64>
where
    C: ConnectionTrait,
{
    let result = RoomAvailability::delete_many()
        .filter(room_availability::Column::RoomId.eq(room_id))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}

/// Latest day present in the availability table across all rooms, if any.
pub async fn get_max_date<C>(db: &C) -> Result<Option<NaiveDate>>
where
    C: ConnectionTrait,
{
    let max_date = RoomAvailability::find()
        .select_only()
        .column_as(Expr::col(room_availability::Column::Date).max(), "max_date")
        .into_tuple::<Option<NaiveDate>>()
        .one(db)
        .await?;

    Ok(max_date.flatten())
}

/// Number of distinct days present in the availability table across all rooms.
pub async fn get_date_count<C>(db: &C) -> Result<i64>
where
    C: ConnectionTrait,
{
    let count = RoomAvailability::find()
        .select_only()
        .column_as(
            Expr::col(room_availability::Column::Date).count_distinct(),
            "date_count",
        )
        .into_tuple::<i64>()
        .one(db)
        .await?;

    Ok(count.unwrap_or_default())
}
