//! Availability feeder - Keeps a rolling window of availability rows populated.
//!
//! Meant to run once when the process starts. It removes rows for past days, then adds one
//! row per room per day, with random availability and rate, until the availability table
//! spans [`HORIZON_DAYS`] distinct days. Progress is tracked with the global distinct-day
//! count rather than per-room coverage: a day counts as done once every room was attempted,
//! even if some inserts failed. A later run fills nothing in for those rooms, but it also
//! never duplicates a `(room, day)` pair. When the latest stored day is today or later, the
//! run starts on the day after it, so an already covered day is never tried again.

use crate::{
    core::{
        availability::AvailabilityArgs,
        queries::RoomQueries,
        random::{random_bool, random_price},
    },
    errors::Result,
};
use chrono::{NaiveDate, Utc};
use rand::Rng;
use tracing::{error, info, instrument, warn};

/// Number of distinct days the feeder keeps populated
pub const HORIZON_DAYS: i64 = 150;

/// What a feeder run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSummary {
    /// Rows deleted because their day was in the past
    pub purged: u64,
    /// First day the run tried to fill
    pub start_date: NaiveDate,
    /// Number of days the run walked through
    pub days_added: i64,
    /// Rows created
    pub inserted: usize,
    /// Inserts that failed and were skipped
    pub skipped: usize,
}

/// Extends the availability horizon starting from today's UTC date.
pub async fn extend_availability_horizon<Q, R>(queries: &Q, rng: &mut R) -> Result<FeedSummary>
where
    Q: RoomQueries + ?Sized,
    R: Rng + ?Sized,
{
    extend_availability_horizon_from(queries, rng, Utc::now().date_naive()).await
}

/// Extends the availability horizon with `today` as the current day.
///
/// # Errors
/// Fails if stale rows cannot be purged, if the room ids cannot be listed, or if the
/// distinct-day count cannot be read. Failing to read the latest stored day is not fatal:
/// the run then starts at `today`. Failed inserts are logged and skipped.
#[instrument(skip(queries, rng))]
pub async fn extend_availability_horizon_from<Q, R>(
    queries: &Q,
    rng: &mut R,
    today: NaiveDate,
) -> Result<FeedSummary>
where
    Q: RoomQueries + ?Sized,
    R: Rng + ?Sized,
{
    let purged = queries
        .delete_old_room_availability_data(today)
        .await
        .inspect_err(|e| error!("Failed to delete old availability data: {}", e))?;

    let start_date = match queries.get_max_date().await {
        Ok(Some(max_date)) if max_date >= today => max_date.succ_opt().unwrap_or(max_date),
        Ok(_) => today,
        Err(e) => {
            warn!(error = %e, "Failed to get max date, using current date");
            today
        }
    };

    let room_ids = queries
        .list_all_room_ids()
        .await
        .inspect_err(|e| error!("Failed to list all room ids: {}", e))?;

    let mut date_count = queries
        .get_date_count()
        .await
        .inspect_err(|e| error!("Failed to get date count: {}", e))?;

    let mut summary = FeedSummary {
        purged,
        start_date,
        days_added: 0,
        inserted: 0,
        skipped: 0,
    };
    let mut date = start_date;

    while date_count < HORIZON_DAYS {
        for &room_id in &room_ids {
            let args = AvailabilityArgs {
                date,
                is_available: random_bool(rng),
                night_rate: random_price(rng),
            };

            match queries.create_room_availability(room_id, args).await {
                Ok(_) => summary.inserted += 1,
                Err(e) => {
                    warn!(room_id, %date, error = %e, "Failed to create room availability, skipping");
                    summary.skipped += 1;
                }
            }
        }

        summary.days_added += 1;
        date_count += 1;
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    info!(
        purged = summary.purged,
        start_date = %summary.start_date,
        days_added = summary.days_added,
        inserted = summary.inserted,
        skipped = summary.skipped,
        "Availability horizon extended"
    );

    Ok(summary)
}
