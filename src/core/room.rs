//! Room business logic - Creating, looking up, listing and seeding rooms.
//!
//! Room ids are chosen by the caller. Deleting a room does not touch its availability
//! rows; those stay until they are purged as stale.

use crate::{
    core::random::{random_bool, random_guests},
    entities::{Room, room},
    errors::{Error, Result},
};
use rand::Rng;
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use tracing::{info, instrument};

/// First room id created by [`seed_rooms`]
pub const SEED_FIRST_ROOM_ID: i32 = 100;
/// Number of rooms created by [`seed_rooms`]
pub const SEED_ROOM_COUNT: i32 = 25;

/// Arguments for creating a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateRoomArgs {
    /// Caller-assigned identifier, must be at least 1
    pub room_id: i32,
    /// Maximum guest count, must be at least 1
    pub max_guests: i32,
    /// Balcony amenity
    pub balcony: bool,
    /// Mini-fridge amenity
    pub fridge: bool,
    /// Indoor pool amenity
    pub indoor_pool: bool,
    /// Gaming console amenity
    pub gaming_console: bool,
}

impl CreateRoomArgs {
    /// Builds arguments for `room_id` with a random guest count and random amenities.
    pub fn random<R: Rng + ?Sized>(room_id: i32, rng: &mut R) -> Self {
        Self {
            room_id,
            max_guests: random_guests(rng),
            balcony: random_bool(rng),
            fridge: random_bool(rng),
            indoor_pool: random_bool(rng),
            gaming_console: random_bool(rng),
        }
    }
}

/// Creates a room after validating its id and guest count.
///
/// Fails with a database error if a room with the same id already exists.
pub async fn create_room<C>(db: &C, args: CreateRoomArgs) -> Result<room::Model>
where
    C: ConnectionTrait,
{
    if args.room_id < 1 {
        return Err(Error::InvalidInput {
            message: format!("room id must be at least 1, got {}", args.room_id),
        });
    }

    if args.max_guests < 1 {
        return Err(Error::InvalidInput {
            message: format!("max guests must be at least 1, got {}", args.max_guests),
        });
    }

    let room = room::ActiveModel {
        room_id: Set(args.room_id),
        max_guests: Set(args.max_guests),
        balcony: Set(args.balcony),
        fridge: Set(args.fridge),
        indoor_pool: Set(args.indoor_pool),
        gaming_console: Set(args.gaming_console),
    };

    Ok(room.insert(db).await?)
}

/// Finds a room by its id.
pub async fn get_room_by_id<C>(db: &C, room_id: i32) -> Result<Option<room::Model>>
where
    C: ConnectionTrait,
{
    Room::find_by_id(room_id).one(db).await.map_err(Into::into)
}

/// Deletes a room. Its availability rows are left untouched.
///
/// Returns the number of deleted rooms (0 or 1).
pub async fn delete_room<C>(db: &C, room_id: i32) -> Result<u64>
where
    C: ConnectionTrait,
{
    let result = Room::delete_by_id(room_id).exec(db).await?;
    Ok(result.rows_affected)
}

/// Lists the ids of every known room in ascending order.
pub async fn list_all_room_ids<C>(db: &C) -> Result<Vec<i32>>
where
    C: ConnectionTrait,
{
    Room::find()
        .select_only()
        .column(room::Column::RoomId)
        .order_by_asc(room::Column::RoomId)
        .into_tuple::<i32>()
        .all(db)
        .await
        .map_err(Into::into)
}

/// Populates the `rooms` table with [`SEED_ROOM_COUNT`] random rooms starting at
/// [`SEED_FIRST_ROOM_ID`].
///
/// Stops at the first failure (for example when the rooms already exist).
#[instrument(skip(db, rng))]
pub async fn seed_rooms<C, R>(db: &C, rng: &mut R) -> Result<Vec<room::Model>>
where
    C: ConnectionTrait,
    R: Rng + ?Sized,
{
    let mut rooms = Vec::with_capacity(usize::try_from(SEED_ROOM_COUNT).unwrap_or_default());

    for room_id in SEED_FIRST_ROOM_ID..SEED_FIRST_ROOM_ID + SEED_ROOM_COUNT {
        let room = create_room(db, CreateRoomArgs::random(room_id, rng)).await?;
        rooms.push(room);
    }

    info!("Seeded {} rooms.", rooms.len());
    Ok(rooms)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_and_get_room() -> Result<()> {
        let db = setup_test_db().await?;
        let args = CreateRoomArgs {
            room_id: 1,
            max_guests: 4,
            balcony: true,
            fridge: false,
            indoor_pool: true,
            gaming_console: false,
        };

        let created = create_room(&db, args).await?;
        assert_eq!(created.room_id, 1);
        assert_eq!(created.max_guests, 4);

        let fetched = get_room_by_id(&db, 1).await?.unwrap();
        assert_eq!(fetched, created);
        assert!(fetched.balcony);
        assert!(!fetched.fridge);
        assert!(fetched.indoor_pool);
        assert!(!fetched.gaming_console);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_room_validation() -> Result<()> {
        let db = setup_test_db().await?;
        let mut rng = test_rng();

        let mut args = CreateRoomArgs::random(0, &mut rng);
        let result = create_room(&db, args).await;
        assert!(matches!(result, Err(Error::InvalidInput { .. })));

        args.room_id = 1;
        args.max_guests = 0;
        let result = create_room(&db, args).await;
        assert!(matches!(result, Err(Error::InvalidInput { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_room_fails() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_room(&db, 1).await?;

        let result = create_test_room(&db, 1).await;
        assert!(matches!(result, Err(Error::Database(_))));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_room() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_room(&db, 1).await?;

        assert_eq!(delete_room(&db, 1).await?, 1);
        assert!(get_room_by_id(&db, 1).await?.is_none());
        assert_eq!(delete_room(&db, 1).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_all_room_ids() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_room(&db, 3).await?;
        create_test_room(&db, 1).await?;
        create_test_room(&db, 2).await?;

        assert_eq!(list_all_room_ids(&db).await?, vec![1, 2, 3]);
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_rooms() -> Result<()> {
        let db = setup_test_db().await?;
        let mut rng = test_rng();

        let rooms = seed_rooms(&db, &mut rng).await?;
        assert_eq!(rooms.len(), 25);

        let ids = list_all_room_ids(&db).await?;
        assert_eq!(ids.first(), Some(&100));
        assert_eq!(ids.last(), Some(&124));
        assert!(rooms.iter().all(|r| (2..=8).contains(&r.max_guests)));

        // Seeding twice collides with the existing ids
        assert!(seed_rooms(&db, &mut rng).await.is_err());

        Ok(())
    }
}
