//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod room;
pub mod room_availability;

// Re-export specific types to avoid conflicts
pub use room::{Entity as Room, Model as RoomModel};
pub use room_availability::{Entity as RoomAvailability, Model as RoomAvailabilityModel};
