//! Core business logic - framework-agnostic room, availability and aggregation operations.

/// Per-day availability rows
pub mod availability;
/// Availability feeder that keeps the rolling horizon populated
pub mod feeder;
/// Store operations used by the aggregator and the feeder
pub mod queries;
/// Random sample data
pub mod random;
/// Room rows and seeding
pub mod room;
/// Room data aggregation
pub mod room_data;
/// Rate and occupancy statistics
pub mod stats;

pub use queries::RoomQueries;
pub use room_data::{RoomAggregate, Stat, get_room_data};
