use thiserror::Error;

/// Errors produced by the room service.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// The requested room does not exist (or could not be looked up)
    #[error("Room not found: {room_id}")]
    RoomNotFound {
        /// The room id that was requested
        room_id: i32,
    },

    /// A read that the response cannot do without failed
    #[error("Failed to fetch {what} for room {room_id}: {source}")]
    Fetch {
        /// Which part of the room data was being fetched
        what: &'static str,
        /// The room being aggregated
        room_id: i32,
        /// Underlying store error
        #[source]
        source: Box<Error>,
    },

    /// A room id or room attribute failed validation
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Why the input was rejected
        message: String,
    },

    /// Database error from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wraps a failed essential read of `what` for `room_id`.
    pub(crate) fn fetch(what: &'static str, room_id: i32, source: Self) -> Self {
        Self::Fetch {
            what,
            room_id,
            source: Box::new(source),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
