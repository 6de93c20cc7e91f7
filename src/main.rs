use rand::{SeedableRng, rngs::StdRng};
use room_availability::{
    api::Server,
    config::{self, database},
    core::{feeder, room},
    errors::Result,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal: env vars can be set externally
    dotenvy::dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    info!("Configuration loaded: {:?}", app_config);

    // 4. Connect and ensure tables
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    let mut rng = StdRng::from_entropy();

    // 5. Seed rooms (optional) and fill the availability horizon
    if app_config.seed_rooms {
        room::seed_rooms(&db, &mut rng)
            .await
            .inspect_err(|e| error!("Failed to seed rooms: {}", e))?;
    }

    feeder::extend_availability_horizon(&db, &mut rng)
        .await
        .inspect_err(|e| error!("Failed to feed availability data: {}", e))?;

    // 6. Serve
    Server::new(Arc::new(db))
        .start(&app_config.server_address)
        .await
        .inspect_err(|e| error!("Server error: {}", e))
}
