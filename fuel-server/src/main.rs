use std::net::SocketAddr;
use std::path::Path;

use tracing_subscriber::EnvFilter;

use fuel_server::dataset::load_stations;
use fuel_server::directory::StationDirectory;
use fuel_server::search::SearchConfig;
use fuel_server::web::{AppState, create_router};

/// Default location of the station dataset.
const DEFAULT_DATA_PATH: &str = "data/fuel_stations.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Locate the dataset
    let data_path =
        std::env::var("FUEL_DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());

    // Load the dataset (fail fast if unavailable)
    let stations =
        load_stations(Path::new(&data_path)).expect("Failed to load station dataset");
    let directory = StationDirectory::new(stations);

    let stats = directory.stats();
    tracing::info!(
        total = stats.total,
        exclusive = stats.exclusive,
        primary = stats.primary,
        limited = stats.limited,
        terminals = stats.terminals,
        states = stats.states_covered,
        "station directory ready"
    );

    // Build app state
    let state = AppState::new(directory, SearchConfig::default());

    // Create router
    let app = create_router(state, "static");

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Fuel Station Locator listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health               - Health check");
    println!("  GET  /api/stations         - Search and filter stations");
    println!("  GET  /api/stations/suggest - State suggestions");
    println!("  GET  /api/facets           - Filter choices present in the data");
    println!("  GET  /api/stats            - Dataset summary");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
