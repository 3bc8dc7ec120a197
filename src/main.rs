use dotenv::dotenv;
use tracing::{info, warn};

use mousespa_backend::app::app::App;
use mousespa_backend::util::logger::Logger;

#[tokio::main]
async fn main() {
    // Load environment variables before the logger so RUST_LOG from .env applies
    let dotenv_result = dotenv();

    let _logger = Logger::new().expect("Failed to initialize logging");

    info!("🐭 Starting MouseSpa Backend");
    match dotenv_result {
        Ok(_) => info!("Loaded .env file"),
        Err(e) => warn!("No .env file loaded: {} (using system env vars)", e),
    }

    let app = App::new().await;
    app.start().await;
}
