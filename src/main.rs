use std::{error::Error, sync::Arc};

use f1_dashboard::{
    routes::{init_tracing, make_app},
    utils::{config::Config, state::AppState},
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let config = Config::init();
    init_tracing(&config.log_level);
    info!("Configuration loaded successfully");

    let state = AppState::init(&config)?;
    info!("External clients initialized successfully");

    let app = make_app(Arc::new(state));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
