use pokemon_review::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_tracing();

    if let Err(e) = serve(config).await {
        tracing::error!("Server stopped with error: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), pokemon_review::server::error::Error> {
    let db = startup::connect_to_database(&config).await?;

    let app = router::routes().with_state(AppState::from(db));
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
