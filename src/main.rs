//! Server entrypoint.

use tracing_subscriber::EnvFilter;

use workshop::{config::Config, model::app::AppState, router, seed, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("workshop=info,tower_http=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config)
        .await
        .expect("Failed to connect to database");

    if config.seed_sample_data {
        seed::seed_database(&db)
            .await
            .expect("Failed to seed sample data");
    }

    let state = AppState::new(db);
    let app = router::routes().with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!("Server running on http://localhost:{}", config.port);
    tracing::info!("GraphQL endpoint: http://localhost:{}/graphql", config.port);

    axum::serve(listener, app)
        .await
        .expect("Server exited with an error");
}
