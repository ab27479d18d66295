use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use derown_site::analytics::Analytics;
use derown_site::config::Config;
use derown_site::prefs::{ConsentPrefs, LanguagePrefs};
use derown_site::server::{self, AppState};
use derown_site::storage::PreferenceStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("derown_site=info".parse()?),
        )
        .init();

    info!("Starting Derown Technology site");

    // Load configuration from environment
    let config = Arc::new(Config::from_env()?);

    // Preference store plus the two providers, created once for the process
    let store = PreferenceStore::open(&config.preferences_file);
    let analytics = Arc::new(Analytics::new());
    let language = Arc::new(LanguagePrefs::load(store.clone()));
    let consent = Arc::new(ConsentPrefs::load(store, analytics));

    info!(
        "Preferences loaded: language={}, consent={:?}",
        language.current().code(),
        consent.state()
    );

    let state = AppState::new(Arc::clone(&config), language, consent);
    let app = server::router(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
