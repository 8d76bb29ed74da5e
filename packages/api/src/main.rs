// Main entry point for the summarise API server

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_core::{build_app, Config};
use summarise::{
    DocumentStore, HttpFetcher, MongoConfig, MongoStore, PageFetcher, Pipeline, SummaryStore,
    SupabaseStore, Translator, UnconfiguredStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,api_core=debug,summarise=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting summarise API");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    let summary_store: Arc<dyn SummaryStore> = match &config.supabase_db_url {
        Some(database_url) => {
            tracing::info!("Connecting to Supabase...");
            let store = SupabaseStore::connect(database_url)
                .await
                .context("Failed to connect to Supabase")?;
            tracing::info!("Supabase connected");
            Arc::new(store)
        }
        None => {
            tracing::warn!("SUPABASE_DB_URL not set; summary persistence disabled");
            Arc::new(UnconfiguredStore::summaries())
        }
    };

    let document_store: Arc<dyn DocumentStore> = match config.mongo {
        Some(settings) => {
            let store = MongoStore::new(MongoConfig {
                endpoint: settings.endpoint,
                api_key: settings.api_key,
                data_source: settings.data_source,
                database: settings.database,
            })
            .context("Failed to create MongoDB client")?;
            Arc::new(store)
        }
        None => {
            tracing::warn!("MongoDB Data API credentials not set; full-text persistence disabled");
            Arc::new(UnconfiguredStore::documents())
        }
    };

    let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::new());
    let pipeline = Pipeline::new(fetcher, summary_store, document_store, Translator::builtin());
    let app = build_app(pipeline);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
