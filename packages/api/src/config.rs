use anyhow::{Context, Result};
use dotenvy::dotenv;
use secrecy::SecretString;
use std::env;

/// Application configuration loaded from environment variables.
///
/// Store credentials are optional: the server boots without them and
/// answers persistence requests with the matching configuration error
/// instead of refusing to start.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub supabase_db_url: Option<String>,
    pub mongo: Option<MongoSettings>,
}

/// MongoDB Atlas Data API settings.
#[derive(Debug)]
pub struct MongoSettings {
    pub endpoint: String,
    pub api_key: SecretString,
    pub data_source: String,
    pub database: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .context("PORT must be a valid number")?;

        let supabase_db_url = env::var("SUPABASE_DB_URL").ok();

        let mongo = match (
            env::var("MONGODB_DATA_API_URL"),
            env::var("MONGODB_DATA_API_KEY"),
        ) {
            (Ok(endpoint), Ok(api_key)) => Some(MongoSettings {
                endpoint,
                api_key: SecretString::from(api_key),
                data_source: env::var("MONGODB_DATA_SOURCE")
                    .unwrap_or_else(|_| "Cluster0".to_string()),
                database: env::var("MONGODB_DATABASE").unwrap_or_else(|_| "blog".to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            port,
            supabase_db_url,
            mongo,
        })
    }
}
