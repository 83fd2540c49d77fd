use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Settings {
    // Application
    pub app_name: String,
    pub app_version: String,
    pub debug: bool,
    pub environment: String,

    // Server
    pub host: String,
    pub port: u16,

    // Database
    pub database_url: String,

    // CORS
    pub allowed_origins: String,

    // Logging
    pub log_level: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Application
            app_name: std::env::var("APP_NAME")
                .unwrap_or_else(|_| "Forsa AI".to_string()),
            app_version: std::env::var("APP_VERSION")
                .unwrap_or_else(|_| "0.1.0".to_string()),
            debug: std::env::var("DEBUG")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),

            // Server
            host: std::env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),

            // Database - required, the service has no meaningful default
            database_url: std::env::var("DATABASE_URL")
                .context("DATABASE_URL not set")?,

            // CORS - comma-separated origin list
            allowed_origins: std::env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| {
                "http://localhost:3000,http://localhost:8000".to_string()
            }),

            // Logging
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn origins_list(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}
