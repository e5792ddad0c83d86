use std::env;

use crate::auth::AdminCredentials;

/// Process configuration, loaded once at startup and handed to handlers
/// through `web::Data` rather than read from the environment per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub admin: Option<AdminCredentials>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: var_or("PORT", "5000")
                .parse()
                .unwrap_or_else(|e| {
                    log::warn!("Invalid PORT value ({e}), falling back to 5000");
                    5000
                }),
            database_url: var_or("DATABASE_URL", "sqlite:feedback.db"),
            admin: AdminCredentials::from_env(),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        log::info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
