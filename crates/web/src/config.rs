use std::{env, path::PathBuf};

/// Runtime settings, read from the environment once at startup. Every
/// variable has a default, so a bare `cargo run` serves the built-in
/// seed table.
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub listen_address: String,
    /// Parking records CSV. The seed table is used when unset.
    pub parking_csv: Option<PathBuf>,
    /// Fuel price export CSV. Fuel endpoints run empty when unset.
    pub fuel_csv: Option<PathBuf>,
    pub geocoder_base_url: String,
    pub geocoder_user_agent: String,
}

impl WebConfig {
    pub fn from_env() -> Self {
        Self {
            listen_address: env::var("PARKING_LISTEN_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            parking_csv: env::var_os("PARKING_DATA_CSV").map(PathBuf::from),
            fuel_csv: env::var_os("FUEL_PRICE_CSV").map(PathBuf::from),
            geocoder_base_url: env::var("GEOCODER_BASE_URL")
                .unwrap_or_else(|_| geocoding::DEFAULT_BASE_URL.to_string()),
            geocoder_user_agent: env::var("GEOCODER_USER_AGENT")
                .unwrap_or_else(|_| geocoding::DEFAULT_USER_AGENT.to_string()),
        }
    }
}
