//! Application configuration. Paths and cosmetic timing knobs.

use serde::Deserialize;

/// Default delay before showing calculator results, in milliseconds.
/// Cosmetic only; carries no ordering guarantee.
pub const DEFAULT_CALC_DELAY_MS: u64 = 500;

/// Default simulated-typing delay before a bot reply, in milliseconds.
pub const DEFAULT_TYPING_DELAY_MS: u64 = 1500;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory for the JSON store. Read from RAINO_DATA_DIR.
    pub data_dir: Option<String>,

    /// Delay before showing calculator results. Read from RAINO_CALC_DELAY_MS.
    #[serde(default)]
    pub calc_delay_ms: Option<u64>,

    /// Simulated bot typing delay. Read from RAINO_TYPING_DELAY_MS.
    #[serde(default)]
    pub typing_delay_ms: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("RAINO"));
        if let Ok(path) = std::env::var("RAINO_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the data directory. Defaults to "./data".
    pub fn data_dir_or_default(&self) -> String {
        self.data_dir.clone().unwrap_or_else(|| "./data".to_string())
    }

    /// Returns the calculator delay in milliseconds. Defaults to 500.
    pub fn calc_delay_ms_or_default(&self) -> u64 {
        self.calc_delay_ms.unwrap_or(DEFAULT_CALC_DELAY_MS)
    }

    /// Returns the typing delay in milliseconds. Defaults to 1500.
    pub fn typing_delay_ms_or_default(&self) -> u64 {
        self.typing_delay_ms.unwrap_or(DEFAULT_TYPING_DELAY_MS)
    }
}
