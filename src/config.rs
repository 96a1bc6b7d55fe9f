use std::env;
use std::path::PathBuf;

use log::warn;

/// Collection endpoint baked in at build time; `FOPO_COLLECTOR_URL`
/// overrides it at runtime.
pub const DEFAULT_COLLECTOR_URL: &str =
    "https://joshtsang0916.zeabur.app/webhook-test/02c727e5-4ab0-4754-b271-cb841239f346";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub collector_url: String,
    pub result_cache_path: PathBuf,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to the
    /// compiled-in defaults for anything unset.
    pub fn from_env() -> Self {
        let collector_url = match env::var("FOPO_COLLECTOR_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            Ok(_) => {
                warn!("FOPO_COLLECTOR_URL is set but empty, using default endpoint");
                DEFAULT_COLLECTOR_URL.to_string()
            }
            Err(_) => DEFAULT_COLLECTOR_URL.to_string(),
        };

        let result_cache_path = env::var("FOPO_RESULT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_result_path());

        Self {
            collector_url,
            result_cache_path,
        }
    }
}

/// Default location of the single-slot result cache:
/// `<platform data dir>/fopo-assessment/last_result.json`.
pub fn default_result_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fopo-assessment")
        .join("last_result.json")
}
