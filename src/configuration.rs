use std::path::PathBuf;
use std::time::Duration;

use config::builder::DefaultState;
use config::ConfigBuilder;

pub const DEFAULT_COLLECTION_URL: &str = "https://bjjfanatics.com/collections/daily-deals";

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub collection: CollectionSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct CollectionSettings {
    pub base_url: url::Url,
    pub timeout_secs: u64,
    pub max_pages: u32,
    /// Raw page bodies get written here when set.
    #[serde(default)]
    pub dump_dir: Option<PathBuf>,
}

impl CollectionSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct TelemetrySettings {
    pub log_level: String,
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    config::Config::builder()
        .set_default("collection.base_url", DEFAULT_COLLECTION_URL)?
        .set_default("collection.timeout_secs", 30)?
        .set_default("collection.max_pages", 50)?
        .set_default("telemetry.log_level", "info")
}

/// Defaults, then an optional `configuration.{toml,yaml,json,...}` in the
/// working directory, then `DEALS__SECTION__KEY` variables.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = defaults()?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(config::Environment::with_prefix("DEALS").separator("__"))
        .build()?;

    settings.try_deserialize()
}
