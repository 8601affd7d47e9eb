use cyclecal_core::recurrence::ExpansionConfig;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::path::PathBuf;
use uuid::Uuid;

use crate::cli::CalendarKind;

const CONFIG_FILE: &str = "cyclecal.toml";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// JSON snapshot exported by the task backend
    pub snapshot_path: PathBuf,
    /// User shown when `--user` is not given
    pub default_user: Option<Uuid>,
    pub default_kind: CalendarKind,
    /// Tracing filter used when RUST_LOG is unset
    pub log_level: String,
    pub expansion: ExpansionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("calendar.json"),
            default_user: None,
            default_kind: CalendarKind::default(),
            log_level: "warn".to_string(),
            expansion: ExpansionConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        let file = std::env::var("CYCLECAL_CONFIG").unwrap_or_else(|_| CONFIG_FILE.to_string());
        Figment::new()
            .merge(Toml::file(file))
            .merge(Env::prefixed("CYCLECAL_").split("__"))
            .extract()
    }
}
