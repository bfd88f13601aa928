//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings read from `config/*.yaml` and `APP_*` environment variables.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub assets_dir: String,
    /// JSON file holding the advocate list.
    pub dataset_path: String,
    /// When set, advocates are read from this SQLite database instead of
    /// `dataset_path`.
    #[serde(default)]
    pub database_url: Option<String>,
}
