use std::path::PathBuf;

use serde::Deserialize;

use decora_core::config::Config;

/// Designs service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct DesignsConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// HMAC secret used to verify access-token signatures. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// API key for the image-synthesis service. Env var: `SYNTHESIS_API_KEY`.
    pub synthesis_api_key: String,
    /// Image-synthesis endpoint. Env var: `SYNTHESIS_URL`.
    #[serde(default = "default_synthesis_url")]
    pub synthesis_url: String,
    /// Model name sent with each synthesis request. Env var: `SYNTHESIS_MODEL`.
    #[serde(default = "default_synthesis_model")]
    pub synthesis_model: String,
    /// Root directory for stored artifacts, served at `/generated_images`.
    /// Env var: `ARTIFACT_ROOT`.
    #[serde(default = "default_artifact_root")]
    pub artifact_root: PathBuf,
    /// Root directory for temporary upload spooling. Env var: `UPLOAD_ROOT`.
    #[serde(default = "default_upload_root")]
    pub upload_root: PathBuf,
    /// TCP port for the HTTP server (default 3114). Env var: `DESIGNS_PORT`.
    #[serde(default = "default_designs_port")]
    pub designs_port: u16,
    /// Per-request timeout in seconds for remote calls (reference-image
    /// fetches and the synthesis call). Env var: `REMOTE_TIMEOUT_SECS`.
    #[serde(default = "default_remote_timeout_secs")]
    pub remote_timeout_secs: u64,
}

impl Config for DesignsConfig {}

fn default_synthesis_url() -> String {
    "https://api.openai.com/v1/images/edits".to_owned()
}

fn default_synthesis_model() -> String {
    "gpt-image-1".to_owned()
}

fn default_artifact_root() -> PathBuf {
    PathBuf::from("./generated_images")
}

fn default_upload_root() -> PathBuf {
    PathBuf::from("./uploads")
}

fn default_designs_port() -> u16 {
    3114
}

fn default_remote_timeout_secs() -> u64 {
    30
}
