use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Port the GraphQL backend listens on, on the same host as the page
    pub port: u16,
    pub graphql_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UploadConfig {
    /// Endpoint the picked image is posted to before it is encoded locally.
    /// Empty disables the round trip.
    #[serde(default)]
    pub action_url: String,
    /// Files must be strictly smaller than this
    pub max_bytes: u64,
    pub accepted_types: Vec<String>,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
graphql_path = "/api"

[upload]
action_url = ""
max_bytes = 1048576
accepted_types = ["image/jpeg", "image/png"]
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                port: 3000,
                graphql_path: "/api".to_string(),
            },
            upload: UploadConfig {
                action_url: String::new(),
                max_bytes: 1024 * 1024,
                accepted_types: vec!["image/jpeg".to_string(), "image/png".to_string()],
            },
        }
    }
}

pub fn parse_config(raw: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(raw)?;
    if config.upload.max_bytes == 0 {
        anyhow::bail!("upload.max_bytes must be positive");
    }
    Ok(config)
}

/// Load configuration
///
/// Search order:
/// 1. `TINYHOUSE_CONFIG` captured at build time
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<AppConfig> {
    match option_env!("TINYHOUSE_CONFIG") {
        Some(raw) => {
            log::info!("Loading config from TINYHOUSE_CONFIG");
            parse_config(raw)
        }
        None => parse_config(DEFAULT_CONFIG),
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::warn!("Invalid configuration, using defaults: {}", e);
        AppConfig::default()
    }
});

pub fn config() -> &'static AppConfig {
    &CONFIG
}
