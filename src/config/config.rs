use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub scanner: ScannerConfig,
    pub remote: RemoteConfig,
    pub rate_limit: RateLimitConfig,
}

/// Directory and file names, all relative to the project root.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub src_dir: String,
    pub public_dir: String,
    pub images_dir: String,
    pub log_file: String,
    /// Prefix written into source files in place of the remote URL.
    pub public_prefix: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            src_dir: "src".to_string(),
            public_dir: "public".to_string(),
            images_dir: "images".to_string(),
            log_file: "image_download_log.json".to_string(),
            public_prefix: "/images".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    pub pattern: String,
    pub extensions: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            pattern: r#"https://readdy\.ai/api/search-image\?[^'"\s]+"#.to_string(),
            extensions: vec!["ts".to_string(), "tsx".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub photo_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            photo_url: "https://images.unsplash.com/photo-1496181133206-80ce9b88a853".to_string(),
            timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub delay_ms: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        RateLimitConfig { delay_ms: 500 }
    }
}

/// Loads settings from an optional `Settings.toml` in the working directory,
/// then from `APP_*` environment variables (`APP_REMOTE__TIMEOUT_SECS=5`).
/// Anything left unset keeps its built-in default.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::new("Settings.toml", FileFormat::Toml).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_readdy_layout() {
        let config = AppConfig::default();

        assert_eq!(config.paths.src_dir, "src");
        assert_eq!(config.paths.public_dir, "public");
        assert_eq!(config.paths.images_dir, "images");
        assert_eq!(config.paths.log_file, "image_download_log.json");
        assert_eq!(config.scanner.extensions, vec!["ts", "tsx"]);
        assert_eq!(config.remote.timeout_secs, 10);
        assert_eq!(config.rate_limit.delay_ms, 500);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let settings = Config::builder()
            .add_source(File::from_str(
                "[remote]\ntimeout_secs = 3\n\n[rate_limit]\ndelay_ms = 0\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let config: AppConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.remote.timeout_secs, 3);
        assert_eq!(config.rate_limit.delay_ms, 0);
        assert_eq!(config.remote.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.paths.public_prefix, "/images");
    }
}
