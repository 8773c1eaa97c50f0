use anyhow::{anyhow, Result};
use directories::{BaseDirs, ProjectDirs};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use github_backend::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_FILE_NAME: &str = "repofinder.toml";

/// Application configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the search API
    pub api_url: String,
    /// User-Agent header sent with search requests
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: concat!("repofinder/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Load configuration: defaults, then TOML files, then `REPOFINDER_*` env vars.
    ///
    /// An explicit `config_path` replaces the search path and must exist.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        for path in config_paths(explicit_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }
        figment = figment.merge(Env::prefixed("REPOFINDER_").only(&["api_url", "user_agent"]));

        figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    pub fn merge_with_cli(&mut self, cli_api_url: Option<String>) {
        if let Some(url) = cli_api_url {
            self.api_url = url;
        }
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Err(anyhow!(
                "API URL not configured. Set via --api-url, REPOFINDER_API_URL env var, or config file"
            ));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(anyhow!(
                "Invalid API URL '{}': expected an http:// or https:// URL",
                url
            ));
        }
        Ok(())
    }
}

fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_project_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_xdg_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_local_config_path() {
        push_unique(&mut paths, path);
    }

    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

fn get_project_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "repofinder").map(|d| d.config_dir().join("config.toml"))
}

fn get_xdg_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("repofinder").join("config.toml"));
    }

    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("repofinder")
            .join("config.toml")
    })
}

fn get_local_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join(LOCAL_CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_config(contents: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "repofinder-config-{}-{}",
            std::process::id(),
            nanos
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = Config::load(Some(PathBuf::from("/nonexistent/repofinder.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let path = temp_config("api_url = \"https://ghe.example.com/api/v3\"\n");
        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.api_url, "https://ghe.example.com/api/v3");
        assert!(config.user_agent.starts_with("repofinder/"));
    }

    #[test]
    fn cli_flag_wins() {
        let mut config = Config::default();
        config.merge_with_cli(Some("http://127.0.0.1:8080".to_string()));
        assert_eq!(config.api_url, "http://127.0.0.1:8080");

        config.merge_with_cli(None);
        assert_eq!(config.api_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn validate_rejects_non_http_urls() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.api_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.api_url = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("API URL not configured"));
    }
}
