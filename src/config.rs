//! Catalog configuration
//!
//! Settings load from a JSON file, `vitrine.json` in the working directory
//! by default. A missing default file means defaults apply; a file that
//! exists but does not parse is a hard error, not a silent fallback.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, VitrineError};

/// Default bind address for the preview server
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default port for the preview server
pub const DEFAULT_PORT: u16 = 6006;
/// Default title shown in the sidebar and page titles
pub const DEFAULT_SITE_TITLE: &str = "Vitrine";
/// Default output directory for the static export
pub const DEFAULT_OUT_DIR: &str = "vitrine-static";
/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "vitrine.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address the preview server binds to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port the preview server listens on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Catalog title
    #[serde(default = "default_site_title")]
    pub site_title: String,
    /// Where the static export lands
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
    /// Optional theme file overriding the built-in dark theme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<PathBuf>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_site_title() -> String {
    DEFAULT_SITE_TITLE.to_string()
}
fn default_out_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUT_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: default_host(),
            port: default_port(),
            site_title: default_site_title(),
            out_dir: default_out_dir(),
            theme: None,
        }
    }
}

impl Config {
    /// Load from an explicit path. Unlike [`Config::load_default`], a
    /// missing file here is a hard error.
    pub fn load(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path)
            .map_err(|e| VitrineError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let config: Config = serde_json::from_str(&raw)
            .map_err(|e| VitrineError::Config(format!("cannot parse {}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `vitrine.json` from the working directory, falling back to
    /// defaults when the file does not exist.
    pub fn load_default() -> Result<Config> {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            info!("no {} found, using defaults", CONFIG_FILE);
            return Ok(Config::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
