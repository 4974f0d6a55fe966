//! anchnet credentials
//!
//! API keys are read from a JSON file, by default `$HOME/.anchnet/config`:
//!
//! ```json
//! {"publickey": "...", "privatekey": "...", "projectid": "..."}
//! ```

use super::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Default configuration directory (relative to HOME)
pub const CONFIG_DIR: &str = ".anchnet";

/// Default configuration file
pub const CONFIG_FILE: &str = "config";

/// Account credentials
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "publickey", default)]
    pub public_key: String,
    #[serde(rename = "privatekey", default)]
    pub private_key: String,
    /// Sub-account (project) id; empty for the main account
    #[serde(rename = "projectid", default)]
    pub project_id: String,
}

// Keep the private key out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .field("project_id", &self.project_id)
            .finish()
    }
}

impl Credentials {
    pub fn new(public_key: &str, private_key: &str) -> Self {
        Self {
            public_key: public_key.to_string(),
            private_key: private_key.to_string(),
            project_id: String::new(),
        }
    }

    /// Set the project id
    pub fn with_project(mut self, project_id: &str) -> Self {
        self.project_id = project_id.to_string();
        self
    }

    /// Load API keys from the given path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loading credentials from {:?}", path);
        Self::from_reader(file)
    }

    /// Load API keys from a reader
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        serde_json::from_reader(reader).map_err(Error::ConfigParse)
    }
}

/// Default credentials path: `$HOME/.anchnet/config`
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_reader() {
        let config = r#"{"publickey": "E5I9QKJF1O2B5PXE68LG", "privatekey": "secret", "projectid": "pro-ABC"}"#;
        let creds = Credentials::from_reader(config.as_bytes()).unwrap();
        assert_eq!(creds.public_key, "E5I9QKJF1O2B5PXE68LG");
        assert_eq!(creds.private_key, "secret");
        assert_eq!(creds.project_id, "pro-ABC");
    }

    #[test]
    fn test_from_reader_without_project() {
        let config = r#"{"publickey": "pub", "privatekey": "priv"}"#;
        let creds = Credentials::from_reader(config.as_bytes()).unwrap();
        assert_eq!(creds, Credentials::new("pub", "priv"));
    }

    #[test]
    fn test_from_reader_invalid_json() {
        let err = Credentials::from_reader("not json".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"publickey": "pub", "privatekey": "priv", "projectid": "pro-1"}}"#).unwrap();

        let creds = Credentials::load(file.path()).unwrap();
        assert_eq!(creds, Credentials::new("pub", "priv").with_project("pro-1"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Credentials::load("/nonexistent/anchnet/config").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("/nonexistent/anchnet/config"));
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let creds = Credentials::new("pub", "very-secret");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("pub"));
    }

    #[test]
    fn test_default_config_path() {
        let path = default_config_path();
        assert!(path.ends_with(".anchnet/config"));
    }
}
