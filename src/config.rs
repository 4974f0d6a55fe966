//! Configuration Management
//!
//! Resolves the settings the command line tool runs with. Flags and
//! `ANCHNET_*` environment variables are merged by the caller; this module
//! fills in defaults and builds the client.

use crate::api::auth::{default_config_path, Credentials};
use crate::api::client::{Client, DEFAULT_ENDPOINT};
use crate::api::Result;
use std::path::PathBuf;

/// Resolved settings
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Credentials file, `~/.anchnet/config` when unset
    pub config_path: Option<PathBuf>,
    /// API endpoint, [`DEFAULT_ENDPOINT`] when unset
    pub endpoint: Option<String>,
    /// Zone override
    pub zone: Option<String>,
    /// Project override
    pub project: Option<String>,
}

impl Settings {
    /// Get the credentials file path
    pub fn effective_config_path(&self) -> PathBuf {
        self.config_path.clone().unwrap_or_else(default_config_path)
    }

    /// Get the endpoint (flag > env > default)
    pub fn effective_endpoint(&self) -> String {
        non_empty(&self.endpoint)
            .unwrap_or(DEFAULT_ENDPOINT)
            .to_string()
    }

    /// Load credentials, replacing the project id when one is given
    pub fn load_credentials(&self) -> Result<Credentials> {
        let credentials = Credentials::load(self.effective_config_path())?;
        Ok(self.apply_project(credentials))
    }

    fn apply_project(&self, credentials: Credentials) -> Credentials {
        match non_empty(&self.project) {
            Some(project) => credentials.with_project(project),
            None => credentials,
        }
    }

    /// Build a client from the credentials file and overrides
    pub fn client(&self) -> Result<Client> {
        let credentials = self.load_credentials()?;
        self.client_with(credentials)
    }

    /// Build a client around already loaded credentials
    pub fn client_with(&self, credentials: Credentials) -> Result<Client> {
        let endpoint = self.effective_endpoint();
        let mut client = Client::new(&endpoint, self.apply_project(credentials))?;
        if let Some(zone) = non_empty(&self.zone) {
            client.set_zone(zone);
        }

        tracing::debug!("Using endpoint {} in zone {}", endpoint, client.zone());
        Ok(client)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
