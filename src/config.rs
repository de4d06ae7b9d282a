//! Configuration for the catalog service.

use std::path::PathBuf;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen address (host:port).
    pub listen_addr: String,

    /// SQLite file holding the audit log. Created with its parent
    /// directory if absent.
    pub audit_db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            audit_db_path: PathBuf::from("db/books.db"),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    pub fn audit_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.audit_db_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
