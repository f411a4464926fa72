//! Server configuration.
//!
//! Values come from three layers, later ones winning: built-in defaults, an
//! optional YAML file (`-c`), and command-line flags.
//!
//! ```yaml
//! listen_port: 8080
//! document_root: /srv/www
//! mime_table: /etc/staticd/mime.types
//! not_found_page: 404.html
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 51717;
pub const DEFAULT_DOCUMENT_ROOT: &str = "/var/www";
pub const DEFAULT_MIME_TABLE: &str = "mime.types";
pub const DEFAULT_NOT_FOUND_PAGE: &str = "404.html";
pub const DEFAULT_LOG_FILE: &str = "staticd.log";

/// Minimal static file server
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "staticd", version, about)]
pub struct Cli {
    /// Run as a background process
    #[arg(short = 'd', long = "daemon")]
    pub daemon: bool,

    /// Port to listen on [default: 51717]
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Directory files are served from [default: /var/www]
    #[arg(short = 'r', long = "root")]
    pub root: Option<PathBuf>,

    /// Mime type table [default: mime.types]
    #[arg(short = 'm', long = "mime-table")]
    pub mime_table: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Where the background process writes its output [default: staticd.log]
    #[arg(short = 'l', long = "log-file")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Parses the process arguments, accepting `-help` as a spelling of `--help`.
    pub fn from_env() -> Self {
        Cli::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }
}

/// Rewrites the single-dash `-help` into `--help`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            if arg == "-help" {
                OsString::from("--help")
            } else {
                arg
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_port: u16,
    pub document_root: PathBuf,
    pub mime_table: PathBuf,
    /// File under the document root served when a request misses
    pub not_found_page: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_port: DEFAULT_PORT,
            document_root: PathBuf::from(DEFAULT_DOCUMENT_ROOT),
            mime_table: PathBuf::from(DEFAULT_MIME_TABLE),
            not_found_page: DEFAULT_NOT_FOUND_PAGE.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_yaml_str(text: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(text).context("invalid configuration")
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Layers the config file and command-line flags over the defaults.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut cfg = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(port) = cli.port {
            cfg.listen_port = port;
        }
        if let Some(root) = &cli.root {
            cfg.document_root = root.clone();
        }
        if let Some(table) = &cli.mime_table {
            cfg.mime_table = table.clone();
        }

        Ok(cfg)
    }

    /// Makes the document root absolute, failing if it does not exist.
    pub fn prepare(mut self) -> anyhow::Result<Self> {
        self.document_root = std::fs::canonicalize(&self.document_root).with_context(|| {
            format!("document root {} is not accessible", self.document_root.display())
        })?;

        if !self.document_root.is_dir() {
            anyhow::bail!("document root {} is not a directory", self.document_root.display());
        }

        Ok(self)
    }

    pub fn not_found_path(&self) -> PathBuf {
        self.document_root.join(&self.not_found_page)
    }
}
