//! Configuration management for the todo list server.
//!
//! Command-line flags come first; environment variables override them when
//! set to a usable value.

use clap::Parser;
use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Environment variables overriding `--port`, in lookup order.
///
/// The `PGLIKE_TODO_*` names are what earlier deployments of this server set.
pub const PORT_ENV: [&str; 2] = ["TODO_LIST_PORT", "PGLIKE_TODO_PORT"];

/// Environment variables overriding `--db-dir`, in lookup order.
pub const DB_DIR_ENV: [&str; 2] = ["TODO_LIST_DB_DIR", "PGLIKE_TODO_DB_DIR"];

/// File name of the database inside the data directory.
pub const DB_FILE_NAME: &str = "todos.db";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 9004;

/// Command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "todo-list", version, about = "Server-rendered todo list")]
pub struct Args {
    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory holding the database file
    #[arg(long, default_value = ".")]
    pub db_dir: PathBuf,
}

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Listening port
    pub port: u16,
    /// Directory holding `todos.db`
    pub db_dir: PathBuf,
}

impl Config {
    /// Resolve flags against the process environment.
    #[must_use]
    pub fn from_args(args: Args) -> Self {
        Self::resolve(args, |key| env::var(key).ok())
    }

    /// Resolve flags against an arbitrary variable lookup.
    ///
    /// The first [`PORT_ENV`] variable holding a valid port number replaces
    /// the port; invalid values are logged and skipped. The first non-empty
    /// [`DB_DIR_ENV`] variable replaces the directory.
    #[must_use]
    pub fn resolve<F>(args: Args, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = PORT_ENV
            .iter()
            .find_map(|&key| {
                let raw = lookup(key)?;
                match raw.parse::<u16>() {
                    Ok(port) => Some(port),
                    Err(_) => {
                        tracing::warn!(variable = key, value = %raw, "Ignoring invalid port");
                        None
                    }
                }
            })
            .unwrap_or(args.port);

        let db_dir = DB_DIR_ENV
            .iter()
            .find_map(|&key| lookup(key).filter(|dir| !dir.is_empty()))
            .map_or(args.db_dir, PathBuf::from);

        Self { port, db_dir }
    }

    /// Full path of the database file.
    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.db_dir.join(DB_FILE_NAME)
    }

    /// Address to bind: all interfaces on the configured port.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            db_dir: PathBuf::from("."),
        }
    }
}
