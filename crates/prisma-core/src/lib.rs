//! `prisma-core` — layered configuration for prisma workspaces.
//!
//! Three YAML documents under `.prisma/configuracoes/prisma/` describe where
//! agent assets live, how the Claude CLI is invoked, and how validation
//! behaves. [`ConfigAggregator::load_all`] turns them into one
//! [`MergedConfiguration`]:
//!
//! ```text
//! ensure_defaults ──▶ load × 3 (concurrent) ──▶ merge ──▶ sanitize_paths ──▶ cache
//! ```
//!
//! A document that is missing, malformed or violates its schema is replaced
//! by that kind's defaults; only when all three fail is the load abandoned.

pub mod aggregator;
pub mod defaults;
pub mod error;
pub mod io;
pub mod loader;
pub mod path_guard;
pub mod paths;
pub mod schema;
pub mod storage;
pub mod types;

#[cfg(test)]
mod testing;

pub use aggregator::ConfigAggregator;
pub use error::{ConfigError, Result};
pub use storage::{FsStorage, Storage};
pub use types::{
    DocumentKind, IntegrationsSettings, InvocationMode, LogLevel, MergedConfiguration, PathTable,
    QualitySettings, Role, TerminalSettings,
};
