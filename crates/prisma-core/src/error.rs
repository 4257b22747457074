use crate::types::DocumentKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {kind} document: {source}")]
    Parse {
        kind: DocumentKind,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{kind} document violates schema: {reason}")]
    Schema { kind: DocumentKind, reason: String },

    #[error("failed to provision defaults in {}: {source}", path.display())]
    Provision {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown role '{0}': expected one of agents, prompts, commands, templates, specs, steering, settings")]
    UnknownRole(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl ConfigError {
    pub(crate) fn schema(kind: DocumentKind, reason: impl Into<String>) -> Self {
        ConfigError::Schema {
            kind,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
