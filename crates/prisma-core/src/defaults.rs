use crate::error::{ConfigError, Result};
use crate::paths;
use crate::storage::Storage;
use crate::types::DocumentKind;
use std::path::Path;
use tracing::info;

pub const DEFAULT_PATHS_YAML: &str = "\
# Prisma paths
# Every path is relative to the workspace root.

paths:
  agents: .claude/agents/prisma
  prompts: .claude/system-prompts
  commands: .claude/commands/prisma
  templates: .claude/templates
  specs: .prisma/projeto/especificacoes
  steering: .claude/steering
  settings: .claude/settings
";

pub const DEFAULT_INTEGRATIONS_YAML: &str = "\
# Prisma integrations

claude:
  invocationMode: cli  # cli | extension
  cliPath: claude
  terminal:
    activationDelay: 800  # ms, 0-5000
";

pub const DEFAULT_QUALITY_YAML: &str = "\
# Prisma validation

validation:
  enabled: true
  strictMode: false
  logLevel: warn  # error | warn | info | debug
  showNotifications: true
";

pub fn default_document(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Paths => DEFAULT_PATHS_YAML,
        DocumentKind::Integrations => DEFAULT_INTEGRATIONS_YAML,
        DocumentKind::Quality => DEFAULT_QUALITY_YAML,
    }
}

/// Create `config_dir` with the three baseline documents if the directory is
/// absent. An existing directory is left alone, whatever it contains.
///
/// Returns `true` when the directory was provisioned by this call.
pub fn ensure_defaults<S: Storage + ?Sized>(storage: &S, config_dir: &Path) -> Result<bool> {
    if storage.exists(config_dir) {
        return Ok(false);
    }

    storage
        .create_dir(config_dir, true)
        .map_err(|source| ConfigError::Provision {
            path: config_dir.to_path_buf(),
            source,
        })?;

    for kind in DocumentKind::ALL {
        let path = paths::document_path(config_dir, kind);
        // A concurrent provisioner may have won the race for this file.
        if storage.exists(&path) {
            continue;
        }
        storage
            .write_text(&path, default_document(kind))
            .map_err(|source| ConfigError::Provision {
                path: path.clone(),
                source,
            })?;
    }

    info!(dir = %config_dir.display(), "provisioned default configuration");
    Ok(true)
}
