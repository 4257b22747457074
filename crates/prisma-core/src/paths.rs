use crate::types::DocumentKind;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const PRISMA_DIR: &str = ".prisma";
pub const CONFIG_DIR: &str = ".prisma/configuracoes/prisma";

pub const PATHS_FILE: &str = "caminhos.yaml";
pub const INTEGRATIONS_FILE: &str = "integracoes.yaml";
pub const QUALITY_FILE: &str = "qualidade.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn prisma_dir(root: &Path) -> PathBuf {
    root.join(PRISMA_DIR)
}

pub fn config_dir(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR)
}

pub fn document_path(config_dir: &Path, kind: DocumentKind) -> PathBuf {
    config_dir.join(kind.file_name())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
