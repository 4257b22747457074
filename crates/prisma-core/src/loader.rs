use crate::error::{ConfigError, Result};
use crate::schema::{self, Schema};
use crate::storage::Storage;
use std::path::Path;
use tracing::{debug, warn};

/// Read, parse and validate one document, reporting why it failed.
pub fn try_load<T: Schema, S: Storage + ?Sized>(storage: &S, path: &Path) -> Result<T> {
    let text = storage.read_text(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: serde_yaml::Value =
        serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            kind: T::KIND,
            source,
        })?;
    schema::validate(raw)
}

/// Like [`try_load`], but a failure is logged and yields `None`. One broken
/// document never stops the caller from reading the others.
pub fn load<T: Schema, S: Storage + ?Sized>(storage: &S, path: &Path) -> Option<T> {
    let kind = T::KIND;
    match try_load(storage, path) {
        Ok(doc) => {
            debug!(kind = %kind, file = %path.display(), "loaded configuration document");
            Some(doc)
        }
        Err(e) => {
            warn!(kind = %kind, file = %path.display(), error = %e, "ignoring configuration document");
            None
        }
    }
}
