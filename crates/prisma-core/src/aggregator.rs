//! Entry point of the configuration subsystem.
//!
//! [`ConfigAggregator`] provisions the configuration directory on first use,
//! reads the three documents concurrently, merges each over its built-in
//! default, sanitizes the path table and keeps the result in a single-slot
//! cache until [`ConfigAggregator::clear_cache`] is called.

use crate::defaults;
use crate::error::Result;
use crate::loader;
use crate::path_guard;
use crate::paths;
use crate::schema::{IntegrationsDocument, PathsDocument, QualityDocument};
use crate::storage::{FsStorage, Storage};
use crate::types::{DocumentKind, MergedConfiguration, PathTable, Role};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::ScopedJoinHandle;
use tracing::{debug, error, warn};

struct CachedConfig {
    root: PathBuf,
    config: Arc<MergedConfiguration>,
}

pub struct ConfigAggregator<S: Storage = FsStorage> {
    storage: S,
    cache: Mutex<Option<CachedConfig>>,
}

impl ConfigAggregator<FsStorage> {
    pub fn new() -> Self {
        Self::with_storage(FsStorage)
    }
}

impl Default for ConfigAggregator<FsStorage> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Storage> ConfigAggregator<S> {
    pub fn with_storage(storage: S) -> Self {
        Self {
            storage,
            cache: Mutex::new(None),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the merged configuration for `root`.
    ///
    /// Returns `Ok(None)` when none of the three documents could be loaded;
    /// nothing is cached in that case. Errors are reserved for failing to
    /// provision the default documents.
    ///
    /// The cache lock is held for the whole load, so concurrent cold starts
    /// for the same root perform the work once.
    pub fn load_all(&self, root: &Path) -> Result<Option<Arc<MergedConfiguration>>> {
        let mut slot = self.lock();
        if let Some(cached) = slot.as_ref().filter(|c| c.root == root) {
            debug!(root = %root.display(), "configuration cache hit");
            return Ok(Some(Arc::clone(&cached.config)));
        }

        let config_dir = paths::config_dir(root);
        if !self.storage.exists(&config_dir) {
            defaults::ensure_defaults(&self.storage, &config_dir)?;
        }

        let (paths_doc, integrations_doc, quality_doc) = self.load_documents(&config_dir);
        if paths_doc.is_none() && integrations_doc.is_none() && quality_doc.is_none() {
            error!(dir = %config_dir.display(), "all configuration documents failed to load");
            return Ok(None);
        }

        let config = Arc::new(merge(paths_doc, integrations_doc, quality_doc, root));
        *slot = Some(CachedConfig {
            root: root.to_path_buf(),
            config: Arc::clone(&config),
        });
        debug!(root = %root.display(), "configuration cached");
        Ok(Some(config))
    }

    pub fn clear_cache(&self) {
        *self.lock() = None;
    }

    pub fn is_cached(&self) -> bool {
        self.lock().is_some()
    }

    /// The cached path for `role`, or its built-in default when nothing is
    /// cached.
    pub fn get_path(&self, role: Role) -> String {
        match self.lock().as_ref() {
            Some(cached) => cached.config.paths.get(role).to_string(),
            None => PathTable::default().get(role).to_string(),
        }
    }

    pub fn resolve_path(&self, root: &Path, role: Role) -> PathBuf {
        root.join(self.get_path(role))
    }

    fn lock(&self) -> MutexGuard<'_, Option<CachedConfig>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load_documents(
        &self,
        config_dir: &Path,
    ) -> (
        Option<PathsDocument>,
        Option<IntegrationsDocument>,
        Option<QualityDocument>,
    ) {
        let storage = &self.storage;
        std::thread::scope(|s| {
            let paths_doc = s.spawn(|| {
                loader::load::<PathsDocument, _>(
                    storage,
                    &paths::document_path(config_dir, DocumentKind::Paths),
                )
            });
            let integrations_doc = s.spawn(|| {
                loader::load::<IntegrationsDocument, _>(
                    storage,
                    &paths::document_path(config_dir, DocumentKind::Integrations),
                )
            });
            let quality_doc = loader::load::<QualityDocument, _>(
                storage,
                &paths::document_path(config_dir, DocumentKind::Quality),
            );
            (join(paths_doc), join(integrations_doc), quality_doc)
        })
    }
}

fn join<T>(handle: ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
}

/// Combine loaded documents into a configuration.
///
/// A missing document is replaced by that kind's default document; the
/// resolved settings then fill any optional block the document left out,
/// and finally every path is checked against `root`.
pub fn merge(
    paths_doc: Option<PathsDocument>,
    integrations_doc: Option<IntegrationsDocument>,
    quality_doc: Option<QualityDocument>,
    root: &Path,
) -> MergedConfiguration {
    let paths_doc = paths_doc.unwrap_or_default();
    let integrations_doc = integrations_doc.unwrap_or_default();
    let quality_doc = quality_doc.unwrap_or_default();

    let mut config = MergedConfiguration {
        paths: paths_doc.paths,
        integrations: integrations_doc.claude.into_settings(),
        quality: quality_doc.validation,
    };
    sanitize_paths(&mut config.paths, root);
    config
}

/// Replace every inadmissible entry of `table` with its default.
pub fn sanitize_paths(table: &mut PathTable, root: &Path) {
    let defaults = PathTable::default();
    for role in Role::ALL {
        let value = table.get(role);
        if !path_guard::is_admissible(value, root) {
            warn!(role = %role, value = %value, "rejected path outside the workspace, using default");
            table.set(role, defaults.get(role));
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
