//! Application state shared by every handler.

use std::sync::Arc;

use tracing::info;

use cropdoc_catalog::Catalog;
use cropdoc_contracts::error::CropdocResult;
use cropdoc_core::traits::HistoryStore;
use cropdoc_history::InMemoryHistoryStore;

use crate::config::ServerConfig;

pub struct AppState {
    /// Immutable after startup; read without locking.
    pub catalog: Catalog,
    pub history: Arc<dyn HistoryStore>,
}

impl AppState {
    pub fn new(catalog: Catalog, history: Arc<dyn HistoryStore>) -> Self {
        Self { catalog, history }
    }

    /// Load the configured catalog and start with an empty in-memory history.
    pub fn from_config(config: &ServerConfig) -> CropdocResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_file(path)?,
            None => Catalog::builtin()?,
        };
        info!(diseases = catalog.len(), "catalog ready");

        Ok(Self::new(catalog, Arc::new(InMemoryHistoryStore::new())))
    }
}
