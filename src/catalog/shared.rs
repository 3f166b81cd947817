//! Thread-shareable catalog handle.
//!
//! One `RwLock` around the whole catalog: concurrent readers, serialized
//! writers.

use std::sync::Arc;

use parking_lot::RwLock;

use super::Catalog;
use crate::config::Config;
use crate::graph::Graph;
use crate::model::{PropertyMap, Record, RecordKind};
use crate::Result;

/// Cloneable handle to a catalog behind a reader/writer lock.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self { inner: Arc::new(RwLock::new(catalog)) }
    }

    pub fn get(&self, kind: RecordKind, name: &str) -> Result<Record> {
        self.inner.read().get(kind, name)
    }

    pub fn query(&self, kind: RecordKind, query: &str) -> Result<Vec<Record>> {
        self.inner.read().query(kind, query)
    }

    pub fn insert(&self, record: impl Into<Record>) -> Result<()> {
        self.inner.write().insert(record)
    }

    pub fn update(&self, kind: RecordKind, name: &str, patch: PropertyMap) -> Result<()> {
        self.inner.write().update(kind, name, patch)
    }

    pub fn remove(&self, kind: RecordKind, name: &str) -> Result<Record> {
        self.inner.write().remove(kind, name)
    }

    /// Build a graph from the catalog as it is right now.
    pub fn build_graph(&self, config: &Config) -> Graph {
        self.inner.read().build_graph(config)
    }

    /// Run `f` with exclusive access, for edits that must not interleave
    /// with other writers.
    pub fn with_write<T>(&self, f: impl FnOnce(&mut Catalog) -> T) -> T {
        f(&mut self.inner.write())
    }
}
