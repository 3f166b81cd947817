//! # Record Catalog
//!
//! The two flat record collections the API layer reads and writes:
//! lookup, insert, partial update, delete, and structured queries. A
//! [`Graph`] is built from a snapshot of the catalog on demand.
//!
//! ## Limitations
//!
//! - **Single writer**: `Catalog` takes `&mut self` for writes and has no
//!   internal locking. Use [`SharedCatalog`] when requests are served from
//!   several threads.
//! - **Graphs are snapshots**: edits after `build_graph()` are not
//!   reflected in an already built graph.

mod shared;

pub use shared::SharedCatalog;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::config::Config;
use crate::dataset::Dataset;
use crate::graph::Graph;
use crate::model::*;
use crate::query::parser;
use crate::{Error, Result};

/// Actor and movie records keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    actors: IndexMap<String, ActorRecord>,
    movies: IndexMap<String, MovieRecord>,
}

impl From<Dataset> for Catalog {
    fn from(ds: Dataset) -> Self {
        Self { actors: ds.actors, movies: ds.movies }
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the dataset named by `config.dataset_path`.
    pub fn open(config: &Config) -> Result<Self> {
        let path = config
            .dataset_path
            .as_ref()
            .ok_or_else(|| Error::InvalidRecord("no dataset_path configured".into()))?;
        Ok(Dataset::from_path(path)?.into())
    }

    pub fn actors(&self) -> &IndexMap<String, ActorRecord> {
        &self.actors
    }

    pub fn movies(&self) -> &IndexMap<String, MovieRecord> {
        &self.movies
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn actor(&self, name: &str) -> Result<&ActorRecord> {
        self.actors
            .get(name)
            .ok_or_else(|| Error::NotFound(format!("Actor '{name}'")))
    }

    pub fn movie(&self, name: &str) -> Result<&MovieRecord> {
        self.movies
            .get(name)
            .ok_or_else(|| Error::NotFound(format!("Movie '{name}'")))
    }

    pub fn get(&self, kind: RecordKind, name: &str) -> Result<Record> {
        match kind {
            RecordKind::Actor => self.actor(name).cloned().map(Record::Actor),
            RecordKind::Movie => self.movie(name).cloned().map(Record::Movie),
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Add a new record. Existing names must be changed with `update`.
    pub fn insert(&mut self, record: impl Into<Record>) -> Result<()> {
        match record.into() {
            Record::Actor(r) => insert_new(&mut self.actors, r),
            Record::Movie(r) => insert_new(&mut self.movies, r),
        }
    }

    /// Overwrite the attributes in `patch`, leaving the rest untouched.
    /// The patch applies as a whole: one bad attribute rejects all of it.
    pub fn update(&mut self, kind: RecordKind, name: &str, patch: PropertyMap) -> Result<()> {
        match kind {
            RecordKind::Actor => update_existing(&mut self.actors, name, patch),
            RecordKind::Movie => update_existing(&mut self.movies, name, patch),
        }
    }

    /// Remove and return a record.
    pub fn remove(&mut self, kind: RecordKind, name: &str) -> Result<Record> {
        let removed = match kind {
            RecordKind::Actor => self.actors.shift_remove(name).map(Record::Actor),
            RecordKind::Movie => self.movies.shift_remove(name).map(Record::Movie),
        };
        let record = removed.ok_or_else(|| Error::NotFound(format!("{kind} '{name}'")))?;
        debug!(%kind, name, "record removed");
        Ok(record)
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Run a structured `attr=value` query against one collection.
    pub fn query(&self, kind: RecordKind, query: &str) -> Result<Vec<Record>> {
        let q = parser::parse(query)?;
        Ok(match kind {
            RecordKind::Actor => q.evaluate(&self.actors)?.into_iter().cloned().map(Record::Actor).collect(),
            RecordKind::Movie => q.evaluate(&self.movies)?.into_iter().cloned().map(Record::Movie).collect(),
        })
    }

    // ========================================================================
    // Graph
    // ========================================================================

    pub fn build_graph(&self, config: &Config) -> Graph {
        let mut graph = Graph::from_records(self.actors.clone(), self.movies.clone());
        if config.derive_siblings {
            graph.derive_actor_siblings();
        }
        graph
    }

    pub fn to_dataset(&self) -> Dataset {
        Dataset { actors: self.actors.clone(), movies: self.movies.clone() }
    }
}

fn insert_new<R: AttributeRecord>(records: &mut IndexMap<String, R>, record: R) -> Result<()> {
    let kind = R::KIND;
    let name = record.name().to_owned();
    if name.is_empty() {
        return Err(Error::InvalidRecord(format!("{} record has no name", R::KIND)));
    }
    if records.contains_key(&name) {
        return Err(Error::AlreadyExists(format!("{} '{name}'", R::KIND)));
    }
    info!(%kind, name = %name, "record inserted");
    records.insert(name, record);
    Ok(())
}

fn update_existing<R: AttributeRecord + Clone>(
    records: &mut IndexMap<String, R>,
    name: &str,
    patch: PropertyMap,
) -> Result<()> {
    if patch.is_empty() {
        return Err(Error::InvalidRecord("empty update".into()));
    }
    let record = records
        .get_mut(name)
        .ok_or_else(|| Error::NotFound(format!("{} '{name}'", R::KIND)))?;
    let kind = R::KIND;
    let fields = patch.len();
    let mut draft = record.clone();
    for (attr, value) in patch {
        draft.set_attribute(&attr, value)?;
    }
    *record = draft;
    debug!(%kind, name, fields, "record updated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let mut c = Catalog::new();
        c.insert(ActorRecord::new("Whoopi Goldberg").with_age(61)).unwrap();
        c.insert(ActorRecord::new("Cynthia Stevenson").with_age(54)).unwrap();
        c.insert(MovieRecord::new("Ed").with_year(1996)).unwrap();
        c.insert(MovieRecord::new("Passed Away").with_year(1992)).unwrap();
        c
    }

    #[test]
    fn test_get() {
        let c = catalog();
        assert_eq!(c.actor("Whoopi Goldberg").unwrap().age, Some(61));
        assert!(matches!(c.movie("The Kids"), Err(Error::NotFound(_))));
        assert_eq!(c.get(RecordKind::Movie, "Ed").unwrap().kind(), RecordKind::Movie);
    }

    #[test]
    fn test_insert_rules() {
        let mut c = catalog();
        assert!(c.insert(MovieRecord::new("New Movie")).is_ok());
        assert!(matches!(c.insert(MovieRecord::new("Ed")), Err(Error::AlreadyExists(_))));
        assert!(matches!(c.insert(ActorRecord::default()), Err(Error::InvalidRecord(_))));
    }

    #[test]
    fn test_partial_update() {
        let mut c = catalog();
        let mut patch = PropertyMap::new();
        patch.insert("age".into(), Value::Int(81));
        c.update(RecordKind::Actor, "Whoopi Goldberg", patch).unwrap();
        assert_eq!(c.actor("Whoopi Goldberg").unwrap().age, Some(81));

        let mut patch = PropertyMap::new();
        patch.insert("box_office".into(), Value::Int(4000));
        c.update(RecordKind::Movie, "Passed Away", patch.clone()).unwrap();
        assert_eq!(c.movie("Passed Away").unwrap().extra["box_office"], Value::Int(4000));

        assert!(matches!(
            c.update(RecordKind::Movie, "Passed Away illegal", patch),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            c.update(RecordKind::Movie, "Ed", PropertyMap::new()),
            Err(Error::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_rejected_patch_leaves_record_unchanged() {
        let mut c = catalog();
        let before = c.actor("Whoopi Goldberg").unwrap().clone();

        let mut patch = PropertyMap::new();
        patch.insert("age".into(), Value::Int(99));
        patch.insert("nickname".into(), Value::from("Whoopi"));
        patch.insert("movies".into(), Value::Int(5));
        assert!(matches!(
            c.update(RecordKind::Actor, "Whoopi Goldberg", patch),
            Err(Error::TypeError { .. })
        ));
        assert_eq!(c.actor("Whoopi Goldberg").unwrap(), &before);

        let mut patch = PropertyMap::new();
        patch.insert("year".into(), Value::Null);
        assert!(c.update(RecordKind::Movie, "Ed", patch).is_err());
        assert_eq!(c.movie("Ed").unwrap().year, Some(1996));
        assert_eq!(c.query(RecordKind::Movie, "year=1996").unwrap().len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut c = catalog();
        let removed = c.remove(RecordKind::Actor, "Cynthia Stevenson").unwrap();
        assert_eq!(removed.name(), "Cynthia Stevenson");
        assert!(matches!(c.remove(RecordKind::Actor, "Cynthia Stevenson"), Err(Error::NotFound(_))));
        assert!(matches!(c.remove(RecordKind::Movie, "Ed2"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_query() {
        let c = catalog();
        let found = c.query(RecordKind::Movie, "name=Ed|year=1992").unwrap();
        assert_eq!(found.len(), 2);
        assert!(matches!(
            c.query(RecordKind::Movie, "name=Ed|years=2011"),
            Err(Error::UnknownAttribute { .. })
        ));
    }
}
