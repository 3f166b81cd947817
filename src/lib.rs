//! # cinegraph: Actor/Movie Relationship Graph
//!
//! A bipartite graph of actors and movies built from scraped records, with
//! the questions people ask of it: what did a movie gross, who starred in
//! what, who are the top-grossing or oldest actors, what came out in a given
//! year, language or country, and which actors are the best connected.
//!
//! ## Design Principles
//!
//! 1. **Typed records**: `ActorRecord` / `MovieRecord` carry the fields the
//!    graph needs, plus an open map for everything else
//! 2. **Graph owns consistency**: every edge lives in both adjacency maps
//!    and the edge set, or in none of them
//! 3. **Rankings are pure**: keys are computed per call, never stored on vertices
//! 4. **Strict queries, tolerant loading**: construction skips dangling
//!    references; queries fail loudly on missing data
//!
//! ## Quick Start
//!
//! ```rust
//! use cinegraph::{ActorRecord, Graph, MovieRecord};
//! use cinegraph::query::{top_k_actors_by_total_gross, oldest_k_actors};
//!
//! # fn example() -> cinegraph::Result<()> {
//! let actors = vec![
//!     ("A".to_string(), ActorRecord::new("A").with_age(80).with_movies(["M1"])),
//!     ("B".to_string(), ActorRecord::new("B").with_age(55).with_movies(["M1", "M2"])),
//! ];
//! let movies = vec![
//!     ("M1".to_string(), MovieRecord::new("M1").with_year(2017).with_gross(100.0)),
//!     ("M2".to_string(), MovieRecord::new("M2").with_year(2016).with_gross(200.0)),
//! ];
//! let mut graph = Graph::from_records(actors, movies);
//! graph.derive_actor_siblings();
//!
//! assert_eq!(top_k_actors_by_total_gross(&graph, 1)?, vec![("B", 300.0)]);
//! assert_eq!(oldest_k_actors(&graph, 1)?, vec![("A", 80)]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod query;
pub mod analysis;
pub mod catalog;
pub mod dataset;
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{
    ActorRecord, ActorVertex, AttributeRecord, Edge, MovieRecord, MovieVertex,
    PropertyMap, Record, RecordKind, Value, Vertex,
};
pub use graph::{Graph, VertexRef};
pub use catalog::{Catalog, SharedCatalog};
pub use dataset::Dataset;
pub use config::{AnalysisConfig, Config};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    #[error("Unknown attribute '{attribute}' on record '{record}'")]
    UnknownAttribute { attribute: String, record: String },

    #[error("Data inconsistency: {0}")]
    DataInconsistency(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Type error: expected {expected}, got {got}")]
    TypeError { expected: String, got: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
