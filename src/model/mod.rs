//! # Bipartite Graph Model
//!
//! Plain DTOs shared by the graph, the query engine and the catalog.
//!
//! Design rule: no graph state here. This module is pure data, no I/O.

pub mod value;
pub mod property_map;
pub mod record;
pub mod vertex;
pub mod edge;

pub use value::Value;
pub use property_map::PropertyMap;
pub use record::{ActorRecord, AttributeRecord, MovieRecord, Record, RecordKind};
pub use vertex::{ActorVertex, MovieVertex, Vertex};
pub use edge::Edge;
