//! Vertex in the bipartite graph.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use super::{ActorRecord, MovieRecord};

/// A named vertex carrying its record, its adjacency map and its
/// derived sibling set.
///
/// Neighbors keep insertion order; lookups by title or actor name return
/// them in the order the edges were added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vertex<R> {
    name: String,
    content: R,
    /// adjacent vertex name → edge weight
    neighbors: IndexMap<String, f64>,
    /// other vertices of the same collection sharing at least one neighbor
    siblings: IndexSet<String>,
}

pub type ActorVertex = Vertex<ActorRecord>;
pub type MovieVertex = Vertex<MovieRecord>;

impl<R> Vertex<R> {
    pub fn new(name: impl Into<String>, content: R) -> Self {
        Self {
            name: name.into(),
            content,
            neighbors: IndexMap::new(),
            siblings: IndexSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &R {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut R {
        &mut self.content
    }

    /// Add or re-weight a neighbor.
    pub fn add_neighbor(&mut self, name: impl Into<String>, weight: f64) {
        self.neighbors.insert(name.into(), weight);
    }

    /// Returns the removed weight, if the neighbor existed.
    pub fn remove_neighbor(&mut self, name: &str) -> Option<f64> {
        self.neighbors.shift_remove(name)
    }

    pub fn neighbors(&self) -> &IndexMap<String, f64> {
        &self.neighbors
    }

    pub fn has_neighbor(&self, name: &str) -> bool {
        self.neighbors.contains_key(name)
    }

    pub fn weight_to(&self, name: &str) -> Option<f64> {
        self.neighbors.get(name).copied()
    }

    /// Returns true if the sibling was not already recorded.
    pub fn add_sibling(&mut self, name: impl Into<String>) -> bool {
        self.siblings.insert(name.into())
    }

    pub fn remove_sibling(&mut self, name: &str) -> bool {
        self.siblings.shift_remove(name)
    }

    pub fn siblings(&self) -> &IndexSet<String> {
        &self.siblings
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_neighbors_and_siblings() {
        let mut v = Vertex::new("vertex", ActorRecord::new("vertex"));
        v.add_neighbor("vertex", 3.0);
        assert!(v.add_sibling("vertex"));
        assert!(!v.add_sibling("vertex"));

        assert_eq!(v.siblings().len(), 1);
        assert_eq!(v.neighbors().len(), 1);
        assert_eq!(v.name(), "vertex");
        assert_eq!(v.weight_to("vertex"), Some(3.0));

        assert_eq!(v.remove_neighbor("vertex"), Some(3.0));
        assert!(v.remove_sibling("vertex"));
        assert_eq!(v.degree(), 0);
        assert!(v.siblings().is_empty());
    }

    #[test]
    fn test_neighbor_order_is_insertion_order() {
        let mut v = Vertex::new("m", MovieRecord::new("m"));
        v.add_neighbor("zed", 1.0);
        v.add_neighbor("amy", 2.0);
        v.add_neighbor("zed", 5.0);
        let names: Vec<&str> = v.neighbors().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zed", "amy"]);
        assert_eq!(v.weight_to("zed"), Some(5.0));
    }
}
