//! # Bipartite Actor/Movie Graph
//!
//! Owns two disjoint vertex collections (actors, movies) and the edge set
//! between them. Every edge is stored three times: in the actor's adjacency
//! map, in the movie's adjacency map, and in the edge set. All mutation goes
//! through `Graph` so the three stay in step.
//!
//! ## Limitations
//!
//! - **Edges are keyed by (actor, movie)**: re-adding an edge with a
//!   different weight replaces the weight everywhere. There are no
//!   multi-edges.
//! - **Siblings are a batch computation**: `derive_actor_siblings()` must be
//!   re-run after edges change. It groups actors by shared neighbor, so its
//!   cost is the sum of squared group sizes; a movie with a very large cast
//!   dominates it. Fine for hundreds to low thousands of actors.
//! - **Names are not checked across collections**: an actor and a movie may
//!   share a name. `all_vertices()` then reports the movie.

mod build;

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, trace, warn};

use crate::model::*;

/// Edge-set key: (actor name, movie name).
type EdgeKey = (String, String);

/// Borrowed view of a vertex from either collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VertexRef<'g> {
    Actor(&'g ActorVertex),
    Movie(&'g MovieVertex),
}

impl<'g> VertexRef<'g> {
    pub fn name(&self) -> &'g str {
        match self {
            VertexRef::Actor(v) => v.name(),
            VertexRef::Movie(v) => v.name(),
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            VertexRef::Actor(_) => RecordKind::Actor,
            VertexRef::Movie(_) => RecordKind::Movie,
        }
    }

    pub fn neighbors(&self) -> &'g IndexMap<String, f64> {
        match self {
            VertexRef::Actor(v) => v.neighbors(),
            VertexRef::Movie(v) => v.neighbors(),
        }
    }
}

/// The actor/movie graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    actors: IndexMap<String, ActorVertex>,
    movies: IndexMap<String, MovieVertex>,
    edges: IndexMap<EdgeKey, Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Vertices
    // ========================================================================

    /// Insert an actor vertex, replacing any actor of the same name.
    ///
    /// The replaced vertex's edges are dropped from the movies it touched
    /// and from the edge set; the new vertex starts unconnected.
    pub fn add_actor_vertex(&mut self, name: impl Into<String>, content: ActorRecord) -> &mut ActorVertex {
        let name = name.into();
        if self.actors.contains_key(&name) {
            debug!(actor = %name, "replacing actor vertex");
            self.detach_actor(&name);
        }
        if self.movies.contains_key(&name) {
            warn!(name = %name, "actor shares its name with a movie");
        }
        let vertex = Vertex::new(name.clone(), content);
        let (idx, _) = self.actors.insert_full(name, vertex);
        &mut self.actors[idx]
    }

    /// Insert a movie vertex, replacing any movie of the same name.
    pub fn add_movie_vertex(&mut self, name: impl Into<String>, content: MovieRecord) -> &mut MovieVertex {
        let name = name.into();
        if self.movies.contains_key(&name) {
            debug!(movie = %name, "replacing movie vertex");
            self.detach_movie(&name);
        }
        if self.actors.contains_key(&name) {
            warn!(name = %name, "movie shares its name with an actor");
        }
        let vertex = Vertex::new(name.clone(), content);
        let (idx, _) = self.movies.insert_full(name, vertex);
        &mut self.movies[idx]
    }

    fn detach_actor(&mut self, name: &str) {
        let Some(old) = self.actors.get(name) else { return };
        let movies: Vec<String> = old.neighbors().keys().cloned().collect();
        let siblings: Vec<String> = old.siblings().iter().cloned().collect();
        for movie in movies {
            if let Some(m) = self.movies.get_mut(&movie) {
                m.remove_neighbor(name);
            }
            self.edges.shift_remove(&(name.to_owned(), movie));
        }
        for sibling in siblings {
            if let Some(s) = self.actors.get_mut(&sibling) {
                s.remove_sibling(name);
            }
        }
    }

    fn detach_movie(&mut self, name: &str) {
        let Some(old) = self.movies.get(name) else { return };
        let actors: Vec<String> = old.neighbors().keys().cloned().collect();
        for actor in actors {
            if let Some(a) = self.actors.get_mut(&actor) {
                a.remove_neighbor(name);
            }
            self.edges.shift_remove(&(actor, name.to_owned()));
        }
    }

    pub fn actor(&self, name: &str) -> Option<&ActorVertex> {
        self.actors.get(name)
    }

    pub fn movie(&self, name: &str) -> Option<&MovieVertex> {
        self.movies.get(name)
    }

    pub fn actor_vertices(&self) -> &IndexMap<String, ActorVertex> {
        &self.actors
    }

    pub fn movie_vertices(&self) -> &IndexMap<String, MovieVertex> {
        &self.movies
    }

    /// Live access to actor vertices. Changing neighbors through this
    /// bypasses the edge set; prefer `add_edge`.
    pub fn actor_vertices_mut(&mut self) -> &mut IndexMap<String, ActorVertex> {
        &mut self.actors
    }

    pub fn movie_vertices_mut(&mut self) -> &mut IndexMap<String, MovieVertex> {
        &mut self.movies
    }

    /// Both collections merged into one map, actors first. On a name
    /// collision the movie replaces the actor (at the actor's position).
    pub fn all_vertices(&self) -> IndexMap<&str, VertexRef<'_>> {
        let mut all = IndexMap::with_capacity(self.actors.len() + self.movies.len());
        for (name, v) in &self.actors {
            all.insert(name.as_str(), VertexRef::Actor(v));
        }
        for (name, v) in &self.movies {
            if let Some(VertexRef::Actor(_)) = all.insert(name.as_str(), VertexRef::Movie(v)) {
                warn!(name = %name, "actor/movie name collision; movie wins");
            }
        }
        all
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    // ========================================================================
    // Edges
    // ========================================================================

    /// Connect an actor and a movie.
    ///
    /// Silently does nothing (returns `false`) when either endpoint is not
    /// in its collection, so partially cross-referenced input can be loaded.
    pub fn add_edge(&mut self, actor: &str, movie: &str, weight: f64) -> bool {
        let (Some(a), Some(m)) = (self.actors.get_mut(actor), self.movies.get_mut(movie)) else {
            trace!(actor, movie, "skipping edge with missing endpoint");
            return false;
        };
        a.add_neighbor(movie, weight);
        m.add_neighbor(actor, weight);

        match self.edges.entry((actor.to_owned(), movie.to_owned())) {
            Entry::Occupied(mut e) => e.get_mut().weight = weight,
            Entry::Vacant(e) => {
                e.insert(Edge::new(actor, movie, weight));
            }
        }
        true
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn edge(&self, actor: &str, movie: &str) -> Option<&Edge> {
        self.edges.get(&(actor.to_owned(), movie.to_owned()))
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ========================================================================
    // Siblings
    // ========================================================================

    /// Mark every pair of distinct actors with a common neighbor as
    /// siblings of each other. Returns the number of newly linked pairs;
    /// a second call on an unchanged graph returns 0.
    pub fn derive_actor_siblings(&mut self) -> usize {
        let mut by_neighbor: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for (name, vertex) in &self.actors {
            for neighbor in vertex.neighbors().keys() {
                by_neighbor.entry(neighbor.as_str()).or_default().push(name.as_str());
            }
        }

        let mut pairs: Vec<(String, String)> = Vec::new();
        for group in by_neighbor.values() {
            for (i, a) in group.iter().enumerate() {
                for b in &group[i + 1..] {
                    if a != b && !self.actors[*a].siblings().contains(*b) {
                        pairs.push(((*a).to_owned(), (*b).to_owned()));
                    }
                }
            }
        }

        let mut linked = 0;
        for (a, b) in pairs {
            let mut new = false;
            if let Some(v) = self.actors.get_mut(&a) {
                new |= v.add_sibling(b.clone());
            }
            if let Some(v) = self.actors.get_mut(&b) {
                new |= v.add_sibling(a);
            }
            if new {
                linked += 1;
            }
        }

        debug!(actors = self.actors.len(), linked, "derived actor siblings");
        linked
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn small_graph() -> Graph {
        let mut g = Graph::new();
        g.add_actor_vertex("actor1", ActorRecord::new("actor1"));
        g.add_actor_vertex("actor2", ActorRecord::new("actor2"));
        g.add_actor_vertex("actor3", ActorRecord::new("actor3"));
        g.add_movie_vertex("movie1", MovieRecord::new("movie1"));
        g.add_movie_vertex("movie2", MovieRecord::new("movie2"));

        g.add_edge("actor1", "movie1", 3.0);
        g.add_edge("actor2", "movie1", 4.0);
        g.add_edge("actor3", "movie2", 5.0);
        g.add_edge("actor3", "movie3", 6.0);
        g
    }

    #[test]
    fn test_add_vertex_edge() {
        let mut g = small_graph();
        g.derive_actor_siblings();

        assert_eq!(g.actor_vertices().len(), 3);
        assert_eq!(g.movie_vertices().len(), 2);
        assert_eq!(g.all_vertices().len(), 5);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.actor("actor1").unwrap().siblings().len(), 1);
        assert!(g.actor("actor3").unwrap().siblings().is_empty());
    }

    #[test]
    fn test_missing_endpoint_is_noop() {
        let mut g = small_graph();
        let before = g.edge_count();
        assert!(!g.add_edge("actor1", "movie3", 1.0));
        assert!(!g.add_edge("ghost", "movie1", 1.0));
        assert_eq!(g.edge_count(), before);
        assert!(!g.actor("actor1").unwrap().has_neighbor("movie3"));
        assert!(!g.movie("movie1").unwrap().has_neighbor("ghost"));
    }

    #[test]
    fn test_readding_edge_replaces_weight() {
        let mut g = small_graph();
        assert!(g.add_edge("actor1", "movie1", 30.0));
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edge("actor1", "movie1").unwrap().weight, 30.0);
        assert_eq!(g.actor("actor1").unwrap().weight_to("movie1"), Some(30.0));
        assert_eq!(g.movie("movie1").unwrap().weight_to("actor1"), Some(30.0));
    }

    #[test]
    fn test_siblings_idempotent() {
        let mut g = small_graph();
        assert_eq!(g.derive_actor_siblings(), 1);
        assert_eq!(g.derive_actor_siblings(), 0);
        assert_eq!(g.actor("actor2").unwrap().siblings().len(), 1);
    }

    #[test]
    fn test_replacing_actor_detaches_edges() {
        let mut g = small_graph();
        g.derive_actor_siblings();
        g.add_actor_vertex("actor1", ActorRecord::new("actor1").with_age(40));

        assert_eq!(g.edge_count(), 2);
        assert!(g.actor("actor1").unwrap().neighbors().is_empty());
        assert!(!g.movie("movie1").unwrap().has_neighbor("actor1"));
        assert!(g.actor("actor2").unwrap().siblings().is_empty());
        // position in the collection is kept
        assert_eq!(g.actor_vertices().get_index_of("actor1"), Some(0));
    }

    #[test]
    fn test_live_vertex_access() {
        let mut g = small_graph();
        for (i, actor) in g.actor_vertices_mut().values_mut().enumerate() {
            actor.content_mut().age = Some(30 + i as i64);
        }
        g.movie_vertices_mut()["movie2"].content_mut().year = Some(1999);

        let oldest = crate::query::oldest_k_actors(&g, 1).unwrap();
        assert_eq!(oldest, vec![("actor3", 32)]);
        assert_eq!(crate::query::movies_in_year(&g, 1999).len(), 1);
        // content edits leave the structure alone
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_all_vertices_movie_wins_on_collision() {
        let mut g = Graph::new();
        g.add_actor_vertex("Ed", ActorRecord::new("Ed"));
        g.add_actor_vertex("Bo", ActorRecord::new("Bo"));
        g.add_movie_vertex("Ed", MovieRecord::new("Ed"));

        let all = g.all_vertices();
        assert_eq!(all.len(), 2);
        assert_eq!(all["Ed"].kind(), RecordKind::Movie);
        assert_eq!(all.get_index_of("Ed"), Some(0));
    }
}
