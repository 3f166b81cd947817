//! Graph construction from actor and movie records.

use tracing::{debug, info};

use super::Graph;
use crate::model::{ActorRecord, MovieRecord};

impl Graph {
    /// Build a graph from two record collections.
    ///
    /// Edges come from both sides: each actor's `movies` list and each
    /// movie's `actors` list. References to names that were not ingested
    /// are skipped. The edge weight is the actor's age (0 when unknown).
    /// Sibling derivation is left to the caller.
    pub fn from_records<A, M>(actors: A, movies: M) -> Self
    where
        A: IntoIterator<Item = (String, ActorRecord)>,
        M: IntoIterator<Item = (String, MovieRecord)>,
    {
        let mut graph = Graph::new();
        for (name, record) in actors {
            graph.add_actor_vertex(name, record);
        }
        for (name, record) in movies {
            graph.add_movie_vertex(name, record);
        }

        let mut planned: Vec<(String, String, f64)> = Vec::new();
        for (name, actor) in graph.actor_vertices() {
            let weight = age_weight(actor.content());
            for title in &actor.content().movies {
                planned.push((name.clone(), title.clone(), weight));
            }
        }
        for (title, movie) in graph.movie_vertices() {
            for name in &movie.content().actors {
                if let Some(actor) = graph.actor(name) {
                    planned.push((name.clone(), title.clone(), age_weight(actor.content())));
                }
            }
        }

        let mut skipped = 0usize;
        for (actor, movie, weight) in &planned {
            if !graph.add_edge(actor, movie, *weight) {
                skipped += 1;
            }
        }
        if skipped > 0 {
            debug!(skipped, "dangling actor/movie references ignored");
        }

        info!(
            actors = graph.actor_count(),
            movies = graph.movie_count(),
            edges = graph.edge_count(),
            "graph constructed"
        );
        graph
    }
}

fn age_weight(record: &ActorRecord) -> f64 {
    record.age.map(|a| a as f64).unwrap_or_default()
}
