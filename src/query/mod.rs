//! # Query Layer
//!
//! - `engine`: typed read operations over a [`Graph`](crate::graph::Graph)
//! - `rank`: ranking by a key-extraction closure
//! - `parser`: the `attr=value` structured query language over record collections

pub mod engine;
pub mod parser;
pub mod rank;

pub use engine::{
    actor_movie_titles, actors_active_in_year, hub_actors, movie_actor_names, movie_gross,
    movies_in_country, movies_in_language, movies_in_year, oldest_k_actors,
    top_k_actors_by_total_gross, total_gross,
};
pub use parser::{parse, Clause, Combinator, StructuredQuery};
pub use rank::{rank_by, rank_by_key, top_k, RankKey};
