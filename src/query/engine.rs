//! Read-only questions over a [`Graph`].
//!
//! Exact-name lookups fail with [`Error::NotFound`]. Filters never fail for
//! lack of matches; they return an empty set. Missing data that a ranking
//! needs (a movie without `gross`, an actor without `age`) is reported as
//! [`Error::DataInconsistency`] instead of being counted as zero.

use indexmap::IndexSet;

use super::rank::{rank_by, rank_by_key, top_k};
use crate::graph::Graph;
use crate::model::{ActorVertex, MovieRecord};
use crate::{Error, Result};

// ============================================================================
// Exact lookups
// ============================================================================

/// Box office gross of a movie.
pub fn movie_gross(graph: &Graph, title: &str) -> Result<f64> {
    let movie = graph
        .movie(title)
        .ok_or_else(|| Error::NotFound(format!("Movie '{title}'")))?;
    gross_of(title, movie.content())
}

/// Titles an actor appeared in, in edge insertion order.
pub fn actor_movie_titles<'g>(graph: &'g Graph, actor: &str) -> Result<Vec<&'g str>> {
    let vertex = graph
        .actor(actor)
        .ok_or_else(|| Error::NotFound(format!("Actor '{actor}'")))?;
    Ok(vertex.neighbors().keys().map(String::as_str).collect())
}

/// Actors of a movie, in edge insertion order.
pub fn movie_actor_names<'g>(graph: &'g Graph, title: &str) -> Result<Vec<&'g str>> {
    let vertex = graph
        .movie(title)
        .ok_or_else(|| Error::NotFound(format!("Movie '{title}'")))?;
    Ok(vertex.neighbors().keys().map(String::as_str).collect())
}

// ============================================================================
// Rankings
// ============================================================================

/// Sum of `gross` over every movie the actor is connected to.
pub fn total_gross(graph: &Graph, actor: &ActorVertex) -> Result<f64> {
    actor.neighbors().keys().try_fold(0.0, |sum, title| {
        let movie = graph.movie(title).ok_or_else(|| {
            Error::DataInconsistency(format!(
                "actor '{}' is linked to unknown movie '{title}'",
                actor.name()
            ))
        })?;
        Ok(sum + gross_of(title, movie.content())?)
    })
}

/// The `k` actors with the highest total gross, highest first.
pub fn top_k_actors_by_total_gross(graph: &Graph, k: usize) -> Result<Vec<(&str, f64)>> {
    let ranked = rank_by(graph.actor_vertices(), |actor| total_gross(graph, actor))?;
    Ok(top_k(ranked, k))
}

/// The `k` oldest actors, oldest first.
pub fn oldest_k_actors(graph: &Graph, k: usize) -> Result<Vec<(&str, i64)>> {
    let ranked = rank_by(graph.actor_vertices(), |actor| {
        actor.content().age.ok_or_else(|| {
            Error::DataInconsistency(format!("actor '{}' has no age", actor.name()))
        })
    })?;
    Ok(top_k(ranked, k))
}

/// The `n` actors with the most siblings. Only meaningful after
/// `Graph::derive_actor_siblings`.
pub fn hub_actors(graph: &Graph, n: usize) -> Vec<(&str, usize)> {
    top_k(rank_by_key(graph.actor_vertices(), |actor| actor.siblings().len()), n)
}

// ============================================================================
// Filters
// ============================================================================

/// Titles released in `year`. Movies without a year never match.
pub fn movies_in_year(graph: &Graph, year: i64) -> IndexSet<&str> {
    graph
        .movie_vertices()
        .iter()
        .filter(|(_, m)| m.content().year == Some(year))
        .map(|(title, _)| title.as_str())
        .collect()
}

/// Actors with at least one movie released in `year`.
pub fn actors_active_in_year(graph: &Graph, year: i64) -> IndexSet<&str> {
    graph
        .actor_vertices()
        .iter()
        .filter(|(_, a)| {
            a.neighbors()
                .keys()
                .filter_map(|title| graph.movie(title))
                .any(|m| m.content().year == Some(year))
        })
        .map(|(name, _)| name.as_str())
        .collect()
}

/// Titles whose language list contains `language`. Movies without a
/// language list are skipped.
pub fn movies_in_language<'g>(graph: &'g Graph, language: &str) -> IndexSet<&'g str> {
    movies_where(graph, |m| contains(m.lang.as_deref(), language))
}

/// Titles whose country list contains `country`.
pub fn movies_in_country<'g>(graph: &'g Graph, country: &str) -> IndexSet<&'g str> {
    movies_where(graph, |m| contains(m.country.as_deref(), country))
}

fn movies_where(graph: &Graph, pred: impl Fn(&MovieRecord) -> bool) -> IndexSet<&str> {
    graph
        .movie_vertices()
        .iter()
        .filter(|(_, m)| pred(m.content()))
        .map(|(title, _)| title.as_str())
        .collect()
}

fn contains(list: Option<&[String]>, needle: &str) -> bool {
    list.is_some_and(|items| items.iter().any(|s| s == needle))
}

fn gross_of(title: &str, movie: &MovieRecord) -> Result<f64> {
    movie
        .gross
        .ok_or_else(|| Error::DataInconsistency(format!("movie '{title}' has no gross")))
}
