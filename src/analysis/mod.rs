//! Aggregate series for chart rendering.
//!
//! Each function turns graph state into an ordered list of
//! (label, value) points. Drawing them is left to whoever consumes the
//! serialized [`Series`].

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::graph::Graph;
use crate::query::engine::{hub_actors, oldest_k_actors, top_k_actors_by_total_gross};
use crate::{Error, Result};

/// One labelled value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

/// An ordered series with axis captions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<DataPoint>,
}

impl Series {
    fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            points: Vec::new(),
        }
    }

    fn with_points<L: ToString>(mut self, points: impl IntoIterator<Item = (L, f64)>) -> Self {
        self.points = points
            .into_iter()
            .map(|(label, value)| DataPoint { label: label.to_string(), value })
            .collect();
        self
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// The `n` best-connected actors by sibling count.
pub fn hub_actor_series(graph: &Graph, n: usize) -> Series {
    Series::new("Hub Actor Analysis", "Actor Names", "Actor Connection Number")
        .with_points(hub_actors(graph, n).into_iter().map(|(name, count)| (name, count as f64)))
}

pub fn top_grossing_series(graph: &Graph, k: usize) -> Result<Series> {
    Ok(Series::new("Top Grossing Actors", "Actor Names", "Total Grossing")
        .with_points(top_k_actors_by_total_gross(graph, k)?))
}

pub fn oldest_series(graph: &Graph, k: usize) -> Result<Series> {
    Ok(Series::new("Oldest Actors", "Actor Names", "Age")
        .with_points(oldest_k_actors(graph, k)?.into_iter().map(|(name, age)| (name, age as f64))))
}

/// Average `total_gross` per actor age, ascending by age. Actors with a
/// non-positive age or total gross are left out.
pub fn grossing_by_age_series(graph: &Graph) -> Result<Series> {
    let mut by_age: BTreeMap<i64, (f64, u32)> = BTreeMap::new();
    for (name, actor) in graph.actor_vertices() {
        let record = actor.content();
        let age = record
            .age
            .ok_or_else(|| Error::DataInconsistency(format!("actor '{name}' has no age")))?;
        let gross = record
            .total_gross
            .ok_or_else(|| Error::DataInconsistency(format!("actor '{name}' has no total_gross")))?;
        if age > 0 && gross > 0.0 {
            let slot = by_age.entry(age).or_default();
            slot.0 += gross;
            slot.1 += 1;
        }
    }

    Ok(Series::new("Correlation between Age and Grossing Value", "Age Range", "Average Grossing")
        .with_points(by_age.into_iter().map(|(age, (sum, n))| (age, sum / f64::from(n)))))
}

/// Movie count per release decade for years after `min_year`, labelled
/// like `"1990s"`.
pub fn movie_decade_series(graph: &Graph, min_year: i64) -> Result<Series> {
    let mut by_decade: BTreeMap<i64, usize> = BTreeMap::new();
    for (title, movie) in graph.movie_vertices() {
        let year = movie
            .content()
            .year
            .ok_or_else(|| Error::DataInconsistency(format!("movie '{title}' has no year")))?;
        if year > min_year {
            *by_decade.entry(year.div_euclid(10) * 10).or_default() += 1;
        }
    }

    Ok(Series::new("Movie Production and Year", "Decade", "Movie Count")
        .with_points(by_decade.into_iter().map(|(decade, n)| (format!("{decade}s"), n as f64))))
}

/// The standard report: hub actors, grossing by age, movies per decade.
pub fn report(graph: &Graph, config: &AnalysisConfig) -> Result<Vec<Series>> {
    let series = vec![
        hub_actor_series(graph, config.hub_count),
        grossing_by_age_series(graph)?,
        movie_decade_series(graph, config.min_decade_year)?,
    ];
    debug!(series = series.len(), "analysis report built");
    Ok(series)
}

/// Dollar amount with a magnitude word, one decimal: `$72.4 thousand`.
pub fn readable_gross(amount: f64) -> String {
    const THOUSAND: f64 = 1e3;
    const MILLION: f64 = 1e6;
    const BILLION: f64 = 1e9;

    if amount < THOUSAND {
        format!("${amount:.1}")
    } else if amount < MILLION {
        format!("${:.1} thousand", amount / THOUSAND)
    } else if amount < BILLION {
        format!("${:.1} million", amount / MILLION)
    } else {
        format!("${:.1} billion", amount / BILLION)
    }
}
