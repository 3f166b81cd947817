//! Ranking vertices by a computed key.
//!
//! Keys are computed per call and returned alongside the names, so no
//! per-vertex scratch state is needed and two rankings can run over the
//! same graph independently.

use std::cmp::Ordering;

use crate::Result;

/// A key vertices can be ranked by. Must be a total order.
pub trait RankKey: Copy {
    fn rank_cmp(&self, other: &Self) -> Ordering;
}

impl RankKey for i64 {
    fn rank_cmp(&self, other: &Self) -> Ordering { self.cmp(other) }
}

impl RankKey for usize {
    fn rank_cmp(&self, other: &Self) -> Ordering { self.cmp(other) }
}

impl RankKey for f64 {
    fn rank_cmp(&self, other: &Self) -> Ordering { self.total_cmp(other) }
}

/// Rank `entries` by `key`, highest first.
///
/// The sort is stable: entries with equal keys keep their input order.
/// The first error returned by `key` aborts the ranking.
pub fn rank_by<'g, V, K, F>(
    entries: impl IntoIterator<Item = (&'g String, &'g V)>,
    mut key: F,
) -> Result<Vec<(&'g str, K)>>
where
    V: 'g,
    K: RankKey,
    F: FnMut(&'g V) -> Result<K>,
{
    let ranked = entries
        .into_iter()
        .map(|(name, v)| Ok((name.as_str(), key(v)?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(sort_ranked(ranked))
}

/// [`rank_by`] for keys that cannot fail.
pub fn rank_by_key<'g, V, K, F>(
    entries: impl IntoIterator<Item = (&'g String, &'g V)>,
    mut key: F,
) -> Vec<(&'g str, K)>
where
    V: 'g,
    K: RankKey,
    F: FnMut(&'g V) -> K,
{
    sort_ranked(entries.into_iter().map(|(name, v)| (name.as_str(), key(v))).collect())
}

fn sort_ranked<K: RankKey>(mut ranked: Vec<(&str, K)>) -> Vec<(&str, K)> {
    ranked.sort_by(|a, b| b.1.rank_cmp(&a.1));
    ranked
}

/// Keep the first `k` ranked entries; `k` past the end keeps them all.
pub fn top_k<T>(mut ranked: Vec<T>, k: usize) -> Vec<T> {
    ranked.truncate(k);
    ranked
}
