//! Structured attribute queries over a flat record collection.
//!
//! ```text
//! query   := clause ( "&" clause )*      -- every clause must match
//!          | clause ( "|" clause )*      -- any clause may match
//! clause  := attr "=" value
//! ```
//!
//! `&` and `|` cannot be mixed in one query. A value may contain a literal
//! ampersand written as `" & "` (one space on each side), e.g.
//! `name="Harry & Son"&year=1984`. Double quotes are stripped before parsing.

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::model::{AttributeRecord, Value};
use crate::{Error, Result};

/// Ampersand that belongs to a value rather than separating clauses.
const LITERAL_AMPERSAND: &str = " & ";
/// Stand-in for `LITERAL_AMPERSAND` while clauses are split.
const PLACEHOLDER: &str = "\u{1F}";

/// How clause results are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Intersection of clause matches.
    And,
    /// Union of clause matches.
    Or,
}

/// One `attr=value` test.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub attr: String,
    /// The value as written, used for `name` substring matching.
    pub raw: String,
    /// The value coerced to an integer when it parses as one.
    pub value: Value,
}

/// A parsed query.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredQuery {
    pub combinator: Combinator,
    pub clauses: Vec<Clause>,
}

/// Parse a query string.
pub fn parse(query: &str) -> Result<StructuredQuery> {
    let encoded = query.replace('"', "").replace(LITERAL_AMPERSAND, PLACEHOLDER);

    let has_or = encoded.contains('|');
    let has_and = encoded.contains('&');
    if has_or && has_and {
        return Err(Error::MalformedQuery(
            "cannot combine '&' and '|' in one query".into(),
        ));
    }

    let (combinator, separator) = if has_or {
        (Combinator::Or, '|')
    } else {
        (Combinator::And, '&')
    };

    let clauses = encoded
        .split(separator)
        .map(|part| parse_clause(&part.replace(PLACEHOLDER, LITERAL_AMPERSAND)))
        .collect::<Result<Vec<_>>>()?;

    Ok(StructuredQuery { combinator, clauses })
}

fn parse_clause(text: &str) -> Result<Clause> {
    let tokens: Vec<&str> = text.split('=').filter(|t| !t.is_empty()).collect();
    let [attr, raw] = tokens.as_slice() else {
        return Err(Error::MalformedQuery(format!(
            "expected exactly one attr=value pair, got '{text}'"
        )));
    };

    let value = match raw.trim().parse::<i64>() {
        Ok(i) => Value::Int(i),
        Err(_) => Value::from(*raw),
    };

    Ok(Clause {
        attr: (*attr).to_owned(),
        raw: (*raw).to_owned(),
        value,
    })
}

impl Clause {
    /// Keys of the records this clause matches.
    ///
    /// Every record must carry `attr`; one that doesn't fails the whole
    /// clause with `UnknownAttribute`, even if it would not have matched.
    pub fn matching<'a, R: AttributeRecord>(
        &self,
        records: &'a IndexMap<String, R>,
    ) -> Result<IndexSet<&'a str>> {
        let mut matched = IndexSet::new();
        for (key, record) in records {
            let actual = record.attribute(&self.attr).ok_or_else(|| Error::UnknownAttribute {
                attribute: self.attr.clone(),
                record: key.clone(),
            })?;
            if actual.loosely_equals(&self.value) || self.name_contains(&actual) {
                matched.insert(key.as_str());
            }
        }
        Ok(matched)
    }

    fn name_contains(&self, actual: &Value) -> bool {
        self.attr == "name" && actual.as_str().is_some_and(|name| name.contains(self.raw.as_str()))
    }
}

impl StructuredQuery {
    /// Run the query, returning matching records in collection order.
    pub fn evaluate<'a, R: AttributeRecord>(
        &self,
        records: &'a IndexMap<String, R>,
    ) -> Result<Vec<&'a R>> {
        let mut combined: Option<IndexSet<&'a str>> = None;
        for clause in &self.clauses {
            let matched = clause.matching(records)?;
            combined = Some(match combined {
                None => matched,
                Some(acc) => match self.combinator {
                    Combinator::And => acc.intersection(&matched).copied().collect(),
                    Combinator::Or => acc.union(&matched).copied().collect(),
                },
            });
        }
        let combined = combined.unwrap_or_default();

        let kind = R::KIND;
        debug!(
            kind = %kind,
            clauses = self.clauses.len(),
            matched = combined.len(),
            "structured query evaluated"
        );

        Ok(records
            .iter()
            .filter(|(key, _)| combined.contains(key.as_str()))
            .map(|(_, record)| record)
            .collect())
    }
}

/// Parse and evaluate in one step.
pub fn query<'a, R: AttributeRecord>(
    records: &'a IndexMap<String, R>,
    query: &str,
) -> Result<Vec<&'a R>> {
    parse(query)?.evaluate(records)
}
