//! Actor and movie records.
//!
//! Each record kind has a fixed set of fields the graph and query engine
//! rely on, plus an open `extra` map for anything else the scraper or the
//! API layer attaches. The [`AttributeRecord`] trait exposes both through
//! one name-based interface so structured queries can address any field.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{PropertyMap, Value};
use crate::{Error, Result};

/// Which of the two collections a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Actor,
    Movie,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Actor => write!(f, "actor"),
            RecordKind::Movie => write!(f, "movie"),
        }
    }
}

/// Name-based access to a record's attributes.
pub trait AttributeRecord {
    const KIND: RecordKind;

    fn name(&self) -> &str;

    /// Value of `attr`, or `None` when the record does not carry it.
    fn attribute(&self, attr: &str) -> Option<Value>;

    /// Overwrite one attribute. Known fields are type-checked and never
    /// take `null`; anything else lands in the extension map.
    fn set_attribute(&mut self, attr: &str, value: Value) -> Result<()>;
}

// ============================================================================
// ActorRecord
// ============================================================================

/// An actor as scraped: age, filmography, and whatever else came along.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActorRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default)]
    pub movies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_gross: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: PropertyMap,
}

impl ActorRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn with_age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_movies(mut self, movies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.movies = movies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_total_gross(mut self, total_gross: f64) -> Self {
        self.total_gross = Some(total_gross);
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl AttributeRecord for ActorRecord {
    const KIND: RecordKind = RecordKind::Actor;

    fn name(&self) -> &str {
        &self.name
    }

    fn attribute(&self, attr: &str) -> Option<Value> {
        match attr {
            "name" => Some(Value::from(self.name.as_str())),
            "age" => self.age.map(Value::Int),
            "movies" => Some(Value::from(self.movies.clone())),
            "total_gross" => self.total_gross.map(Value::Float),
            "url" => self.url.clone().map(Value::String),
            _ => self.extra.get(attr).cloned(),
        }
    }

    fn set_attribute(&mut self, attr: &str, value: Value) -> Result<()> {
        match attr {
            "name" => check_rename(&self.name, &value)?,
            "age" => self.age = Some(int_field(attr, value)?),
            "movies" => self.movies = string_list(attr, value)?,
            "total_gross" => self.total_gross = Some(float_field(attr, value)?),
            "url" => self.url = Some(string_field(attr, value)?),
            _ => {
                self.extra.insert(attr.to_owned(), value);
            }
        }
        Ok(())
    }
}

// ============================================================================
// MovieRecord
// ============================================================================

/// A movie as scraped: release year, box office, cast and locale lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross: Option<f64>,
    #[serde(default)]
    pub actors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: PropertyMap,
}

impl MovieRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn with_year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_gross(mut self, gross: f64) -> Self {
        self.gross = Some(gross);
        self
    }

    pub fn with_actors(mut self, actors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.actors = actors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_languages(mut self, langs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.lang = Some(langs.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_countries(mut self, countries: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.country = Some(countries.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl AttributeRecord for MovieRecord {
    const KIND: RecordKind = RecordKind::Movie;

    fn name(&self) -> &str {
        &self.name
    }

    fn attribute(&self, attr: &str) -> Option<Value> {
        match attr {
            "name" => Some(Value::from(self.name.as_str())),
            "year" => self.year.map(Value::Int),
            "gross" => self.gross.map(Value::Float),
            "actors" => Some(Value::from(self.actors.clone())),
            "lang" => self.lang.clone().map(Value::from),
            "country" => self.country.clone().map(Value::from),
            "url" => self.url.clone().map(Value::String),
            _ => self.extra.get(attr).cloned(),
        }
    }

    fn set_attribute(&mut self, attr: &str, value: Value) -> Result<()> {
        match attr {
            "name" => check_rename(&self.name, &value)?,
            "year" => self.year = Some(int_field(attr, value)?),
            "gross" => self.gross = Some(float_field(attr, value)?),
            "actors" => self.actors = string_list(attr, value)?,
            "lang" => self.lang = Some(string_list(attr, value)?),
            "country" => self.country = Some(string_list(attr, value)?),
            "url" => self.url = Some(string_field(attr, value)?),
            _ => {
                self.extra.insert(attr.to_owned(), value);
            }
        }
        Ok(())
    }
}

// ============================================================================
// Record (either kind)
// ============================================================================

/// A record of either kind, as handed across the API boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Actor(ActorRecord),
    Movie(MovieRecord),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Actor(_) => RecordKind::Actor,
            Record::Movie(_) => RecordKind::Movie,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Record::Actor(a) => &a.name,
            Record::Movie(m) => &m.name,
        }
    }

    pub fn attribute(&self, attr: &str) -> Option<Value> {
        match self {
            Record::Actor(a) => a.attribute(attr),
            Record::Movie(m) => m.attribute(attr),
        }
    }
}

impl From<ActorRecord> for Record {
    fn from(r: ActorRecord) -> Self {
        Record::Actor(r)
    }
}

impl From<MovieRecord> for Record {
    fn from(r: MovieRecord) -> Self {
        Record::Movie(r)
    }
}

// ============================================================================
// Field coercion helpers
// ============================================================================

fn type_error(expected: &str, attr: &str, got: &Value) -> Error {
    Error::TypeError {
        expected: format!("{expected} for '{attr}'"),
        got: got.type_name().into(),
    }
}

fn check_rename(current: &str, value: &Value) -> Result<()> {
    match value.as_str() {
        Some(name) if name == current => Ok(()),
        Some(name) => Err(Error::InvalidRecord(format!(
            "cannot rename '{current}' to '{name}'; remove and re-insert instead"
        ))),
        None => Err(type_error("STRING", "name", value)),
    }
}

fn int_field(attr: &str, value: Value) -> Result<i64> {
    value.as_int().ok_or_else(|| type_error("INTEGER", attr, &value))
}

fn float_field(attr: &str, value: Value) -> Result<f64> {
    value.as_float().ok_or_else(|| type_error("FLOAT", attr, &value))
}

fn string_field(attr: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(type_error("STRING", attr, &other)),
    }
}

fn string_list(attr: &str, value: Value) -> Result<Vec<String>> {
    value.as_string_list().ok_or_else(|| type_error("LIST<STRING>", attr, &value))
}
