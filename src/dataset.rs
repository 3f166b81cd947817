//! Dataset files: loading scraped records and dumping them back.
//!
//! Two layouts are read:
//!
//! ```text
//! scraped:  [ { "<actor>": {..., "json_class": "Actor"} },
//!             { "<movie>": {..., "json_class": "Movie", "wiki_page": .., "box_office": ..} } ]
//! plain:    { "actors": { "<actor>": {..} }, "movies": { "<movie>": {..} } }
//! ```
//!
//! Only the plain layout is written.

use std::io::{Read, Write};
use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use tracing::info;

use crate::model::{ActorRecord, AttributeRecord, MovieRecord};
use crate::{Error, Result};

/// Both record collections, keyed by name, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub actors: IndexMap<String, ActorRecord>,
    #[serde(default)]
    pub movies: IndexMap<String, MovieRecord>,
}

impl Dataset {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json_value(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Self::from_json_value(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(std::io::BufReader::new(file))?;
        info!(
            path = %path.display(),
            actors = dataset.actors.len(),
            movies = dataset.movies.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn from_json_value(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Array(parts) => {
                let [actors, movies]: [JsonValue; 2] = parts.try_into().map_err(|parts: Vec<_>| {
                    Error::InvalidRecord(format!(
                        "scraped dataset must be [actors, movies], got {} elements",
                        parts.len()
                    ))
                })?;
                Ok(Self {
                    actors: collection(actors, |_| {})?,
                    movies: collection(movies, rename_scraped_movie_fields)?,
                })
            }
            JsonValue::Object(mut top) => Ok(Self {
                actors: collection(top.remove("actors").unwrap_or_default(), |_| {})?,
                movies: collection(top.remove("movies").unwrap_or_default(), |_| {})?,
            }),
            other => Err(Error::InvalidRecord(format!(
                "dataset must be an array or object, got {}",
                json_type(&other)
            ))),
        }
    }

    /// Write the plain layout.
    pub fn write_json(&self, writer: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}

/// Decode one `name → record` map. A record's own `name` wins over its
/// key; records without one take the key.
fn collection<R>(value: JsonValue, fix: impl Fn(&mut Map<String, JsonValue>)) -> Result<IndexMap<String, R>>
where
    R: DeserializeOwned + AttributeRecord,
{
    let entries = match value {
        JsonValue::Null => return Ok(IndexMap::new()),
        JsonValue::Object(entries) => entries,
        other => {
            return Err(Error::InvalidRecord(format!(
                "{} collection must be an object, got {}",
                R::KIND,
                json_type(&other)
            )));
        }
    };

    let mut out = IndexMap::with_capacity(entries.len());
    for (key, raw) in entries {
        let JsonValue::Object(mut fields) = raw else {
            return Err(Error::InvalidRecord(format!("{} '{key}' is not an object", R::KIND)));
        };
        fields.remove("json_class");
        fix(&mut fields);
        if !fields.get("name").is_some_and(JsonValue::is_string) {
            fields.insert("name".into(), JsonValue::String(key.clone()));
        }
        let record: R = serde_json::from_value(JsonValue::Object(fields))?;
        out.insert(record.name().to_owned(), record);
    }
    Ok(out)
}

fn rename_scraped_movie_fields(fields: &mut Map<String, JsonValue>) {
    for (from, to) in [("wiki_page", "url"), ("box_office", "gross")] {
        if let Some(v) = fields.remove(from) {
            fields.insert(to.into(), v);
        }
    }
}

fn json_type(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRAPED: &str = r#"[
        {"Bruce Willis": {"json_class": "Actor", "name": "Bruce Willis", "age": 61,
                          "total_gross": 562709189, "movies": ["The Kid"]}},
        {"The Kid": {"json_class": "Movie", "name": "The Kid", "wiki_page": "https://en.wikipedia.org/wiki/The_Kid",
                     "box_office": 110317580, "year": 2000, "actors": ["Bruce Willis"]}}
    ]"#;

    #[test]
    fn test_scraped_layout() {
        let ds = Dataset::from_json_str(SCRAPED).unwrap();
        let kid = &ds.movies["The Kid"];
        assert_eq!(kid.gross, Some(110_317_580.0));
        assert_eq!(kid.url.as_deref(), Some("https://en.wikipedia.org/wiki/The_Kid"));
        assert!(kid.extra.get("json_class").is_none());
        assert_eq!(ds.actors["Bruce Willis"].age, Some(61));
    }

    #[test]
    fn test_plain_layout_names_from_keys() {
        let ds = Dataset::from_json_str(
            r#"{"actors": {"Zed": {"age": 3}, "Amy": {"age": 4}}, "movies": {}}"#,
        )
        .unwrap();
        let names: Vec<&str> = ds.actors.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
        assert_eq!(ds.actors["Amy"].name, "Amy");
    }

    #[test]
    fn test_write_then_read_plain() {
        let ds = Dataset::from_json_str(SCRAPED).unwrap();
        let mut buf = Vec::new();
        ds.write_json(&mut buf).unwrap();
        let back = Dataset::from_reader(buf.as_slice()).unwrap();
        assert_eq!(back, ds);
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(matches!(Dataset::from_json_str("[1]"), Err(Error::InvalidRecord(_))));
        assert!(matches!(Dataset::from_json_str("42"), Err(Error::InvalidRecord(_))));
        assert!(matches!(
            Dataset::from_json_str(r#"{"actors": {"A": 5}}"#),
            Err(Error::InvalidRecord(_))
        ));
    }
}
