//! PropertyMap: the open extension map on records.

use indexmap::IndexMap;
use super::Value;

/// A map of attribute names to values, kept in insertion order.
pub type PropertyMap = IndexMap<String, Value>;

impl From<PropertyMap> for Value {
    fn from(map: PropertyMap) -> Self {
        Value::Map(map)
    }
}
