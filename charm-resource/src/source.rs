use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// A value looked up in resource metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    Missing,
    Str(&'a str),
    /// The key is present but doesn't hold a string.
    Other,
}

impl<'a> Field<'a> {
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Field::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Decoded metadata for a single resource that fields can be read from.
///
/// An absent mapping behaves like an empty one: every field is missing.
pub trait MetaSource {
    fn field(&self, key: &str) -> Field<'_>;
}

fn json_field(value: Option<&json::JsonValue>) -> Field<'_> {
    match value {
        None | Some(json::JsonValue::Null) => Field::Missing,
        Some(value) => value.as_str().map(Field::Str).unwrap_or(Field::Other),
    }
}

impl MetaSource for json::JsonValue {
    fn field(&self, key: &str) -> Field<'_> {
        match self {
            json::JsonValue::Object(object) => object.field(key),
            _ => Field::Missing,
        }
    }
}

impl MetaSource for json::object::Object {
    fn field(&self, key: &str) -> Field<'_> {
        json_field(self.get(key))
    }
}

impl<K, V, S> MetaSource for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn field(&self, key: &str) -> Field<'_> {
        match self.get(key) {
            Some(value) => Field::Str(value.as_ref()),
            None => Field::Missing,
        }
    }
}

impl<T: MetaSource> MetaSource for Option<T> {
    fn field(&self, key: &str) -> Field<'_> {
        match self {
            Some(source) => source.field(key),
            None => Field::Missing,
        }
    }
}

impl<T: MetaSource + ?Sized> MetaSource for &T {
    fn field(&self, key: &str) -> Field<'_> {
        (**self).field(key)
    }
}
