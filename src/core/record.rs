//! # Records
//!
//! A record is one item returned by an endpoint. Backends are loosely
//! structured, so every typed field is optional and a field holding the wrong
//! JSON type reads as absent instead of failing the whole record.
//!
//! The original JSON value is kept alongside the typed view so the detail
//! modal can show every field, including ones we don't model.

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::core::endpoint::EndpointKey;

/// Deserializes a field, mapping type mismatches to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub body: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Company {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Address {
    #[serde(default, deserialize_with = "lenient")]
    pub city: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct User {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub company: Option<Company>,
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<Address>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub completed: Option<bool>,
}

/// Typed view of a record, one variant per endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordKind {
    Post(Post),
    User(User),
    Album(Album),
    Todo(Todo),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub kind: RecordKind,
    raw: Value,
}

/// Non-object values (a bare number in the array, say) get the default view.
fn typed<T: DeserializeOwned + Default>(value: &Value) -> T {
    match serde_json::from_value(value.clone()) {
        Ok(typed) => typed,
        Err(e) => {
            debug!("Record is not an object ({}), using empty view", e);
            T::default()
        }
    }
}

impl Record {
    /// Builds the typed view for `key` from a raw JSON element. Never fails.
    pub fn from_value(key: EndpointKey, raw: Value) -> Self {
        let kind = match key {
            EndpointKey::Posts => RecordKind::Post(typed(&raw)),
            EndpointKey::Users => RecordKind::User(typed(&raw)),
            EndpointKey::Albums => RecordKind::Album(typed(&raw)),
            EndpointKey::Todos => RecordKind::Todo(typed(&raw)),
        };
        Self { kind, raw }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn id(&self) -> Option<i64> {
        match &self.kind {
            RecordKind::Post(p) => p.id,
            RecordKind::User(u) => u.id,
            RecordKind::Album(a) => a.id,
            RecordKind::Todo(t) => t.id,
        }
    }

    /// Reads a top-level string field from the raw object, whatever the variant.
    pub fn text_field(&self, field: &str) -> Option<&str> {
        self.raw.get(field).and_then(Value::as_str)
    }

    /// Short label used when a row has nothing better to show.
    pub fn fallback_label(&self) -> &str {
        self.text_field("name")
            .filter(|s| !s.is_empty())
            .or_else(|| self.text_field("title").filter(|s| !s.is_empty()))
            .unwrap_or("Item")
    }

    /// Two-space indented JSON of the full record.
    pub fn pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}
