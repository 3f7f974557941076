//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the backend schema but are defined independently of the
//! mock-server crate. Integration tests catch any schema drift between the two.
//!
//! The backend owns id assignment, so `TodoId` is opaque: it accepts either a
//! JSON number or a JSON string and compares by its textual form.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

/// Opaque identifier of a todo as assigned by the backend.
///
/// Equality and hashing use the textual form only; the wire form is kept so
/// the id serializes back exactly as it was received.
#[derive(Debug, Clone)]
pub struct TodoId {
    text: String,
    number: Option<Number>,
}

impl PartialEq for TodoId {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for TodoId {}

impl Hash for TodoId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text)
    }
}

impl From<Number> for TodoId {
    fn from(number: Number) -> Self {
        Self {
            text: number.to_string(),
            number: Some(number),
        }
    }
}

impl From<i64> for TodoId {
    fn from(value: i64) -> Self {
        Self::from(Number::from(value))
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for TodoId {
    fn from(text: String) -> Self {
        Self { text, number: None }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(Number),
    Text(String),
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => TodoId::from(n),
            RawId::Text(s) => TodoId::from(s),
        })
    }
}

impl Serialize for TodoId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.number {
            Some(n) => n.serialize(serializer),
            None => serializer.serialize_str(&self.text),
        }
    }
}

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl From<CreateTodo> for UpdateTodo {
    fn from(full: CreateTodo) -> Self {
        Self {
            title: Some(full.title),
            description: Some(full.description),
            completed: Some(full.completed),
        }
    }
}
