//! Package manifest model (`package.json`, `bower.json`).
//!
//! Only the main-like fields are typed. Everything else is kept in
//! [`PackageDescriptor::extra`] so custom filters can look at it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The `main` field, which Bower manifests commonly declare as a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MainField {
    One(String),
    Many(Vec<String>),
    /// Anything else (numbers, objects, mixed arrays). Never a stylesheet.
    Other(Value),
}

impl MainField {
    /// First declared entry, if the field names any file at all.
    pub fn first(&self) -> Option<&str> {
        match self {
            MainField::One(main) => Some(main),
            MainField::Many(list) => list.first().map(String::as_str),
            MainField::Other(_) => None,
        }
    }
}

impl From<&str> for MainField {
    fn from(value: &str) -> Self { MainField::One(value.to_string()) }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<MainField>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub style: Option<String>,

    #[serde(
        rename = "main.scss",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_string"
    )]
    pub main_scss: Option<String>,

    #[serde(
        rename = "main.sass",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_string"
    )]
    pub main_sass: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PackageDescriptor {
    pub fn from_json(text: &str) -> serde_json::Result<Self> { serde_json::from_str(text) }

    /// Entry file named by `main` after filtering.
    pub fn entry(&self) -> Option<&str> { self.main.as_ref().and_then(MainField::first) }
}

/// Accept any JSON value, keeping only strings.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}
