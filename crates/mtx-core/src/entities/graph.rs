//! Data-table, endpoint, and function entities discovered by a scan.
//!
//! These are append-only discovery artifacts. They are never edited in place;
//! the only mutation is [`DbTable::merge`] and friends, used when the same id
//! appears more than once in a document.

use std::borrow::Cow;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Retention policy of a data table.
///
/// The three states serialize differently: the key is absent (`Unset`), the key
/// is `null` (`NoPolicy`), or the key holds a day count (`Days`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Retention {
    /// Nobody has considered retention for this table yet.
    #[default]
    Unset,
    /// Considered, and the data is kept indefinitely.
    NoPolicy,
    /// Rows are purged after this many days.
    Days(u32),
}

impl Retention {
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl Serialize for Retention {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unset | Self::NoPolicy => serializer.serialize_none(),
            Self::Days(days) => serializer.serialize_u32(*days),
        }
    }
}

impl<'de> Deserialize<'de> for Retention {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<u32>::deserialize(deserializer)?.map_or(Self::NoPolicy, Self::Days))
    }
}

impl JsonSchema for Retention {
    fn schema_name() -> Cow<'static, str> {
        "Retention".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": ["integer", "null"],
            "minimum": 0
        })
    }
}

/// A database table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DbTable {
    pub id: String,
    pub name: Option<String>,
    /// Team or person accountable for the data.
    pub owner: Option<String>,
    /// Whether row changes are written to an audit trail.
    pub audit: bool,
    #[serde(skip_serializing_if = "Retention::is_unset")]
    pub retention_days: Retention,
    /// Columns holding personally identifiable information.
    pub pii_fields: Vec<String>,
}

impl DbTable {
    /// Fold a later record with the same id into this one.
    pub fn merge(&mut self, other: &Self) {
        if self.name.is_none() {
            self.name.clone_from(&other.name);
        }
        if self.owner.is_none() {
            self.owner.clone_from(&other.owner);
        }
        self.audit |= other.audit;
        if self.retention_days.is_unset() {
            self.retention_days = other.retention_days;
        }
        for field in &other.pii_fields {
            if !self.pii_fields.contains(field) {
                self.pii_fields.push(field.clone());
            }
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// An HTTP endpoint seen in the code base.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Endpoint {
    pub id: String,
    /// `"METHOD /path"`.
    #[serde(alias = "endpoint")]
    pub route: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Endpoint {
    pub fn merge(&mut self, other: &Self) {
        if self.route.trim().is_empty() {
            self.route.clone_from(&other.route);
        }
        if self.owner.is_none() {
            self.owner.clone_from(&other.owner);
        }
    }
}

/// A function seen in the code base, independent of any use case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FunctionEntity {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl FunctionEntity {
    pub fn merge(&mut self, other: &Self) {
        if self.name.trim().is_empty() {
            self.name.clone_from(&other.name);
        }
        if self.file.is_none() {
            self.file.clone_from(&other.file);
        }
    }
}

/// Canonical form of a `"METHOD /path"` string: upper-case method, single space.
#[must_use]
pub fn normalize_route(route: &str) -> String {
    let mut parts = route.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(method), Some(path)) => format!("{} {path}", method.to_ascii_uppercase()),
        (Some(only), None) => only.to_string(),
        _ => String::new(),
    }
}
