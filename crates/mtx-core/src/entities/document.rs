use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::decision::ArchitectureDecision;
use super::graph::{DbTable, Endpoint, FunctionEntity};
use super::project::{ProjectInfo, Stack};
use super::use_case::UseCase;
use crate::errors::CoreError;

/// The active use-case list as it appeared in the document.
///
/// A list is parsed entry by entry: entries that are not valid use-case
/// records are kept aside as [`RejectedUseCase`]s and the rest stay usable.
/// Anything that is not a list at all is kept as `Malformed` so the structure
/// rule can report it and every other rule sees an empty list.
#[derive(Debug, Clone, PartialEq)]
pub enum UseCaseList {
    List(UseCaseEntries),
    Malformed(Value),
}

impl Default for UseCaseList {
    fn default() -> Self {
        Self::List(UseCaseEntries::default())
    }
}

impl From<Vec<UseCase>> for UseCaseList {
    fn from(items: Vec<UseCase>) -> Self {
        Self::List(UseCaseEntries {
            items,
            rejected: Vec::new(),
        })
    }
}

impl UseCaseList {
    /// Sort a raw `use_cases` value into parsed and rejected entries.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let values = match value {
            Value::Array(values) => values,
            other => return Self::Malformed(other),
        };

        let mut entries = UseCaseEntries::default();
        for (index, value) in values.into_iter().enumerate() {
            match UseCase::deserialize(&value) {
                Ok(use_case) => entries.items.push(use_case),
                Err(error) => {
                    tracing::warn!(index, %error, "use case entry is not a valid record");
                    entries.rejected.push(RejectedUseCase {
                        index,
                        error: error.to_string(),
                        value,
                    });
                }
            }
        }
        Self::List(entries)
    }
}

impl<'de> Deserialize<'de> for UseCaseList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

impl Serialize for UseCaseList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::List(entries) => serializer.collect_seq(entries.in_order()),
            Self::Malformed(value) => value.serialize(serializer),
        }
    }
}

/// Entries of a use-case list, split by whether they parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UseCaseEntries {
    /// Parsed entries, in document order.
    pub items: Vec<UseCase>,
    /// Unparseable entries, by ascending index.
    pub rejected: Vec<RejectedUseCase>,
}

impl UseCaseEntries {
    /// Number of entries in the document, rejected ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len() + self.rejected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.rejected.is_empty()
    }

    /// Parsed entries with their index in the document list.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &UseCase)> {
        (0..self.len())
            .filter(move |index| !self.rejected.iter().any(|entry| entry.index == *index))
            .zip(self.items.iter())
    }

    /// Every entry in document order, rejected ones as their raw value.
    fn in_order(&self) -> impl Iterator<Item = Entry<'_>> {
        let mut items = self.items.iter();
        let mut rejected = self.rejected.iter().peekable();
        (0..self.len()).filter_map(move |index| {
            match rejected.next_if(|entry| entry.index == index) {
                Some(entry) => Some(Entry::Raw(&entry.value)),
                None => items.next().map(Entry::Parsed),
            }
        })
    }
}

impl From<Vec<UseCase>> for UseCaseEntries {
    fn from(items: Vec<UseCase>) -> Self {
        Self {
            items,
            rejected: Vec::new(),
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Entry<'a> {
    Parsed(&'a UseCase),
    Raw(&'a Value),
}

/// A use-case list entry that is not a valid use-case record.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedUseCase {
    /// Position in the document list.
    pub index: usize,
    /// Why the entry did not parse.
    pub error: String,
    /// The entry as written, kept so saving the document loses nothing.
    pub value: Value,
}

impl RejectedUseCase {
    /// The entry's `id`, when it has a string one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.value
            .get("id")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Where a use case lives in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UseCaseSlot {
    Active(usize),
    Deprecated(usize),
}

impl fmt::Display for UseCaseSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active(index) => write!(f, "use_cases[{index}]"),
            Self::Deprecated(index) => write!(f, "deprecated[{index}]"),
        }
    }
}

/// Root record of the Matrix ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Document {
    #[serde(alias = "version")]
    pub schema_version: Option<String>,
    pub project: Option<ProjectInfo>,
    /// `YYYY-MM-DD`.
    pub last_updated: Option<String>,
    pub stack: Option<Stack>,
    #[schemars(with = "Option<Vec<UseCase>>")]
    pub use_cases: Option<UseCaseList>,
    #[serde(alias = "deprecated_use_cases")]
    pub deprecated: Vec<UseCase>,
    pub decisions: Vec<ArchitectureDecision>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<DbTable>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<Endpoint>,
    /// Functions discovered in code, as opposed to those recorded on use cases.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub discovered_functions: Vec<FunctionEntity>,
}

impl Document {
    /// Parse a document from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Parse`] when the text is not JSON or a field has
    /// the wrong type.
    pub fn from_json_str(text: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] when the file is missing, [`CoreError::Io`]
    /// for other read failures, and [`CoreError::Parse`] for malformed JSON.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let text = fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                CoreError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CoreError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let document = Self::from_json_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            use_cases = document.active_use_cases().len(),
            deprecated = document.deprecated.len(),
            "loaded matrix document"
        );
        Ok(document)
    }

    /// Pretty JSON, the on-disk form.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Parse`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document to `path` atomically (temp file + rename).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`] when the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        let json = self.to_json_pretty()?;
        let io_error = |source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tmp = path.with_file_name(format!(".{file_name}.tmp"));
        fs::write(&tmp, json).map_err(io_error)?;
        fs::rename(&tmp, path).map_err(io_error)
    }

    /// Active use cases that parsed; empty when the list is missing or malformed.
    #[must_use]
    pub fn active_use_cases(&self) -> &[UseCase] {
        match &self.use_cases {
            Some(UseCaseList::List(entries)) => &entries.items,
            Some(UseCaseList::Malformed(_)) | None => &[],
        }
    }

    /// Active list entries that are not valid use-case records.
    #[must_use]
    pub fn rejected_use_cases(&self) -> &[RejectedUseCase] {
        match &self.use_cases {
            Some(UseCaseList::List(entries)) => &entries.rejected,
            Some(UseCaseList::Malformed(_)) | None => &[],
        }
    }

    /// Active then deprecated use cases, each with its position in the document.
    pub fn located_use_cases(&self) -> impl Iterator<Item = (UseCaseSlot, &UseCase)> {
        let active = match &self.use_cases {
            Some(UseCaseList::List(entries)) => Some(entries.indexed()),
            Some(UseCaseList::Malformed(_)) | None => None,
        };
        let active = active
            .into_iter()
            .flatten()
            .map(|(index, use_case)| (UseCaseSlot::Active(index), use_case));
        let deprecated = self
            .deprecated
            .iter()
            .enumerate()
            .map(|(index, use_case)| (UseCaseSlot::Deprecated(index), use_case));
        active.chain(deprecated)
    }

    /// Active then deprecated use cases.
    pub fn all_use_cases(&self) -> impl Iterator<Item = &UseCase> {
        self.active_use_cases().iter().chain(self.deprecated.iter())
    }

    /// Find a use case by id in either list.
    #[must_use]
    pub fn use_case(&self, id: &str) -> Option<&UseCase> {
        self.all_use_cases()
            .find(|use_case| use_case.id.as_deref() == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn non_list_use_cases_are_kept_as_malformed() {
        let document = Document::from_json_str(r#"{"use_cases": {"UC-001": {}}}"#).unwrap();
        assert!(matches!(
            document.use_cases,
            Some(UseCaseList::Malformed(_))
        ));
        assert!(document.active_use_cases().is_empty());
    }

    #[test]
    fn null_use_cases_are_absent() {
        let document = Document::from_json_str(r#"{"use_cases": null}"#).unwrap();
        assert!(document.use_cases.is_none());
    }

    #[test]
    fn located_use_cases_cover_both_lists() {
        let document = Document::from_json_str(
            r#"{
                "use_cases": [{"id": "UC-001"}, {"id": "UC-002"}],
                "deprecated": [{"id": "UC-003"}]
            }"#,
        )
        .unwrap();

        let slots: Vec<String> = document
            .located_use_cases()
            .map(|(slot, use_case)| format!("{slot}={}", use_case.label()))
            .collect();

        assert_eq!(
            slots,
            vec![
                "use_cases[0]=UC-001".to_string(),
                "use_cases[1]=UC-002".to_string(),
                "deprecated[0]=UC-003".to_string(),
            ]
        );
        assert!(document.use_case("UC-003").is_some());
    }

    #[test]
    fn bad_entry_is_rejected_without_losing_the_others() {
        let document = Document::from_json_str(
            r#"{"use_cases": [
                {"id": "UC-001"},
                {"id": "UC-002", "functions": [{"name": "pay", "line": "12"}]},
                {"id": "UC-003"}
            ]}"#,
        )
        .unwrap();

        let ids: Vec<&str> = document
            .active_use_cases()
            .iter()
            .map(UseCase::label)
            .collect();
        assert_eq!(ids, vec!["UC-001", "UC-003"]);

        let rejected = document.rejected_use_cases();
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].index, 1);
        assert_eq!(rejected[0].id(), Some("UC-002"));
        assert!(rejected[0].error.contains("invalid type"), "{}", rejected[0].error);

        let slots: Vec<String> = document
            .located_use_cases()
            .map(|(slot, _)| slot.to_string())
            .collect();
        assert_eq!(slots, vec!["use_cases[0]", "use_cases[2]"]);
    }

    #[test]
    fn rejected_entries_are_written_back_in_place() {
        let text = r#"{"use_cases": [{"id": "UC-001"}, "UC-002", {"id": "UC-003"}]}"#;
        let document = Document::from_json_str(text).unwrap();

        let json: Value = serde_json::from_str(&document.to_json_pretty().unwrap()).unwrap();
        let entries = json["use_cases"].as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["id"], "UC-001");
        assert_eq!(entries[1], "UC-002");
        assert_eq!(entries[2]["id"], "UC-003");
    }

    #[test]
    fn wrong_field_type_is_a_parse_error() {
        let result = Document::from_json_str(r#"{"deprecated": "none"}"#);
        assert!(matches!(result, Err(CoreError::Parse(_))));
    }

    #[test]
    fn load_reports_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = Document::load(&temp.path().join("matrix.json"));
        assert!(matches!(result, Err(CoreError::NotFound { .. })));
    }

    #[test]
    fn save_then_load_preserves_document() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(".matrix").join("matrix.json");
        let document = Document {
            schema_version: Some("1.0".into()),
            last_updated: Some("2026-03-14".into()),
            use_cases: Some(UseCaseList::from(vec![UseCase {
                id: Some("UC-001".into()),
                ..UseCase::default()
            }])),
            ..Document::default()
        };

        document.save(&path).unwrap();
        let loaded = Document::load(&path).unwrap();

        assert_eq!(loaded, document);
        assert!(!path.with_file_name(".matrix.json.tmp").exists());
    }
}
