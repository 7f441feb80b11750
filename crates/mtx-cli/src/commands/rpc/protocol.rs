//! Line-delimited JSON messages of `mtx rpc`.

use std::collections::BTreeMap;

use mtx_annotate::InjectReport;
use mtx_rules::{GraphFinding, Report, Severity};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One request per input line, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// Run the integrity rules. Without `document`, the project matrix is loaded.
    Evaluate {
        #[serde(default)]
        document: Option<Value>,
    },
    /// Classify graph violations. Without `document`, the project matrix is loaded.
    Classify {
        #[serde(default)]
        document: Option<Value>,
    },
    /// Annotate `element` in `text`; nothing is written to disk.
    Inject {
        text: String,
        element: String,
        payload: Value,
    },
    Schema {
        name: String,
    },
    Ping,
}

/// One response per request, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Report {
        report: Report,
    },
    Violations {
        findings: Vec<GraphFinding>,
        severity_by_entity: BTreeMap<String, Severity>,
    },
    Injection {
        result: InjectReport,
    },
    Schema {
        name: String,
        schema: Value,
    },
    Pong {
        version: String,
    },
    Error {
        message: String,
    },
}

impl Response {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}
