use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::is_filled;

/// Project identity block at the top of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ProjectInfo {
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Declared technology stack. Every field is nullable; `null` means "not decided yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Stack {
    pub runtime: Option<String>,
    pub framework: Option<String>,
    pub language: Option<String>,
    pub database: Option<String>,
    pub orm: Option<String>,
    pub hosting: Option<String>,
    pub auth: Option<String>,
    pub styling: Option<String>,
}

impl Stack {
    /// Fields that must be decided once any part of the stack is.
    pub const REQUIRED: [&'static str; 4] = ["runtime", "framework", "language", "database"];

    /// Every field paired with its name, in declaration order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, Option<&str>); 8] {
        [
            ("runtime", self.runtime.as_deref()),
            ("framework", self.framework.as_deref()),
            ("language", self.language.as_deref()),
            ("database", self.database.as_deref()),
            ("orm", self.orm.as_deref()),
            ("hosting", self.hosting.as_deref()),
            ("auth", self.auth.as_deref()),
            ("styling", self.styling.as_deref()),
        ]
    }

    /// True when no field carries a value.
    #[must_use]
    pub fn is_undeclared(&self) -> bool {
        self.fields().iter().all(|(_, value)| !is_filled(*value))
    }
}
