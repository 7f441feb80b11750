//! Named JSON Schemas for every type that crosses a process boundary.
//!
//! The registry builds schemas from the model types at construction time using
//! [`schemars::schema_for!`] and validates instances via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;

/// Central store of Matrix JSON Schemas, keyed by snake_case name.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, Value::from(schema_for!($ty)));
    };
}

impl SchemaRegistry {
    /// Build a registry holding the document model, annotation payload,
    /// and report schemas.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // Document model
        register!(schemas, "document", mtx_core::Document);
        register!(schemas, "use_case", mtx_core::UseCase);
        register!(schemas, "function_record", mtx_core::FunctionRecord);
        register!(schemas, "decision", mtx_core::ArchitectureDecision);
        register!(schemas, "db_table", mtx_core::DbTable);
        register!(schemas, "endpoint", mtx_core::Endpoint);
        register!(schemas, "function_entity", mtx_core::FunctionEntity);

        // Injected into source files
        register!(schemas, "annotation_payload", mtx_core::AnnotationPayload);

        // Outcomes
        register!(schemas, "report", mtx_rules::Report);
        register!(schemas, "graph_finding", mtx_rules::GraphFinding);
        register!(schemas, "inject_report", mtx_annotate::InjectReport);

        Self { schemas }
    }

    /// Get a schema by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` listing every validation error.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema).map_err(|e| SchemaError::Compile {
            schema: name.to_string(),
            message: e.to_string(),
        })?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| e.to_string())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed {
                schema: name.to_string(),
                errors,
            })
        }
    }

    /// All registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
