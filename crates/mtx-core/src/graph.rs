//! Flattened view of the tables, endpoints, and functions in a document.

use std::collections::HashMap;

use crate::entities::{DbTable, Document, Endpoint, FunctionEntity};

/// All graph entities of a document, deduplicated by id.
///
/// Top-level entities come first, then those nested in active use cases, then
/// those nested in deprecated ones. A repeated id is merged into the first
/// occurrence instead of appearing twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    pub tables: Vec<DbTable>,
    pub endpoints: Vec<Endpoint>,
    pub functions: Vec<FunctionEntity>,
}

impl Graph {
    #[must_use]
    pub fn collect(document: &Document) -> Self {
        let mut tables = Merged::default();
        let mut endpoints = Merged::default();
        let mut functions = Merged::default();

        for table in &document.tables {
            tables.add(&table.id, table, DbTable::merge);
        }
        for endpoint in &document.endpoints {
            endpoints.add(&endpoint.id, endpoint, Endpoint::merge);
        }
        for function in &document.discovered_functions {
            functions.add(&function.id, function, FunctionEntity::merge);
        }
        for use_case in document.all_use_cases() {
            for table in &use_case.tables {
                tables.add(&table.id, table, DbTable::merge);
            }
            for endpoint in &use_case.endpoints {
                endpoints.add(&endpoint.id, endpoint, Endpoint::merge);
            }
            for function in &use_case.discovered_functions {
                functions.add(&function.id, function, FunctionEntity::merge);
            }
        }

        let graph = Self {
            tables: tables.items,
            endpoints: endpoints.items,
            functions: functions.items,
        };
        tracing::debug!(
            tables = graph.tables.len(),
            endpoints = graph.endpoints.len(),
            functions = graph.functions.len(),
            "collected graph entities"
        );
        graph
    }
}

/// Insertion-ordered collection keyed by entity id.
struct Merged<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Merged<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Clone> Merged<T> {
    fn add(&mut self, id: &str, item: &T, merge: fn(&mut T, &T)) {
        if let Some(&position) = self.index.get(id) {
            merge(&mut self.items[position], item);
        } else {
            self.index.insert(id.to_string(), self.items.len());
            self.items.push(item.clone());
        }
    }
}
