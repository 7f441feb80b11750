//! `mtx rpc`: newline-delimited JSON requests on stdin, one response line each on stdout.

mod protocol;

pub use protocol::{Request, Response};

use anyhow::Context;
use mtx_annotate::{InjectReport, inject};
use mtx_core::{AnnotationPayload, Document};
use mtx_rules::{Report, classify, evaluate, evaluate_loaded, severity_by_entity};
use mtx_schema::SchemaRegistry;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::context::AppContext;

/// Serve requests until stdin closes.
pub async fn handle(ctx: &AppContext) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await.context("failed to read request")? {
        if line.trim().is_empty() {
            continue;
        }
        let response = respond(&line, ctx, &registry);
        let mut encoded = serde_json::to_string(&response).context("failed to encode response")?;
        encoded.push('\n');
        stdout
            .write_all(encoded.as_bytes())
            .await
            .context("failed to write response")?;
        stdout.flush().await.context("failed to flush response")?;
    }
    tracing::debug!("rpc input closed");
    Ok(())
}

/// Answer one request line.
pub fn respond(line: &str, ctx: &AppContext, registry: &SchemaRegistry) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => handle_request(request, ctx, registry),
        Err(error) => {
            tracing::warn!(%error, "malformed rpc request");
            Response::error(format!("malformed request: {error}"))
        }
    }
}

fn handle_request(request: Request, ctx: &AppContext, registry: &SchemaRegistry) -> Response {
    match request {
        Request::Evaluate { document } => Response::Report {
            report: evaluate_request(document, ctx),
        },
        Request::Classify { document } => {
            let document = match document {
                Some(value) => serde_json::from_value::<Document>(value)
                    .map_err(|error| format!("invalid document: {error}")),
                None => ctx.load_document().map_err(|error| error.to_string()),
            };
            match document {
                Ok(document) => {
                    let findings = classify(&document);
                    Response::Violations {
                        severity_by_entity: severity_by_entity(&findings),
                        findings,
                    }
                }
                Err(message) => Response::error(message),
            }
        }
        Request::Inject {
            text,
            element,
            payload,
        } => match decode_payload(registry, payload) {
            Ok(payload) => Response::Injection {
                result: InjectReport::from(inject(&text, &element, &payload)),
            },
            Err(message) => Response::error(message),
        },
        Request::Schema { name } => match registry.get(&name) {
            Some(schema) => Response::Schema {
                schema: schema.clone(),
                name,
            },
            None => Response::error(format!("unknown schema `{name}`")),
        },
        Request::Ping => Response::Pong {
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    }
}

fn evaluate_request(document: Option<Value>, ctx: &AppContext) -> Report {
    let files = ctx.files();
    match document {
        Some(value) => match serde_json::from_value::<Document>(value) {
            Ok(document) => evaluate(&document, &files),
            Err(error) => Report::load_failure(format!("invalid document: {error}")),
        },
        None => evaluate_loaded(ctx.load_document(), &files),
    }
}

fn decode_payload(registry: &SchemaRegistry, payload: Value) -> Result<AnnotationPayload, String> {
    registry
        .validate("annotation_payload", &payload)
        .map_err(|error| error.to_string())?;
    serde_json::from_value(payload).map_err(|error| format!("invalid payload: {error}"))
}

#[cfg(test)]
mod tests {
    use mtx_config::MatrixConfig;
    use mtx_rules::{RuleCode, ViolationCode};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn context() -> (TempDir, AppContext) {
        let dir = TempDir::new().unwrap();
        let ctx = AppContext::new(dir.path().to_path_buf(), MatrixConfig::default());
        (dir, ctx)
    }

    fn call(request: &Value) -> Response {
        let (_dir, ctx) = context();
        respond(&request.to_string(), &ctx, &SchemaRegistry::new())
    }

    #[test]
    fn ping_pongs() {
        assert!(matches!(call(&json!({"type": "ping"})), Response::Pong { .. }));
    }

    #[test]
    fn evaluate_without_project_matrix_is_a_load_failure() {
        let Response::Report { report } = call(&json!({"type": "evaluate"})) else {
            panic!("expected a report");
        };
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].rule, RuleCode::Load);
    }

    #[test]
    fn evaluate_inline_document() {
        let Response::Report { report } = call(&json!({
            "type": "evaluate",
            "document": {"use_cases": [{"id": "UC-001", "status": "planned"}]}
        })) else {
            panic!("expected a report");
        };
        assert!(
            report
                .errors
                .iter()
                .any(|finding| finding.rule == RuleCode::UseCaseTitle)
        );
    }

    #[test]
    fn classify_inline_document() {
        let Response::Violations {
            findings,
            severity_by_entity,
        } = call(&json!({
            "type": "classify",
            "document": {"endpoints": [{"id": "ep_user", "route": "GET /users/:id"}]}
        }))
        else {
            panic!("expected violations");
        };
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, ViolationCode::GhostEndpoint);
        assert_eq!(severity_by_entity.len(), 1);
    }

    #[test]
    fn inject_validates_the_payload_first() {
        let response = call(&json!({
            "type": "inject",
            "text": "<Submit />",
            "element": "Submit",
            "payload": {"use_case_id": "UC-001"}
        }));
        let Response::Error { message } = response else {
            panic!("expected an error");
        };
        assert!(message.contains("annotation_payload"));
    }

    #[test]
    fn inject_returns_the_flat_report() {
        let payload = json!({
            "use_case_id": "UC-001",
            "use_case_title": "Sign in",
            "function": "login",
            "file": "src/Login.tsx",
            "line": 3,
            "endpoint": null,
            "tables": [],
            "auth_required": false,
            "verified": "2026-03-14",
            "schema_version": "1.0",
            "element_id": null
        });
        let Response::Injection { result } = call(&json!({
            "type": "inject",
            "text": "<Submit />",
            "element": "Submit",
            "payload": payload
        })) else {
            panic!("expected an injection");
        };
        assert!(result.success);
        assert_eq!(result.line_number, Some(1));
        assert!(result.new_text.unwrap().starts_with("<Submit data-matrix='"));
    }

    #[test]
    fn malformed_line_is_answered_with_an_error() {
        let (_dir, ctx) = context();
        let response = respond("{not json", &ctx, &SchemaRegistry::new());
        assert!(matches!(response, Response::Error { .. }));
    }

    #[test]
    fn unknown_schema_is_an_error() {
        let response = call(&json!({"type": "schema", "name": "nope"}));
        assert_eq!(response, Response::error("unknown schema `nope`"));
    }
}
