//! Serde roundtrip and JsonSchema validation tests for the document model.

use mtx_core::entities::*;
use mtx_core::enums::*;
use pretty_assertions::assert_eq;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn checkout_function() -> FunctionRecord {
    FunctionRecord {
        name: Some("submitOrder".into()),
        file: Some("src/checkout/submit.ts".into()),
        line: Some(42),
        endpoint: Some("POST /orders".into()),
        tables: vec!["orders".into()],
        auth_required: Some(true),
        roles: vec!["customer".into()],
        last_modified: Some("2026-03-01".into()),
    }
}

fn checkout_use_case() -> UseCase {
    UseCase {
        id: Some("UC-004".into()),
        title: Some("Checkout".into()),
        value_statement: Some("Customers pay without re-entering details".into()),
        status: Some(UseCaseStatus::Implemented),
        actor: Some("customer".into()),
        preconditions: vec!["cart is not empty".into()],
        postconditions: vec!["order is persisted".into()],
        functions: vec![checkout_function()],
        applied_rules: vec!["NO_FAKE".into()],
        visual_id: Some("Checkout.SubmitButton".into()),
        deprecated_date: None,
        deprecation_reason: None,
        tables: vec![DbTable {
            id: "tbl_orders".into(),
            name: Some("orders".into()),
            owner: Some("payments".into()),
            audit: true,
            retention_days: Retention::Days(365),
            pii_fields: vec!["email".into()],
        }],
        endpoints: vec![Endpoint {
            id: "ep_orders_post".into(),
            route: "POST /orders".into(),
            owner: None,
        }],
        discovered_functions: vec![FunctionEntity {
            id: "fn_submit_order".into(),
            name: "submitOrder".into(),
            file: Some("src/checkout/submit.ts".into()),
        }],
    }
}

roundtrip_and_validate!(function_record_roundtrip, FunctionRecord, checkout_function());

roundtrip_and_validate!(use_case_roundtrip, UseCase, checkout_use_case());

roundtrip_and_validate!(
    deprecated_use_case_roundtrip,
    UseCase,
    UseCase {
        id: Some("UC-002".into()),
        title: Some("Guest checkout".into()),
        status: Some(UseCaseStatus::Deprecated),
        deprecated_date: Some("2026-01-10".into()),
        deprecation_reason: Some("Replaced by UC-004".into()),
        ..UseCase::default()
    }
);

roundtrip_and_validate!(
    unknown_status_roundtrip,
    UseCase,
    UseCase {
        id: Some("UC-005".into()),
        status: Some(UseCaseStatus::Unknown("done".into())),
        ..UseCase::default()
    }
);

roundtrip_and_validate!(
    decision_roundtrip,
    ArchitectureDecision,
    ArchitectureDecision {
        id: Some("ADR-001".into()),
        title: Some("Use Postgres".into()),
        status: Some(DecisionStatus::Accepted),
        decision: Some("Store orders in Postgres".into()),
        context: Some("Need transactional writes".into()),
        alternatives: vec!["DynamoDB".into()],
        consequences: vec!["Run migrations on deploy".into()],
        date: Some("2026-02-01".into()),
    }
);

roundtrip_and_validate!(
    table_without_policy_roundtrip,
    DbTable,
    DbTable {
        id: "tbl_audit_log".into(),
        name: None,
        owner: Some("platform".into()),
        audit: false,
        retention_days: Retention::NoPolicy,
        pii_fields: vec![],
    }
);

roundtrip_and_validate!(
    payload_roundtrip,
    AnnotationPayload,
    AnnotationPayload {
        use_case_id: "UC-004".into(),
        use_case_title: "Checkout".into(),
        function: "submitOrder".into(),
        file: "src/checkout/submit.ts".into(),
        line: Some(42),
        endpoint: Some("POST /orders".into()),
        tables: vec!["orders".into()],
        auth_required: Some(true),
        verified: "2026-03-14".into(),
        schema_version: "1.0".into(),
        element_id: None,
    }
);

roundtrip_and_validate!(
    document_roundtrip,
    Document,
    Document {
        schema_version: Some("1.0".into()),
        project: Some(ProjectInfo {
            name: Some("shop".into()),
            description: Some("Online shop".into()),
        }),
        last_updated: Some("2026-03-14".into()),
        stack: Some(Stack {
            runtime: Some("node".into()),
            framework: Some("next".into()),
            language: Some("typescript".into()),
            database: Some("postgres".into()),
            ..Stack::default()
        }),
        use_cases: Some(UseCaseList::from(vec![checkout_use_case()])),
        deprecated: vec![],
        decisions: vec![],
        tables: vec![],
        endpoints: vec![Endpoint {
            id: "ep_users_get".into(),
            route: "GET /users/:id".into(),
            owner: None,
        }],
        discovered_functions: vec![FunctionEntity {
            id: "fn_submit".into(),
            name: "submitOrder".into(),
            file: None,
        }],
    }
);

#[test]
fn malformed_use_case_list_survives_roundtrip() {
    let document = Document::from_json_str(r#"{"use_cases": "see wiki"}"#).unwrap();
    let json = document.to_json_pretty().unwrap();
    let back = Document::from_json_str(&json).unwrap();
    assert_eq!(back, document);
    assert!(matches!(back.use_cases, Some(UseCaseList::Malformed(_))));
}
