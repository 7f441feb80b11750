use std::sync::LazyLock;

use mtx_core::AnnotationPayload;
use regex::Regex;

use crate::ANNOTATION_ATTRIBUTE;
use crate::attribute::strip;
use crate::error::InjectError;
use crate::locate::{Location, locate_in};
use crate::outcome::Injected;

static TAG_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([A-Za-z][\w.:-]*)").expect("tag name pattern compiles"));

/// Inject `payload` as a `data-matrix` attribute on the element named `element`.
///
/// Any annotation already on the target line is replaced, so injecting twice
/// leaves a single attribute. Existing annotations are ignored while locating
/// the element. Line endings, including `\r\n`, are preserved.
///
/// A successful call always inserts the attribute: a located line with no tag
/// to attach to is [`InjectError::TagNotFound`], never a silent no-op.
///
/// # Errors
///
/// Returns an [`InjectError`] describing why nothing was injected.
pub fn inject(
    text: &str,
    element: &str,
    payload: &AnnotationPayload,
) -> Result<Injected, InjectError> {
    let json = payload
        .to_inline_json()
        .map_err(|error| InjectError::Payload(error.to_string()))?;

    let lines: Vec<(&str, &str)> = text
        .split('\n')
        .map(|line| match line.strip_suffix('\r') {
            Some(body) => (body, "\r"),
            None => (line, ""),
        })
        .collect();
    let stripped: Vec<(String, bool)> = lines.iter().map(|(body, _)| strip(body)).collect();
    let searchable: Vec<&str> = stripped.iter().map(|(body, _)| body.as_str()).collect();

    let location = locate_in(&searchable, element)?;
    let index = location.line();
    let line_number = location.line_number();
    let original = lines[index].0;
    let bare = searchable[index];
    let had_prior_annotation = stripped[index].1;

    let (tag, insert_at) =
        tag_position(bare, element, location).ok_or_else(|| InjectError::TagNotFound {
            line: line_number,
            content: original.trim().to_string(),
        })?;

    let attribute = format!(" {ANNOTATION_ATTRIBUTE}='{json}'");
    let mut rewritten = String::with_capacity(bare.len() + attribute.len());
    rewritten.push_str(&bare[..insert_at]);
    rewritten.push_str(&attribute);
    rewritten.push_str(&bare[insert_at..]);

    let changed = rewritten != original;

    let new_text = lines
        .iter()
        .enumerate()
        .map(|(position, (body, ending))| {
            if position == index {
                format!("{rewritten}{ending}")
            } else {
                format!("{body}{ending}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    tracing::debug!(
        element,
        tag,
        line = line_number,
        had_prior_annotation,
        changed,
        "annotation injected"
    );
    Ok(Injected {
        new_text,
        line_number,
        had_prior_annotation,
        changed,
        tag,
    })
}

/// Tag name on `line` and the byte offset right after it.
///
/// A direct usage attaches to the element's own tag; a declaration attaches to
/// whatever tag opens first on the line.
fn tag_position(line: &str, element: &str, location: Location) -> Option<(String, usize)> {
    match location {
        Location::Usage { .. } => {
            let usage = Regex::new(&format!(r"<{}[\s/>]", regex::escape(element))).ok()?;
            let found = usage.find(line)?;
            Some((element.to_string(), found.start() + 1 + element.len()))
        }
        Location::Declaration { .. } => {
            let name = TAG_NAME.captures(line)?.get(1)?;
            Some((name.as_str().to_string(), name.end()))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::attribute::extract;

    fn payload() -> AnnotationPayload {
        AnnotationPayload {
            use_case_id: "UC-001".into(),
            use_case_title: "Sign in".into(),
            function: "login".into(),
            file: "src/Login.tsx".into(),
            line: Some(12),
            endpoint: Some("POST /session".into()),
            tables: vec!["users".into()],
            auth_required: Some(false),
            verified: "2026-03-14".into(),
            schema_version: "1.0".into(),
            element_id: Some("Login.Submit".into()),
        }
    }

    #[test]
    fn inserts_right_after_the_tag_name() {
        let text = "<form>\n  <Submit kind=\"primary\" />\n</form>\n";
        let injected = inject(text, "Submit", &payload()).unwrap();

        assert_eq!(injected.line_number, 2);
        assert_eq!(injected.tag, "Submit");
        assert!(!injected.had_prior_annotation);
        assert!(injected.changed);
        let line = injected.new_text.lines().nth(1).unwrap();
        assert!(line.starts_with("  <Submit data-matrix='{"));
        assert!(line.ends_with("}' kind=\"primary\" />"));
    }

    #[test]
    fn declaration_uses_the_tag_found_on_the_line() {
        let text = "export function LoginForm() {\n  return (\n    <form onSubmit={send}>\n";
        let injected = inject(text, "LoginForm", &payload()).unwrap();

        assert_eq!(injected.line_number, 3);
        assert_eq!(injected.tag, "form");
        assert!(
            injected
                .new_text
                .contains("    <form data-matrix='{")
        );
    }

    #[test]
    fn replaces_prior_annotation_instead_of_appending() {
        let text = "<Submit data-matrix='{\"old\":true}' />";
        let injected = inject(text, "Submit", &payload()).unwrap();

        assert!(injected.had_prior_annotation);
        assert!(injected.changed);
        assert_eq!(injected.new_text.matches("data-matrix=").count(), 1);
        assert!(!injected.new_text.contains("old"));
    }

    #[test]
    fn reinjecting_same_payload_is_unchanged() {
        let first = inject("<Submit />\n", "Submit", &payload()).unwrap();
        let second = inject(&first.new_text, "Submit", &payload()).unwrap();

        assert!(second.had_prior_annotation);
        assert!(!second.changed);
        assert_eq!(second.new_text, first.new_text);
    }

    #[test]
    fn text_inside_an_annotation_is_not_a_usage() {
        let mut button = payload();
        button.use_case_title = "Show <Card list".into();
        let text = "<div>\n<Button />\n<Card title=\"x\" />\n</div>\n";

        let first = inject(text, "Button", &button).unwrap();
        let second = inject(&first.new_text, "Card", &payload()).unwrap();

        assert_eq!(second.line_number, 3);
        assert_eq!(second.tag, "Card");
        assert!(!second.had_prior_annotation);
        assert_eq!(second.new_text.lines().nth(1), first.new_text.lines().nth(1));
    }

    #[test]
    fn crlf_endings_survive() {
        let text = "<a>\r\n<Submit>\r\n</a>\r\n";
        let injected = inject(text, "Submit", &payload()).unwrap();

        assert_eq!(injected.new_text.matches("\r\n").count(), 3);
        assert!(injected.new_text.ends_with("</a>\r\n"));
    }

    #[test]
    fn apostrophes_cannot_close_the_attribute() {
        let mut payload = payload();
        payload.use_case_title = "User's sign in".into();
        let injected = inject("<Submit>", "Submit", &payload).unwrap();

        let json = extract(&injected.new_text).unwrap();
        let back: AnnotationPayload = serde_json::from_str(json).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn unknown_element_fails_with_reason() {
        let error = inject("<div />\n", "Checkout", &payload()).unwrap_err();
        assert_eq!(
            error,
            InjectError::ElementNotFound {
                element: "Checkout".into()
            }
        );
    }
}
