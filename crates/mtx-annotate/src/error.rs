use thiserror::Error;

/// Why an injection did not happen. The message is meant for the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InjectError {
    #[error(
        "element `{element}` not found: no `<{element}` tag and no function or const/let/var \
         declaration of that name (matching is exact and case-sensitive)"
    )]
    ElementNotFound { element: String },

    #[error(
        "`{element}` is declared on line {line} but no opening tag follows within {window} lines"
    )]
    NoTagInWindow {
        element: String,
        line: usize,
        window: usize,
    },

    /// The located line has no tag to attach to, so injecting would leave it unchanged.
    #[error("no tag name could be read on line {line}: {content}")]
    TagNotFound { line: usize, content: String },

    #[error("payload could not be serialized: {0}")]
    Payload(String),
}
