//! Heuristic element location over raw lines.

use std::sync::LazyLock;

use regex::Regex;

use crate::SEARCH_WINDOW;
use crate::attribute::strip;
use crate::error::InjectError;

static OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z]").expect("open tag pattern compiles"));

/// Where the annotation goes. Line indexes are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// `<Element` used directly on this line.
    Usage { line: usize },
    /// Element declared on `declared`; `line` holds the first tag after it.
    Declaration { declared: usize, line: usize },
}

impl Location {
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Usage { line } | Self::Declaration { line, .. } => *line,
        }
    }

    /// 1-based line number for display.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line() + 1
    }
}

/// Find the line of `text` an annotation for `element` should go on.
///
/// Existing `data-matrix` attributes are stripped before matching, so text
/// inside an earlier annotation never counts as a usage or a tag.
///
/// # Errors
///
/// [`InjectError::ElementNotFound`] when neither a usage nor a declaration
/// matches, [`InjectError::NoTagInWindow`] when a declaration has no tag after it.
pub fn locate(text: &str, element: &str) -> Result<Location, InjectError> {
    let stripped: Vec<String> = text
        .split('\n')
        .map(|line| strip(line.strip_suffix('\r').unwrap_or(line)).0)
        .collect();
    let lines: Vec<&str> = stripped.iter().map(String::as_str).collect();
    locate_in(&lines, element)
}

pub(crate) fn locate_in(lines: &[&str], element: &str) -> Result<Location, InjectError> {
    let not_found = || InjectError::ElementNotFound {
        element: element.to_string(),
    };
    if element.trim().is_empty() {
        return Err(not_found());
    }

    let escaped = regex::escape(element);
    let usage = Regex::new(&format!(r"<{escaped}[\s/>]")).map_err(|_| not_found())?;
    if let Some(line) = lines.iter().position(|line| usage.is_match(line)) {
        tracing::debug!(element, line = line + 1, "element used directly");
        return Ok(Location::Usage { line });
    }

    let declaration =
        Regex::new(&format!(r"\b(?:function\s+{escaped}|(?:const|let|var)\s+{escaped})\b"))
            .map_err(|_| not_found())?;
    let Some(declared) = lines.iter().position(|line| declaration.is_match(line)) else {
        tracing::debug!(element, "element neither used nor declared");
        return Err(not_found());
    };

    let end = lines.len().min(declared + SEARCH_WINDOW);
    let Some(offset) = lines[declared..end]
        .iter()
        .position(|line| OPEN_TAG.is_match(line))
    else {
        return Err(InjectError::NoTagInWindow {
            element: element.to_string(),
            line: declared + 1,
            window: SEARCH_WINDOW,
        });
    };

    let line = declared + offset;
    tracing::debug!(
        element,
        declared = declared + 1,
        line = line + 1,
        "element located through its declaration"
    );
    Ok(Location::Declaration { declared, line })
}
