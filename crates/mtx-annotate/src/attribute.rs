//! Reading and removing `data-matrix` attributes on a single line.

use std::sync::LazyLock;

use regex::Regex;

static ATTRIBUTE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\bdata-matrix=").expect("attribute key pattern compiles"));

/// Remove every `data-matrix=` attribute from `line`, along with the
/// whitespace before it. Values may be single-quoted, double-quoted, or a
/// brace expression. Returns the stripped line and whether anything was removed.
///
/// A key whose value cannot be delimited is left in place.
#[must_use]
pub fn strip(line: &str) -> (String, bool) {
    let mut stripped = String::with_capacity(line.len());
    let mut rest = line;
    let mut removed = false;

    while let Some(key) = ATTRIBUTE_KEY.find(rest) {
        match value_len(&rest[key.end()..]) {
            Some(len) => {
                stripped.push_str(&rest[..key.start()]);
                rest = &rest[key.end() + len..];
                removed = true;
            }
            None => {
                stripped.push_str(&rest[..key.end()]);
                rest = &rest[key.end()..];
            }
        }
    }
    stripped.push_str(rest);
    (stripped, removed)
}

/// The JSON text of the first single-quoted `data-matrix` attribute on `line`.
#[must_use]
pub fn extract(line: &str) -> Option<&str> {
    let key = ATTRIBUTE_KEY.find(line)?;
    let value = &line[key.end()..];
    let inner = value.strip_prefix('\'')?;
    let end = inner.find('\'')?;
    Some(&inner[..end])
}

/// Byte length of the attribute value at the start of `value`, delimiters included.
fn value_len(value: &str) -> Option<usize> {
    let mut chars = value.char_indices();
    match chars.next()? {
        (_, quote @ ('\'' | '"')) => chars
            .find(|&(_, c)| c == quote)
            .map(|(index, c)| index + c.len_utf8()),
        (_, '{') => braced_len(value),
        _ => None,
    }
}

/// Length through the brace closing the one at index 0. Braces inside string
/// literals are ignored.
fn braced_len(value: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (index, c) in value.char_indices() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == open {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(index + 1);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(r#"<Button data-matrix='{"a":1}' onClick={go}>"#)]
    #[case(r#"<Button data-matrix="{&quot;a&quot;:1}" onClick={go}>"#)]
    #[case(r#"<Button data-matrix={JSON.stringify({ a: "}" })} onClick={go}>"#)]
    #[case(r#"<Button   data-matrix='x' onClick={go}>"#)]
    fn strips_each_value_form(#[case] line: &str) {
        assert_eq!(
            strip(line),
            ("<Button onClick={go}>".to_string(), true)
        );
    }

    #[test]
    fn strips_every_occurrence() {
        let (stripped, removed) = strip("<A data-matrix='1' data-matrix=\"2\">");
        assert_eq!(stripped, "<A>");
        assert!(removed);
    }

    #[test]
    fn line_without_attribute_is_untouched() {
        assert_eq!(
            strip("<div className=\"data\">"),
            ("<div className=\"data\">".to_string(), false)
        );
    }

    #[test]
    fn similar_attribute_names_are_kept() {
        let line = "<A xdata-matrix='1'>";
        assert_eq!(strip(line), (line.to_string(), false));
    }

    #[test]
    fn unterminated_value_is_left_alone() {
        let line = "<A data-matrix='open";
        assert_eq!(strip(line), (line.to_string(), false));
    }

    #[test]
    fn extract_reads_single_quoted_json() {
        assert_eq!(
            extract(r#"<A data-matrix='{"k":"v"}' b>"#),
            Some(r#"{"k":"v"}"#)
        );
        assert_eq!(extract("<A>"), None);
    }
}
