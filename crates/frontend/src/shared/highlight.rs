//! Minimal syntax highlighting for documentation snippets.
//!
//! Produces escaped HTML with `code-keyword`, `code-string` and `code-comment`
//! spans. This is deliberately lightweight: the snippets are short, static
//! documentation strings, not arbitrary source files.

struct LanguageProfile {
    keywords: &'static [&'static str],
    line_comment: Option<&'static str>,
}

const JS_KEYWORDS: &[&str] = &[
    "var", "let", "const", "function", "return", "true", "false", "null", "new", "if", "else",
];
const SWIFT_KEYWORDS: &[&str] = &[
    "let", "var", "func", "with", "true", "false", "nil", "import", "class", "struct",
];
const KOTLIN_KEYWORDS: &[&str] = &[
    "val", "var", "fun", "this", "true", "false", "null", "apply", "import", "class",
];
const CSHARP_KEYWORDS: &[&str] = &[
    "new", "var", "string", "object", "true", "false", "null", "using", "class", "void",
];
const CPP_KEYWORDS: &[&str] = &[
    "auto", "TEXT", "true", "false", "nullptr", "void", "class", "struct", "const",
];
const JSON_KEYWORDS: &[&str] = &["true", "false", "null"];

fn profile(language: &str) -> Option<LanguageProfile> {
    let (keywords, line_comment): (&'static [&'static str], Option<&'static str>) = match language
    {
        "javascript" | "typescript" => (JS_KEYWORDS, Some("//")),
        "swift" => (SWIFT_KEYWORDS, Some("//")),
        "kotlin" | "java" | "groovy" => (KOTLIN_KEYWORDS, Some("//")),
        "csharp" => (CSHARP_KEYWORDS, Some("//")),
        "cpp" => (CPP_KEYWORDS, Some("//")),
        "json" => (JSON_KEYWORDS, Some("//")),
        "bash" | "shell" | "ruby" => (&[], Some("#")),
        _ => return None,
    };
    Some(LanguageProfile {
        keywords,
        line_comment,
    })
}

/// Highlight a snippet for the given language hint.
///
/// Unknown languages fall back to plain escaping, never an error.
pub fn highlight(language: &str, code: &str) -> String {
    match profile(language) {
        Some(profile) => code
            .lines()
            .map(|line| highlight_line(line, &profile))
            .collect::<Vec<_>>()
            .join("\n"),
        None => html_escape(code),
    }
}

fn highlight_line(line: &str, profile: &LanguageProfile) -> String {
    let mut out = String::with_capacity(line.len());
    let mut i = 0;

    while i < line.len() {
        let rest = &line[i..];

        if let Some(marker) = profile.line_comment {
            if rest.starts_with(marker) {
                out.push_str("<span class=\"code-comment\">");
                out.push_str(&html_escape(rest));
                out.push_str("</span>");
                return out;
            }
        }

        let ch = rest.chars().next().unwrap_or_default();

        if ch == '"' || ch == '\'' {
            let len = string_token_len(rest, ch);
            out.push_str("<span class=\"code-string\">");
            out.push_str(&html_escape(&rest[..len]));
            out.push_str("</span>");
            i += len;
            continue;
        }

        if ch.is_ascii_alphabetic() || ch == '_' {
            let end = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            let word = &rest[..end];
            if profile.keywords.contains(&word) {
                out.push_str("<span class=\"code-keyword\">");
                out.push_str(word);
                out.push_str("</span>");
            } else {
                out.push_str(&html_escape(word));
            }
            i += end;
            continue;
        }

        let mut buf = [0u8; 4];
        out.push_str(&html_escape(ch.encode_utf8(&mut buf)));
        i += ch.len_utf8();
    }

    out
}

/// Length of the string literal starting at the opening quote, including both
/// quotes; backslash escapes are honored. An unterminated literal runs to the
/// end of the line.
fn string_token_len(rest: &str, quote: char) -> usize {
    let mut len = quote.len_utf8();
    let mut escaped = false;
    for c in rest[quote.len_utf8()..].chars() {
        len += c.len_utf8();
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
        } else if c == quote {
            break;
        }
    }
    len
}

pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_wrapped() {
        let html = highlight("javascript", "var config = 1;");
        assert!(html.contains("<span class=\"code-keyword\">var</span>"));
    }

    #[test]
    fn test_strings_wrapped_and_escaped() {
        let html = highlight("javascript", r#"dt.track("a<b");"#);
        assert!(html.contains("<span class=\"code-string\">&quot;a&lt;b&quot;</span>"));
    }

    #[test]
    fn test_keyword_inside_string_not_wrapped() {
        let html = highlight("javascript", r#"x = "var";"#);
        assert!(!html.contains("code-keyword"));
    }

    #[test]
    fn test_comment_line() {
        let html = highlight("bash", "# upload the payload");
        assert!(html.starts_with("<span class=\"code-comment\">"));
    }

    #[test]
    fn test_unknown_language_is_escaped_only() {
        let html = highlight("html", "<script src=\"x\"></script>");
        assert!(!html.contains("<span"));
        assert!(html.contains("&lt;script"));
    }
}
