//! Placeholder substitution and derived receiver URLs.

/// Shown wherever the user has not entered an App ID yet.
pub const PLACEHOLDER_APP_ID: &str = "YOUR_APP_ID";
/// Shown wherever the user has not entered a receiver URL yet.
pub const PLACEHOLDER_SERVER_URL: &str = "https://YOUR_SERVER_URL";

/// Returns the trimmed value, or the placeholder when nothing was entered.
pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder
    } else {
        trimmed
    }
}

/// Appends `suffix` to `url` unless it already ends with it.
///
/// Idempotent: applying the rule to its own output changes nothing. Trailing
/// slashes on the base URL are collapsed so `https://x/` and `https://x`
/// derive the same endpoint.
pub fn with_path_suffix(url: &str, suffix: &str) -> String {
    let base = url.trim_end_matches('/');
    if base.ends_with(suffix) {
        base.to_string()
    } else {
        format!("{base}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_applied_once() {
        assert_eq!(
            with_path_suffix("https://x.com", "/sync_js"),
            "https://x.com/sync_js"
        );
    }

    #[test]
    fn test_suffix_is_idempotent() {
        let once = with_path_suffix("https://x.com", "/sync_js");
        let twice = with_path_suffix(&once, "/sync_js");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_trailing_slash_collapsed() {
        assert_eq!(
            with_path_suffix("https://x.com/", "/sync_data"),
            "https://x.com/sync_data"
        );
        assert_eq!(
            with_path_suffix("https://x.com/sync_data/", "/sync_data"),
            "https://x.com/sync_data"
        );
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder("  ", PLACEHOLDER_APP_ID), "YOUR_APP_ID");
        assert_eq!(or_placeholder(" abc ", PLACEHOLDER_APP_ID), "abc");
    }
}
