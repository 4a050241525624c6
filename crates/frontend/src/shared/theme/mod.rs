//! Theme management.
//!
//! Provides the theme token set with support for dark and light themes.
//! Theme preference is persisted in localStorage. The current theme is passed
//! to components as an explicit signal prop, never through ambient context.

use web_sys::window;

pub mod theme_select;

pub use theme_select::ThemeSelect;

const THEME_STORAGE_KEY: &str = "wizard-theme";

/// Available themes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Theme name used for the CSS class and localStorage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Translation key for the UI label.
    pub fn name_key(&self) -> &'static str {
        match self {
            Theme::Dark => "theme.dark",
            Theme::Light => "theme.light",
        }
    }

    /// CSS file path for this theme.
    pub fn css_path(&self) -> &'static str {
        match self {
            Theme::Dark => "/static/themes/dark.css",
            Theme::Light => "/static/themes/light.css",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Dark, Theme::Light]
    }

    /// Load the saved theme from localStorage.
    pub fn load() -> Theme {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
            .map(|s| Theme::from_str(&s))
            .unwrap_or_default()
    }

    /// Save the theme to localStorage.
    pub fn persist(&self) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(THEME_STORAGE_KEY, self.as_str());
        }
    }

    /// Apply the theme by swapping the theme stylesheet.
    pub fn apply(&self) {
        let document = match window().and_then(|w| w.document()) {
            Some(doc) => doc,
            None => return,
        };

        let head = match document.head() {
            Some(h) => h,
            None => return,
        };

        // Remove existing theme stylesheet
        if let Ok(Some(existing)) = document.query_selector("#theme-stylesheet") {
            let _ = existing.remove();
        }

        if let Ok(link) = document.create_element("link") {
            let _ = link.set_attribute("id", "theme-stylesheet");
            let _ = link.set_attribute("rel", "stylesheet");
            let _ = link.set_attribute("href", self.css_path());
            let _ = head.append_child(&link);
        }

        // data-theme attribute on body for additional styling hooks
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-theme", self.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_defaults_to_dark() {
        assert_eq!(Theme::from_str("light"), Theme::Light);
        assert_eq!(Theme::from_str("dark"), Theme::Dark);
        assert_eq!(Theme::from_str("forest"), Theme::Dark);
    }
}
