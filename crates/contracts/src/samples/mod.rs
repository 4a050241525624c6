//! Platform sample generators for the data-integration step.
//!
//! Each generator is a pure function from `(app_id, data_url, translate)` to an
//! ordered list of labeled code sections. Generators never fail: empty input
//! fields are substituted with the documented placeholders.

pub mod urls;

mod android;
mod api;
mod ios;
mod javascript;
mod unity;
mod unreal;

/// Supported integration targets, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    JavaScript,
    Ios,
    Android,
    Unity,
    Unreal,
    Api,
}

impl Platform {
    pub fn all() -> [Platform; 6] {
        [
            Platform::JavaScript,
            Platform::Ios,
            Platform::Android,
            Platform::Unity,
            Platform::Unreal,
            Platform::Api,
        ]
    }

    /// Stable key used for tab ids.
    pub fn key(&self) -> &'static str {
        match self {
            Platform::JavaScript => "javascript",
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Unity => "unity",
            Platform::Unreal => "unreal",
            Platform::Api => "api",
        }
    }

    pub fn from_key(key: &str) -> Option<Platform> {
        Platform::all().into_iter().find(|p| p.key() == key)
    }

    /// Tab label. Platform names are proper nouns and are not translated.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::JavaScript => "JavaScript",
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::Unity => "Unity",
            Platform::Unreal => "Unreal",
            Platform::Api => "REST API",
        }
    }
}

/// Whether a sample section is part of the minimal integration or optional.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
}

/// One labeled code sample inside a platform tab.
#[derive(Clone, Debug, PartialEq)]
pub struct CodeSection {
    /// Stable key, unique within one platform's output.
    pub key: &'static str,
    /// Translated heading.
    pub title: String,
    pub requirement: Requirement,
    /// Highlighter hint.
    pub language: &'static str,
    pub code: String,
}

impl CodeSection {
    /// Raw endpoint illustration rather than an SDK walkthrough step. Views
    /// render these apart from the install sections.
    pub fn is_endpoint(&self) -> bool {
        self.key.starts_with("endpoint_")
    }
}

/// Builds the ordered sample sections for one platform tab.
pub fn sections(
    platform: Platform,
    app_id: &str,
    data_url: &str,
    t: &dyn Fn(&str) -> String,
) -> Vec<CodeSection> {
    match platform {
        Platform::JavaScript => javascript::sections(app_id, data_url, t),
        Platform::Ios => ios::sections(app_id, data_url, t),
        Platform::Android => android::sections(app_id, data_url, t),
        Platform::Unity => unity::sections(app_id, data_url, t),
        Platform::Unreal => unreal::sections(app_id, data_url, t),
        Platform::Api => api::sections(app_id, data_url, t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(key: &str) -> String {
        key.to_string()
    }

    #[test]
    fn test_every_platform_produces_sections() {
        for platform in Platform::all() {
            let sections = sections(platform, "abc", "https://receiver.example.com", &echo);
            assert!(!sections.is_empty(), "{} has no sections", platform.key());
            for section in &sections {
                assert!(!section.code.is_empty());
                assert!(!section.title.is_empty());
            }
        }
    }

    #[test]
    fn test_section_keys_are_unique_per_platform() {
        for platform in Platform::all() {
            let sections = sections(platform, "", "", &echo);
            for (i, section) in sections.iter().enumerate() {
                assert!(
                    !sections[i + 1..].iter().any(|other| other.key == section.key),
                    "duplicate key {} in {}",
                    section.key,
                    platform.key()
                );
            }
        }
    }

    #[test]
    fn test_only_the_api_platform_has_endpoint_sections() {
        for platform in Platform::all() {
            let endpoints: Vec<_> = sections(platform, "", "", &echo)
                .into_iter()
                .filter(|s| s.is_endpoint())
                .map(|s| s.key)
                .collect();
            if platform == Platform::Api {
                assert_eq!(endpoints, ["endpoint_data", "endpoint_json"]);
            } else {
                assert!(endpoints.is_empty(), "{} marks endpoints", platform.key());
            }
        }
    }

    #[test]
    fn test_platform_key_round_trip() {
        for platform in Platform::all() {
            assert_eq!(Platform::from_key(platform.key()), Some(platform));
        }
        assert_eq!(Platform::from_key("flash"), None);
    }
}
