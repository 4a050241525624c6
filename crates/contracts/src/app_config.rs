use serde::{Deserialize, Serialize};

/// Deployment edition chosen during onboarding.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeployEdition {
    Saas,
    Private,
}

impl DeployEdition {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployEdition::Saas => "saas",
            DeployEdition::Private => "private",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "saas" => Some(DeployEdition::Saas),
            "private" => Some(DeployEdition::Private),
            _ => None,
        }
    }
}

/// Project connection data collected by the wizard.
///
/// Owned by the wizard page and passed down on every render; the sample
/// generators read it but never mutate or persist it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    pub app_id: String,
    pub data_url: String,
    pub edition: Option<DeployEdition>,
}

impl AppConfig {
    /// Both connection fields are filled in (whitespace does not count).
    pub fn has_required_data(&self) -> bool {
        !self.app_id.trim().is_empty() && !self.data_url.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_required_data() {
        let mut config = AppConfig::default();
        assert!(!config.has_required_data());

        config.app_id = "abc".to_string();
        assert!(!config.has_required_data());

        config.data_url = "https://receiver.example.com".to_string();
        assert!(config.has_required_data());
    }

    #[test]
    fn test_whitespace_does_not_satisfy_required_data() {
        let config = AppConfig {
            app_id: "  ".to_string(),
            data_url: "http://x".to_string(),
            edition: None,
        };
        assert!(!config.has_required_data());
    }

    #[test]
    fn test_serializes_with_snake_case_edition() {
        let config = AppConfig {
            app_id: "abc".to_string(),
            data_url: "https://receiver.example.com".to_string(),
            edition: Some(DeployEdition::Saas),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"app_id":"abc","data_url":"https://receiver.example.com","edition":"saas"}"#
        );
    }

    #[test]
    fn test_edition_round_trip() {
        assert_eq!(DeployEdition::from_str("saas"), Some(DeployEdition::Saas));
        assert_eq!(
            DeployEdition::from_str(DeployEdition::Private.as_str()),
            Some(DeployEdition::Private)
        );
        assert_eq!(DeployEdition::from_str("cloud"), None);
    }
}
