use super::urls::{or_placeholder, PLACEHOLDER_APP_ID, PLACEHOLDER_SERVER_URL};
use super::{CodeSection, Requirement};

pub(super) fn sections(
    app_id: &str,
    data_url: &str,
    t: &dyn Fn(&str) -> String,
) -> Vec<CodeSection> {
    let app_id = or_placeholder(app_id, PLACEHOLDER_APP_ID);
    let server = or_placeholder(data_url, PLACEHOLDER_SERVER_URL);

    vec![
        CodeSection {
            key: "install",
            title: t("samples.section.install"),
            requirement: Requirement::Required,
            language: "ruby",
            code: "# Podfile\npod 'DataTrackSDK', '~> 3.2'".to_string(),
        },
        CodeSection {
            key: "init",
            title: t("samples.section.init"),
            requirement: Requirement::Required,
            language: "swift",
            code: format!(
                r#"let config = DTConfig(appId: "{app_id}", serverUrl: "{server}")
DataTrack.start(with: config)"#
            ),
        },
        CodeSection {
            key: "identify",
            title: t("samples.section.identify"),
            requirement: Requirement::Optional,
            language: "swift",
            code: r#"// after your own login flow succeeds
DataTrack.shared().login("ACCOUNT_ID")"#
                .to_string(),
        },
        CodeSection {
            key: "super_properties",
            title: t("samples.section.super_properties"),
            requirement: Requirement::Optional,
            language: "swift",
            code: r#"DataTrack.shared().setSuperProperties([
    "channel": "app_store",
    "vip_level": 3
])"#
            .to_string(),
        },
        CodeSection {
            key: "track",
            title: t("samples.section.track"),
            requirement: Requirement::Required,
            language: "swift",
            code: r#"DataTrack.shared().track("purchase", properties: [
    "item_id": "SKU-1024",
    "price": 9.99
])"#
            .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_url_is_verbatim() {
        let sections = sections("abc", "https://receiver.example.com", &|k| k.to_string());
        let init = sections.iter().find(|s| s.key == "init").unwrap();
        assert!(init.code.contains("https://receiver.example.com"));
        assert!(init.code.contains("abc"));
    }
}
