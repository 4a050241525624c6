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
            language: "groovy",
            code: "// app/build.gradle\ndependencies {\n    implementation 'io.datatrack:android-sdk:3.2.0'\n}"
                .to_string(),
        },
        CodeSection {
            key: "init",
            title: t("samples.section.init"),
            requirement: Requirement::Required,
            language: "kotlin",
            code: format!(
                r#"// Application.onCreate()
val config = DTConfig.getInstance(this, "{app_id}", "{server}")
DataTrackSDK.init(config)"#
            ),
        },
        CodeSection {
            key: "identify",
            title: t("samples.section.identify"),
            requirement: Requirement::Optional,
            language: "kotlin",
            code: r#"DataTrackSDK.sharedInstance().login("ACCOUNT_ID")"#.to_string(),
        },
        CodeSection {
            key: "super_properties",
            title: t("samples.section.super_properties"),
            requirement: Requirement::Optional,
            language: "kotlin",
            code: r#"DataTrackSDK.sharedInstance().setSuperProperties(
    JSONObject().apply {
        put("channel", "google_play")
        put("vip_level", 3)
    }
)"#
            .to_string(),
        },
        CodeSection {
            key: "track",
            title: t("samples.section.track"),
            requirement: Requirement::Required,
            language: "kotlin",
            code: r#"DataTrackSDK.sharedInstance().track("purchase",
    JSONObject().apply {
        put("item_id", "SKU-1024")
        put("price", 9.99)
    }
)"#
            .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_for_empty_input() {
        let sections = sections("", "  ", &|k| k.to_string());
        let init = sections.iter().find(|s| s.key == "init").unwrap();
        assert!(init.code.contains("YOUR_APP_ID"));
        assert!(init.code.contains("https://YOUR_SERVER_URL"));
    }
}
