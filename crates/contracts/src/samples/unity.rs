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
            language: "json",
            code: r#"// Packages/manifest.json
{
    "dependencies": {
        "io.datatrack.unity": "https://github.com/datatrack/unity-sdk.git#v3.2.0"
    }
}"#
            .to_string(),
        },
        CodeSection {
            key: "init",
            title: t("samples.section.init"),
            requirement: Requirement::Required,
            language: "csharp",
            code: format!(
                r#"DTAnalytics.Init(new DTConfig("{app_id}", "{server}"));"#
            ),
        },
        CodeSection {
            key: "identify",
            title: t("samples.section.identify"),
            requirement: Requirement::Optional,
            language: "csharp",
            code: r#"DTAnalytics.Login("ACCOUNT_ID");"#.to_string(),
        },
        CodeSection {
            key: "super_properties",
            title: t("samples.section.super_properties"),
            requirement: Requirement::Optional,
            language: "csharp",
            code: r#"DTAnalytics.SetSuperProperties(new Dictionary<string, object>
{
    { "channel", "steam" },
    { "vip_level", 3 }
});"#
            .to_string(),
        },
        CodeSection {
            key: "track",
            title: t("samples.section.track"),
            requirement: Requirement::Required,
            language: "csharp",
            code: r#"DTAnalytics.Track("purchase", new Dictionary<string, object>
{
    { "item_id", "SKU-1024" },
    { "price", 9.99 }
});"#
            .to_string(),
        },
    ]
}
