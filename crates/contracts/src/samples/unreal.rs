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
            code: r#"// YourProject.uproject, after copying the plugin into Plugins/
"Plugins": [
    { "Name": "DataTrack", "Enabled": true }
]"#
            .to_string(),
        },
        CodeSection {
            key: "init",
            title: t("samples.section.init"),
            requirement: Requirement::Required,
            language: "cpp",
            code: format!(
                r#"FDTConfig Config;
Config.AppId = TEXT("{app_id}");
Config.ServerUrl = TEXT("{server}");
UDataTrack::Initialize(Config);"#
            ),
        },
        CodeSection {
            key: "identify",
            title: t("samples.section.identify"),
            requirement: Requirement::Optional,
            language: "cpp",
            code: r#"UDataTrack::Login(TEXT("ACCOUNT_ID"));"#.to_string(),
        },
        CodeSection {
            key: "super_properties",
            title: t("samples.section.super_properties"),
            requirement: Requirement::Optional,
            language: "cpp",
            code: r#"TSharedPtr<FJsonObject> Properties = MakeShared<FJsonObject>();
Properties->SetStringField(TEXT("channel"), TEXT("epic"));
Properties->SetNumberField(TEXT("vip_level"), 3);
UDataTrack::SetSuperProperties(Properties);"#
                .to_string(),
        },
        CodeSection {
            key: "track",
            title: t("samples.section.track"),
            requirement: Requirement::Required,
            language: "cpp",
            code: r#"TSharedPtr<FJsonObject> Properties = MakeShared<FJsonObject>();
Properties->SetStringField(TEXT("item_id"), TEXT("SKU-1024"));
Properties->SetNumberField(TEXT("price"), 9.99);
UDataTrack::Track(TEXT("purchase"), Properties);"#
                .to_string(),
        },
    ]
}
