use super::urls::{or_placeholder, with_path_suffix, PLACEHOLDER_APP_ID, PLACEHOLDER_SERVER_URL};
use super::{CodeSection, Requirement};

pub(super) fn sections(
    app_id: &str,
    data_url: &str,
    t: &dyn Fn(&str) -> String,
) -> Vec<CodeSection> {
    let app_id = or_placeholder(app_id, PLACEHOLDER_APP_ID);
    let server = or_placeholder(data_url, PLACEHOLDER_SERVER_URL);
    // The browser SDK reports to the dedicated /sync_js endpoint.
    let js_url = with_path_suffix(server, "/sync_js");

    vec![
        CodeSection {
            key: "install",
            title: t("samples.section.install"),
            requirement: Requirement::Required,
            language: "html",
            code: r#"<script src="https://cdn.datatrack.io/sdk/3.2/dt.min.js"></script>"#
                .to_string(),
        },
        CodeSection {
            key: "init",
            title: t("samples.section.init"),
            requirement: Requirement::Required,
            language: "javascript",
            code: format!(
                r#"var config = {{
    appId: "{app_id}",
    serverUrl: "{js_url}",
    autoTrack: {{
        pageShow: true,
        pageHide: true
    }}
}};
dt.init(config);"#
            ),
        },
        CodeSection {
            key: "identify",
            title: t("samples.section.identify"),
            requirement: Requirement::Optional,
            language: "javascript",
            code: r#"// after your own login flow succeeds
dt.login("ACCOUNT_ID");"#
                .to_string(),
        },
        CodeSection {
            key: "super_properties",
            title: t("samples.section.super_properties"),
            requirement: Requirement::Optional,
            language: "javascript",
            code: r#"dt.setSuperProperties({
    channel: "organic",
    vip_level: 3
});"#
            .to_string(),
        },
        CodeSection {
            key: "track",
            title: t("samples.section.track"),
            requirement: Requirement::Required,
            language: "javascript",
            code: r#"dt.track("purchase", {
    item_id: "SKU-1024",
    price: 9.99
});"#
            .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(key: &str) -> String {
        key.to_string()
    }

    fn init_code(app_id: &str, data_url: &str) -> String {
        sections(app_id, data_url, &echo)
            .into_iter()
            .find(|s| s.key == "init")
            .expect("init section present")
            .code
    }

    #[test]
    fn test_empty_input_uses_placeholders() {
        let code = init_code("", "");
        assert!(code.contains("YOUR_APP_ID"));
        assert!(code.contains("https://YOUR_SERVER_URL/sync_js"));
    }

    #[test]
    fn test_filled_input_is_verbatim() {
        let code = init_code("abc", "https://h");
        assert!(code.contains(r#"appId: "abc""#));
        assert!(code.contains(r#"serverUrl: "https://h/sync_js""#));
    }

    #[test]
    fn test_suffix_not_doubled() {
        let code = init_code("abc", "https://h/sync_js");
        assert!(code.contains(r#"serverUrl: "https://h/sync_js""#));
        assert!(!code.contains("/sync_js/sync_js"));
    }
}
