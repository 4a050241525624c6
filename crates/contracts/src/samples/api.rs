use super::urls::{or_placeholder, with_path_suffix, PLACEHOLDER_APP_ID, PLACEHOLDER_SERVER_URL};
use super::{CodeSection, Requirement};

pub(super) fn sections(
    app_id: &str,
    data_url: &str,
    t: &dyn Fn(&str) -> String,
) -> Vec<CodeSection> {
    let app_id = or_placeholder(app_id, PLACEHOLDER_APP_ID);
    let server = or_placeholder(data_url, PLACEHOLDER_SERVER_URL);
    let data_endpoint = with_path_suffix(server, "/sync_data");
    let json_endpoint = with_path_suffix(server, "/sync_json");

    vec![
        CodeSection {
            key: "payload",
            title: t("samples.section.payload"),
            requirement: Requirement::Required,
            language: "json",
            code: format!(
                r##"{{
    "appid": "{app_id}",
    "data": {{
        "#type": "track",
        "#event_name": "purchase",
        "#time": "2026-01-01 12:00:00.000",
        "#distinct_id": "ACCOUNT_ID",
        "properties": {{
            "item_id": "SKU-1024",
            "price": 9.99
        }}
    }}
}}"##
            ),
        },
        CodeSection {
            key: "endpoint_data",
            title: t("samples.section.endpoint_data"),
            requirement: Requirement::Required,
            language: "bash",
            code: format!(
                r#"# form-encoded upload, data is base64 of the payload above
curl '{data_endpoint}' \
    --data-urlencode 'appid={app_id}' \
    --data-urlencode 'data=eyJhcHBpZCI6...'"#
            ),
        },
        CodeSection {
            key: "endpoint_json",
            title: t("samples.section.endpoint_json"),
            requirement: Requirement::Optional,
            language: "bash",
            code: format!(
                r##"# raw JSON upload, one event per request
curl '{json_endpoint}' \
    -H 'Content-Type: application/json' \
    -d '{{"appid": "{app_id}", "data": {{"#type": "track", "#event_name": "purchase"}}}}'"##
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(key: &str) -> String {
        key.to_string()
    }

    #[test]
    fn test_both_endpoints_derived() {
        let sections = sections("abc", "https://h", &echo);
        let data = sections.iter().find(|s| s.key == "endpoint_data").unwrap();
        let json = sections.iter().find(|s| s.key == "endpoint_json").unwrap();
        assert!(data.code.contains("https://h/sync_data"));
        assert!(json.code.contains("https://h/sync_json"));
    }

    #[test]
    fn test_endpoint_suffixes_not_doubled() {
        let sections = sections("abc", "https://h/sync_data", &echo);
        let data = sections.iter().find(|s| s.key == "endpoint_data").unwrap();
        assert!(data.code.contains("https://h/sync_data"));
        assert!(!data.code.contains("/sync_data/sync_data"));
    }

    #[test]
    fn test_placeholder_endpoints_for_empty_input() {
        let sections = sections("", "", &echo);
        let data = sections.iter().find(|s| s.key == "endpoint_data").unwrap();
        assert!(data.code.contains("https://YOUR_SERVER_URL/sync_data"));
        assert!(data.code.contains("appid=YOUR_APP_ID"));
    }
}
