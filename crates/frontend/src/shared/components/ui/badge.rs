use crate::shared::i18n::Translator;
use contracts::samples::Requirement;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Required/optional marker next to a sample section heading.
#[component]
pub fn RequirementBadge(requirement: Requirement, translator: Translator) -> impl IntoView {
    let (modifier, key) = match requirement {
        Requirement::Required => ("badge--requirement-required", "samples.required"),
        Requirement::Optional => ("badge--requirement-optional", "samples.optional"),
    };

    view! {
        <span class=format!("badge badge--requirement {modifier}")>
            {move || translator.t(key)}
        </span>
    }
}
