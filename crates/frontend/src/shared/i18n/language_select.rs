use super::Language;
use crate::shared::components::ui::Select;
use leptos::prelude::*;

/// Language switcher rendered in the page header.
#[component]
pub fn LanguageSelect(language: RwSignal<Language>) -> impl IntoView {
    let options = Signal::derive(move || {
        Language::all()
            .into_iter()
            .map(|l| (l.as_str().to_string(), l.display_name().to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <Select
            value=Signal::derive(move || language.get().as_str().to_string())
            options=options
            on_change=Callback::new(move |value: String| {
                language.set(Language::from_str(&value));
            })
            class="language-select"
        />
    }
}
