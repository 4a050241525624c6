use super::Theme;
use crate::shared::i18n::Translator;
use leptos::prelude::*;

/// Theme toggle rendered in the page header.
#[component]
pub fn ThemeSelect(theme: RwSignal<Theme>, translator: Translator) -> impl IntoView {
    view! {
        <div class="theme-select">
            {Theme::all()
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            class="theme-select__option"
                            class:active=move || theme.get() == option
                            on:click=move |_| theme.set(option)
                        >
                            {move || translator.t(option.name_key())}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
