use crate::shared::i18n::{Language, Translator};
use crate::shared::theme::Theme;
use crate::wizard::WizardPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes(theme: RwSignal<Theme>, language: RwSignal<Language>) -> impl IntoView {
    let translator = Translator::new(language);

    view! {
        <Router>
            <Routes fallback=move || {
                view! { <WizardPage theme=theme language=language translator=translator /> }
            }>
                <Route
                    path=path!("/")
                    view=move || {
                        view! { <WizardPage theme=theme language=language translator=translator /> }
                    }
                />
            </Routes>
        </Router>
    }
}
