use crate::routes::AppRoutes;
use crate::shared::i18n::Language;
use crate::shared::theme::Theme;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Theme and language are owned here and threaded down as explicit props;
    // no component reads them from ambient context.
    let theme = RwSignal::new(Theme::load());
    let language = RwSignal::new(Language::load());

    Effect::new(move |_| {
        let current = theme.get();
        current.apply();
        current.persist();
    });

    Effect::new(move |_| {
        language.get().persist();
    });

    view! { <AppRoutes theme=theme language=language /> }
}
