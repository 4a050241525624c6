use super::code_block::CodeBlock;
use super::tabs::{TabItem, Tabs, TabsController};
use crate::shared::i18n::Translator;
use leptos::prelude::*;

/// The `{language, code}` pair handed to the code renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct CodeSnippet {
    pub language: String,
    pub code: String,
}

/// Registry entry for a code tab strip.
#[derive(Clone, Debug, PartialEq)]
pub struct CodeTabItem {
    pub id: String,
    pub label: String,
    pub language: String,
    pub code: String,
}

impl CodeTabItem {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        language: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            language: language.into(),
            code: code.into(),
        }
    }

    fn into_tab(self) -> TabItem<CodeSnippet> {
        TabItem::new(
            self.id,
            self.label,
            CodeSnippet {
                language: self.language,
                code: self.code,
            },
        )
    }
}

/// Tab strip over code snippets.
///
/// Specialization of [`Tabs`]: the rendered [`CodeBlock`] always receives a
/// defined `{language, code}` pair, since the controller falls back to the
/// first entry when the active id is missing from a refreshed registry. The
/// item list is reactive; replacing it replaces the controller's registry.
#[component]
pub fn CodeTabs(
    /// Reactive registry of code snippets
    #[prop(into)]
    items: Signal<Vec<CodeTabItem>>,
    /// Notified once per successful selection, with the new id
    #[prop(optional)]
    on_select: Option<Callback<String>>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    translator: Translator,
) -> impl IntoView {
    let state = RwSignal::new(TabsController::new(
        items
            .get_untracked()
            .into_iter()
            .map(CodeTabItem::into_tab)
            .collect(),
        None,
    ));

    // Track registry replacement; a vanished active id heals to the first entry.
    Effect::new(move |_| {
        let refreshed = items
            .get()
            .into_iter()
            .map(CodeTabItem::into_tab)
            .collect();
        state.update(|s| s.replace_items(refreshed));
    });

    let additional_class = move || class.get().unwrap_or_default();

    let forward_select = Callback::new(move |id: String| {
        if let Some(handler) = on_select {
            handler.run(id);
        }
    });

    view! {
        <div class=move || format!("code-tabs {}", additional_class())>
            <Tabs state=state on_select=forward_select />
            {move || {
                state
                    .with(|s| s.active_content().cloned())
                    .map(|snippet| {
                        view! {
                            <CodeBlock
                                code=snippet.code
                                language=snippet.language
                                translator=translator
                            />
                        }
                    })
            }}
        </div>
    }
}
