use leptos::prelude::*;

/// One entry in a tab registry. Ids must be unique within a registry; when the
/// invariant is violated, lookups resolve to the first match.
#[derive(Clone, Debug, PartialEq)]
pub struct TabItem<C> {
    pub id: String,
    pub label: String,
    pub content: C,
    pub disabled: bool,
}

impl<C> TabItem<C> {
    pub fn new(id: impl Into<String>, label: impl Into<String>, content: C) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            content,
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Single-selection state machine over an ordered tab registry.
///
/// Selection falls back to the first entry whenever the active id is not
/// present, so replacing the registry from outside can never leave the
/// controller pointing at a vanished tab.
#[derive(Clone, Debug)]
pub struct TabsController<C> {
    items: Vec<TabItem<C>>,
    active_id: Option<String>,
}

impl<C> TabsController<C> {
    /// `initial` selects the starting tab; an absent or disabled id falls back
    /// to the first entry.
    pub fn new(items: Vec<TabItem<C>>, initial: Option<&str>) -> Self {
        let mut controller = Self {
            items,
            active_id: None,
        };
        controller.active_id = match initial {
            Some(id) if controller.selectable(id) => Some(id.to_string()),
            _ => controller.items.first().map(|item| item.id.clone()),
        };
        controller
    }

    fn selectable(&self, id: &str) -> bool {
        self.items
            .iter()
            .find(|item| item.id == id)
            .is_some_and(|item| !item.disabled)
    }

    /// Moves the selection. Returns `false` (and changes nothing) when the id
    /// is unknown or the tab is disabled.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.selectable(id) {
            return false;
        }
        self.active_id = Some(id.to_string());
        true
    }

    /// Replaces the registry. A previously active id that is absent from the
    /// new registry silently falls back to the new first entry.
    pub fn replace_items(&mut self, items: Vec<TabItem<C>>) {
        self.items = items;
        let still_present = self
            .active_id
            .as_deref()
            .map(|id| self.items.iter().any(|item| item.id == id))
            .unwrap_or(false);
        if !still_present {
            self.active_id = self.items.first().map(|item| item.id.clone());
        }
    }

    pub fn items(&self) -> &[TabItem<C>] {
        &self.items
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Content of the active tab. Falls back to the first entry when the
    /// active id is gone; `None` only for an empty registry.
    pub fn active_content(&self) -> Option<&C> {
        match self.active_id.as_deref() {
            Some(id) => self
                .items
                .iter()
                .find(|item| item.id == id)
                .map(|item| &item.content)
                .or_else(|| self.items.first().map(|item| &item.content)),
            None => self.items.first().map(|item| &item.content),
        }
    }
}

/// Tab header strip driven by a shared [`TabsController`].
///
/// The parent owns the controller signal and renders the active content by
/// matching on `active_id()`; this component only renders the headers and
/// forwards clicks through the controller.
#[component]
pub fn Tabs<C>(
    /// Shared controller state
    state: RwSignal<TabsController<C>>,
    /// Notified once per successful selection, with the new id
    #[prop(optional)]
    on_select: Option<Callback<String>>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView
where
    C: Clone + Send + Sync + 'static,
{
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("tabs {}", additional_class())>
            <For
                each=move || state.with(|s| s.items().to_vec())
                key=|item| item.id.clone()
                children=move |item| {
                    // the annotation must stay out of the closure head, the
                    // macro would parse `<C>` as markup
                    let item: TabItem<C> = item;
                    let id = item.id.clone();
                    let id_for_click = item.id.clone();
                    let is_active = move || state.with(|s| s.active_id() == Some(id.as_str()));
                    view! {
                        <button
                            class="tabs__header"
                            class:active=is_active
                            disabled=item.disabled
                            on:click=move |_| {
                                let selected = state
                                    .try_update(|s| s.select(&id_for_click))
                                    .unwrap_or(false);
                                if selected {
                                    if let Some(handler) = on_select {
                                        handler.run(id_for_click.clone());
                                    }
                                }
                            }
                        >
                            {item.label.clone()}
                        </button>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Vec<TabItem<&'static str>> {
        vec![
            TabItem::new("overview", "Overview", "overview body"),
            TabItem::new("details", "Details", "details body"),
            TabItem::new("archived", "Archived", "archived body").disabled(),
        ]
    }

    #[test]
    fn test_defaults_to_first_tab() {
        let tabs = TabsController::new(registry(), None);
        assert_eq!(tabs.active_id(), Some("overview"));
        assert_eq!(tabs.active_content(), Some(&"overview body"));
    }

    #[test]
    fn test_select_returns_matching_content() {
        let mut tabs = TabsController::new(registry(), None);
        assert!(tabs.select("details"));
        assert_eq!(tabs.active_content(), Some(&"details body"));
    }

    #[test]
    fn test_select_unknown_id_is_a_noop() {
        let mut tabs = TabsController::new(registry(), None);
        assert!(!tabs.select("missing"));
        assert_eq!(tabs.active_id(), Some("overview"));
    }

    #[test]
    fn test_select_disabled_tab_is_a_noop() {
        let mut tabs = TabsController::new(registry(), None);
        assert!(!tabs.select("archived"));
        assert_eq!(tabs.active_id(), Some("overview"));
    }

    #[test]
    fn test_initial_id_falls_back_when_disabled() {
        let tabs = TabsController::new(registry(), Some("archived"));
        assert_eq!(tabs.active_id(), Some("overview"));

        let tabs = TabsController::new(registry(), Some("details"));
        assert_eq!(tabs.active_id(), Some("details"));
    }

    #[test]
    fn test_replacement_heals_vanished_active_id() {
        let mut tabs = TabsController::new(registry(), None);
        tabs.select("details");

        tabs.replace_items(vec![
            TabItem::new("summary", "Summary", "summary body"),
            TabItem::new("overview", "Overview", "overview body"),
        ]);
        assert_eq!(tabs.active_id(), Some("summary"));
        assert_eq!(tabs.active_content(), Some(&"summary body"));
    }

    #[test]
    fn test_replacement_keeps_surviving_active_id() {
        let mut tabs = TabsController::new(registry(), None);
        tabs.select("details");

        tabs.replace_items(vec![
            TabItem::new("details", "Details", "new details body"),
            TabItem::new("summary", "Summary", "summary body"),
        ]);
        assert_eq!(tabs.active_id(), Some("details"));
        assert_eq!(tabs.active_content(), Some(&"new details body"));
    }

    #[test]
    fn test_empty_registry_has_no_content() {
        let tabs: TabsController<&str> = TabsController::new(Vec::new(), None);
        assert_eq!(tabs.active_id(), None);
        assert_eq!(tabs.active_content(), None);
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first_match() {
        let mut tabs = TabsController::new(
            vec![
                TabItem::new("a", "First", "first body"),
                TabItem::new("a", "Second", "second body"),
            ],
            None,
        );
        assert!(tabs.select("a"));
        assert_eq!(tabs.active_content(), Some(&"first body"));
    }
}
