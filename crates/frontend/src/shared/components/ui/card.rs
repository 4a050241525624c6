use leptos::prelude::*;

/// Card component. Clickable cards get a selected state for option pickers.
#[component]
pub fn Card(
    /// Card title (optional)
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Selected state, for cards used as options
    #[prop(optional, into)]
    selected: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Card content
    children: Children,
) -> impl IntoView {
    let card_class = move || {
        let mut classes = String::from("card");
        if on_click.is_some() {
            classes.push_str(" card--clickable");
        }
        if selected.get().unwrap_or(false) {
            classes.push_str(" card--selected");
        }
        if let Some(extra) = class.get() {
            classes.push(' ');
            classes.push_str(&extra);
        }
        classes
    };

    view! {
        <div
            class=card_class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {move || title.get().map(|t| view! { <h3 class="card__title">{t}</h3> })}
            <div class="card__body">{children()}</div>
        </div>
    }
}
