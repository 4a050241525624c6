use crate::shared::components::ui::{Badge, Card, Checkbox, TabItem, Tabs, TabsController};
use crate::shared::i18n::Translator;
use crate::wizard::roles::{feature_matrix, roles, PermissionExample, Role};
use crate::wizard::state::StepCompletion;
use leptos::prelude::*;

fn role_tab_items(translator: Translator) -> Vec<TabItem<()>> {
    roles()
        .iter()
        .map(|role| TabItem::new(role.key, translator.t(role.name_key), ()))
        .collect()
}

/// First wizard step: workspace guidance, roles and the permission table.
///
/// Completion is ungated: checking "understood" completes the step.
#[component]
pub fn AccountSetupStep(translator: Translator, on_complete: Callback<()>) -> impl IntoView {
    let completion = RwSignal::new(StepCompletion::default());
    let role_tabs = RwSignal::new(TabsController::new(role_tab_items(translator), None));

    // Rebuild the labels when the language changes; the selection survives
    // because the ids stay put.
    Effect::new(move |_| {
        let items = role_tab_items(translator);
        role_tabs.update(|tabs| tabs.replace_items(items));
    });

    let handle_understood = move |checked: bool| {
        let fired = completion
            .try_update(|c| c.set_understood(checked, true))
            .unwrap_or(false);
        if fired {
            log::info!("account setup step complete");
            on_complete.run(());
        }
    };

    view! {
        <section class="wizard-step wizard-step--account">
            <Card title=Signal::derive(move || translator.t("account.intro_title"))>
                <p class="wizard-step__text">{move || translator.t("account.intro_body")}</p>
            </Card>

            <h2 class="wizard-step__heading">{move || translator.t("account.roles_title")}</h2>
            <Tabs state=role_tabs />
            {move || {
                let active = role_tabs.with(|tabs| tabs.active_id().map(str::to_string));
                roles()
                    .iter()
                    .find(|role| Some(role.key) == active.as_deref())
                    .map(|role| role_panel(role, translator))
            }}

            <h2 class="wizard-step__heading">{move || translator.t("account.matrix_title")}</h2>
            {move || matrix_table(translator)}

            <Checkbox
                id="account-understood"
                label=Signal::derive(move || translator.t("wizard.understood_account"))
                checked=Signal::derive(move || completion.get().understood())
                on_change=Callback::new(handle_understood)
            />
        </section>
    }
}

// &'static: the Badge children closure captures the reference
fn role_panel(role: &'static Role, translator: Translator) -> AnyView {
    view! {
        <div class="role-panel">
            <div class="role-panel__heading">
                <Badge variant=role.badge_variant>{translator.t(role.name_key)}</Badge>
            </div>
            <p class="role-panel__description">{translator.t(role.desc_key)}</p>
            <div class="role-panel__examples">
                {role
                    .examples
                    .iter()
                    .map(|example| permission_example(example, translator))
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

fn permission_example(example: &PermissionExample, translator: Translator) -> AnyView {
    match *example {
        PermissionExample::Checklist {
            title_key,
            item_keys,
        } => view! {
            <div class="permission-example permission-example--checklist">
                <h4 class="permission-example__title">{translator.t(title_key)}</h4>
                <ul>
                    {item_keys
                        .iter()
                        .map(|key| view! { <li>{translator.t(key)}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
        .into_any(),
        PermissionExample::Tags {
            title_key,
            tag_keys,
        } => view! {
            <div class="permission-example permission-example--tags">
                <h4 class="permission-example__title">{translator.t(title_key)}</h4>
                <div class="permission-example__tag-list">
                    {tag_keys
                        .iter()
                        .map(|key| {
                            view! { <span class="permission-example__tag">{translator.t(key)}</span> }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
        PermissionExample::Process {
            title_key,
            step_keys,
            note_key,
        } => view! {
            <div class="permission-example permission-example--process">
                <h4 class="permission-example__title">{translator.t(title_key)}</h4>
                <ol>
                    {step_keys
                        .iter()
                        .map(|key| view! { <li>{translator.t(key)}</li> })
                        .collect_view()}
                </ol>
                {note_key
                    .map(|key| {
                        view! { <p class="permission-example__note">{translator.t(key)}</p> }
                    })}
            </div>
        }
        .into_any(),
    }
}

fn matrix_table(translator: Translator) -> AnyView {
    view! {
        <table class="comparison-table">
            <thead>
                <tr>
                    <th>{translator.t("account.matrix_feature")}</th>
                    {roles()
                        .iter()
                        .map(|role| view! { <th>{translator.t(role.name_key)}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                {feature_matrix()
                    .iter()
                    .map(|row| {
                        view! {
                            <tr>
                                <td>{translator.t(row.feature_key)}</td>
                                {access_cell(row.admin)}
                                {access_cell(row.analyst)}
                                {access_cell(row.member)}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

fn access_cell(allowed: bool) -> AnyView {
    if allowed {
        view! { <td class="comparison-table__cell comparison-table__cell--yes">"✓"</td> }
            .into_any()
    } else {
        view! { <td class="comparison-table__cell comparison-table__cell--no">"—"</td> }
            .into_any()
    }
}
