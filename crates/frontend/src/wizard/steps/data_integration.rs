use crate::shared::components::ui::{
    Card, Checkbox, CodeBlock, CodeTabItem, CodeTabs, Input, RequirementBadge, TabItem, Tabs,
    TabsController,
};
use crate::shared::i18n::Translator;
use crate::wizard::state::StepCompletion;
use contracts::app_config::{AppConfig, DeployEdition};
use contracts::samples::urls::{PLACEHOLDER_APP_ID, PLACEHOLDER_SERVER_URL};
use contracts::samples::{self, CodeSection, Platform};
use leptos::prelude::*;

/// Second wizard step: connection data plus per-platform install samples.
///
/// The step does not own the [`AppConfig`]; every edit is reported upward
/// through `on_change` and flows back in through the `config` signal.
/// Completion is gated on both connection fields being filled in.
#[component]
pub fn DataIntegrationStep(
    translator: Translator,
    #[prop(into)] config: Signal<AppConfig>,
    on_change: Callback<AppConfig>,
    on_complete: Callback<()>,
) -> impl IntoView {
    let completion = RwSignal::new(StepCompletion::default());
    let has_required = Signal::derive(move || config.get().has_required_data());

    let platform_tabs = RwSignal::new(TabsController::new(
        Platform::all()
            .iter()
            .map(|platform| TabItem::new(platform.key(), platform.label(), ()))
            .collect(),
        None,
    ));

    // The two REST endpoint illustrations live in their own code tab strip;
    // the registry is rebuilt on every keystroke.
    let api_endpoint_items = Signal::derive(move || {
        let cfg = config.get();
        let t = |key: &str| translator.t(key);
        samples::sections(Platform::Api, &cfg.app_id, &cfg.data_url, &t)
            .into_iter()
            .filter(|section| section.is_endpoint())
            .map(|section| {
                CodeTabItem::new(section.key, section.title, section.language, section.code)
            })
            .collect::<Vec<_>>()
    });

    let select_edition = move |edition: DeployEdition| {
        let mut next = config.get_untracked();
        next.edition = Some(edition);
        on_change.run(next);
    };

    let handle_app_id = move |value: String| {
        let mut next = config.get_untracked();
        next.app_id = value;
        on_change.run(next);
    };

    let handle_data_url = move |value: String| {
        let mut next = config.get_untracked();
        next.data_url = value;
        on_change.run(next);
    };

    let handle_understood = move |checked: bool| {
        let fired = completion
            .try_update(|c| c.set_understood(checked, has_required.get_untracked()))
            .unwrap_or(false);
        if fired {
            log::info!("data integration step complete");
            on_complete.run(());
        }
    };

    view! {
        <section class="wizard-step wizard-step--integration">
            <h2 class="wizard-step__heading">{move || translator.t("integration.edition_title")}</h2>
            <div class="edition-cards">
                <Card
                    title=Signal::derive(move || translator.t("edition.saas"))
                    selected=Signal::derive(move || config.get().edition == Some(DeployEdition::Saas))
                    on_click=Callback::new(move |_| select_edition(DeployEdition::Saas))
                >
                    <p>{move || translator.t("edition.saas_desc")}</p>
                </Card>
                <Card
                    title=Signal::derive(move || translator.t("edition.private"))
                    selected=Signal::derive(move || config.get().edition == Some(DeployEdition::Private))
                    on_click=Callback::new(move |_| select_edition(DeployEdition::Private))
                >
                    <p>{move || translator.t("edition.private_desc")}</p>
                </Card>
            </div>

            <div class="integration-form">
                <Input
                    id="app-id"
                    label=Signal::derive(move || translator.t("integration.app_id_label"))
                    value=Signal::derive(move || config.get().app_id)
                    placeholder=PLACEHOLDER_APP_ID
                    on_input=Callback::new(handle_app_id)
                />
                <Input
                    id="data-url"
                    label=Signal::derive(move || translator.t("integration.data_url_label"))
                    value=Signal::derive(move || config.get().data_url)
                    placeholder=PLACEHOLDER_SERVER_URL
                    on_input=Callback::new(handle_data_url)
                />
            </div>
            <p class="integration-hint">{move || translator.t("integration.hint")}</p>

            <h2 class="wizard-step__heading">{move || translator.t("integration.samples_title")}</h2>
            <Tabs
                state=platform_tabs
                on_select=Callback::new(|id: String| log::debug!("platform tab selected: {id}"))
            />
            {Platform::all()
                .into_iter()
                .map(|platform| {
                    let section_list = Signal::derive(move || {
                        let cfg = config.get();
                        let t = |key: &str| translator.t(key);
                        samples::sections(platform, &cfg.app_id, &cfg.data_url, &t)
                    });
                    let hidden = move || {
                        platform_tabs.with(|tabs| tabs.active_id() != Some(platform.key()))
                    };
                    view! {
                        <div class="platform-samples" class:hidden=hidden>
                            {move || {
                                section_list
                                    .get()
                                    .into_iter()
                                    .filter(|section| {
                                        !(platform == Platform::Api && section.is_endpoint())
                                    })
                                    .map(|section| section_view(section, translator))
                                    .collect_view()
                            }}
                            {(platform == Platform::Api)
                                .then(|| {
                                    view! {
                                        <CodeTabs items=api_endpoint_items translator=translator />
                                    }
                                })}
                        </div>
                    }
                })
                .collect_view()}

            <Checkbox
                id="integration-understood"
                label=Signal::derive(move || translator.t("wizard.understood_integration"))
                checked=Signal::derive(move || completion.get().understood())
                disabled=Signal::derive(move || !has_required.get())
                on_change=Callback::new(handle_understood)
            />
            {move || {
                (!has_required.get())
                    .then(|| {
                        view! {
                            <p class="integration-hint integration-hint--warn">
                                {translator.t("integration.fill_hint")}
                            </p>
                        }
                    })
            }}
        </section>
    }
}

fn section_view(section: CodeSection, translator: Translator) -> impl IntoView {
    let CodeSection {
        title,
        requirement,
        language,
        code,
        ..
    } = section;

    view! {
        <div class="platform-samples__section">
            <div class="platform-samples__heading">
                <span class="platform-samples__title">{title}</span>
                <RequirementBadge requirement=requirement translator=translator />
            </div>
            <CodeBlock code=code language=language.to_string() translator=translator />
        </div>
    }
}
