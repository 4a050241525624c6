pub mod roles;
pub mod state;
pub mod steps;

use crate::shared::components::ui::Button;
use crate::shared::i18n::{Language, LanguageSelect, Translator};
use crate::shared::theme::{Theme, ThemeSelect};
use contracts::app_config::AppConfig;
use leptos::prelude::*;
use steps::{AccountSetupStep, DataIntegrationStep};

/// Wizard steps, in order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WizardStep {
    AccountSetup,
    DataIntegration,
}

impl WizardStep {
    pub fn all() -> [WizardStep; 2] {
        [WizardStep::AccountSetup, WizardStep::DataIntegration]
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            WizardStep::AccountSetup => "wizard.step_account",
            WizardStep::DataIntegration => "wizard.step_integration",
        }
    }

    fn index(&self) -> usize {
        match self {
            WizardStep::AccountSetup => 0,
            WizardStep::DataIntegration => 1,
        }
    }
}

/// The onboarding wizard page.
///
/// Owns the shared [`AppConfig`] and the per-step completion flags; the steps
/// themselves are stateless with respect to navigation. Both steps stay in
/// the enum order, there is no free jumping ahead of an incomplete step.
#[component]
pub fn WizardPage(
    theme: RwSignal<Theme>,
    language: RwSignal<Language>,
    translator: Translator,
) -> impl IntoView {
    let current = RwSignal::new(WizardStep::AccountSetup);
    let config = RwSignal::new(AppConfig::default());
    let account_done = RwSignal::new(false);
    let integration_done = RwSignal::new(false);

    let step_done = move |step: WizardStep| match step {
        WizardStep::AccountSetup => account_done.get(),
        WizardStep::DataIntegration => integration_done.get(),
    };

    let handle_config_change = Callback::new(move |next: AppConfig| {
        if let Ok(json) = serde_json::to_string(&next) {
            log::debug!("app config changed: {json}");
        }
        config.set(next);
    });

    view! {
        <div class="wizard">
            <header class="wizard__header">
                <h1 class="wizard__title">{move || translator.t("app.title")}</h1>
                <div class="wizard__header-controls">
                    <ThemeSelect theme=theme translator=translator />
                    <LanguageSelect language=language />
                </div>
            </header>

            <nav class="wizard__progress">
                {WizardStep::all()
                    .into_iter()
                    .map(|step| {
                        view! {
                            <div
                                class="wizard__progress-step"
                                class:active=move || current.get() == step
                                class:done=move || step_done(step)
                            >
                                <span class="wizard__progress-index">{step.index() + 1}</span>
                                <span class="wizard__progress-title">
                                    {move || translator.t(step.title_key())}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>

            <main class="wizard__content">
                {move || match current.get() {
                    WizardStep::AccountSetup => {
                        view! {
                            <AccountSetupStep
                                translator=translator
                                on_complete=Callback::new(move |_| account_done.set(true))
                            />
                        }
                            .into_any()
                    }
                    WizardStep::DataIntegration => {
                        view! {
                            <DataIntegrationStep
                                translator=translator
                                config=config
                                on_change=handle_config_change
                                on_complete=Callback::new(move |_| integration_done.set(true))
                            />
                        }
                            .into_any()
                    }
                }}
            </main>

            <footer class="wizard__footer">
                <Button
                    variant="secondary"
                    disabled=Signal::derive(move || current.get() == WizardStep::AccountSetup)
                    on_click=Callback::new(move |_| current.set(WizardStep::AccountSetup))
                >
                    {move || translator.t("wizard.prev")}
                </Button>
                {move || match current.get() {
                    WizardStep::AccountSetup => {
                        view! {
                            <Button
                                disabled=Signal::derive(move || !account_done.get())
                                on_click=Callback::new(move |_| {
                                    current.set(WizardStep::DataIntegration)
                                })
                            >
                                {move || translator.t("wizard.next")}
                            </Button>
                        }
                            .into_any()
                    }
                    WizardStep::DataIntegration => {
                        integration_done
                            .get()
                            .then(|| {
                                view! {
                                    <span class="wizard__finished">
                                        {move || translator.t("wizard.finished")}
                                    </span>
                                }
                            })
                            .into_any()
                    }
                }}
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_keep_their_order() {
        let steps = WizardStep::all();
        assert_eq!(steps[0], WizardStep::AccountSetup);
        assert_eq!(steps[1], WizardStep::DataIntegration);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
    }

    #[test]
    fn test_step_title_keys_are_distinct() {
        assert_ne!(
            WizardStep::AccountSetup.title_key(),
            WizardStep::DataIntegration.title_key()
        );
    }
}
