//! Language management.
//!
//! Mirrors the theme module: an enum of supported languages persisted in
//! localStorage, plus a `Translator` handle that components receive as an
//! explicit prop. Translation is an opaque `key -> string` lookup; unknown
//! keys echo back unchanged.

use leptos::prelude::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use web_sys::window;

pub mod language_select;

pub use language_select::LanguageSelect;

const LANGUAGE_STORAGE_KEY: &str = "wizard-language";

/// Available UI languages.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// Display name shown in its own language.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ru => "Русский",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "ru" => Language::Ru,
            _ => Language::En,
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::En, Language::Ru]
    }

    fn index(&self) -> usize {
        match self {
            Language::En => 0,
            Language::Ru => 1,
        }
    }

    /// Load the saved language from localStorage.
    pub fn load() -> Language {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(LANGUAGE_STORAGE_KEY).ok().flatten())
            .map(|s| Language::from_str(&s))
            .unwrap_or_default()
    }

    /// Save the language to localStorage.
    pub fn persist(&self) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(LANGUAGE_STORAGE_KEY, self.as_str());
        }
    }
}

/// Translate a key for the given language. Unknown keys echo back unchanged.
pub fn translate(language: Language, key: &str) -> String {
    MESSAGES
        .get(key)
        .map(|entry| entry[language.index()].to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Cloneable `translate(key) -> string` handle.
///
/// Reads the language signal, so any view that calls `t` inside a reactive
/// closure re-renders when the language changes.
#[derive(Clone, Copy)]
pub struct Translator {
    language: RwSignal<Language>,
}

impl Translator {
    pub fn new(language: RwSignal<Language>) -> Self {
        Self { language }
    }

    pub fn t(&self, key: &str) -> String {
        translate(self.language.get(), key)
    }
}

static MESSAGES: Lazy<HashMap<&'static str, [&'static str; 2]>> = Lazy::new(|| {
    HashMap::from([
        // shell
        ("app.title", ["Analytics SDK onboarding", "Подключение Analytics SDK"]),
        ("theme.dark", ["Dark", "Тёмная"]),
        ("theme.light", ["Light", "Светлая"]),
        // wizard chrome
        ("wizard.step_account", ["Account setup", "Настройка аккаунта"]),
        ("wizard.step_integration", ["Data integration", "Интеграция данных"]),
        ("wizard.prev", ["Back", "Назад"]),
        ("wizard.next", ["Next", "Далее"]),
        ("wizard.finished", ["You are all set", "Всё готово"]),
        (
            "wizard.understood_account",
            [
                "I understand how roles and permissions work",
                "Я понимаю, как работают роли и права доступа",
            ],
        ),
        (
            "wizard.understood_integration",
            [
                "I have installed the SDK and verified incoming data",
                "Я установил SDK и проверил поступление данных",
            ],
        ),
        // code renderer
        ("code.copy", ["Copy", "Копировать"]),
        ("code.copied", ["Copied!", "Скопировано!"]),
        // account setup step
        (
            "account.intro_title",
            ["Set up your workspace", "Настройте рабочее пространство"],
        ),
        (
            "account.intro_body",
            [
                "Create a project for every product you track and invite your team. \
                 Each member gets a role that controls what they can see and change.",
                "Создайте проект для каждого продукта и пригласите команду. \
                 Каждому участнику назначается роль, определяющая его права.",
            ],
        ),
        ("account.roles_title", ["Roles", "Роли"]),
        (
            "account.matrix_title",
            ["Permission comparison", "Сравнение прав доступа"],
        ),
        ("account.matrix_feature", ["Feature", "Возможность"]),
        // roles
        ("role.admin", ["Administrator", "Администратор"]),
        ("role.analyst", ["Analyst", "Аналитик"]),
        ("role.member", ["Member", "Участник"]),
        (
            "role.admin.desc",
            [
                "Full control over the workspace: members, projects and credentials.",
                "Полный контроль над пространством: участники, проекты и ключи доступа.",
            ],
        ),
        (
            "role.analyst.desc",
            [
                "Builds reports and dashboards on top of collected data.",
                "Создаёт отчёты и дашборды на основе собранных данных.",
            ],
        ),
        (
            "role.member.desc",
            [
                "Works with reports shared by the team.",
                "Работает с отчётами, которыми поделилась команда.",
            ],
        ),
        (
            "role.admin.ex.manage.title",
            ["Typical administration tasks", "Типичные задачи администратора"],
        ),
        (
            "role.admin.ex.manage.item1",
            ["Invite members and assign roles", "Приглашать участников и назначать роли"],
        ),
        (
            "role.admin.ex.manage.item2",
            ["Create and archive projects", "Создавать и архивировать проекты"],
        ),
        (
            "role.admin.ex.manage.item3",
            ["Rotate App IDs and API keys", "Обновлять App ID и API-ключи"],
        ),
        (
            "role.admin.ex.access.title",
            ["Has access to", "Имеет доступ к"],
        ),
        (
            "role.analyst.ex.flow.title",
            ["A typical reporting flow", "Типичный процесс работы с отчётами"],
        ),
        (
            "role.analyst.ex.flow.step1",
            ["Build a report from collected events", "Построить отчёт по собранным событиям"],
        ),
        (
            "role.analyst.ex.flow.step2",
            ["Save it to the shared space", "Сохранить его в общем пространстве"],
        ),
        (
            "role.analyst.ex.flow.step3",
            ["Share the link with the team", "Поделиться ссылкой с командой"],
        ),
        (
            "role.analyst.ex.flow.note",
            [
                "Saved reports stay up to date as new data arrives.",
                "Сохранённые отчёты обновляются по мере поступления данных.",
            ],
        ),
        (
            "role.analyst.ex.access.title",
            ["Has access to", "Имеет доступ к"],
        ),
        (
            "role.member.ex.view.title",
            ["What members can do", "Что могут участники"],
        ),
        (
            "role.member.ex.view.item1",
            ["View shared dashboards", "Просматривать общие дашборды"],
        ),
        (
            "role.member.ex.view.item2",
            ["Comment on reports", "Комментировать отчёты"],
        ),
        (
            "role.member.ex.view.item3",
            ["Subscribe to scheduled digests", "Подписываться на рассылки отчётов"],
        ),
        ("role.tag.all_reports", ["all reports", "все отчёты"]),
        ("role.tag.api_keys", ["API keys", "API-ключи"]),
        ("role.tag.billing", ["billing", "биллинг"]),
        ("role.tag.members", ["members", "участники"]),
        ("role.tag.create_reports", ["report builder", "конструктор отчётов"]),
        ("role.tag.export_data", ["data export", "экспорт данных"]),
        // permission matrix features
        ("feature.manage_members", ["Manage members", "Управление участниками"]),
        ("feature.manage_projects", ["Manage projects", "Управление проектами"]),
        ("feature.api_keys", ["Manage API keys", "Управление API-ключами"]),
        ("feature.create_reports", ["Create reports", "Создание отчётов"]),
        ("feature.export_data", ["Export data", "Экспорт данных"]),
        ("feature.view_reports", ["View reports", "Просмотр отчётов"]),
        // data integration step
        (
            "integration.edition_title",
            ["Where does your data go?", "Куда отправляются данные?"],
        ),
        ("edition.saas", ["Cloud (SaaS)", "Облако (SaaS)"]),
        (
            "edition.saas_desc",
            [
                "Use the receiver URL shown on your project page in the cloud console.",
                "Используйте адрес приёмника со страницы проекта в облачной консоли.",
            ],
        ),
        ("edition.private", ["Private deployment", "Частное развёртывание"]),
        (
            "edition.private_desc",
            [
                "Point the SDK at the receiver service of your own installation.",
                "Укажите адрес сервиса-приёмника вашей собственной инсталляции.",
            ],
        ),
        ("integration.app_id_label", ["App ID", "App ID"]),
        (
            "integration.data_url_label",
            ["Data receiver URL", "Адрес приёмника данных"],
        ),
        (
            "integration.hint",
            [
                "The samples below update as you type.",
                "Примеры ниже обновляются по мере ввода.",
            ],
        ),
        (
            "integration.fill_hint",
            [
                "Fill in the App ID and the receiver URL to finish this step.",
                "Заполните App ID и адрес приёмника, чтобы завершить шаг.",
            ],
        ),
        (
            "integration.samples_title",
            ["Install the SDK", "Установите SDK"],
        ),
        // sample sections
        ("samples.required", ["required", "обязательно"]),
        ("samples.optional", ["optional", "опционально"]),
        ("samples.section.install", ["Install", "Установка"]),
        ("samples.section.init", ["Initialize", "Инициализация"]),
        (
            "samples.section.identify",
            ["Bind the user identity", "Привязка идентификатора пользователя"],
        ),
        (
            "samples.section.super_properties",
            ["Attach common properties", "Общие свойства событий"],
        ),
        ("samples.section.track", ["Send an event", "Отправка события"]),
        (
            "samples.section.payload",
            ["Event payload format", "Формат данных события"],
        ),
        (
            "samples.section.endpoint_data",
            ["The /sync_data endpoint", "Эндпоинт /sync_data"],
        ),
        (
            "samples.section.endpoint_json",
            ["The /sync_json endpoint", "Эндпоинт /sync_json"],
        ),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_both_languages() {
        assert_eq!(translate(Language::En, "code.copy"), "Copy");
        assert_eq!(translate(Language::Ru, "code.copy"), "Копировать");
    }

    #[test]
    fn test_unknown_key_echoes() {
        assert_eq!(translate(Language::En, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_language_round_trip() {
        for language in Language::all() {
            assert_eq!(Language::from_str(language.as_str()), language);
        }
        assert_eq!(Language::from_str("fr"), Language::En);
    }
}
