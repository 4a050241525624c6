pub mod clipboard;
pub mod components;
pub mod highlight;
pub mod i18n;
pub mod theme;
