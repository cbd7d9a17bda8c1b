pub mod events;
pub mod i18n;
pub mod model;
pub mod planner;
pub mod ui;

fluent_i18n::i18n!("locales", fallback = "en");
