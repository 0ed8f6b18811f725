//! English/Arabic text and layout direction.
//!
//! Strings live in `content/locales/<code>.json`. A key missing from the
//! active language falls back to English, then to the key itself, so a
//! missing translation shows up on the page instead of breaking it.

use std::collections::HashMap;
use std::rc::Rc;

use log::{info, warn};
use serde::Deserialize;
use web_sys::window;
use yew::prelude::*;

use crate::config::ConfigError;

const EN_JSON: &str = include_str!("../content/locales/en.json");
const AR_JSON: &str = include_str!("../content/locales/ar.json");
const STORAGE_KEY: &str = "lang";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::English),
            "ar" => Some(Language::Arabic),
            _ => None,
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Language::English => "ltr",
            Language::Arabic => "rtl",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }

    /// Name of the language the switcher would change to, in that language.
    pub fn switch_label(self) -> &'static str {
        match self.toggled() {
            Language::English => "English",
            Language::Arabic => "العربية",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    strings: HashMap<Language, HashMap<String, String>>,
}

impl Catalog {
    pub fn embedded() -> Result<Self, ConfigError> {
        let mut catalog = Self::default();
        catalog.insert(Language::English, serde_json::from_str(EN_JSON)?);
        catalog.insert(Language::Arabic, serde_json::from_str(AR_JSON)?);
        Ok(catalog)
    }

    pub fn insert(&mut self, language: Language, strings: HashMap<String, String>) {
        self.strings.insert(language, strings);
    }

    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.strings
            .get(&language)
            .and_then(|strings| strings.get(key))
            .map(String::as_str)
    }

    pub fn t<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        self.get(language, key)
            .or_else(|| self.get(Language::English, key))
            .unwrap_or(key)
    }

    /// English keys with no entry in `language`.
    pub fn missing_keys(&self, language: Language) -> Vec<&str> {
        let Some(english) = self.strings.get(&Language::English) else {
            return Vec::new();
        };
        let mut missing: Vec<&str> = english
            .keys()
            .filter(|key| self.get(language, key).is_none())
            .map(String::as_str)
            .collect();
        missing.sort_unstable();
        missing
    }
}

/// Active language plus the strings, shared through context.
#[derive(Clone)]
pub struct I18n {
    pub language: Language,
    catalog: Rc<Catalog>,
    set_language: Callback<Language>,
}

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language && Rc::ptr_eq(&self.catalog, &other.catalog)
    }
}

impl I18n {
    pub fn t(&self, key: &str) -> String {
        self.catalog.t(self.language, key).to_string()
    }

    pub fn toggle(&self) {
        self.set_language.emit(self.language.toggled());
    }
}

pub fn stored_language() -> Option<Language> {
    window()?
        .local_storage()
        .ok()??
        .get_item(STORAGE_KEY)
        .ok()?
        .and_then(|code| Language::from_code(&code))
}

fn store_language(language: Language) {
    if let Some(Ok(Some(storage))) = window().map(|w| w.local_storage()) {
        if let Err(e) = storage.set_item(STORAGE_KEY, language.code()) {
            warn!("could not store language preference: {:?}", e);
        }
    }
}

/// Mirrors the language on `<html>` so the browser lays text out right to
/// left for Arabic.
fn apply_to_document(language: Language) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        warn!("no document element to set language on");
        return;
    };
    for (name, value) in [("dir", language.dir()), ("lang", language.code())] {
        if let Err(e) = root.set_attribute(name, value) {
            warn!("could not set <html {}>: {:?}", name, e);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct I18nProviderProps {
    pub catalog: Rc<Catalog>,
    pub initial: Language,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(I18nProvider)]
pub fn i18n_provider(props: &I18nProviderProps) -> Html {
    let language = use_state(|| props.initial);

    {
        use_effect_with_deps(
            move |language: &Language| {
                apply_to_document(*language);
                || ()
            },
            *language,
        );
    }

    let set_language = {
        let language = language.clone();
        Callback::from(move |next: Language| {
            info!("Switching language to {}", next.code());
            store_language(next);
            language.set(next);
        })
    };

    let context = I18n {
        language: *language,
        catalog: props.catalog.clone(),
        set_language,
    };

    html! {
        <ContextProvider<I18n> context={context}>
            { for props.children.iter() }
        </ContextProvider<I18n>>
    }
}

/// Panics outside an `I18nProvider`; the app root always installs one.
#[hook]
pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("use_i18n called outside I18nProvider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(Language::Arabic.dir(), "rtl");
        assert_eq!(Language::English.dir(), "ltr");
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Language::English.toggled(), Language::Arabic);
        assert_eq!(Language::English.toggled().toggled(), Language::English);
        assert_eq!(Language::English.switch_label(), "العربية");
        assert_eq!(Language::Arabic.switch_label(), "English");
    }

    #[test]
    fn codes_parse_loosely() {
        assert_eq!(Language::from_code(" AR "), Some(Language::Arabic));
        assert_eq!(Language::from_code("en"), Some(Language::English));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn every_english_key_is_translated() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.missing_keys(Language::Arabic), Vec::<&str>::new());
    }

    #[test]
    fn lookup_falls_back_to_english_then_key() {
        let mut catalog = Catalog::default();
        catalog.insert(
            Language::English,
            HashMap::from([("hero.cta".to_string(), "Contact us".to_string())]),
        );
        catalog.insert(Language::Arabic, HashMap::new());

        assert_eq!(catalog.t(Language::Arabic, "hero.cta"), "Contact us");
        assert_eq!(catalog.t(Language::Arabic, "nav.unknown"), "nav.unknown");
        assert_eq!(catalog.missing_keys(Language::Arabic), vec!["hero.cta"]);
    }

    #[test]
    fn embedded_strings_differ_per_language() {
        let catalog = Catalog::embedded().unwrap();
        assert_ne!(
            catalog.t(Language::English, "hero.cta"),
            catalog.t(Language::Arabic, "hero.cta")
        );
    }
}
