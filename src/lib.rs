// Stopwords Registry
//
// Multi-language stopword membership lookup
// Copyright: 2024, Valerian Saliou <valerian@valeriansaliou.name>
// License: Mozilla Public License v2.0 (MPL v2.0)

#![cfg_attr(feature = "benchmark", feature(test))]
#![deny(unstable_features, unused_imports, unused_qualifications, clippy::all)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;

pub mod provider;
pub mod registry;
mod stopwords;

use provider::language::LanguageProvider;

pub use registry::error::RegistryError;
pub use registry::registry::Registry;

lazy_static! {
    // Shared across all callers within the process; created once, never replaced
    static ref DEFAULT_REGISTRY: Registry = Registry::new();
}

/// Registers a language on the default registry (no-op if already registered).
pub fn register_language(lang: &str) -> Result<(), RegistryError> {
    DEFAULT_REGISTRY.register_language(lang)
}

/// Registers languages on the default registry, in order, stopping at the first error.
pub fn register_languages(langs: &[&str]) -> Result<(), RegistryError> {
    DEFAULT_REGISTRY.register_languages(langs)
}

/// Checks a word against a language loaded in the default registry.
///
/// Yields `false` if the language is not loaded; callers needing that distinction should
/// check with `is_language_loaded` first.
pub fn is_stop_word(lang: &str, word: &str) -> bool {
    DEFAULT_REGISTRY.is_stop_word(lang, word)
}

/// Checks whether a language is loaded in the default registry.
pub fn is_language_loaded(lang: &str) -> bool {
    DEFAULT_REGISTRY.is_language_loaded(lang)
}

/// Snapshots the languages currently loaded in the default registry (unordered).
pub fn loaded_languages() -> Vec<String> {
    DEFAULT_REGISTRY.loaded_languages()
}

/// Unregisters a language from the default registry (no-op if absent).
pub fn unregister_language(lang: &str) {
    DEFAULT_REGISTRY.unregister_language(lang)
}

/// Unregisters all languages from the default registry.
pub fn clear() {
    DEFAULT_REGISTRY.clear()
}

/// Lists every language the data provider can load, independent of what is loaded.
pub fn supported_languages() -> Vec<&'static str> {
    LanguageProvider::supported_languages().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    lazy_static! {
        // The default registry is process-wide state; serialize the tests that touch it
        static ref DEFAULT_REGISTRY_GUARD: Mutex<()> = Mutex::new(());
    }

    #[test]
    fn it_detects_stop_words_per_language() {
        let _guard = DEFAULT_REGISTRY_GUARD.lock().unwrap();

        clear();
        register_languages(&["fr", "en"]).unwrap();

        let cases = [
            ("fr", "au", true),
            ("fr", "aux", true),
            ("fr", "avec", true),
            ("fr", "ce", true),
            ("fr", "ces", true),
            ("fr", "Voiture", false),
            ("bad", "bad", false),
            ("en", "the", true),
            ("en", "car", false),
        ];

        for (lang, word, expected) in cases.iter() {
            assert_eq!(is_stop_word(lang, word), *expected, "{}: {}", lang, word);
        }
    }

    #[test]
    fn it_registers_and_unregisters_on_the_default_registry() {
        let _guard = DEFAULT_REGISTRY_GUARD.lock().unwrap();

        clear();

        assert!(!is_language_loaded("de"));

        register_language("de").unwrap();

        assert!(is_language_loaded("de"));
        assert!(is_stop_word("de", "der"));

        unregister_language("de");

        assert!(!is_language_loaded("de"));
        assert!(!is_stop_word("de", "der"));
    }

    #[test]
    fn it_lists_loaded_languages_on_the_default_registry() {
        let _guard = DEFAULT_REGISTRY_GUARD.lock().unwrap();

        clear();
        register_languages(&["en", "fr", "es"]).unwrap();

        let loaded = loaded_languages();

        assert_eq!(loaded.len(), 3);
        assert!(loaded.contains(&"en".to_string()));
        assert!(loaded.contains(&"fr".to_string()));
        assert!(loaded.contains(&"es".to_string()));

        clear();

        assert!(loaded_languages().is_empty());
    }

    #[test]
    fn it_rejects_unsupported_languages_on_the_default_registry() {
        let _guard = DEFAULT_REGISTRY_GUARD.lock().unwrap();

        assert_eq!(
            register_language("unsupported"),
            Err(RegistryError::UnsupportedLanguage {
                lang: "unsupported".to_string()
            })
        );
    }

    #[test]
    fn it_lists_supported_languages() {
        let supported = supported_languages();

        assert_eq!(supported.len(), 20);
        assert!(supported.contains(&"en"));
        assert!(supported.contains(&"fr"));
        assert!(supported.contains(&"es"));
        assert!(supported.contains(&"de"));
        assert!(supported.contains(&"ja"));
    }

    #[test]
    fn it_isolates_the_default_registry_from_custom_instances() {
        let _guard = DEFAULT_REGISTRY_GUARD.lock().unwrap();

        clear();

        let custom = Registry::new();

        custom.register_language("ja").unwrap();

        assert!(custom.is_stop_word("ja", "の"));
        assert!(!is_stop_word("ja", "の"));
    }
}
