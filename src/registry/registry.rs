// Stopwords Registry
//
// Multi-language stopword membership lookup
// Copyright: 2024, Valerian Saliou <valerian@valeriansaliou.name>
// License: Mozilla Public License v2.0 (MPL v2.0)

use hashbrown::{HashMap, HashSet};
use std::sync::RwLock;

use super::error::RegistryError;
use crate::provider::language::LanguageProvider;

pub struct Registry {
    // Maps a loaded language code to its stopword set. A code is present iff it has been \
    //   successfully registered and not since removed.
    languages: RwLock<HashMap<String, HashSet<&'static str>>>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry {
            languages: RwLock::new(HashMap::new()),
        }
    }

    pub fn register_language(&self, lang: &str) -> Result<(), RegistryError> {
        // Acquire languages in write mode (the check-and-insert must be atomic, as to avoid \
        //   duplicate concurrent loads of the same language)
        let mut languages_write = self.languages.write().unwrap();

        // Already loaded? Succeed as a no-op.
        if languages_write.contains_key(lang) {
            debug!("language already registered: {}", lang);

            return Ok(());
        }

        if let Some(words) = LanguageProvider::load_language(lang) {
            debug!("registering language: {} ({} stopwords)", lang, words.len());

            // Collect into an owned set (the registry holds its own copy, never an alias \
            //   shared with another registry instance)
            languages_write.insert(lang.to_string(), words.iter().copied().collect());

            Ok(())
        } else {
            Err(RegistryError::UnsupportedLanguage {
                lang: lang.to_string(),
            })
        }
    }

    pub fn register_languages(&self, langs: &[&str]) -> Result<(), RegistryError> {
        // Stop at the first error; languages registered before the failure stay loaded \
        //   (no rollback of partial progress)
        for lang in langs {
            self.register_language(lang)?;
        }

        Ok(())
    }

    pub fn is_stop_word(&self, lang: &str, word: &str) -> bool {
        let languages_read = self.languages.read().unwrap();

        // An unloaded language yields 'false', same as a loaded language missing the word
        if let Some(words) = languages_read.get(lang) {
            words.contains(word)
        } else {
            false
        }
    }

    pub fn is_language_loaded(&self, lang: &str) -> bool {
        self.languages.read().unwrap().contains_key(lang)
    }

    pub fn loaded_languages(&self) -> Vec<String> {
        // Snapshot at call time; iteration order is unspecified
        self.languages.read().unwrap().keys().cloned().collect()
    }

    pub fn unregister_language(&self, lang: &str) {
        let mut languages_write = self.languages.write().unwrap();

        if languages_write.remove(lang).is_some() {
            debug!("unregistered language: {}", lang);
        }
    }

    pub fn clear(&self) {
        let mut languages_write = self.languages.write().unwrap();

        debug!("clearing {} loaded languages", languages_write.len());

        // Single atomic reset (rather than a sequence of individual removals)
        *languages_write = HashMap::new();
    }
}

impl Default for Registry {
    fn default() -> Registry {
        Registry::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use test_log::test;

    #[test]
    fn it_registers_a_language_idempotently() {
        let registry = Registry::new();

        assert_eq!(registry.register_language("en"), Ok(()));
        assert_eq!(registry.register_language("en"), Ok(()));

        assert_eq!(registry.loaded_languages(), vec!["en".to_string()]);
    }

    #[test]
    fn it_rejects_an_unsupported_language() {
        let registry = Registry::new();

        assert_eq!(
            registry.register_language("invalid"),
            Err(RegistryError::UnsupportedLanguage {
                lang: "invalid".to_string()
            })
        );

        assert!(!registry.is_language_loaded("invalid"));
        assert!(registry.loaded_languages().is_empty());
    }

    #[test]
    fn it_yields_false_for_unregistered_languages() {
        let registry = Registry::new();

        assert!(!registry.is_stop_word("en", "the"));
        assert!(!registry.is_stop_word("xx", "anything"));
        assert!(!registry.is_language_loaded("en"));
    }

    #[test]
    fn it_round_trips_register_query_unregister() {
        let registry = Registry::new();

        registry.register_language("en").unwrap();

        assert!(registry.is_language_loaded("en"));
        assert!(registry.is_stop_word("en", "the"));
        assert!(!registry.is_stop_word("en", "car"));

        registry.unregister_language("en");

        assert!(!registry.is_language_loaded("en"));
        assert!(!registry.is_stop_word("en", "the"));
    }

    #[test]
    fn it_ignores_unregistering_an_absent_language() {
        let registry = Registry::new();

        registry.unregister_language("en");

        assert!(!registry.is_language_loaded("en"));
    }

    #[test]
    fn it_registers_multiple_languages() {
        let registry = Registry::new();

        registry.register_languages(&["en", "fr", "es"]).unwrap();

        assert!(registry.is_language_loaded("en"));
        assert!(registry.is_language_loaded("fr"));
        assert!(registry.is_language_loaded("es"));

        let loaded = registry.loaded_languages();

        assert_eq!(loaded.len(), 3);
        assert!(loaded.contains(&"en".to_string()));
        assert!(loaded.contains(&"fr".to_string()));
        assert!(loaded.contains(&"es".to_string()));
    }

    #[test]
    fn it_stops_batch_registration_at_first_error() {
        let registry = Registry::new();

        assert_eq!(
            registry.register_languages(&["en", "invalid-code", "fr"]),
            Err(RegistryError::UnsupportedLanguage {
                lang: "invalid-code".to_string()
            })
        );

        // Languages before the failure stay loaded, languages after it were never reached
        assert!(registry.is_language_loaded("en"));
        assert!(!registry.is_language_loaded("fr"));
    }

    #[test]
    fn it_isolates_independent_registries() {
        let (registry_one, registry_two) = (Registry::new(), Registry::new());

        registry_one.register_language("en").unwrap();

        assert!(registry_one.is_language_loaded("en"));
        assert!(registry_one.is_stop_word("en", "the"));

        assert!(!registry_two.is_language_loaded("en"));
        assert!(!registry_two.is_stop_word("en", "the"));
    }

    #[test]
    fn it_clears_all_loaded_languages() {
        let registry = Registry::new();

        registry.register_languages(&["en", "fr", "de"]).unwrap();
        registry.clear();

        assert!(registry.loaded_languages().is_empty());
        assert!(!registry.is_stop_word("en", "the"));
        assert!(!registry.is_stop_word("fr", "le"));
        assert!(!registry.is_stop_word("de", "der"));
    }

    #[test]
    fn it_answers_concurrent_reads_consistently() {
        let registry = Arc::new(Registry::new());

        registry.register_language("en").unwrap();

        // Readers hammer a language that no writer touches; every read must observe it loaded
        let readers = (0..8)
            .map(|_| {
                let registry = registry.clone();

                thread::spawn(move || {
                    for _ in 0..1000 {
                        assert!(registry.is_stop_word("en", "the"));
                        assert!(!registry.is_stop_word("en", "car"));
                        assert!(registry.is_language_loaded("en"));
                    }
                })
            })
            .collect::<Vec<_>>();

        // One writer mutates other languages concurrently
        let writer = {
            let registry = registry.clone();

            thread::spawn(move || {
                for _ in 0..100 {
                    registry.register_language("fr").unwrap();
                    registry.unregister_language("fr");
                }
            })
        };

        for reader in readers {
            reader.join().unwrap();
        }

        writer.join().unwrap();

        assert!(registry.is_language_loaded("en"));
        assert!(!registry.is_language_loaded("fr"));
    }
}

#[cfg(all(feature = "benchmark", test))]
mod benches {
    extern crate test;

    use super::*;
    use test::Bencher;

    #[bench]
    fn bench_stop_word_found(b: &mut Bencher) {
        let registry = Registry::new();

        registry.register_language("en").unwrap();

        b.iter(|| registry.is_stop_word("en", "the"));
    }

    #[bench]
    fn bench_stop_word_not_found(b: &mut Bencher) {
        let registry = Registry::new();

        registry.register_language("en").unwrap();

        b.iter(|| registry.is_stop_word("en", "fox"));
    }

    #[bench]
    fn bench_stop_word_unloaded_language(b: &mut Bencher) {
        let registry = Registry::new();

        b.iter(|| registry.is_stop_word("en", "the"));
    }
}
