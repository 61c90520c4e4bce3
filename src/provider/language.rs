// Stopwords Registry
//
// Multi-language stopword membership lookup
// Copyright: 2024, Valerian Saliou <valerian@valeriansaliou.name>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::stopwords::*;

pub struct LanguageProvider;

// Kept sorted; 'supported_languages' exposes this list as-is.
static SUPPORTED_LANGUAGES: &[&'static str] = &[
    "af", "da", "de", "en", "es", "et", "fi", "fr", "ha", "it", "ja", "la", "nl", "no", "pt",
    "ru", "so", "sv", "uk", "zu",
];

impl LanguageProvider {
    pub fn load_language(lang: &str) -> Option<&'static [&'static str]> {
        match lang {
            "af" => Some(af::STOPWORDS_AF),
            "da" => Some(da::STOPWORDS_DA),
            "de" => Some(de::STOPWORDS_DE),
            "en" => Some(en::STOPWORDS_EN),
            "es" => Some(es::STOPWORDS_ES),
            "et" => Some(et::STOPWORDS_ET),
            "fi" => Some(fi::STOPWORDS_FI),
            "fr" => Some(fr::STOPWORDS_FR),
            "ha" => Some(ha::STOPWORDS_HA),
            "it" => Some(it::STOPWORDS_IT),
            "ja" => Some(ja::STOPWORDS_JA),
            "la" => Some(la::STOPWORDS_LA),
            "nl" => Some(nl::STOPWORDS_NL),
            "no" => Some(no::STOPWORDS_NO),
            "pt" => Some(pt::STOPWORDS_PT),
            "ru" => Some(ru::STOPWORDS_RU),
            "so" => Some(so::STOPWORDS_SO),
            "sv" => Some(sv::STOPWORDS_SV),
            "uk" => Some(uk::STOPWORDS_UK),
            "zu" => Some(zu::STOPWORDS_ZU),
            _ => None,
        }
    }

    pub fn supported_languages() -> &'static [&'static str] {
        SUPPORTED_LANGUAGES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_loads_supported_languages() {
        for lang in LanguageProvider::supported_languages() {
            let words = LanguageProvider::load_language(lang);

            assert!(words.is_some());
            assert!(!words.unwrap().is_empty());
        }
    }

    #[test]
    fn it_rejects_unknown_languages() {
        assert!(LanguageProvider::load_language("xx").is_none());
        assert!(LanguageProvider::load_language("").is_none());
        assert!(LanguageProvider::load_language("EN").is_none());
    }
}
