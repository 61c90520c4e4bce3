// Stopwords Registry
//
// Multi-language stopword membership lookup
// Copyright: 2024, Valerian Saliou <valerian@valeriansaliou.name>
// License: Mozilla Public License v2.0 (MPL v2.0)

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unsupported language: {lang}")]
    UnsupportedLanguage { lang: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_formats_unsupported_language() {
        let error = RegistryError::UnsupportedLanguage {
            lang: "xx".to_string(),
        };

        assert_eq!(error.to_string(), "unsupported language: xx");
    }
}
