// Stopwords Registry
//
// Multi-language stopword membership lookup
// Copyright: 2024, Valerian Saliou <valerian@valeriansaliou.name>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod error;
pub mod registry;
