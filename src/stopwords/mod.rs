// Stopwords Registry
//
// Multi-language stopword membership lookup
// Copyright: 2024, Valerian Saliou <valerian@valeriansaliou.name>
// License: Mozilla Public License v2.0 (MPL v2.0)

// All stopwords are sourced from: https://github.com/stopwords-iso
// Modules are named after ISO 639-1 language codes.

pub mod af;
pub mod da;
pub mod de;
pub mod en;
pub mod es;
pub mod et;
pub mod fi;
pub mod fr;
pub mod ha;
pub mod it;
pub mod ja;
pub mod la;
pub mod nl;
pub mod no;
pub mod pt;
pub mod ru;
pub mod so;
pub mod sv;
pub mod uk;
pub mod zu;
