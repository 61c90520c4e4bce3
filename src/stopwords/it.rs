// Stopwords Registry
//
// Multi-language stopword membership lookup
// Copyright: 2024, Valerian Saliou <valerian@valeriansaliou.name>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub static STOPWORDS_IT: &[&'static str] = &[
    "a", "ad", "agli", "ai", "al", "alla", "alle", "allo", "anche", "avere", "aveva", "che",
    "chi", "ci", "coi", "col", "come", "con", "contro", "cui", "da", "dagli", "dai", "dal",
    "dalla", "dalle", "dallo", "degli", "dei", "del", "della", "delle", "dello", "di", "dove",
    "e", "ed", "era", "erano", "essere", "fa", "fra", "gli", "ha", "hanno", "ho", "i", "il",
    "in", "io", "la", "le", "lei", "li", "lo", "loro", "lui", "ma", "mi", "mia", "mie", "miei",
    "mio", "ne", "negli", "nei", "nel", "nella", "nelle", "nello", "noi", "non", "nostra",
    "nostri", "nostro", "o", "per", "perché", "più", "quale", "quando", "quella", "quelle",
    "quelli", "quello", "questa", "queste", "questi", "questo", "qui", "se", "sei", "si", "sia",
    "siamo", "siete", "sono", "sta", "su", "sua", "sue", "sugli", "sui", "sul", "sulla",
    "sulle", "sullo", "suo", "suoi", "ti", "tra", "tu", "tua", "tue", "tuo", "tuoi", "tutti",
    "tutto", "un", "una", "uno", "vi", "voi", "vostra", "vostri", "vostro", "è",
];
