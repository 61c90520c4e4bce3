// Stopwords Registry
//
// Multi-language stopword membership lookup
// Copyright: 2024, Valerian Saliou <valerian@valeriansaliou.name>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub static STOPWORDS_ES: &[&'static str] = &[
    "a", "al", "algo", "algunas", "algunos", "ante", "antes", "como", "con", "contra", "cual",
    "cuando", "de", "del", "desde", "donde", "durante", "e", "el", "ella", "ellas", "ellos",
    "en", "entre", "era", "eran", "es", "esa", "esas", "ese", "eso", "esos", "esta", "estaba",
    "estado", "estamos", "este", "esto", "estos", "estoy", "están", "fue", "fueron", "ha",
    "habido", "había", "han", "hasta", "hay", "la", "las", "le", "les", "lo", "los", "me", "mi",
    "mis", "mucho", "muchos", "muy", "más", "mí", "ni", "no", "nos", "nosotros", "nuestra",
    "nuestro", "o", "os", "otra", "otros", "para", "pero", "poco", "por", "porque", "que",
    "quien", "quienes", "qué", "se", "sea", "ser", "si", "sin", "sobre", "sois", "somos", "son",
    "soy", "su", "sus", "sí", "también", "tanto", "te", "tenemos", "tener", "tengo", "ti",
    "tiene", "tienen", "todo", "todos", "tu", "tus", "tú", "un", "una", "uno", "unos",
    "vosotros", "y", "ya", "yo", "él",
];
