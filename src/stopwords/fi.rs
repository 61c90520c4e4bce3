// Stopwords Registry
//
// Multi-language stopword membership lookup
// Copyright: 2024, Valerian Saliou <valerian@valeriansaliou.name>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub static STOPWORDS_FI: &[&'static str] = &[
    "ei", "eivät", "emme", "en", "et", "ette", "että", "he", "heidän", "heidät", "heitä",
    "hän", "hänen", "hänet", "häntä", "itse", "ja", "johon", "joiden", "joissa", "joista",
    "joita", "joka", "jolla", "jolle", "jonka", "jos", "jossa", "josta", "jota", "jotka",
    "kanssa", "kenen", "kenet", "ketkä", "ketä", "koska", "kuin", "kuka", "kun", "me",
    "meidän", "meidät", "meitä", "mihin", "miksi", "mikä", "minkä", "minua", "minulla",
    "minun", "minut", "minä", "missä", "mistä", "mitkä", "mitä", "mukaan", "mutta", "ne",
    "niiden", "niin", "niistä", "niitä", "noin", "nuo", "nyt", "näiden", "näissä", "näitä",
    "nämä", "ole", "olemme", "olen", "olet", "olette", "oli", "olimme", "olin", "olisi",
    "olit", "olivat", "olla", "olleet", "ollut", "on", "ovat", "poikki", "se", "sekä", "sen",
    "siihen", "siinä", "siitä", "sille", "sillä", "siltä", "sinua", "sinulla", "sinun",
    "sinut", "sinä", "sitä", "tai", "te", "teidän", "teidät", "teitä", "tuo", "tähän", "tämä",
    "tämän", "tässä", "tästä", "tätä", "vaan", "vai", "vaikka", "yli",
];
