// Stopwords Registry
//
// Multi-language stopword membership lookup
// Copyright: 2024, Valerian Saliou <valerian@valeriansaliou.name>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub static STOPWORDS_NO: &[&'static str] = &[
    "alle", "at", "av", "bare", "begge", "ble", "bli", "blir", "blitt", "både", "da", "de",
    "deg", "dem", "den", "denne", "der", "dere", "deres", "det", "dette", "di", "din", "disse",
    "ditt", "du", "eller", "en", "enn", "er", "et", "ett", "etter", "for", "fordi", "fra",
    "før", "ha", "hadde", "han", "hans", "har", "henne", "hennes", "her", "ho", "hun", "hva",
    "hvem", "hver", "hvilke", "hvilken", "hvis", "hvor", "hvordan", "hvorfor", "i", "ikke",
    "ingen", "inn", "ja", "jeg", "kan", "kom", "kun", "kunne", "man", "mange", "med", "meg",
    "meget", "mellom", "men", "mi", "min", "mine", "mitt", "mot", "ned", "noe", "noen", "nå",
    "når", "og", "også", "om", "opp", "oss", "over", "på", "samme", "seg", "selv", "si",
    "siden", "sin", "sine", "sitt", "skal", "skulle", "slik", "som", "så", "til", "ut", "uten",
    "var", "ved", "vi", "vil", "ville", "vår", "være", "vært", "å",
];
