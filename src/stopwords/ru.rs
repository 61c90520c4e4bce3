// Stopwords Registry
//
// Multi-language stopword membership lookup
// Copyright: 2024, Valerian Saliou <valerian@valeriansaliou.name>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub static STOPWORDS_RU: &[&'static str] = &[
    "а", "без", "более", "бы", "был", "была", "были", "было", "быть", "в", "вам", "вас",
    "весь", "во", "вот", "все", "всего", "всех", "вы", "где", "да", "даже", "для", "до",
    "его", "ее", "если", "есть", "еще", "же", "за", "здесь", "и", "из", "или", "им", "их",
    "к", "как", "когда", "кто", "ли", "либо", "мне", "может", "мы", "на", "надо", "наш",
    "не", "него", "нее", "нет", "ни", "них", "но", "ну", "о", "об", "однако", "он", "она",
    "они", "оно", "от", "очень", "по", "под", "при", "с", "со", "так", "также", "такой",
    "там", "те", "тем", "то", "того", "тоже", "той", "только", "том", "ты", "у", "уже",
    "хотя", "чего", "чей", "чем", "что", "чтобы", "чье", "чья", "эта", "эти", "это", "я",
];
