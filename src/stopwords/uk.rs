// Stopwords Registry
//
// Multi-language stopword membership lookup
// Copyright: 2024, Valerian Saliou <valerian@valeriansaliou.name>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub static STOPWORDS_UK: &[&'static str] = &[
    "а", "але", "б", "без", "би", "бо", "був", "була", "були", "було", "бути", "в", "вам",
    "вас", "весь", "ви", "від", "він", "вона", "вони", "воно", "все", "всі", "де", "для",
    "до", "є", "ж", "з", "за", "зі", "і", "із", "й", "його", "її", "їх", "коли", "лише",
    "ми", "на", "нам", "нас", "наш", "не", "немає", "ні", "ніж", "нічого", "про", "свого",
    "своє", "себе", "собі", "та", "так", "також", "там", "те", "ти", "ті", "тільки", "то",
    "того", "той", "тому", "тут", "у", "хоча", "це", "цей", "ці", "цього", "чи", "чого",
    "чому", "що", "щоб", "я", "як", "яка", "який", "які", "яку",
];
