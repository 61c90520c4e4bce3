// Stopwords Registry
//
// Multi-language stopword membership lookup
// Copyright: 2024, Valerian Saliou <valerian@valeriansaliou.name>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub static STOPWORDS_JA: &[&'static str] = &[
    "あそこ", "あの", "あり", "あります", "ある", "あれ", "い", "います", "いる", "う", "え",
    "お", "および", "おり", "か", "かつて", "から", "が", "き", "ここ", "こちら", "こと",
    "この", "これ", "これら", "さ", "さらに", "し", "しかし", "する", "ず", "せ", "せる",
    "そこ", "そして", "その", "その他", "その後", "それ", "それぞれ", "それで", "た",
    "ただし", "たち", "ため", "たり", "だ", "だっ", "だれ", "つ", "て", "で", "でき",
    "できる", "です", "では", "でも", "と", "という", "といった", "とき", "ところ", "として",
    "とともに", "とも", "どこ", "どの", "な", "ない", "なお", "なかっ", "ながら", "なく",
    "なっ", "など", "なに", "なら", "なり", "なる", "なん", "に", "において", "における",
    "について", "にて", "によって", "により", "による", "に対して", "に対する", "に関する",
    "の", "ので", "のみ", "は", "ば", "へ", "ほか", "ほとんど", "ほど", "ます", "また",
    "または", "まで", "も", "もの", "ものの", "や", "よう", "より", "ら", "られ", "られる",
    "れ", "れる", "を", "ん", "何", "及び", "彼", "彼女", "我々", "特に", "私",
];
