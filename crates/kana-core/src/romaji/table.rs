//! Static kana tables and unit classification.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Base syllables as `(hiragana, katakana, romaji)`. Both scripts share one
/// romaji spelling; voiced and semi-voiced kana are separate entries.
#[rustfmt::skip]
pub const BASE_SYLLABLES: &[(char, char, &str)] = &[
    // vowels
    ('あ', 'ア', "a"), ('い', 'イ', "i"), ('う', 'ウ', "u"), ('え', 'エ', "e"), ('お', 'オ', "o"),
    ('ん', 'ン', "n"),
    ('ゔ', 'ヴ', "vu"),
    // k, g
    ('か', 'カ', "ka"), ('き', 'キ', "ki"), ('く', 'ク', "ku"), ('け', 'ケ', "ke"), ('こ', 'コ', "ko"),
    ('が', 'ガ', "ga"), ('ぎ', 'ギ', "gi"), ('ぐ', 'グ', "gu"), ('げ', 'ゲ', "ge"), ('ご', 'ゴ', "go"),
    // s, z
    ('さ', 'サ', "sa"), ('し', 'シ', "shi"), ('す', 'ス', "su"), ('せ', 'セ', "se"), ('そ', 'ソ', "so"),
    ('ざ', 'ザ', "za"), ('じ', 'ジ', "ji"), ('ず', 'ズ', "zu"), ('ぜ', 'ゼ', "ze"), ('ぞ', 'ゾ', "zo"),
    // t, d
    ('た', 'タ', "ta"), ('ち', 'チ', "chi"), ('つ', 'ツ', "tsu"), ('て', 'テ', "te"), ('と', 'ト', "to"),
    ('だ', 'ダ', "da"), ('ぢ', 'ヂ', "ji"), ('づ', 'ヅ', "zu"), ('で', 'デ', "de"), ('ど', 'ド', "do"),
    // n
    ('な', 'ナ', "na"), ('に', 'ニ', "ni"), ('ぬ', 'ヌ', "nu"), ('ね', 'ネ', "ne"), ('の', 'ノ', "no"),
    // h, b, p
    ('は', 'ハ', "ha"), ('ひ', 'ヒ', "hi"), ('ふ', 'フ', "fu"), ('へ', 'ヘ', "he"), ('ほ', 'ホ', "ho"),
    ('ば', 'バ', "ba"), ('び', 'ビ', "bi"), ('ぶ', 'ブ', "bu"), ('べ', 'ベ', "be"), ('ぼ', 'ボ', "bo"),
    ('ぱ', 'パ', "pa"), ('ぴ', 'ピ', "pi"), ('ぷ', 'プ', "pu"), ('ぺ', 'ペ', "pe"), ('ぽ', 'ポ', "po"),
    // m
    ('ま', 'マ', "ma"), ('み', 'ミ', "mi"), ('む', 'ム', "mu"), ('め', 'メ', "me"), ('も', 'モ', "mo"),
    // y
    ('や', 'ヤ', "ya"), ('ゆ', 'ユ', "yu"), ('よ', 'ヨ', "yo"),
    // r
    ('ら', 'ラ', "ra"), ('り', 'リ', "ri"), ('る', 'ル', "ru"), ('れ', 'レ', "re"), ('ろ', 'ロ', "ro"),
    // w, including the obsolete ゐ and ゑ
    ('わ', 'ワ', "wa"), ('ゐ', 'ヰ', "wi"), ('ゑ', 'ヱ', "we"), ('を', 'ヲ', "wo"),
];

/// Small kana that combine with the preceding syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum YouonMark {
    /// ゃ
    Ya,
    /// ゅ
    Yu,
    /// ょ
    Yo,
    /// ぁ
    A,
    /// ぃ
    I,
    /// ぅ
    U,
    /// ぇ
    E,
    /// ぉ
    O,
    /// ゎ
    Wa,
}

impl YouonMark {
    /// Romaji letters the mark contributes to the combined syllable.
    pub fn letters(self) -> &'static str {
        match self {
            YouonMark::Ya | YouonMark::A => "a",
            YouonMark::Yu | YouonMark::U => "u",
            YouonMark::Yo | YouonMark::O => "o",
            YouonMark::I => "i",
            YouonMark::E => "e",
            YouonMark::Wa => "wa",
        }
    }

    /// ゃゅょ palatalise the stem; the rest replace or extend its vowel.
    pub fn is_row(self) -> bool {
        matches!(self, YouonMark::Ya | YouonMark::Yu | YouonMark::Yo)
    }
}

/// What one decoded kana unit means to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Unit {
    Syllable(&'static str),
    Sokuon,
    Youon(YouonMark),
    Chouonpu,
    Separator,
}

fn syllable_index() -> &'static HashMap<char, &'static str> {
    static INDEX: OnceLock<HashMap<char, &'static str>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map = HashMap::with_capacity(BASE_SYLLABLES.len() * 2);
        for &(hira, kata, romaji) in BASE_SYLLABLES {
            map.insert(hira, romaji);
            map.insert(kata, romaji);
        }
        map
    })
}

/// Romaji for a base kana in either script.
pub fn base_syllable(c: char) -> Option<&'static str> {
    syllable_index().get(&c).copied()
}

/// Classify a character; `None` means it is not something a kana block may
/// contain.
pub fn classify(c: char) -> Option<Unit> {
    let unit = match c {
        'っ' | 'ッ' => Unit::Sokuon,
        'ゃ' | 'ャ' => Unit::Youon(YouonMark::Ya),
        'ゅ' | 'ュ' => Unit::Youon(YouonMark::Yu),
        'ょ' | 'ョ' => Unit::Youon(YouonMark::Yo),
        'ぁ' | 'ァ' => Unit::Youon(YouonMark::A),
        'ぃ' | 'ィ' => Unit::Youon(YouonMark::I),
        'ぅ' | 'ゥ' => Unit::Youon(YouonMark::U),
        'ぇ' | 'ェ' => Unit::Youon(YouonMark::E),
        'ぉ' | 'ォ' => Unit::Youon(YouonMark::O),
        'ゎ' | 'ヮ' => Unit::Youon(YouonMark::Wa),
        'ー' => Unit::Chouonpu,
        '・' => Unit::Separator,
        _ => return base_syllable(c).map(Unit::Syllable),
    };
    Some(unit)
}
