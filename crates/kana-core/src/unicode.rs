//! Character-level Unicode classification for kana text.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). This includes ー and ・,
/// which the engine treats as marks rather than syllables.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Hiragana,
    Katakana,
    Other,
}

impl Script {
    pub fn of(c: char) -> Self {
        if is_hiragana(c) {
            Script::Hiragana
        } else if is_katakana(c) {
            Script::Katakana
        } else {
            Script::Other
        }
    }
}

/// Katakana letters sit 0x60 above their hiragana counterparts, for
/// U+3041..U+3096 ↔ U+30A1..U+30F6.
const SCRIPT_OFFSET: u32 = 0x60;

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{3041}'..='\u{3096}').contains(&c) {
                char::from_u32(c as u32 + SCRIPT_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
