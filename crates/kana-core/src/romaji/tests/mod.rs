use super::*;

mod combining;

/// Transliterate `hiragana` and its katakana twin, asserting both agree.
fn both_scripts(hiragana: &str) -> Result<String, KanaError> {
    let katakana = crate::unicode::hiragana_to_katakana(hiragana);
    let a = transliterate(hiragana);
    let b = transliterate(&katakana);
    assert_eq!(a, b, "{hiragana} and {katakana} disagree");
    a
}
