//! Combining rules for sokuon, yōon and chōonpu.
//!
//! Each rule is a pure function of the pending syllable and the mark that
//! follows it. The engine applies the result; nothing here touches output.

use super::engine::Pending;
use super::error::KanaError;
use super::table::YouonMark;

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Drop the final letter. Romaji syllables are ASCII.
fn strip_last(s: &str) -> &str {
    match s.char_indices().last() {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

/// Letter written an extra time in front of `syllable` after a sokuon.
///
/// ち-row syllables double as `t` ("tchi"), not `c`.
pub fn sokuon_prefix(syllable: &str) -> Result<char, KanaError> {
    match syllable.chars().next() {
        Some('c') => Ok('t'),
        Some(c) if is_vowel(c) => Err(KanaError::SokuonBeforeVowel),
        Some(c) => Ok(c),
        None => Err(KanaError::InvalidKana),
    }
}

/// Rewrite the pending syllable for a following small kana.
pub fn youon(pending: &Pending, mark: YouonMark) -> Result<String, KanaError> {
    let syllable = pending.as_str().ok_or(KanaError::YouonFirstCharacter)?;
    if mark.is_row() {
        youon_row(syllable, mark.letters())
    } else {
        youon_special(syllable, mark)
    }
}

/// ゃゅょ: replace the vowel with `y` + the mark's vowel ("ki" → "kya").
/// Stems that are already palatal (shi, ji, chi) take the vowel alone.
fn youon_row(syllable: &str, letters: &str) -> Result<String, KanaError> {
    let stem = strip_last(syllable);
    match stem.chars().next() {
        Some('k' | 'g' | 't' | 'd' | 'n' | 'h' | 'f' | 'b' | 'p' | 'm' | 'r' | 'v') => {
            Ok(format!("{stem}y{letters}"))
        }
        Some('s' | 'j' | 'c') => Ok(format!("{stem}{letters}")),
        _ => Err(KanaError::UnrecognisedYouonCombination),
    }
}

/// ぁぃぅぇぉゎ: glide a bare い/う ("ye", "wo"), labialise く/ぐ before ぁ
/// ("kwa"), otherwise swap the trailing vowel ("tsa", "fi", "ku"). An
/// `i`-ending stem is handled like ゃゅょ ("kyi").
fn youon_special(syllable: &str, mark: YouonMark) -> Result<String, KanaError> {
    let letters = mark.letters();
    if syllable.len() == 1 {
        return match syllable {
            "i" => Ok(format!("y{letters}")),
            "u" => Ok(format!("w{letters}")),
            _ => Err(KanaError::UnrecognisedYouonVowel),
        };
    }

    let stem = strip_last(syllable);
    match syllable.chars().last() {
        Some('u') if mark == YouonMark::A && matches!(stem, "k" | "g") => {
            Ok(format!("{stem}wa"))
        }
        Some('a' | 'u' | 'e' | 'o') => Ok(format!("{stem}{letters}")),
        Some('i') => youon_row(syllable, letters),
        _ => Err(KanaError::UnrecognisedYouonSyllable),
    }
}

/// Lengthen the pending syllable by repeating its final vowel.
pub fn chouonpu(pending: &Pending) -> Result<String, KanaError> {
    let syllable = pending.as_str().ok_or(KanaError::ChouonpuFirstCharacter)?;
    match syllable.chars().last() {
        Some(c) if is_vowel(c) => {
            let mut extended = String::with_capacity(syllable.len() + 1);
            extended.push_str(syllable);
            extended.push(c);
            Ok(extended)
        }
        _ => Err(KanaError::ChouonpuConsonant),
    }
}
