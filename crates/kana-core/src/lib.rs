//! Kana to romaji transliteration.
//!
//! Input is scanned in fixed 3-byte units; each unit is decoded, classified
//! and folded into a one-syllable lookback state machine that handles sokuon
//! (っ), yōon (きゃ, ふぁ) and chōonpu (ー).

pub mod decoder;
pub mod romaji;
pub mod settings;
pub mod unicode;

pub use romaji::{
    kana_to_romaji, transliterate, transliterate_bytes, transliterate_with, KanaError, Options,
    TrailingSokuon, Transliterator,
};
