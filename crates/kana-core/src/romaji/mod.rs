//! Kana-to-romaji transliteration engine.
//!
//! Base kana map to a romaji syllable through a static table; the marks
//! っ (sokuon), small ゃゅょぁぃぅぇぉゎ (yōon) and ー (chōonpu) rewrite the
//! single pending syllable according to the rules in [`rules`].

mod engine;
mod error;
mod explain;
pub mod rules;
pub mod table;

#[cfg(test)]
mod tests;

pub use engine::{
    kana_to_romaji, transliterate, transliterate_bytes, transliterate_with, Gemination, Options,
    Pending, TrailingSokuon, Transliterator,
};
pub use error::KanaError;
pub use explain::{explain, ExplainResult, ExplainStep};
pub use table::{classify, Unit, YouonMark};
