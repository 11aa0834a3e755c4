/// Every way a kana block can fail to transliterate.
///
/// The messages are part of the observable contract and are kept stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum KanaError {
    #[error("all characters must be kana (3-byte unicode characters)")]
    MalformedEncoding,
    #[error("malformed 3-byte sequence")]
    InvalidEncoding,
    #[error("there is not a valid kana character")]
    InvalidKana,
    #[error("sokuon cannot precede a vowel")]
    SokuonBeforeVowel,
    #[error("sokuon cannot be the last character in a kana block")]
    TrailingSokuon,
    #[error("yōon cannot be the first character in a kana block")]
    YouonFirstCharacter,
    #[error("unrecognised yōon combination")]
    UnrecognisedYouonCombination,
    #[error("unrecognised yōon vowel")]
    UnrecognisedYouonVowel,
    #[error("unrecognised yōon syllable")]
    UnrecognisedYouonSyllable,
    #[error("chōonpu cannot be the first character in a block")]
    ChouonpuFirstCharacter,
    #[error("chōonpu cannot extend a consonant")]
    ChouonpuConsonant,
}
