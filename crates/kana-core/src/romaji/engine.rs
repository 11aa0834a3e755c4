use serde::Deserialize;
use tracing::{debug, debug_span};

use crate::decoder::{is_aligned, DecodeMode, KanaUnits};

use super::error::KanaError;
use super::rules;
use super::table::{classify, Unit};

/// The one syllable of lookback the engine carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Pending {
    #[default]
    Empty,
    Syllable(String),
}

impl Pending {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Pending::Empty => None,
            Pending::Syllable(s) => Some(s),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Pending::Empty)
    }
}

/// Whether a sokuon is waiting for the next base syllable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gemination {
    #[default]
    Idle,
    Armed,
}

/// Handling of a sokuon with no syllable after it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingSokuon {
    #[default]
    Drop,
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Reject units that are not real 3-byte UTF-8 sequences.
    pub strict_encoding: bool,
    pub trailing_sokuon: TrailingSokuon,
}

impl Options {
    pub(crate) fn decode_mode(&self) -> DecodeMode {
        if self.strict_encoding {
            DecodeMode::Strict
        } else {
            DecodeMode::Lenient
        }
    }
}

/// Left-to-right transliteration state machine.
///
/// States are `{Empty, Pending}` × `{Idle, Armed}`. Output only ever grows;
/// the pending syllable is committed when the next base syllable arrives or
/// at [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct Transliterator {
    out: String,
    pending: Pending,
    gemination: Gemination,
    options: Options,
}

impl Transliterator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub(crate) fn with_capacity(options: Options, capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            options,
            ..Self::default()
        }
    }

    pub fn pending(&self) -> &Pending {
        &self.pending
    }

    pub fn gemination(&self) -> Gemination {
        self.gemination
    }

    /// Text committed so far, excluding the pending syllable.
    pub fn committed(&self) -> &str {
        &self.out
    }

    /// Feed one decoded character.
    pub fn push_char(&mut self, c: char) -> Result<(), KanaError> {
        let unit = classify(c).ok_or(KanaError::InvalidKana)?;
        self.push_unit(unit)
    }

    /// Feed one classified unit.
    ///
    /// On error the machine is left as it was before the call.
    pub fn push_unit(&mut self, unit: Unit) -> Result<(), KanaError> {
        match unit {
            Unit::Syllable(syllable) => {
                let prefix = match self.gemination {
                    Gemination::Armed => Some(rules::sokuon_prefix(syllable)?),
                    Gemination::Idle => None,
                };
                if let Pending::Syllable(prev) = std::mem::take(&mut self.pending) {
                    self.out.push_str(&prev);
                }
                if let Some(c) = prefix {
                    self.out.push(c);
                }
                self.pending = Pending::Syllable(syllable.to_string());
                self.gemination = Gemination::Idle;
            }
            Unit::Sokuon => self.gemination = Gemination::Armed,
            Unit::Youon(mark) => {
                self.pending = Pending::Syllable(rules::youon(&self.pending, mark)?);
            }
            Unit::Chouonpu => {
                self.pending = Pending::Syllable(rules::chouonpu(&self.pending)?);
            }
            Unit::Separator => {}
        }
        Ok(())
    }

    /// Flush the pending syllable and return the full romaji.
    pub fn finish(mut self) -> Result<String, KanaError> {
        if self.gemination == Gemination::Armed
            && self.options.trailing_sokuon == TrailingSokuon::Reject
        {
            return Err(KanaError::TrailingSokuon);
        }
        if let Pending::Syllable(last) = self.pending {
            self.out.push_str(&last);
        }
        Ok(self.out)
    }
}

/// Transliterate a kana block with default options.
pub fn transliterate(input: &str) -> Result<String, KanaError> {
    transliterate_with(input.as_bytes(), &Options::default())
}

/// Transliterate raw bytes, 3 bytes per kana.
pub fn transliterate_bytes(input: &[u8]) -> Result<String, KanaError> {
    transliterate_with(input, &Options::default())
}

pub fn transliterate_with(input: &[u8], options: &Options) -> Result<String, KanaError> {
    let _span = debug_span!("transliterate", bytes = input.len()).entered();

    if input.is_empty() {
        return Ok(String::new());
    }
    if !is_aligned(input.len()) {
        debug!(bytes = input.len(), "input is not a whole number of kana units");
        return Err(KanaError::MalformedEncoding);
    }

    let mut machine = Transliterator::with_capacity(*options, input.len() * 2);
    for unit in KanaUnits::new(input, options.decode_mode()) {
        let (offset, scalar) = unit.map_err(|bad| {
            debug!(offset = bad.offset, "malformed unit");
            KanaError::InvalidEncoding
        })?;
        let c = char::from_u32(scalar).ok_or(KanaError::InvalidKana);
        if let Err(e) = c.and_then(|c| machine.push_char(c)) {
            debug!(offset, scalar, error = %e, "transliteration failed");
            return Err(e);
        }
    }

    let romaji = machine.finish()?;
    debug!(romaji_len = romaji.len());
    Ok(romaji)
}

/// Pair-returning form: on failure the text is empty and the error is set.
pub fn kana_to_romaji(input: &str) -> (String, Option<KanaError>) {
    match transliterate(input) {
        Ok(romaji) => (romaji, None),
        Err(e) => (String::new(), Some(e)),
    }
}
