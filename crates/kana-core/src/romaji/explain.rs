use serde::Serialize;

use crate::decoder::{is_aligned, KanaUnits};
use crate::unicode::Script;

use super::engine::{Gemination, Options, Transliterator};
use super::error::KanaError;
use super::table::{classify, Unit};

/// Step-by-step trace of one transliteration.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub steps: Vec<ExplainStep>,
    pub romaji: Option<String>,
    pub error: Option<String>,
}

/// Engine state after consuming one unit.
#[derive(Debug, Serialize)]
pub struct ExplainStep {
    pub offset: usize,
    pub scalar: u32,
    pub kana: Option<char>,
    pub script: Script,
    pub unit: Option<Unit>,
    /// Text committed to the output by this unit.
    pub emitted: String,
    pub pending: Option<String>,
    pub sokuon_armed: bool,
}

impl ExplainResult {
    fn failed(input: &str, steps: Vec<ExplainStep>, error: KanaError) -> Self {
        Self {
            input: input.to_string(),
            steps,
            romaji: None,
            error: Some(error.to_string()),
        }
    }
}

/// Run the engine over `input`, recording the state after every unit.
///
/// Stops at the first failing unit; that unit is included in `steps` with
/// the state it left untouched.
pub fn explain(input: &str, options: &Options) -> ExplainResult {
    let mut steps = Vec::new();
    if !is_aligned(input.len()) {
        return ExplainResult::failed(input, steps, KanaError::MalformedEncoding);
    }

    let mut machine = Transliterator::with_options(*options);
    for unit in KanaUnits::new(input.as_bytes(), options.decode_mode()) {
        let (offset, scalar) = match unit {
            Ok(decoded) => decoded,
            Err(_) => return ExplainResult::failed(input, steps, KanaError::InvalidEncoding),
        };
        let kana = char::from_u32(scalar);
        let classified = kana.and_then(classify);
        let before = machine.committed().len();

        let outcome = match classified {
            Some(u) => machine.push_unit(u),
            None => Err(KanaError::InvalidKana),
        };

        steps.push(ExplainStep {
            offset,
            scalar,
            kana,
            script: kana.map_or(Script::Other, Script::of),
            unit: classified,
            emitted: machine.committed()[before..].to_string(),
            pending: machine.pending().as_str().map(str::to_string),
            sokuon_armed: machine.gemination() == Gemination::Armed,
        });

        if let Err(e) = outcome {
            return ExplainResult::failed(input, steps, e);
        }
    }

    match machine.finish() {
        Ok(romaji) => ExplainResult {
            input: input.to_string(),
            steps,
            romaji: Some(romaji),
            error: None,
        },
        Err(e) => ExplainResult::failed(input, steps, e),
    }
}
