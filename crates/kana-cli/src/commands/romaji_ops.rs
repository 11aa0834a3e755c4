use std::io::{self, BufRead, Write};

use kana_core::{transliterate_with, Options};
use tracing::debug;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Transliterate each block, one output line per block.
///
/// A failed block prints an empty line on `out` so output stays aligned with
/// input, and the reason on `err`.
pub fn romaji_blocks<I, W, E>(
    blocks: I,
    out: &mut W,
    err: &mut E,
    options: &Options,
) -> io::Result<RunSummary>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
    E: Write,
{
    let mut summary = RunSummary::default();
    for (i, block) in blocks.into_iter().enumerate() {
        let block = block?;
        let block = block.trim_end_matches('\r');
        match transliterate_with(block.as_bytes(), options) {
            Ok(romaji) => {
                writeln!(out, "{romaji}")?;
                summary.converted += 1;
            }
            Err(e) => {
                writeln!(out)?;
                writeln!(err, "line {}: {block}: {e}", i + 1)?;
                summary.failed += 1;
            }
        }
    }
    debug!(converted = summary.converted, failed = summary.failed);
    Ok(summary)
}

pub fn romaji_args<W: Write, E: Write>(
    texts: &[String],
    out: &mut W,
    err: &mut E,
    options: &Options,
) -> io::Result<RunSummary> {
    romaji_blocks(texts.iter().cloned().map(Ok), out, err, options)
}

pub fn romaji_reader<R: BufRead, W: Write, E: Write>(
    input: R,
    out: &mut W,
    err: &mut E,
    options: &Options,
) -> io::Result<RunSummary> {
    romaji_blocks(input.lines(), out, err, options)
}
