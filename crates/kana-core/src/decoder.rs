//! Fixed-width codepoint decoding.
//!
//! Every kana used by the engine lives in U+3000..U+30FF and is therefore
//! encoded as exactly three UTF-8 bytes. The decoder works on those 3-byte
//! units directly instead of going through `str::chars`, so that misaligned
//! input can be rejected before any character is looked at.

/// Byte width of one encoded kana unit.
pub const KANA_UNIT_WIDTH: usize = 3;

/// Compose a scalar value from one 3-byte unit.
///
/// The payload bits are taken as-is: `[1110xxxx][10yyyyyy][10zzzzzz]` becomes
/// `xxxxyyyyyyzzzzzz`. Marker bits are not checked, so a unit that is not a
/// real three-byte sequence decodes to some unrelated value.
#[inline]
pub fn decode_unit(b1: u8, b2: u8, b3: u8) -> u32 {
    let hi = u32::from(b1 & 0b0000_1111) << 12;
    let mid = u32::from(b2 & 0b0011_1111) << 6;
    let lo = u32::from(b3 & 0b0011_1111);
    hi | mid | lo
}

/// Like [`decode_unit`], but only accepts a well-formed three-byte sequence.
#[inline]
pub fn decode_unit_strict(b1: u8, b2: u8, b3: u8) -> Option<u32> {
    let lead_ok = b1 & 0b1111_0000 == 0b1110_0000;
    let cont_ok = b2 & 0b1100_0000 == 0b1000_0000 && b3 & 0b1100_0000 == 0b1000_0000;
    if lead_ok && cont_ok {
        Some(decode_unit(b1, b2, b3))
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    #[default]
    Lenient,
    Strict,
}

/// A unit whose marker bits do not form a three-byte sequence (strict mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadUnit {
    pub offset: usize,
}

/// Iterator over the 3-byte units of an aligned byte slice.
///
/// Yields `(byte_offset, scalar)`. Trailing bytes that do not fill a whole
/// unit are ignored; callers check alignment up front.
pub struct KanaUnits<'a> {
    chunks: std::slice::ChunksExact<'a, u8>,
    offset: usize,
    mode: DecodeMode,
}

impl<'a> KanaUnits<'a> {
    pub fn new(bytes: &'a [u8], mode: DecodeMode) -> Self {
        Self {
            chunks: bytes.chunks_exact(KANA_UNIT_WIDTH),
            offset: 0,
            mode,
        }
    }
}

impl Iterator for KanaUnits<'_> {
    type Item = Result<(usize, u32), BadUnit>;

    fn next(&mut self) -> Option<Self::Item> {
        let unit = self.chunks.next()?;
        let offset = self.offset;
        self.offset += KANA_UNIT_WIDTH;
        let decoded = match self.mode {
            DecodeMode::Lenient => Some(decode_unit(unit[0], unit[1], unit[2])),
            DecodeMode::Strict => decode_unit_strict(unit[0], unit[1], unit[2]),
        };
        Some(decoded.map(|cp| (offset, cp)).ok_or(BadUnit { offset }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

/// `true` when `len` is a whole number of kana units.
pub fn is_aligned(len: usize) -> bool {
    len % KANA_UNIT_WIDTH == 0
}
