//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte, or jumps ahead with
//! memchr-accelerated searches when the classifier only cares about a few
//! "interesting" bytes (quotes, slashes, newlines, `*`). EOF is reached when
//! the position meets the source length; reads at or past that point return
//! the `0x00` sentinel.

/// Returns the earliest (minimum) of two optional positions.
///
/// Used to combine separate memchr calls when we need to search for more
/// bytes than `memchr3` supports.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so the classifier can snapshot it freely.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and all bytes after it are `0x00`. This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Returns the byte one position behind current, or `0x00` at the start.
    #[inline]
    pub fn prev(&self) -> u8 {
        match self.pos.checked_sub(1) {
            Some(p) => self.byte_at(p),
            None => 0,
        }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.buf.get(pos as usize).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` once the cursor has consumed all source content.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// The unscanned source content from the current position to EOF.
    fn remaining(&self) -> &'a [u8] {
        self.buf
            .get(self.pos as usize..self.source_len as usize)
            .unwrap_or(&[])
    }

    /// Move forward by a memchr offset found in [`remaining`](Self::remaining),
    /// or to EOF when nothing was found. Returns the byte landed on.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets come from remaining(), whose length fits in u32"
    )]
    fn jump(&mut self, offset: Option<usize>) -> u8 {
        if let Some(off) = offset {
            self.pos += off as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance to the next `\n` byte or EOF.
    ///
    /// Used by the classifier to skip line comment bodies. The newline itself
    /// is not consumed: it ends the comment and belongs to the code after it.
    pub fn eat_until_newline_or_eof(&mut self) {
        let found = memchr::memchr(b'\n', self.remaining());
        self.jump(found);
    }

    /// Advance past the next `*/`, or to EOF if the comment never closes.
    ///
    /// Returns `true` if the terminator was found and consumed.
    pub fn skip_to_block_comment_end(&mut self) -> bool {
        loop {
            let Some(off) = memchr::memchr(b'*', self.remaining()) else {
                self.jump(None);
                return false;
            };
            self.jump(Some(off));
            if self.peek() == b'/' {
                self.advance_n(2);
                return true;
            }
            // Lone `*` (or `**` run): keep looking after it.
            self.advance();
        }
    }

    /// Advance to the next byte that may end a string body.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// "Interesting" bytes for strings: the open `quote` and `\`.
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        let found = memchr::memchr2(quote, b'\\', self.remaining());
        self.jump(found)
    }

    /// Advance past plain code to the next byte that may open a string or
    /// comment. Returns the byte found, or 0 for EOF.
    ///
    /// Uses memchr3 for the three quote characters (`"`, `'`, `` ` ``) with a
    /// secondary search for `/`.
    pub fn skip_to_code_delim(&mut self) -> u8 {
        let remaining = self.remaining();
        let quote = memchr::memchr3(b'"', b'\'', b'`', remaining);
        let slash = memchr::memchr(b'/', remaining);
        self.jump(earliest_of(quote, slash))
    }
}
