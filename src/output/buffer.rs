//! Fixed-capacity text sink over a caller-owned byte buffer.
//!
//! Used to assemble short diagnostic lines (device id, status summaries)
//! without allocating.  Writes never overflow: anything past capacity is
//! dropped.
//!
//! One byte of the backing buffer is always kept for a NUL terminator, so a
//! buffer of `S` bytes holds at most `S - 1` bytes of content and the byte
//! right after the content is always `0`.  Single-byte and bulk writes use
//! the same limit.

use core::fmt;
use core::str::Utf8Error;

pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> BoundedWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        let mut w = Self { buf, len: 0 };
        w.terminate();
        w
    }

    /// Content capacity, excluding the terminator byte.
    pub fn capacity(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    /// Drop everything written so far.
    pub fn clear(&mut self) {
        self.len = 0;
        self.terminate();
    }

    /// Append one byte.  Returns 1, or 0 if the buffer is full.
    pub fn write_byte(&mut self, b: u8) -> usize {
        if self.remaining() == 0 {
            return 0;
        }
        self.buf[self.len] = b;
        self.len += 1;
        self.terminate();
        1
    }

    /// Append as much of `bytes` as fits and return how many were written.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        let n = bytes.len().min(self.remaining());
        self.buf[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
        self.terminate();
        n
    }

    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Content as text.  Fails if truncation split a multi-byte character.
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn terminate(&mut self) {
        if let Some(b) = self.buf.get_mut(self.len) {
            *b = 0;
        }
    }
}

/// `write!` support.  Truncated output still lands in the buffer, cut at a
/// character boundary so the content stays valid UTF-8, but the call reports
/// `fmt::Error` so callers can tell.
impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut n = s.len().min(self.remaining());
        while !s.is_char_boundary(n) {
            n -= 1;
        }
        if self.write_bytes(&s.as_bytes()[..n]) == s.len() {
            Ok(())
        } else {
            Err(fmt::Error)
        }
    }
}

impl fmt::Debug for BoundedWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedWriter")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}
