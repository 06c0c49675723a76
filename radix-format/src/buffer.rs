use core::fmt;
use core::ops::Deref;
use core::str;

use crate::constants::MAX_BUF_LEN;

/// <b><u>A key type</u></b>. Represents a stack-allocated buffer that a [`Printer`]
/// writes digits into.
///
/// Its capacity fits the longest digit string any supported type can produce, a
/// `u128` written in radix 2, plus a trailing NUL byte. Right-to-left strategies fill
/// it from the back, left-to-right strategies from the front; either way the digits
/// end up in reading order, with no reversal pass.
///
/// [`Printer`]: struct.Printer.html
#[derive(Copy, Clone)]
pub struct Buffer {
    inner: [u8; MAX_BUF_LEN],
    pos: usize,
    end: usize,
}

impl Buffer {
    /// Constructs a new, empty buffer.
    #[inline(always)]
    pub fn new() -> Buffer {
        Buffer {
            inner: [0; MAX_BUF_LEN],
            pos: MAX_BUF_LEN - 1,
            end: MAX_BUF_LEN - 1,
        }
    }

    /// Returns the digits written last as a byte slice.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner[self.pos..self.end]
    }

    /// Returns the digits written last followed by their NUL terminator.
    #[inline(always)]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.inner[self.pos..=self.end]
    }

    /// Returns the digits written last as a string slice.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        // Safe because only alphabet characters, which are all ASCII, are written.
        unsafe { str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Returns `true` if no digits have been written yet.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    /// Returns the number of digits written last.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.end - self.pos
    }

    /// Returns the number of digits this buffer can hold.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        MAX_BUF_LEN - 1
    }

    // Prepares for digits that arrive least significant first.
    #[inline(always)]
    pub(crate) fn reset_back(&mut self) {
        self.pos = MAX_BUF_LEN - 1;
        self.end = MAX_BUF_LEN - 1;
        self.inner[self.end] = b'\0';
    }

    #[inline(always)]
    pub(crate) fn prepend(&mut self, digit: u8) {
        self.pos -= 1;
        self.inner[self.pos] = digit;
    }

    #[inline(always)]
    pub(crate) fn prepend_pair(&mut self, pair: [u8; 2]) {
        self.pos -= 2;
        self.inner[self.pos..self.pos + 2].copy_from_slice(&pair);
    }

    // Prepares for digits that arrive most significant first.
    #[inline(always)]
    pub(crate) fn reset_front(&mut self) {
        self.pos = 0;
        self.end = 0;
    }

    #[inline(always)]
    pub(crate) fn push(&mut self, digit: u8) {
        self.inner[self.end] = digit;
        self.end += 1;
    }

    #[inline(always)]
    pub(crate) fn push_pair(&mut self, pair: [u8; 2]) {
        self.inner[self.end..self.end + 2].copy_from_slice(&pair);
        self.end += 2;
    }

    #[inline(always)]
    pub(crate) fn terminate(&mut self) {
        self.inner[self.end] = b'\0';
    }
}

impl AsRef<str> for Buffer {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl Default for Buffer {
    /// Same as the [`new`] method.
    ///
    /// [`new`]: struct.Buffer.html#method.new
    #[inline(always)]
    fn default() -> Buffer {
        Buffer::new()
    }
}

impl Deref for Buffer {
    type Target = str;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
