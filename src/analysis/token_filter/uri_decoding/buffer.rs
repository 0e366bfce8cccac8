//! Reusable output buffer for the token being assembled.

/// Initial capacity, in bytes, of a fresh buffer.
pub const DEFAULT_CAPACITY: usize = 256;

/// Character buffer reused across tokens.
///
/// Capacity never shrinks: [`ensure_capacity`](TermBuffer::ensure_capacity)
/// only reallocates when a token is larger than anything seen so far, and
/// [`clear`](TermBuffer::clear) keeps the allocation.
#[derive(Clone, Debug)]
pub struct TermBuffer {
    text: String,
}

impl TermBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TermBuffer {
            text: String::with_capacity(capacity),
        }
    }

    /// Make room for `len` bytes, reallocating only if the current capacity is smaller.
    pub fn ensure_capacity(&mut self, len: usize) {
        if self.text.capacity() < len {
            self.text.reserve(len - self.text.len());
        }
    }

    /// Reset the logical length to zero without freeing storage.
    #[inline]
    pub fn clear(&mut self) {
        self.text.clear();
    }

    #[inline]
    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    #[inline]
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.text.capacity()
    }

    /// Direct access for the charset decoder, which writes decoded text in place.
    pub(super) fn as_mut_string(&mut self) -> &mut String {
        &mut self.text
    }
}

impl Default for TermBuffer {
    fn default() -> Self {
        Self::new()
    }
}
