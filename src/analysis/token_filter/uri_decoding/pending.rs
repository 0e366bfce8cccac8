//! Fixed-capacity holding area for bytes decoded from percent-escapes.

/// Number of raw bytes held before a forced flush.
pub const PENDING_CAPACITY: usize = 32;

/// Raw bytes awaiting reinterpretation through the configured encoding.
///
/// The owner must flush before pushing into a full accumulator; [`push`]
/// reports a full accumulator by returning `false` instead of growing.
///
/// [`push`]: PendingBytes::push
#[derive(Clone, Debug)]
pub struct PendingBytes {
    bytes: [u8; PENDING_CAPACITY],
    len: usize,
}

impl PendingBytes {
    pub fn new() -> Self {
        PendingBytes {
            bytes: [0; PENDING_CAPACITY],
            len: 0,
        }
    }

    /// Append a byte. Returns `false` and leaves the contents untouched when full.
    #[inline]
    pub fn push(&mut self, byte: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.bytes[self.len] = byte;
        self.len += 1;
        true
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == PENDING_CAPACITY
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for PendingBytes {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut pending = PendingBytes::new();
        assert!(pending.is_empty());

        for i in 0..PENDING_CAPACITY {
            assert!(pending.push(i as u8));
        }
        assert!(pending.is_full());
        assert_eq!(pending.len(), PENDING_CAPACITY);

        // No silent overwrite once full.
        assert!(!pending.push(0xff));
        assert_eq!(pending.as_slice()[PENDING_CAPACITY - 1], 31);
    }

    #[test]
    fn test_clear() {
        let mut pending = PendingBytes::new();
        pending.push(b'a');
        pending.push(b'b');
        assert_eq!(pending.as_slice(), b"ab");

        pending.clear();
        assert!(pending.is_empty());
        assert_eq!(pending.as_slice(), b"");

        pending.push(b'c');
        assert_eq!(pending.as_slice(), b"c");
    }
}
