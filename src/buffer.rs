// The starting capacity of every buffer.  Deliberately tiny so that any
// realistic request line exercises the growth path.
const INITIAL_CAPACITY: usize = 8;

/// An append-only read buffer with a logical filled length distinct from
/// its capacity.
///
/// Freshly read bytes land in the spare region returned by
/// [`spare_mut`](ReadBuffer::spare_mut) and are committed with
/// [`advance`](ReadBuffer::advance); once the parser has consumed a prefix
/// of the filled region, [`consume`](ReadBuffer::consume) shifts the
/// remainder down to the front so [`filled`](ReadBuffer::filled) always
/// holds exactly the unconsumed bytes.
#[derive(Debug)]
pub struct ReadBuffer {
    buf: Vec<u8>,
    filled: usize,
}

impl ReadBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity.max(1)],
            filled: 0,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The unconsumed bytes read so far.
    #[must_use]
    pub fn filled(&self) -> &[u8] {
        &self.buf[..self.filled]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filled
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// The free region following the filled bytes, for the next read to
    /// land in.  If the buffer is full, its capacity is doubled first,
    /// preserving the filled contents.
    pub fn spare_mut(&mut self) -> &mut [u8] {
        if self.filled == self.buf.len() {
            let doubled = self.buf.len() * 2;
            self.buf.resize(doubled, 0);
        }
        &mut self.buf[self.filled..]
    }

    /// Commit `count` bytes just written into the spare region.
    pub fn advance(&mut self, count: usize) {
        debug_assert!(count <= self.buf.len() - self.filled);
        self.filled += count;
    }

    /// Discard `count` bytes from the front of the filled region, shifting
    /// any unconsumed remainder down to offset zero.
    pub fn consume(&mut self, count: usize) {
        debug_assert!(count <= self.filled);
        self.buf.copy_within(count..self.filled, 0);
        self.filled -= count;
    }
}

impl Default for ReadBuffer {
    fn default() -> Self {
        Self::new()
    }
}
