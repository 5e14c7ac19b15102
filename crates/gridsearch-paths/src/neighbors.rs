use gridsearch_core::Position;

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal (4-way) neighbors of a grid position in
/// [`Direction::ALL`](gridsearch_core::Direction::ALL) order, filtered by a
/// predicate. The internal buffer is reused across calls.
pub struct Neighbors {
    buf: Vec<Position>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the east, south, west and north neighbors of `p` (in that
    /// order), keeping only those for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Position, keep: impl Fn(Position) -> bool) -> &[Position] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
