use gridsearch_core::{Grid, Position};

/// Sentinel g-score meaning "not reached yet".
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Parent links
// ---------------------------------------------------------------------------

/// Discovery record for a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Link {
    Unseen,
    Root,
    From(Position),
}

/// Parent links for one search tree, stored flat by grid index.
pub(crate) struct Links<'g> {
    grid: &'g Grid,
    links: Vec<Link>,
}

impl<'g> Links<'g> {
    pub(crate) fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            links: vec![Link::Unseen; grid.len()],
        }
    }

    #[inline]
    fn get(&self, p: Position) -> Link {
        self.grid
            .index(p)
            .map_or(Link::Unseen, |i| self.links[i])
    }

    #[inline]
    fn put(&mut self, p: Position, link: Link) {
        if let Some(i) = self.grid.index(p) {
            self.links[i] = link;
        }
    }

    /// Whether `p` has been discovered (root included).
    #[inline]
    pub(crate) fn is_seen(&self, p: Position) -> bool {
        self.get(p) != Link::Unseen
    }

    #[inline]
    pub(crate) fn set_root(&mut self, p: Position) {
        self.put(p, Link::Root);
    }

    /// Record `from` as the predecessor of `p`, replacing any earlier one.
    #[inline]
    pub(crate) fn link(&mut self, p: Position, from: Position) {
        self.put(p, Link::From(from));
    }

    /// `p` followed by its predecessors up to and including the root.
    pub(crate) fn chain(&self, p: Position) -> Vec<Position> {
        let mut out = Vec::new();
        let mut cur = p;
        loop {
            out.push(cur);
            match self.get(cur) {
                Link::From(prev) => cur = prev,
                Link::Root | Link::Unseen => break,
            }
        }
        out
    }

    /// Root-to-`p` path.
    pub(crate) fn path_to(&self, p: Position) -> Vec<Position> {
        let mut path = self.chain(p);
        path.reverse();
        path
    }
}

/// Join a forward tree (rooted at the start) and a backward tree (rooted at
/// the end) at a node both have discovered.
///
/// The backward half is walked as-is: its links already point toward the end.
pub(crate) fn stitch(forward: &Links<'_>, backward: &Links<'_>, meet: Position) -> Vec<Position> {
    let mut path = forward.path_to(meet);
    path.extend(backward.chain(meet).into_iter().skip(1));
    path
}

// ---------------------------------------------------------------------------
// Cost tables for Dijkstra / A*
// ---------------------------------------------------------------------------

/// Best known g-score and closed flag per cell.
pub(crate) struct Scores<'g> {
    grid: &'g Grid,
    g: Vec<i32>,
    closed: Vec<bool>,
}

impl<'g> Scores<'g> {
    pub(crate) fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            g: vec![UNREACHABLE; grid.len()],
            closed: vec![false; grid.len()],
        }
    }

    /// Best known cost to `p`, [`UNREACHABLE`] if none.
    #[inline]
    pub(crate) fn g(&self, p: Position) -> i32 {
        self.grid.index(p).map_or(UNREACHABLE, |i| self.g[i])
    }

    #[inline]
    pub(crate) fn set_g(&mut self, p: Position, g: i32) {
        if let Some(i) = self.grid.index(p) {
            self.g[i] = g;
        }
    }

    #[inline]
    pub(crate) fn is_closed(&self, p: Position) -> bool {
        self.grid.index(p).is_some_and(|i| self.closed[i])
    }

    #[inline]
    pub(crate) fn close(&mut self, p: Position) {
        if let Some(i) = self.grid.index(p) {
            self.closed[i] = true;
        }
    }
}

// ---------------------------------------------------------------------------
// Priority queue entries
// ---------------------------------------------------------------------------

/// Open-list entry ordered by `(f, g, pos)` for use in `BinaryHeap`.
///
/// Dijkstra uses `f == g`, which reduces the order to `(distance, pos)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) f: i32,
    pub(crate) g: i32,
    pub(crate) pos: Position,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest first.
        other
            .f
            .cmp(&self.f)
            .then(other.g.cmp(&self.g))
            .then(other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
