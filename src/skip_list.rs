// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Skip List
//!
//! An ordered set of unique keys with expected O(log n) insert, erase and
//! lookup, and no rebalancing.
//!
//! # Structure
//!
//! Every key lives in one node. Each node takes part in a random number of
//! levels (its height), chosen once at insertion. Level 0 links every node in
//! ascending order; each level above links a subsequence of the level below.
//!
//! ```text
//! Level 2: HEAD ----------------------> 5 ------------------> NULL
//! Level 1: HEAD ------> 2 ------------> 5 ------> 8 --------> NULL
//! Level 0: HEAD -> 1 -> 2 -> 3 -> 4 -> 5 -> 6 -> 8 -> 9 ----> NULL
//! ```
//!
//! The header is not a node: it is the array of per-level entry points, so
//! no placeholder key is ever needed. Its length is the current height of the
//! list, which grows lazily on insert and shrinks when the top level empties.
//!
//! # Storage
//!
//! Nodes live in an arena (`Vec` of slots) and link to each other by `u32`
//! index. Erased slots go onto a free list and are reused by later inserts.
//!
//! # Operations
//!
//! - `insert(key)`: O(log n) expected, no-op if the key is present
//! - `erase(key)`: O(log n) expected, returns whether the key was removed
//! - `contains(key)`: O(log n) expected
//! - `iter()`: ascending traversal of level 0
//! - `len()`: O(1)

use std::borrow::Borrow;
use std::fmt;
use std::io;

use log::debug;
use log::trace;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand_core::RngCore;
use smallvec::SmallVec;
use smallvec::smallvec;

use crate::config::Config;
use crate::config::ConfigError;
use crate::iter::Cursor;
use crate::iter::IntoIter;
use crate::iter::Iter;
use crate::level::Leveler;

/// Node index type. u32 saves space vs usize on 64-bit.
pub(crate) type Idx = u32;

/// Null index marker.
pub(crate) const NULL: Idx = Idx::MAX;

/// Most towers are short; taller ones spill to the heap.
const INLINE_HEIGHT: usize = 4;

/// Inline capacity of the update vector, enough for lists of ~65k keys at p = 0.5.
const INLINE_PATH: usize = 16;

/// A node in the skip list.
pub(crate) struct Node<K> {
    pub(crate) key: K,
    /// Forward links, one per level the node takes part in.
    pub(crate) next: SmallVec<[Idx; INLINE_HEIGHT]>,
}

/// Look up a live node in an arena.
///
/// Every link reachable from the header points at an occupied slot, so a hole
/// here means the list is corrupt.
pub(crate) fn slot<K>(nodes: &[Option<Node<K>>], idx: Idx) -> &Node<K> {
    match &nodes[idx as usize] {
        Some(node) => return node,
        None => panic!("link to freed slot {}", idx),
    }
}

/// Where a traversal stands: on the header or on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pred {
    Head,
    Node(Idx),
}

/// Predecessor of the search key at each level, bottom level first.
type Path = SmallVec<[Pred; INLINE_PATH]>;

/// A probabilistic skip list holding unique keys in ascending order.
///
/// `R` is the random source used to pick tower heights. The default
/// [`SmallRng`] is seeded from the OS; use [`SkipList::seeded`] or
/// [`SkipList::with_rng`] for reproducible layouts.
pub struct SkipList<K, R = SmallRng> {
    /// Arena of nodes; `None` marks a slot on the free list.
    nodes: Vec<Option<Node<K>>>,
    /// Free list for reusing erased node slots.
    free_list: Vec<Idx>,
    /// Entry point of each level. Never empty.
    heads: Vec<Idx>,
    /// Number of keys.
    len: usize,
    leveler: Leveler,
    rng: R,
}

impl<K> SkipList<K> {
    /// Empty list with p = 0.5 and a height cap of 32.
    pub fn new() -> Self {
        return Self::with_config(Config::default());
    }

    /// Empty list with the given promotion probability and height cap.
    pub fn with_params(probability: f64, max_height: usize) -> Result<Self, ConfigError> {
        let config = Config::new(probability, max_height)?;
        return Ok(Self::with_config(config));
    }

    /// Empty list using an OS-seeded random source.
    pub fn with_config(config: Config) -> Self {
        return Self::with_rng(config, SmallRng::from_entropy());
    }

    /// Empty list whose tower heights are fully determined by `seed`.
    pub fn seeded(config: Config, seed: u64) -> Self {
        return Self::with_rng(config, SmallRng::seed_from_u64(seed));
    }
}

impl<K, R> SkipList<K, R> {
    /// Empty list drawing tower heights from `rng`.
    pub fn with_rng(config: Config, rng: R) -> Self {
        debug!(
            "new skip list: p = {}, max height = {}",
            config.probability(),
            config.max_height()
        );
        return SkipList {
            nodes: Vec::new(),
            free_list: Vec::new(),
            heads: vec![NULL],
            len: 0,
            leveler: Leveler::new(config),
            rng,
        };
    }

    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Number of live levels, at least 1.
    pub fn height(&self) -> usize {
        return self.heads.len();
    }

    /// Hard cap on any node's height.
    pub fn max_height(&self) -> usize {
        return self.leveler.config().max_height();
    }

    pub fn probability(&self) -> f64 {
        return self.leveler.config().probability();
    }

    pub fn config(&self) -> Config {
        return self.leveler.config();
    }

    /// Iterate over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        return Iter::new(&self.nodes, self.heads[0], 0);
    }

    /// Iterate over the keys linked at `level`, in ascending order.
    ///
    /// Levels at or above [`height`](Self::height) are empty. Meant for
    /// diagnostics and tests.
    pub fn level(&self, level: usize) -> Iter<'_, K> {
        let first = self.heads.get(level).copied().unwrap_or(NULL);
        return Iter::new(&self.nodes, first, level);
    }

    /// A position on the smallest key, or past the end if the list is empty.
    pub fn cursor(&self) -> Cursor<'_, K> {
        let owner = self as *const Self as usize;
        return Cursor::new(&self.nodes, self.heads[0], owner);
    }

    /// Remove every key, keeping the configuration and random source.
    pub fn clear(&mut self) {
        debug!("clearing skip list of {} keys", self.len);
        self.nodes.clear();
        self.free_list.clear();
        self.heads.clear();
        self.heads.push(NULL);
        self.len = 0;
    }

    // --- Node access helpers ---

    fn node(&self, idx: Idx) -> &Node<K> {
        return slot(&self.nodes, idx);
    }

    fn node_mut(&mut self, idx: Idx) -> &mut Node<K> {
        match &mut self.nodes[idx as usize] {
            Some(node) => return node,
            None => panic!("link to freed slot {}", idx),
        }
    }

    fn next_of(&self, pred: Pred, level: usize) -> Idx {
        match pred {
            Pred::Head => return self.heads[level],
            Pred::Node(idx) => return self.node(idx).next[level],
        }
    }

    fn set_next(&mut self, pred: Pred, level: usize, to: Idx) {
        match pred {
            Pred::Head => self.heads[level] = to,
            Pred::Node(idx) => self.node_mut(idx).next[level] = to,
        }
    }

    fn alloc_node(&mut self, node: Node<K>) -> Idx {
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx as usize] = Some(node);
            return idx;
        }
        let idx = self.nodes.len();
        assert!(idx < NULL as usize, "skip list arena exhausted");
        self.nodes.push(Some(node));
        return idx as Idx;
    }

    fn free_node(&mut self, idx: Idx) {
        self.nodes[idx as usize] = None;
        self.free_list.push(idx);
    }

    /// Drop empty top levels, one at a time, keeping at least one level.
    fn shrink(&mut self) {
        while self.heads.len() > 1 && self.heads[self.heads.len() - 1] == NULL {
            self.heads.pop();
            trace!("tower shrank to {} levels", self.heads.len());
        }
    }
}

impl<K: Ord, R> SkipList<K, R> {
    // --- Traversal ---

    /// Move right along `level` while the next key is below `key`.
    fn advance<Q>(&self, mut cur: Pred, level: usize, key: &Q) -> Pred
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        loop {
            let next = self.next_of(cur, level);
            if next == NULL {
                return cur;
            }
            let probe: &Q = self.node(next).key.borrow();
            if probe >= key {
                return cur;
            }
            cur = Pred::Node(next);
        }
    }

    /// Descend from the top level, recording the last position before each
    /// drop. Returns that update vector and the level-0 successor, which is
    /// the first node whose key is not below `key`.
    fn find_path<Q>(&self, key: &Q) -> (Path, Idx)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let height = self.heads.len();
        let mut update: Path = smallvec![Pred::Head; height];
        let mut cur = Pred::Head;
        for level in (0..height).rev() {
            cur = self.advance(cur, level, key);
            update[level] = cur;
        }
        return (update, self.next_of(cur, 0));
    }

    fn holds<Q>(&self, idx: Idx, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if idx == NULL {
            return false;
        }
        let probe: &Q = self.node(idx).key.borrow();
        return probe == key;
    }

    // --- Core operations ---

    /// Whether `key` is in the list.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = Pred::Head;
        for level in (0..self.heads.len()).rev() {
            cur = self.advance(cur, level, key);
        }
        return self.holds(self.next_of(cur, 0), key);
    }

    /// Remove `key`. Returns `false` if it was not present.
    pub fn erase<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.check_invariants();

        let (update, target) = self.find_path(key);
        if !self.holds(target, key) {
            return false;
        }

        // Above the target's height its predecessors point past it already.
        for level in 0..self.heads.len() {
            if self.next_of(update[level], level) == target {
                let after = self.node(target).next[level];
                self.set_next(update[level], level, after);
            }
        }
        self.free_node(target);
        self.len -= 1;
        self.shrink();

        self.check_invariants();
        return true;
    }

    // --- Invariant checking ---

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        let height = self.heads.len();
        assert!(
            height >= 1 && height <= self.max_height(),
            "INVARIANT VIOLATED: height={} outside 1..={}",
            height,
            self.max_height()
        );
        assert!(
            height == 1 || self.heads[height - 1] != NULL,
            "INVARIANT VIOLATED: top level {} is empty",
            height - 1
        );

        let mut below: Vec<Idx> = Vec::new();
        for level in 0..height {
            let mut row: Vec<Idx> = Vec::new();
            let mut idx = self.heads[level];
            while idx != NULL {
                let node = self.node(idx);
                assert!(
                    node.next.len() > level && node.next.len() <= height,
                    "INVARIANT VIOLATED: node of height {} linked at level {} (list height {})",
                    node.next.len(),
                    level,
                    height
                );
                if let Some(&prev) = row.last() {
                    assert!(
                        self.node(prev).key < node.key,
                        "INVARIANT VIOLATED: level {} is not strictly ascending",
                        level
                    );
                }
                row.push(idx);
                idx = node.next[level];
            }

            if level == 0 {
                assert_eq!(
                    row.len(),
                    self.len,
                    "INVARIANT VIOLATED: level 0 count={} != len()={}",
                    row.len(),
                    self.len
                );
            } else {
                // Every tower is contiguous, so each level is exactly the
                // nodes of the level below that are tall enough.
                let expected: Vec<Idx> = below
                    .iter()
                    .copied()
                    .filter(|&idx| self.node(idx).next.len() > level)
                    .collect();
                assert_eq!(
                    row, expected,
                    "INVARIANT VIOLATED: level {} is not a subsequence of level {}",
                    level,
                    level - 1
                );
            }
            below = row;
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_invariants(&self) {}
}

impl<K: Ord, R: RngCore> SkipList<K, R> {
    /// Insert `key`. Does nothing if an equal key is already present.
    pub fn insert(&mut self, key: K) {
        self.check_invariants();

        let (mut update, succ) = self.find_path(&key);
        if self.holds(succ, &key) {
            return;
        }

        let height = self.leveler.random_level(&mut self.rng, self.heads.len());
        if height > self.heads.len() {
            trace!("tower grew from {} to {} levels", self.heads.len(), height);
            self.heads.resize(height, NULL);
            update.resize(height, Pred::Head);
        }

        // The node's own links are complete before any predecessor points at it.
        let next = (0..height)
            .map(|level| self.next_of(update[level], level))
            .collect();
        let idx = self.alloc_node(Node { key, next });
        for level in 0..height {
            self.set_next(update[level], level, idx);
        }

        self.len += 1;
        self.check_invariants();
    }
}

impl<K, R: RngCore + SeedableRng> SkipList<K, R> {
    /// Move every key into a new list, leaving `self` empty and usable.
    ///
    /// The returned list keeps the random source; `self` gets a fresh one
    /// seeded from it and keeps its configuration.
    pub fn take(&mut self) -> Self {
        debug!("moving {} keys out of skip list", self.len);
        let rng = R::seed_from_u64(self.rng.next_u64());
        let empty = SkipList::with_rng(self.config(), rng);
        return std::mem::replace(self, empty);
    }
}

impl<K: fmt::Display, R> SkipList<K, R> {
    /// Write every level from the top down, one line per level.
    ///
    /// ```text
    /// SkipList (levels = 2, p = 0.5):
    /// Level 1: 3 6
    /// Level 0: 1 2 3 4 5 6 9
    /// ```
    ///
    /// Each key is followed by a space. The format is for humans and may change.
    pub fn dump<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "SkipList (levels = {}, p = {}):",
            self.height(),
            self.probability()
        )?;
        for level in (0..self.height()).rev() {
            write!(out, "Level {}: ", level)?;
            for key in self.level(level) {
                write!(out, "{} ", key)?;
            }
            writeln!(out)?;
        }
        return out.flush();
    }
}

impl<K> Default for SkipList<K> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<K: fmt::Debug, R> fmt::Debug for SkipList<K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_set().entries(self.iter()).finish();
    }
}

impl<K: Ord, R: RngCore> Extend<K> for SkipList<K, R> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for SkipList<K> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut list = SkipList::new();
        list.extend(keys);
        return list;
    }
}

impl<'a, K, R> IntoIterator for &'a SkipList<K, R> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        return self.iter();
    }
}

impl<K, R> IntoIterator for SkipList<K, R> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> IntoIter<K> {
        let first = self.heads[0];
        return IntoIter::new(self.nodes, first, self.len);
    }
}
