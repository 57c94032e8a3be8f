use std::fmt;

use super::level::LevelGenerator;
use super::node::{Link, Node};

/// Maximum level used by [`SkipList::default`]. Comfortable for lists well
/// beyond a million entries.
pub const DEFAULT_MAX_LEVEL: usize = 16;

/// Outcome of an insert: duplicate keys are a normal result, not an error,
/// and the stored value is never overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was absent and a new node was spliced in.
    Inserted,
    /// The key was already present; the list is unchanged.
    AlreadyExists,
}

/// Outcome of a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The key was found, unlinked at every level and released.
    Deleted,
    /// The key was absent; the list is unchanged.
    NotFound,
}

/// An ordered in-memory key-value index backed by a skip list.
///
/// Nodes live in an index-addressed arena; vacated slots are recycled through
/// a free list so forward links stay valid for the lifetime of the node they
/// point at. Level 0 links every entry in ascending key order, and each
/// higher level is a randomly thinned subsequence of the level below it.
///
/// This type is single-writer by construction (`&mut self` on mutations).
/// See `SharedSkipList` for the lock-guarded shared handle and
/// `AsyncSkipList` for the task-backed async front end.
#[derive(Debug)]
pub struct SkipList<K, V> {
    /// Arena of nodes; `None` marks a slot freed by a delete.
    nodes: Vec<Option<Node<K, V>>>,
    /// Vacated arena slots, reused before the arena grows.
    free: Vec<usize>,
    /// Forward links out of the header sentinel, one per level `0..=max_level`.
    head: Vec<Option<usize>>,
    /// Highest level with at least one node linked, 0 when empty.
    level: usize,
    /// Number of entries, always the length of the level-0 chain.
    len: usize,
    level_gen: LevelGenerator,
}

impl<K, V> SkipList<K, V> {
    /// Creates an empty list whose nodes never exceed `max_level`.
    ///
    /// # Panics
    ///
    /// Panics if `max_level` is 0: generated node levels start at 1.
    pub fn new(max_level: usize) -> Self {
        Self::with_generator(LevelGenerator::new(max_level))
    }

    /// Creates an empty list with a seeded level generator, so the node
    /// heights (not just the contents) are reproducible.
    pub fn with_seed(max_level: usize, seed: u64) -> Self {
        Self::with_generator(LevelGenerator::with_seed(max_level, seed))
    }

    fn with_generator(level_gen: LevelGenerator) -> Self {
        let max_level = level_gen.max_level();
        assert!(max_level >= 1, "max_level must be at least 1");
        SkipList {
            nodes: Vec::new(),
            free: Vec::new(),
            head: vec![None; max_level + 1],
            level: 0,
            len: 0,
            level_gen,
        }
    }

    /// Number of entries in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Highest level currently linking at least one node.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Upper bound on node levels, fixed at construction.
    pub fn max_level(&self) -> usize {
        self.head.len() - 1
    }

    /// Iterates every entry in ascending key order (the level-0 chain).
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.level_iter(0)
    }

    /// Iterates the entries linked at `level`, in ascending key order.
    /// Levels above `max_level` are empty.
    pub fn level_iter(&self, level: usize) -> Iter<'_, K, V> {
        Iter {
            list: self,
            current: self.head.get(level).copied().flatten(),
            level,
        }
    }

    fn node(&self, idx: usize) -> &Node<K, V> {
        // Linked indices always refer to occupied slots.
        self.nodes[idx].as_ref().expect("forward link to freed slot")
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<K, V> {
        self.nodes[idx].as_mut().expect("forward link to freed slot")
    }

    /// Forward link leaving `from` at `level`.
    fn next(&self, from: Link, level: usize) -> Option<usize> {
        match from {
            Link::Head => self.head[level],
            Link::Node(idx) => self.node(idx).forward[level],
        }
    }

    fn set_next(&mut self, from: Link, level: usize, to: Option<usize>) {
        match from {
            Link::Head => self.head[level] = to,
            Link::Node(idx) => self.node_mut(idx).forward[level] = to,
        }
    }

    fn alloc(&mut self, node: Node<K, V>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) {
        self.nodes[idx] = None;
        self.free.push(idx);
    }
}

impl<K: Ord, V> SkipList<K, V> {
    /// Looks up `key`, returning a reference to its value if present.
    ///
    /// A single top-down walk: advance rightward at the current level while
    /// the next key is smaller than the target, drop a level when blocked,
    /// and check the level-0 successor once level 0 is exhausted.
    pub fn search(&self, key: &K) -> Option<&V> {
        let mut cursor = Link::Head;
        for level in (0..=self.level).rev() {
            while let Some(next) = self.next(cursor, level) {
                if self.node(next).key < *key {
                    cursor = Link::Node(next);
                } else {
                    break;
                }
            }
        }
        let candidate = self.next(cursor, 0)?;
        let node = self.node(candidate);
        if node.key == *key { Some(&node.value) } else { None }
    }

    /// Returns true if `key` is stored in the list.
    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Inserts `key` with `value`.
    ///
    /// If the key already exists nothing changes — the stored value is kept
    /// and [`InsertOutcome::AlreadyExists`] is returned. Otherwise the node
    /// is given a random level and spliced in at every level up to it.
    pub fn insert(&mut self, key: K, value: V) -> InsertOutcome {
        let mut update = vec![Link::Head; self.max_level() + 1];
        let candidate = self.find_predecessors(&key, &mut update);

        if let Some(idx) = candidate {
            if self.node(idx).key == key {
                return InsertOutcome::AlreadyExists;
            }
        }

        let level = self.level_gen.generate();
        if level > self.level {
            // The update entries between the old and new top level already
            // point at the header.
            self.level = level;
        }

        let idx = self.alloc(Node::new(key, value, level));
        for i in 0..=level {
            let succ = self.next(update[i], i);
            self.node_mut(idx).forward[i] = succ;
            self.set_next(update[i], i, Some(idx));
        }

        self.len += 1;
        InsertOutcome::Inserted
    }

    /// Removes `key` from the list, if present.
    ///
    /// The target is unlinked level by level from the bottom up; the walk
    /// stops at the first level where the target is no longer the immediate
    /// successor, since a node absent at level `i` cannot appear at `i + 1`.
    pub fn delete(&mut self, key: &K) -> DeleteOutcome {
        let mut update = vec![Link::Head; self.max_level() + 1];
        let candidate = self.find_predecessors(key, &mut update);

        let Some(target) = candidate else {
            return DeleteOutcome::NotFound;
        };
        if self.node(target).key != *key {
            return DeleteOutcome::NotFound;
        }

        for i in 0..=self.level {
            if self.next(update[i], i) != Some(target) {
                break;
            }
            let succ = self.node(target).forward[i];
            self.set_next(update[i], i, succ);
        }

        // Drop empty top levels, never below 0.
        while self.level > 0 && self.head[self.level].is_none() {
            self.level -= 1;
        }

        self.release(target);
        self.len -= 1;
        DeleteOutcome::Deleted
    }

    /// Top-down walk recording, for each level, the last position visited
    /// before dropping down. `update` must be pre-filled with [`Link::Head`]
    /// and is only overwritten for levels `0..=self.level`; entries above
    /// stay pointing at the header for a taller-than-current insert.
    ///
    /// Returns the level-0 successor of `update[0]` — the only node that can
    /// match `key`.
    fn find_predecessors(&self, key: &K, update: &mut [Link]) -> Option<usize> {
        let mut cursor = Link::Head;
        for level in (0..=self.level).rev() {
            while let Some(next) = self.next(cursor, level) {
                if self.node(next).key < *key {
                    cursor = Link::Node(next);
                } else {
                    break;
                }
            }
            update[level] = cursor;
        }
        self.next(cursor, 0)
    }
}

impl<K: Ord, V> Default for SkipList<K, V> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEVEL)
    }
}

/// Iterator over the entries linked at one level, in ascending key order.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    list: &'a SkipList<K, V>,
    current: Option<usize>,
    level: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        let node = self.list.node(idx);
        self.current = node.forward[self.level];
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> IntoIterator for &'a SkipList<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Diagnostic rendering: one line per active level listing `key:value;`
/// pairs. Not part of the persisted format.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for SkipList<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in 0..=self.level {
            write!(f, "Level {}: ", level)?;
            for (key, value) in self.level_iter(level) {
                write!(f, "{}:{};", key, value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
