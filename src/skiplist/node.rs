/// A position in the list from which forward links leave: either the header
/// sentinel or a real node in the arena. Keeping the sentinel as its own
/// variant avoids manufacturing a placeholder key/value for the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Link {
    /// The header sentinel owned by the list controller.
    Head,
    /// A real node, addressed by its arena index.
    Node(usize),
}

/// A single entry in the skip list.
///
/// A node assigned level `n` participates in levels `0..=n` and therefore
/// carries `n + 1` forward slots; `forward[i]` is the arena index of the next
/// node at level `i`, or `None` at the end of that level's chain. The node
/// itself is stored exactly once in the controller's arena — the higher-level
/// slots are extra links into the same set of nodes, not copies.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    pub key: K,
    pub value: V,
    pub forward: Vec<Option<usize>>,
}

impl<K, V> Node<K, V> {
    /// Creates a node participating in levels `0..=level`.
    pub fn new(key: K, value: V, level: usize) -> Self {
        Node {
            key,
            value,
            forward: vec![None; level + 1],
        }
    }

    /// The highest level this node is linked into.
    pub fn level(&self) -> usize {
        self.forward.len() - 1
    }
}
