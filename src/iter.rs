// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Forward traversal over a skip list.
//!
//! All three types walk the `next` links of a single level from the first
//! node to the end. [`Iter`] and [`Cursor`] borrow the list, so the list
//! cannot change while they are alive; [`IntoIter`] owns the nodes.

use std::iter::FusedIterator;

use crate::skip_list::Idx;
use crate::skip_list::NULL;
use crate::skip_list::Node;
use crate::skip_list::slot;

/// Borrowing iterator over the keys of one level, in ascending order.
pub struct Iter<'a, K> {
    nodes: &'a [Option<Node<K>>],
    current: Idx,
    level: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(nodes: &'a [Option<Node<K>>], first: Idx, level: usize) -> Self {
        return Iter {
            nodes,
            current: first,
            level,
        };
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        if self.current == NULL {
            return None;
        }

        let node = slot(self.nodes, self.current);
        self.current = node.next[self.level];
        return Some(&node.key);
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        return Iter { ..*self };
    }
}

/// A position in the bottom level of a skip list.
///
/// Unlike [`Iter`], a cursor can be inspected without advancing. It only moves
/// forward; get a fresh one from [`SkipList::cursor`](crate::SkipList::cursor)
/// to start over.
pub struct Cursor<'a, K> {
    nodes: &'a [Option<Node<K>>],
    current: Idx,
    /// Address of the list this cursor borrows from. Two empty arenas share a
    /// dangling slice pointer, so the slice alone cannot tell lists apart.
    owner: usize,
}

impl<'a, K> Cursor<'a, K> {
    pub(crate) fn new(nodes: &'a [Option<Node<K>>], first: Idx, owner: usize) -> Self {
        return Cursor {
            nodes,
            current: first,
            owner,
        };
    }

    /// True once the cursor has moved past the largest key.
    pub fn is_end(&self) -> bool {
        return self.current == NULL;
    }

    /// The key at this position, or `None` past the end.
    pub fn get(&self) -> Option<&'a K> {
        if self.is_end() {
            return None;
        }
        return Some(&slot(self.nodes, self.current).key);
    }

    /// The key at this position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is past the end.
    pub fn key(&self) -> &'a K {
        match self.get() {
            Some(key) => return key,
            None => panic!("dereferenced a skip list cursor past the end"),
        }
    }

    /// Step to the next larger key.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already past the end.
    pub fn move_next(&mut self) {
        assert!(!self.is_end(), "advanced a skip list cursor past the end");
        self.current = slot(self.nodes, self.current).next[0];
    }
}

impl<K> Clone for Cursor<'_, K> {
    fn clone(&self) -> Self {
        return Cursor { ..*self };
    }
}

impl<K> PartialEq for Cursor<'_, K> {
    /// Two cursors are equal when they stand on the same position of the same
    /// list. Cursors from different lists never compare equal, even if both
    /// lists are empty.
    fn eq(&self, other: &Self) -> bool {
        return self.owner == other.owner && self.current == other.current;
    }
}

/// Owning iterator over the keys of a skip list, in ascending order.
pub struct IntoIter<K> {
    nodes: Vec<Option<Node<K>>>,
    current: Idx,
    remaining: usize,
}

impl<K> IntoIter<K> {
    pub(crate) fn new(nodes: Vec<Option<Node<K>>>, first: Idx, len: usize) -> Self {
        return IntoIter {
            nodes,
            current: first,
            remaining: len,
        };
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        if self.current == NULL {
            return None;
        }

        let node = match self.nodes[self.current as usize].take() {
            Some(node) => node,
            None => panic!("link to freed slot {}", self.current),
        };
        self.current = node.next[0];
        self.remaining -= 1;
        return Some(node.key);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> FusedIterator for IntoIter<K> {}
