use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::io::{self, Write};

use tracing::{debug, trace};

use super::{Iter, IterMut, Link, Node, unlink};
#[doc(inline)]
pub use crate::util::error::OutOfRange;
use crate::util::fmt::DebugIter;
use crate::util::result::ResultExtension;

/// A list with links in a single direction, from the head towards the tail. Each [`Node`] owns
/// the rest of the chain, so the list can never contain a cycle or share a node.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The position of the item in question, counting from the front.
/// - `k`: The position of the item in question, counting from the back.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `prepend` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `append` | `O(n)` |
/// | `find` | `O(i)` |
/// | `delete` | `O(i)` |
/// | `contains` | `O(i)` |
/// | `remove_nth_from_end` | `O(n)` |
/// | `print` | `O(n)` |
///
/// Only the head is tracked, which keeps every node down to a value and a single link but makes
/// anything at the back of the list a full traversal away.
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(Node::value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(Node::value_mut)
    }

    /// Adds the provided element to the back of the LinkedList, after walking the whole chain to
    /// find the tail.
    pub fn append(&mut self, value: T) {
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        *slot = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Adds the provided element to the front of the LinkedList.
    pub fn prepend(&mut self, value: T) {
        let mut node = Box::new(Node::new(value));
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let value = unlink(&mut self.head)?;
        self.len -= 1;
        Some(value)
    }

    /// Removes the element `n` positions before the end of the list and returns it, panicking on a
    /// failure. The last element is at position 1.
    ///
    /// # Panics
    /// Panics if `n` is 0 or greater than the length of the LinkedList.
    pub fn remove_nth_from_end(&mut self, n: usize) -> T {
        self.try_remove_nth_from_end(n).throw()
    }

    /// Removes the element `n` positions before the end of the list and returns it, returning an
    /// [`Err`] on a failure rather than panicking. The last element is at position 1.
    ///
    /// The list is left untouched when `n` is 0 or greater than the length of the LinkedList.
    pub fn try_remove_nth_from_end(&mut self, n: usize) -> Result<T, OutOfRange> {
        let len = self.len;
        match self.unlink_nth_from_end(n) {
            Some(value) => {
                self.len -= 1;
                trace!(n, len, "removed element from end of list");
                Ok(value)
            },
            None => {
                debug!(n, len, "position from end of list out of range");
                Err(OutOfRange { n, len })
            },
        }
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        *self = LinkedList::new();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Two cursors start on a dummy position in front of the head. The leading cursor takes `n + 1`
    /// steps, then both move together until the leading one falls off the tail, leaving the
    /// trailing cursor directly before the target.
    ///
    /// The dummy position is the head slot itself, so unlinking the head needs no special case.
    /// While the leading cursor reads ahead, the trailing one only counts its steps. It replays
    /// them over mutable links afterwards, because it can't hold a mutable link into the chain
    /// that the leading cursor is still borrowing.
    fn unlink_nth_from_end(&mut self, n: usize) -> Option<T> {
        if n == 0 {
            return None;
        }

        // The first step moves from the dummy onto the head.
        let mut lead = self.head.as_deref();
        for _ in 0..n {
            // Stepping on from an absent node means n is past the front of the list.
            lead = lead?.next();
        }

        let mut trail = 0_usize;
        while let Some(node) = lead {
            lead = node.next();
            trail += 1;
        }

        let mut slot = &mut self.head;
        for _ in 0..trail {
            slot = &mut slot.as_mut()?.next;
        }
        unlink(slot)
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        let mut count = 0_usize;
        let mut curr = self.head.as_deref();
        while let Some(node) = curr {
            count += 1;
            assert!(count <= self.len, "Traversal should end within the cached length.");
            curr = node.next();
        }
        assert_eq!(count, self.len, "Cached length should match the number of linked nodes.");
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Removes the first element equal to `value` and returns it. Leaves the list unchanged and
    /// returns [`None`] if there is no such element.
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let mut slot = &mut self.head;
        let mut index = 0_usize;
        while slot.as_ref().is_some_and(|node| node.value != *value) {
            slot = &mut slot.as_mut()?.next;
            index += 1;
        }

        let removed = unlink(slot)?;
        self.len -= 1;
        trace!(index, "deleted element from list");
        Some(removed)
    }

    /// Returns the first node holding a value equal to `value`, if it exists.
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut curr = self.head.as_deref();
        while let Some(node) = curr {
            if node.value == *value {
                return Some(node);
            }
            curr = node.next();
        }
        None
    }

    /// Returns the first node holding a value equal to `value`, if it exists. Only the node's value
    /// can be modified through the returned reference.
    pub fn find_mut(&mut self, value: &T) -> Option<&mut Node<T>> {
        let mut curr = self.head.as_deref_mut();
        while let Some(node) = curr {
            if node.value == *value {
                return Some(node);
            }
            curr = node.next.as_deref_mut();
        }
        None
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }
}

impl<T: Display> LinkedList<T> {
    /// Writes the list to stdout as a single line, in the same form as its [`Display`]
    /// implementation: `1 -> 2 -> 3`.
    pub fn print(&self) {
        println!("{self}");
    }

    /// Writes the list to `out` as a single line, in the same form as [`print`](Self::print).
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        let mut tail = &mut list.head;
        for value in iter {
            tail = &mut tail.insert(Box::new(Node::new(value))).next;
            list.len += 1;
        }
        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Dropping the head directly would recurse through every Box in the chain.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for value in values {
                write!(f, " -> {value}")?;
            }
        }
        Ok(())
    }
}
