use std::fmt::{self, Debug, Formatter};

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single element of a [`LinkedList`](super::LinkedList), owning the remainder of the chain
/// through its `next` link.
///
/// Nodes are only handed out by reference (see [`LinkedList::find`](super::LinkedList::find)), so
/// the links themselves can't be rewritten from outside of the list.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) const fn new(value: T) -> Node<T> {
        Node {
            value,
            next: None,
        }
    }

    /// Returns a reference to the value stored in this node.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the value stored in this node.
    pub const fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Returns the node following this one, if it exists.
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Printing the whole chain here would recurse once per node.
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

/// Detaches the node owned by `link`, handing its successor to `link` and returning the detached
/// value. Returns [`None`] and leaves `link` untouched if it is already empty.
pub(crate) fn unlink<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.take()?;
    let Node { value, next } = *node;
    *link = next;
    Some(value)
}
