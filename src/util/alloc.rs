use std::cell::Cell;
use std::rc::Rc;

/// A value that counts how many times it, or any of its clones, has been dropped. Used to check
/// that removed nodes release their values exactly once.
#[derive(Debug, Clone, Default)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    /// Creates a new counter with nothing dropped yet.
    pub fn new() -> CountedDrop {
        CountedDrop::default()
    }

    /// Returns the number of drops recorded so far.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
