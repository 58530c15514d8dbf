//! Linked collection types. Primarily revolves around [`LinkedList`] and the [`Node`]s that make up
//! its chain.

pub mod list;

#[doc(inline)]
pub use list::{LinkedList, Node};
