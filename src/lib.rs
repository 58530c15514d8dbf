//! A generic singly linked list, built from nodes that each own the rest of the chain.
//!
//! # Purpose
//! This crate is a small, self-contained collection: appending and prepending, deleting and finding
//! by value, printing, and removing an element counted from the back of the list. The last of those
//! is the only interesting algorithm here, a two-pointer walk from a dummy position in front of the
//! head (see [`LinkedList::remove_nth_from_end`](collections::linked::LinkedList::remove_nth_from_end)).
//!
//! # Method
//! Every link is an owning [`Box`], so a node always has exactly one owner and the chain can't
//! contain a cycle. Relinking moves boxes between slots; there is no unsafe code in this crate.
//!
//! # Error Handling
//! Only one operation can fail. Like other collection methods that take a position, it comes in
//! two flavours: [`try_remove_nth_from_end`](collections::linked::LinkedList::try_remove_nth_from_end)
//! returns a strongly typed [`OutOfRange`](collections::linked::list::OutOfRange) error, while
//! `remove_nth_from_end` panics with that error's message, because users don't want to be forced to
//! handle an error every time they already know the position is valid.
//!
//! A search that matches nothing isn't an error: [`delete`](collections::linked::LinkedList::delete)
//! and [`find`](collections::linked::LinkedList::find) simply return [`None`].
//!
//! # Logging
//! The list reports through [`tracing`] at `debug` and `trace` level only, so it is silent unless a
//! subscriber asks for those levels. Installing a subscriber is left to the binary.
#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
