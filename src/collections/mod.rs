//! Collection types.
//!
//! # Purpose
//! At the moment this only holds a singly linked list, which is small enough to read in one
//! sitting while still covering ownership-based linking and traversal.

pub mod linked;
