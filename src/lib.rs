//! Singly-linked FIFO queue with checked cursors.
//!
//! This crate provides [`Queue<T>`], an unbounded first-in-first-out
//! container built as a single-owner chain of heap nodes, plus two
//! higher-order helpers ([`filter`] and [`transform`]) that depend only on
//! the iteration contract.
//!
//! # Design
//!
//! ```text
//! Queue<T>
//!   head ─owns─> Node ─owns─> Node ─owns─> Node
//!   tail ───────────────non-owning──────────┘
//! ```
//!
//! Each node exclusively owns its successor, so the chain can never be
//! shared or leaked; the tail reference exists only to make `push_back`
//! O(1) and is never used for ownership or lifetime decisions.
//!
//! Two flavors of traversal are offered:
//!
//! - [`Iter`]/[`IterMut`]/[`IntoIter`]: ordinary Rust iterators for `for`
//!   loops and adapter chains.
//! - [`Cursor`]/[`CursorMut`]: checked forward-only cursors with an
//!   explicit end sentinel. Dereferencing or advancing a cursor at the
//!   sentinel is reported as [`InvalidOperation`] instead of panicking.
//!
//! # Quick start
//!
//! ```
//! use chainq::{Queue, filter};
//!
//! let mut queue = Queue::new();
//! queue.push_back(1);
//! queue.push_back(2);
//! queue.push_back(3);
//!
//! assert_eq!(queue.len(), 3);
//! assert_eq!(queue.front(), Ok(&1));
//!
//! assert_eq!(queue.pop_front(), Ok(1));
//! let remaining: Vec<_> = queue.iter().copied().collect();
//! assert_eq!(remaining, vec![2, 3]);
//!
//! let odd = filter(&queue, |n| n % 2 == 1);
//! assert_eq!(odd.len(), 1);
//! ```
//!
//! # Error model
//!
//! Every failure condition is a dedicated type, split by how callers are
//! expected to react:
//!
//! | Error | Raised by | Nature |
//! |-------|-----------|--------|
//! | [`EmptyQueue`] | `front`, `front_mut`, `pop_front` | expected, recoverable |
//! | [`InvalidOperation`] | cursor `get`/`advance` at the sentinel | programmer error |
//! | [`AllocationFailure`] | `try_push_back` | allocator exhausted; carries the rejected value |
//!
//! # Concurrency
//!
//! The queue is a single-threaded structure. It is [`Send`]/[`Sync`] in the
//! ordinary owned sense (moving a whole queue between threads is fine), but
//! concurrent access to one instance must be serialized by the caller.

#![warn(missing_docs)]

pub mod algo;
pub mod cursor;
pub mod error;
pub mod health;
pub mod iter;
pub mod queue;

pub use algo::{filter, transform};
pub use cursor::{Cursor, CursorMut};
pub use error::{AllocationFailure, EmptyQueue, InvalidOperation};
pub use health::{HealthPoints, InvalidArgument};
pub use iter::{IntoIter, Iter, IterMut};
pub use queue::Queue;
