//! This crate provides a doubly-linked list of integers with owned nodes,
//! implemented as a cyclic chain closed through a sentinel node.
//!
//! The [`List`] allows inserting and removing elements at both ends in
//! constant time. Lookup and removal by value or by zero-based position walk
//! the chain from the head and take *O*(*n*) time. A stable ascending
//! [merge sort](List::sort) and the [merge step](List::merge) it is built
//! from are part of the public surface.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::new();
//!
//! list.add_last(3);
//! list.add_last(1);
//! list.add_first(2);
//!
//! assert_eq!(list.find(1), Some(2)); // value 1 sits at position 2
//! assert_eq!(list.find_at(0), Some(2)); // position 0 holds value 2
//!
//! list.sort();
//! assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────┐
//!          ↓                                             (Ghost) Node N  │
//!    ╔═══════════╗         ╔═══════════╗                  ┌───────────┐  │
//!    ║   next    ║ ──────→ ║   next    ║ ──────→ ┄┄ ────→ │   next    │ ─┘
//!    ╟───────────╢         ╟───────────╢  Node 2, 3, ...  ├───────────┤
//! ┌─ ║   prev    ║ ←────── ║   prev    ║ ←────── ┄┄ ←──── │   prev    │
//! │  ╟───────────╢         ╟───────────╢                  ├───────────┤
//! │  ║   value   ║         ║   value   ║                  ┊(never read)┊
//! │  ╚═══════════╝         ╚═══════════╝                  └╌╌╌╌╌╌╌╌╌╌╌─┘
//! │      Node 0                Node 1                          ↑   ↑
//! └────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                    │
//! ║   ghost   ║ ───────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains a pointer `ghost` that owns the ghost node, and a
//! length field `len` counting the stored elements.
//!
//! Each node of the list is allocated on the heap and contains:
//! - the `next` pointer that points to the next node (or the ghost node if it
//!   is the last element in the list);
//! - the `prev` pointer that points to the previous node (or the ghost node
//!   if it is the first element in the list);
//! - the stored [`Value`], which on the ghost node is never read.
//!
//! Initially, there is a ghost node in an empty list, of which the `next` and
//! `prev` pointers point to itself. As elements are inserted, `ghost.next`
//! points to the first element, and `ghost.prev` points to the last element
//! of the list.
//!
//! # Lookup Conventions
//!
//! Positions are zero-based, counting forward from the head. "Not found" and
//! "out of range" are reported as `None` rather than with an in-band
//! sentinel, so a stored `-1` is always distinguishable from a miss:
//!
//! ```
//! use chain_list::List;
//!
//! let mut list = List::new();
//! list.add_last(-1);
//!
//! assert_eq!(list.find_at(0), Some(-1)); // a genuinely stored -1
//! assert_eq!(list.find_at(1), None); // out of range
//! ```
//!
//! Likewise, [`first`](List::first) and [`last`](List::last) fail soft with
//! `None` on an empty list instead of leaving empty-list reads undefined.
//!
//! # Sorting and Merging
//!
//! [`List::sort`] splits the chain in half at node level, sorts both halves
//! recursively and merges them back. [`List::merge`] is the underlying merge
//! step: it drains two individually-sorted lists into a result list, taking
//! ties from the left input, so the sort is stable.
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let mut left = List::from_iter([0, 2, 4]);
//! let mut right = List::from_iter([1, 3]);
//! let mut result = List::new();
//!
//! List::merge(&mut left, &mut right, &mut result);
//!
//! assert!(left.is_empty() && right.is_empty());
//! assert_eq!(Vec::from_iter(result), vec![0, 1, 2, 3, 4]);
//! ```
//!
//! # Diagnostic Printing
//!
//! [`List::write_to`] writes one `Element <position> has value <value>` line
//! per element to any [`std::io::Write`] sink; [`List::print`] is the stdout
//! convenience wrapper.

#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::{List, Value};

pub mod list;

mod experiments;
