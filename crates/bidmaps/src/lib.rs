// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory associative containers for bid records.
//!
//! This crate provides two independent, structurally parallel containers for
//! the same fixed-schema [`Bid`] record, each keyed on the identifier embedded
//! in the record itself:
//!
//! - [`BidOrdMap`]: an ordered map backed by an unbalanced binary search tree,
//!   keyed on the bid id under lexicographic string order. Supports insert,
//!   exact-key lookup, delete with in-order-successor promotion, and
//!   in/pre/post-order traversal.
//! - [`BidHashMap`]: a separate-chaining hash table with a bucket count fixed
//!   at construction, keyed on the numeric value of the bid id. Supports
//!   insert, lookup, remove, and full enumeration in bucket order.
//!
//! No data flows between the two; they share only the record shape and the
//! [`loader`] collaborator that produces validated records from a CSV file.
//!
//! # Example
//!
//! ```
//! use bidmaps::{Bid, BidOrdMap};
//!
//! let mut map = BidOrdMap::new();
//! map.insert(Bid::new("98109", "Baby grand piano", "Enterprise", 1350.0));
//! map.insert(Bid::new("97990", "Front loader", "General Fund", 12500.0));
//!
//! assert_eq!(map.get("98109").unwrap().title, "Baby grand piano");
//! assert!(map.get("90000").is_none());
//! ```
//!
//! # Limitations
//!
//! These containers are deliberately simple: the tree does not rebalance (a
//! sorted insertion order degrades lookups to O(n)), the hash table never
//! resizes, and neither container enforces id uniqueness. Both are
//! single-threaded; callers must not share a container across threads without
//! external synchronization.

#![warn(missing_docs)]

mod bid;
pub mod bid_hash_map;
pub mod bid_ord_map;
pub mod errors;
pub mod loader;

pub use bid::Bid;
pub use bid_hash_map::{BidHashMap, DEFAULT_BUCKET_COUNT};
pub use bid_ord_map::BidOrdMap;
pub use loader::{load_bids, load_bids_from_path, LoadStats};
