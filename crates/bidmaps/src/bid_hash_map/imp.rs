// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{IntoIter, Iter};
use crate::{errors::NonNumericKey, Bid};
use std::{fmt, mem};

/// Bucket count used by [`BidHashMap::new`].
pub const DEFAULT_BUCKET_COUNT: usize = 179;

/// One entry of a bucket. The first entry of a bucket lives inline in the
/// bucket array; collision entries are boxed chain nodes hanging off it.
#[derive(Debug)]
pub(super) struct Entry {
    pub(super) bid: Bid,
    pub(super) next: Option<Box<Entry>>,
}

/// A separate-chaining hash map of bids keyed on the numeric value of
/// `bid_id`.
///
/// The bucket array is sized at construction and never resized. A bid hashes
/// to bucket `id % bucket_count`; the first record stored in a bucket
/// occupies the slot inline, and further records that hash there are appended
/// at the tail of the bucket's chain in insertion order.
///
/// # Numeric keys
///
/// Hashing requires the identifier to parse as `u32`. [`insert`] makes the
/// precondition checked: a non-numeric id is rejected with
/// [`NonNumericKey`], which hands the record back. [`get`] and [`remove`]
/// treat a non-numeric key as absent, since nothing with such a key can have
/// been stored.
///
/// Duplicate ids are not detected: inserting an id twice appends a second
/// entry, and [`get`] returns the first match in slot-then-chain order.
///
/// [`insert`]: BidHashMap::insert
/// [`get`]: BidHashMap::get
/// [`remove`]: BidHashMap::remove
/// [`NonNumericKey`]: crate::errors::NonNumericKey
pub struct BidHashMap {
    buckets: Vec<Option<Entry>>,
    len: usize,
}

impl BidHashMap {
    /// Creates an empty map with [`DEFAULT_BUCKET_COUNT`] buckets.
    #[inline]
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Creates an empty map with the given number of buckets.
    ///
    /// The bucket count is fixed for the lifetime of the map. Fewer buckets
    /// mean longer chains, not failed inserts.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    pub fn with_buckets(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "bucket count must be nonzero");
        Self { buckets: (0..bucket_count).map(|_| None).collect(), len: 0 }
    }

    /// Returns the fixed number of buckets.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of bids in the map, counting duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    fn bucket_index(&self, bid_id: &str) -> Option<usize> {
        let key: u32 = bid_id.parse().ok()?;
        Some(key as usize % self.buckets.len())
    }

    /// Inserts a bid.
    ///
    /// An empty bucket stores the record inline with no allocation; a
    /// collision allocates one chain node and links it at the tail of the
    /// bucket's chain. Rejects the record if its id does not parse as `u32`.
    pub fn insert(&mut self, bid: Bid) -> Result<(), NonNumericKey> {
        let Some(index) = self.bucket_index(&bid.bid_id) else {
            return Err(NonNumericKey::new(bid));
        };

        let slot = &mut self.buckets[index];
        match slot {
            None => *slot = Some(Entry { bid, next: None }),
            Some(entry) => {
                let mut link = &mut entry.next;
                while let Some(node) = link {
                    link = &mut node.next;
                }
                *link = Some(Box::new(Entry { bid, next: None }));
            }
        }
        self.len += 1;
        Ok(())
    }

    /// Returns true if the map contains the given `bid_id`.
    pub fn contains_key(&self, bid_id: &str) -> bool {
        self.get(bid_id).is_some()
    }

    /// Gets a reference to the bid with the given `bid_id`.
    ///
    /// Walks the key's bucket slot-then-chain, comparing identifiers by
    /// string equality; the first match wins.
    pub fn get(&self, bid_id: &str) -> Option<&Bid> {
        let index = self.bucket_index(bid_id)?;
        let mut entry = self.buckets[index].as_ref()?;
        loop {
            if entry.bid.bid_id == bid_id {
                return Some(&entry.bid);
            }
            entry = entry.next.as_deref()?;
        }
    }

    /// Removes the first bid with the given `bid_id`, returning it.
    ///
    /// Removing the slot entry of a bucket with a chain promotes the first
    /// chain node into the slot by moving its payload, so the slot never
    /// refers to disposed storage. Returns `None` and leaves the bucket
    /// untouched if the key is absent.
    pub fn remove(&mut self, bid_id: &str) -> Option<Bid> {
        let index = self.bucket_index(bid_id)?;
        let slot = &mut self.buckets[index];

        let slot_matches =
            matches!(slot, Some(entry) if entry.bid.bid_id == bid_id);
        if slot_matches {
            let mut entry = slot.take().expect("slot checked occupied above");
            // Promote the head of the chain into the slot, if any.
            *slot = entry.next.take().map(|next| *next);
            self.len -= 1;
            return Some(entry.bid);
        }

        let entry = slot.as_mut()?;
        let mut link = &mut entry.next;
        loop {
            let found = match link.as_deref() {
                Some(node) => node.bid.bid_id == bid_id,
                None => return None,
            };
            if found {
                let mut node = link.take().expect("matching node checked above");
                *link = node.next.take();
                self.len -= 1;
                return Some(node.bid);
            }
            link = &mut link.as_mut().expect("node checked above").next;
        }
    }

    /// Iterates over every bid, walking buckets in index order and each
    /// bucket slot-then-chain in link order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.buckets, self.len)
    }
}

impl Clone for BidHashMap {
    fn clone(&self) -> Self {
        // A derived clone recurses down each chain, which aborts on a
        // pathological single-bucket table. Rebuild every chain front to
        // back instead, keeping link order.
        let buckets = self
            .buckets
            .iter()
            .map(|slot| {
                slot.as_ref().map(|entry| {
                    let mut cloned =
                        Entry { bid: entry.bid.clone(), next: None };
                    let mut tail = &mut cloned.next;
                    let mut source = entry.next.as_deref();
                    while let Some(node) = source {
                        *tail = Some(Box::new(Entry {
                            bid: node.bid.clone(),
                            next: None,
                        }));
                        tail = &mut tail.as_mut().expect("just linked").next;
                        source = node.next.as_deref();
                    }
                    cloned
                })
            })
            .collect();
        Self { buckets, len: self.len }
    }
}

impl Default for BidHashMap {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BidHashMap {
    fn drop(&mut self) {
        // A chain is a recursive Box list, so the derived drop would recurse
        // once per node; a table where everything collides into one bucket
        // would overflow the stack. Unlink each chain front to back instead.
        // Slot entries are stored by value in the bucket array and need no
        // separate disposal.
        for slot in &mut self.buckets {
            if let Some(entry) = slot {
                let mut next = entry.next.take();
                while let Some(mut node) = next {
                    next = node.next.take();
                }
            }
        }
    }
}

impl fmt::Debug for BidHashMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter().map(|bid| (&bid.bid_id, bid))).finish()
    }
}

impl<'a> IntoIterator for &'a BidHashMap {
    type Item = &'a Bid;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for BidHashMap {
    type Item = Bid;
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(mut self) -> Self::IntoIter {
        // The map's own Drop runs on an emptied bucket array afterwards.
        IntoIter::new(mem::take(&mut self.buckets), self.len)
    }
}
