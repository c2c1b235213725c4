// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::imp::Entry;
use crate::Bid;
use std::{iter::FusedIterator, slice, vec};

/// An iterator over the bids of a [`BidHashMap`] by shared reference.
/// Created by [`BidHashMap::iter`].
///
/// Buckets are visited in index order; within a bucket, the slot entry comes
/// first and then the chain in link order. The order therefore depends on the
/// bucket count and is not sorted by key.
///
/// [`BidHashMap`]: crate::BidHashMap
/// [`BidHashMap::iter`]: crate::BidHashMap::iter
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    buckets: slice::Iter<'a, Option<Entry>>,
    chain: Option<&'a Entry>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(buckets: &'a [Option<Entry>], len: usize) -> Self {
        Self { buckets: buckets.iter(), chain: None, remaining: len }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Bid;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain {
                self.chain = entry.next.as_deref();
                self.remaining -= 1;
                return Some(&entry.bid);
            }
            self.chain = self.buckets.next()?.as_ref();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for Iter<'_> {}

/// An iterator over the bids of a [`BidHashMap`] by value, in the same
/// bucket-then-chain order as [`Iter`]. Created by [`BidHashMap::into_iter`].
///
/// [`BidHashMap`]: crate::BidHashMap
/// [`BidHashMap::into_iter`]: crate::BidHashMap#impl-IntoIterator-for-BidHashMap
#[derive(Debug)]
pub struct IntoIter {
    buckets: vec::IntoIter<Option<Entry>>,
    chain: Option<Box<Entry>>,
    remaining: usize,
}

impl IntoIter {
    pub(super) fn new(buckets: Vec<Option<Entry>>, len: usize) -> Self {
        Self { buckets: buckets.into_iter(), chain: None, remaining: len }
    }
}

impl Iterator for IntoIter {
    type Item = Bid;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(mut node) = self.chain.take() {
                self.chain = node.next.take();
                self.remaining -= 1;
                return Some(node.bid);
            }
            if let Some(mut entry) = self.buckets.next()? {
                self.chain = entry.next.take();
                self.remaining -= 1;
                return Some(entry.bid);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl Drop for IntoIter {
    fn drop(&mut self) {
        // A partially consumed iterator may hold a live chain plus unvisited
        // buckets; unlink them front to back the same way the map's own Drop
        // does, not by per-node recursion.
        let mut next = self.chain.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
        for slot in &mut self.buckets {
            if let Some(mut entry) = slot {
                let mut next = entry.next.take();
                while let Some(mut node) = next {
                    next = node.next.take();
                }
            }
        }
    }
}

impl ExactSizeIterator for IntoIter {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for IntoIter {}
