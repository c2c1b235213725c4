// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::imp::Node;
use crate::Bid;
use std::iter::FusedIterator;

/// An iterator over the bids of a [`BidOrdMap`] by shared reference, in
/// ascending key order. Created by [`BidOrdMap::iter`].
///
/// Traversal keeps an explicit stack of the unvisited left spine, so
/// iteration depth is bounded by the tree height without recursion.
///
/// [`BidOrdMap`]: crate::BidOrdMap
/// [`BidOrdMap::iter`]: crate::BidOrdMap::iter
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(root: Option<&'a Node>, len: usize) -> Self {
        let mut iter = Self { stack: Vec::new(), remaining: len };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Bid;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.bid)
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

/// An iterator over the bids of a [`BidOrdMap`] by value, in ascending key
/// order. Created by [`BidOrdMap::into_iter`].
///
/// [`BidOrdMap`]: crate::BidOrdMap
/// [`BidOrdMap::into_iter`]: crate::BidOrdMap#impl-IntoIterator-for-BidOrdMap
#[derive(Debug)]
pub struct IntoIter {
    stack: Vec<Box<Node>>,
    remaining: usize,
}

impl IntoIter {
    pub(super) fn new(root: Option<Box<Node>>, len: usize) -> Self {
        let mut iter = Self { stack: Vec::new(), remaining: len };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<Box<Node>>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl Iterator for IntoIter {
    type Item = Bid;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        let right = node.right.take();
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(node.bid)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl Drop for IntoIter {
    fn drop(&mut self) {
        // Stacked nodes still own their attached right subtrees, so dropping
        // a partially consumed iterator must drain them the same way the
        // map's own Drop does, not by per-node recursion.
        while let Some(mut node) = self.stack.pop() {
            self.stack.extend(node.left.take());
            self.stack.extend(node.right.take());
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
