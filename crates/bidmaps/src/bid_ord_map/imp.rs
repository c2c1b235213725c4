// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{IntoIter, Iter};
use crate::Bid;
use std::{fmt, mem};

#[derive(Debug)]
pub(super) struct Node {
    pub(super) bid: Bid,
    pub(super) left: Option<Box<Node>>,
    pub(super) right: Option<Box<Node>>,
}

impl Node {
    fn new(bid: Bid) -> Box<Node> {
        Box::new(Node { bid, left: None, right: None })
    }
}

/// An ordered map of bids keyed on `bid_id` under lexicographic string order.
///
/// Backed by an unbalanced binary search tree: every key in a node's left
/// subtree is strictly less than the node's key, and every key in the right
/// subtree is greater or equal. There is no rebalancing, so inserting keys in
/// sorted order degrades the tree to a list and lookups to O(n); all
/// operations are otherwise O(height).
///
/// Duplicate keys are not rejected or merged. A duplicate routes into the
/// right subtree on insert, and [`get`] stops at the first match on the walk
/// down from the root, so only the first-inserted record for a key is
/// reachable by lookup until it is removed. All duplicates still appear in
/// traversals.
///
/// [`get`]: BidOrdMap::get
#[derive(Default)]
pub struct BidOrdMap {
    root: Option<Box<Node>>,
    len: usize,
}

impl BidOrdMap {
    /// Creates a new, empty `BidOrdMap`.
    #[inline]
    pub fn new() -> Self {
        Self { root: None, len: 0 }
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

    /// Inserts a bid, allocating exactly one new node.
    ///
    /// Keys strictly less than a visited node route left, everything else
    /// routes right; duplicates are accepted (see the type-level docs).
    pub fn insert(&mut self, bid: Bid) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if bid.bid_id < node.bid.bid_id {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Node::new(bid));
        self.len += 1;
    }

    /// Returns true if the map contains the given `bid_id`.
    pub fn contains_key(&self, bid_id: &str) -> bool {
        self.get(bid_id).is_some()
    }

    /// Gets a reference to the bid with the given `bid_id`.
    ///
    /// Iterative descent from the root; the walk stops at the first exact
    /// match.
    pub fn get(&self, bid_id: &str) -> Option<&Bid> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if node.bid.bid_id == bid_id {
                return Some(&node.bid);
            }
            current = if bid_id < node.bid.bid_id.as_str() {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        None
    }

    /// Removes the bid with the given `bid_id`, returning it.
    ///
    /// A node with two children is not unlinked directly: the in-order
    /// successor's record (leftmost of the right subtree) is copied into it
    /// and the successor node is then removed from the right subtree by key.
    /// Returns `None` and leaves the tree untouched if the key is absent.
    pub fn remove(&mut self, bid_id: &str) -> Option<Bid> {
        let (root, removed) = Self::remove_node(self.root.take(), bid_id);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    fn remove_node(
        link: Option<Box<Node>>,
        bid_id: &str,
    ) -> (Option<Box<Node>>, Option<Bid>) {
        let Some(mut node) = link else {
            return (None, None);
        };

        if bid_id < node.bid.bid_id.as_str() {
            let (left, removed) = Self::remove_node(node.left.take(), bid_id);
            node.left = left;
            (Some(node), removed)
        } else if node.bid.bid_id.as_str() < bid_id {
            let (right, removed) = Self::remove_node(node.right.take(), bid_id);
            node.right = right;
            (Some(node), removed)
        } else if node.left.is_none() {
            let node = *node;
            (node.right, Some(node.bid))
        } else if node.right.is_none() {
            let node = *node;
            (node.left, Some(node.bid))
        } else {
            // Two children: copy the in-order successor's record into this
            // node, then remove the successor from the right subtree by its
            // key. The copy works on the record, not the node, so no link in
            // the right subtree is left dangling.
            let successor = {
                let mut current =
                    node.right.as_deref().expect("right child checked above");
                while let Some(left) = current.left.as_deref() {
                    current = left;
                }
                current.bid.clone()
            };
            let successor_id = successor.bid_id.clone();
            let removed = mem::replace(&mut node.bid, successor);

            // The successor's old node comes back out of this call; it is the
            // copy we just promoted, so it is dropped here.
            let (right, _promoted) =
                Self::remove_node(node.right.take(), &successor_id);
            node.right = right;
            (Some(node), Some(removed))
        }
    }

    /// Visits every bid in ascending key order (left subtree, node, right
    /// subtree).
    pub fn visit_in_order<F: FnMut(&Bid)>(&self, mut f: F) {
        Self::in_order(self.root.as_deref(), &mut f);
    }

    /// Visits every bid in pre-order (node, left subtree, right subtree).
    pub fn visit_pre_order<F: FnMut(&Bid)>(&self, mut f: F) {
        Self::pre_order(self.root.as_deref(), &mut f);
    }

    /// Visits every bid in post-order (left subtree, right subtree, node).
    pub fn visit_post_order<F: FnMut(&Bid)>(&self, mut f: F) {
        Self::post_order(self.root.as_deref(), &mut f);
    }

    fn in_order<F: FnMut(&Bid)>(node: Option<&Node>, f: &mut F) {
        if let Some(node) = node {
            Self::in_order(node.left.as_deref(), f);
            f(&node.bid);
            Self::in_order(node.right.as_deref(), f);
        }
    }

    fn pre_order<F: FnMut(&Bid)>(node: Option<&Node>, f: &mut F) {
        if let Some(node) = node {
            f(&node.bid);
            Self::pre_order(node.left.as_deref(), f);
            Self::pre_order(node.right.as_deref(), f);
        }
    }

    fn post_order<F: FnMut(&Bid)>(node: Option<&Node>, f: &mut F) {
        if let Some(node) = node {
            Self::post_order(node.left.as_deref(), f);
            Self::post_order(node.right.as_deref(), f);
            f(&node.bid);
        }
    }

    /// Iterates over the bids in ascending key order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref(), self.len)
    }
}

impl Drop for BidOrdMap {
    fn drop(&mut self) {
        // The derived drop releases nodes by recursion; a degenerate tree can
        // be as deep as the map is long, so tear down with an explicit stack
        // instead. Each node is detached from its children before release.
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Clone for BidOrdMap {
    fn clone(&self) -> Self {
        // Same depth concern as Drop: a derived clone recurses once per
        // node. Rebuild bottom-up with explicit stacks instead, preserving
        // the exact tree shape.
        enum Step<'a> {
            Visit(Option<&'a Node>),
            Build(&'a Node),
        }

        let mut steps = vec![Step::Visit(self.root.as_deref())];
        let mut built: Vec<Option<Box<Node>>> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(None) => built.push(None),
                Step::Visit(Some(node)) => {
                    steps.push(Step::Build(node));
                    steps.push(Step::Visit(node.right.as_deref()));
                    steps.push(Step::Visit(node.left.as_deref()));
                }
                Step::Build(node) => {
                    // Subtrees come back off the stack in reverse order.
                    let right = built.pop().expect("right subtree built");
                    let left = built.pop().expect("left subtree built");
                    built.push(Some(Box::new(Node {
                        bid: node.bid.clone(),
                        left,
                        right,
                    })));
                }
            }
        }

        let root = built.pop().expect("root built");
        Self { root, len: self.len }
    }
}

impl fmt::Debug for BidOrdMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter().map(|bid| (&bid.bid_id, bid))).finish()
    }
}

/// Two maps are equal if their in-order traversals match, duplicates
/// included.
impl PartialEq for BidOrdMap {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        self.iter().zip(other.iter()).all(|(bid1, bid2)| bid1 == bid2)
    }
}

impl<'a> IntoIterator for &'a BidOrdMap {
    type Item = &'a Bid;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for BidOrdMap {
    type Item = Bid;
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(mut self) -> Self::IntoIter {
        // The map's own Drop runs on an emptied tree afterwards.
        IntoIter::new(self.root.take(), self.len)
    }
}

impl FromIterator<Bid> for BidOrdMap {
    fn from_iter<I: IntoIterator<Item = Bid>>(iter: I) -> Self {
        let mut map = BidOrdMap::new();
        for bid in iter {
            map.insert(bid);
        }
        map
    }
}

impl Extend<Bid> for BidOrdMap {
    fn extend<I: IntoIterator<Item = Bid>>(&mut self, iter: I) {
        for bid in iter {
            self.insert(bid);
        }
    }
}
