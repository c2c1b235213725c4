// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::fixtures::{bid, ids, titled_bid};
use bidmaps::{Bid, BidOrdMap};
use proptest::prelude::*;
use test_strategy::proptest;

#[test]
fn empty_map() {
    let map = BidOrdMap::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.get("98109"), None);
    assert_eq!(map.iter().count(), 0);
}

#[test]
fn insert_then_get() {
    let mut map = BidOrdMap::new();
    for id in ["98109", "97990", "98223"] {
        map.insert(bid(id));
    }

    assert_eq!(map.len(), 3);
    for id in ["98109", "97990", "98223"] {
        assert!(map.contains_key(id));
        assert_eq!(map.get(id).unwrap().bid_id, id);
    }
    assert_eq!(map.get("98000"), None);
}

#[test]
fn in_order_traversal_is_sorted() {
    let mut map = BidOrdMap::new();
    for id in ["5", "3", "8", "1", "4"] {
        map.insert(bid(id));
    }

    let mut visited = Vec::new();
    map.visit_in_order(|bid| visited.push(bid.bid_id.clone()));
    assert_eq!(visited, ["1", "3", "4", "5", "8"]);

    // iter() follows the same order.
    assert_eq!(ids(&map), ["1", "3", "4", "5", "8"]);
}

#[test]
fn pre_and_post_order_traversals() {
    // Root 5, left subtree 3 with children 1 and 4, right child 8.
    let mut map = BidOrdMap::new();
    for id in ["5", "3", "8", "1", "4"] {
        map.insert(bid(id));
    }

    let mut pre = Vec::new();
    map.visit_pre_order(|bid| pre.push(bid.bid_id.clone()));
    assert_eq!(pre, ["5", "3", "1", "4", "8"]);

    let mut post = Vec::new();
    map.visit_post_order(|bid| post.push(bid.bid_id.clone()));
    assert_eq!(post, ["1", "4", "3", "8", "5"]);
}

#[test]
fn remove_two_children_promotes_successor() {
    let mut map = BidOrdMap::new();
    for id in ["5", "3", "8", "1", "4"] {
        map.insert(bid(id));
    }

    // "5" has two children; its in-order successor is "8" (leftmost of the
    // right subtree, which has no left child of its own).
    let removed = map.remove("5").unwrap();
    assert_eq!(removed.bid_id, "5");
    assert_eq!(map.len(), 4);
    assert_eq!(ids(&map), ["1", "3", "4", "8"]);
    assert_eq!(map.get("5"), None);
    assert!(map.contains_key("8"));
}

#[test]
fn remove_leaf_and_single_child_nodes() {
    let mut map = BidOrdMap::new();
    for id in ["5", "3", "8", "1", "4"] {
        map.insert(bid(id));
    }

    // "1" is a leaf.
    assert_eq!(map.remove("1").unwrap().bid_id, "1");
    assert_eq!(ids(&map), ["3", "4", "5", "8"]);

    // "3" now has only a right child ("4"), which gets spliced in.
    assert_eq!(map.remove("3").unwrap().bid_id, "3");
    assert_eq!(ids(&map), ["4", "5", "8"]);

    assert_eq!(map.len(), 3);
}

#[test]
fn remove_absent_key_is_a_no_op() {
    let mut map = BidOrdMap::new();
    for id in ["5", "3", "8"] {
        map.insert(bid(id));
    }

    assert_eq!(map.remove("7"), None);
    assert_eq!(map.len(), 3);
    assert_eq!(ids(&map), ["3", "5", "8"]);
    assert!(map.contains_key("5"));

    let mut empty = BidOrdMap::new();
    assert_eq!(empty.remove("7"), None);
}

#[test]
fn duplicate_keys_route_right() {
    let mut map = BidOrdMap::new();
    map.insert(titled_bid("7", "first"));
    map.insert(titled_bid("7", "second"));

    // Both entries are kept, but only the first-inserted one is reachable by
    // lookup.
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("7").unwrap().title, "first");
    assert_eq!(ids(&map), ["7", "7"]);

    // Removing by key takes the first match; the duplicate then becomes
    // reachable.
    assert_eq!(map.remove("7").unwrap().title, "first");
    assert_eq!(map.get("7").unwrap().title, "second");
    assert_eq!(map.len(), 1);
}

#[test]
fn sorted_insertion_still_works() {
    // Worst case shape: the tree degrades to a right-leaning list.
    let mut map = BidOrdMap::new();
    for id in ["1", "2", "3", "4", "5", "6"] {
        map.insert(bid(id));
    }

    assert_eq!(ids(&map), ["1", "2", "3", "4", "5", "6"]);
    assert_eq!(map.remove("1").unwrap().bid_id, "1");
    assert_eq!(map.remove("4").unwrap().bid_id, "4");
    assert_eq!(ids(&map), ["2", "3", "5", "6"]);
}

#[test]
fn into_iter_yields_owned_bids_in_order() {
    let mut map = BidOrdMap::new();
    for id in ["5", "3", "8"] {
        map.insert(bid(id));
    }

    let iter = map.into_iter();
    assert_eq!(iter.len(), 3);
    let owned: Vec<Bid> = iter.collect();
    assert_eq!(ids(&owned), ["3", "5", "8"]);
}

#[test]
fn debug_impl() {
    let mut map = BidOrdMap::new();
    map.insert(Bid::new("1", "t", "f", 1.0));
    assert_eq!(
        format!("{map:?}"),
        r#"{"1": Bid { bid_id: "1", title: "t", fund: "f", amount: 1.0 }}"#
    );
}

#[test]
fn degenerate_tree_drops_without_overflowing() {
    // Sorted insertion produces a list-shaped tree as deep as it is long;
    // teardown must not recurse per node.
    let mut map = BidOrdMap::new();
    for i in 0..20_000u32 {
        map.insert(bid(&format!("{i:05}")));
    }
    assert_eq!(map.len(), 20_000);
    drop(map);
}

#[test]
fn clone_is_deep_and_preserves_shape() {
    let mut map = BidOrdMap::new();
    for id in ["5", "3", "8", "1", "4"] {
        map.insert(bid(id));
    }

    let cloned = map.clone();
    assert_eq!(cloned, map);

    // The clone owns its own nodes and keeps the exact tree shape, not just
    // the key multiset.
    drop(map);
    assert_eq!(cloned.len(), 5);
    assert_eq!(ids(&cloned), ["1", "3", "4", "5", "8"]);
    let mut pre = Vec::new();
    cloned.visit_pre_order(|bid| pre.push(bid.bid_id.clone()));
    assert_eq!(pre, ["5", "3", "1", "4", "8"]);
}

#[test]
fn degenerate_tree_clones_without_overflowing() {
    // Cloning a list-shaped tree must not recurse per node any more than
    // dropping one does.
    let mut map = BidOrdMap::new();
    for i in 0..20_000u32 {
        map.insert(bid(&format!("{i:05}")));
    }

    let cloned = map.clone();
    drop(map);
    assert_eq!(cloned.len(), 20_000);
    assert_eq!(cloned.get("19999").unwrap().bid_id, "19999");
    assert_eq!(cloned.iter().count(), 20_000);
}

#[test]
fn partially_consumed_into_iter_drops_without_overflowing() {
    let mut map = BidOrdMap::new();
    for i in 0..20_000u32 {
        map.insert(bid(&format!("{i:05}")));
    }

    // The iterator still owns nearly the whole tree when it is dropped.
    let mut iter = map.into_iter();
    assert_eq!(iter.next().unwrap().bid_id, "00000");
    drop(iter);
}

#[proptest]
fn inserts_and_removes_match_naive_model(
    #[strategy(prop::collection::vec(0u8..32, 0..48))] inserts: Vec<u8>,
    #[strategy(prop::collection::vec(0u8..32, 0..48))] removals: Vec<u8>,
) {
    let mut map = BidOrdMap::new();
    let mut model: Vec<String> = Vec::new();

    for key in inserts {
        let id = key.to_string();
        map.insert(bid(&id));
        model.push(id);
    }

    for key in removals {
        let id = key.to_string();
        let removed = map.remove(&id);
        match model.iter().position(|m| *m == id) {
            Some(position) => {
                prop_assert_eq!(removed.unwrap().bid_id, id);
                model.remove(position);
            }
            None => prop_assert!(removed.is_none()),
        }
    }

    // The in-order traversal is always the sorted multiset of surviving keys.
    model.sort();
    let surviving: Vec<String> =
        map.iter().map(|bid| bid.bid_id.clone()).collect();
    prop_assert_eq!(&surviving, &model);
    prop_assert_eq!(map.len(), model.len());

    for id in &model {
        prop_assert!(map.contains_key(id));
    }
}
