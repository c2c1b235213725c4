// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{Bid, BidOrdMap};
use serde::{
    de::{SeqAccess, Visitor},
    Deserialize, Serialize, Serializer,
};
use std::fmt;

/// A `BidOrdMap` serializes to the list of bids in ascending key order.
///
/// Serializing as a list of records rather than as a map works around the
/// lack of non-string keys in formats like JSON, and keeps duplicates intact.
impl Serialize for BidOrdMap {
    fn serialize<Ser: Serializer>(
        &self,
        serializer: Ser,
    ) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// The `Deserialize` impl for `BidOrdMap` reads a list of bids and rebuilds
/// the tree by inserting each one in sequence order.
impl<'de> Deserialize<'de> for BidOrdMap {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SeqVisitor)
    }
}

struct SeqVisitor;

impl<'de> Visitor<'de> for SeqVisitor {
    type Value = BidOrdMap;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of bids representing a BidOrdMap")
    }

    fn visit_seq<Access>(
        self,
        mut seq: Access,
    ) -> Result<Self::Value, Access::Error>
    where
        Access: SeqAccess<'de>,
    {
        let mut map = BidOrdMap::new();
        while let Some(bid) = seq.next_element::<Bid>()? {
            map.insert(bid);
        }
        Ok(map)
    }
}
