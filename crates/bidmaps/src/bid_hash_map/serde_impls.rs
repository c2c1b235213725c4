// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{Bid, BidHashMap};
use serde::{
    de::{self, SeqAccess, Visitor},
    Deserialize, Serialize, Serializer,
};
use std::fmt;

/// A `BidHashMap` serializes to the list of bids in bucket-then-chain order.
///
/// Serializing as a list of records rather than as a map works around the
/// lack of non-string keys in formats like JSON, and keeps duplicates intact.
/// The bucket count itself is not serialized.
impl Serialize for BidHashMap {
    fn serialize<Ser: Serializer>(
        &self,
        serializer: Ser,
    ) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// The `Deserialize` impl for `BidHashMap` reads a list of bids and rebuilds
/// the table with the default bucket count, producing an error if any bid
/// carries a non-numeric id.
impl<'de> Deserialize<'de> for BidHashMap {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SeqVisitor)
    }
}

struct SeqVisitor;

impl<'de> Visitor<'de> for SeqVisitor {
    type Value = BidHashMap;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of bids representing a BidHashMap")
    }

    fn visit_seq<Access>(
        self,
        mut seq: Access,
    ) -> Result<Self::Value, Access::Error>
    where
        Access: SeqAccess<'de>,
    {
        let mut map = BidHashMap::new();
        while let Some(bid) = seq.next_element::<Bid>()? {
            map.insert(bid).map_err(de::Error::custom)?;
        }
        Ok(map)
    }
}
