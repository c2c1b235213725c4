// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// A bid record as stored by both containers.
///
/// The key is part of the value: `bid_id` is the identifier both maps key on.
/// Neither container enforces id uniqueness -- inserting a duplicate id
/// produces a second entry, per each container's documented routing rules.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bid {
    /// Identifier the containers key on. [`crate::BidHashMap`] additionally
    /// requires it to parse as `u32`.
    pub bid_id: String,
    /// Display title.
    pub title: String,
    /// Fund the bid draws against.
    pub fund: String,
    /// Monetary amount.
    pub amount: f64,
}

impl Bid {
    /// Creates a new bid record.
    pub fn new(
        bid_id: impl Into<String>,
        title: impl Into<String>,
        fund: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            bid_id: bid_id.into(),
            title: title.into(),
            fund: fund.into(),
            amount,
        }
    }
}
