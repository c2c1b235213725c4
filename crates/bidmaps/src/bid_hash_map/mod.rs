// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A separate-chaining hash map of bids with a fixed bucket count.

pub(crate) mod imp;
mod iter;
#[cfg(feature = "serde")]
mod serde_impls;

pub use imp::{BidHashMap, DEFAULT_BUCKET_COUNT};
pub use iter::{IntoIter, Iter};
