// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An ordered map of bids backed by an unbalanced binary search tree.

pub(crate) mod imp;
mod iter;
#[cfg(feature = "serde")]
mod serde_impls;

pub use imp::BidOrdMap;
pub use iter::{IntoIter, Iter};
