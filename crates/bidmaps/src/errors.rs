// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for this crate.
//!
//! Absence is never an error here: lookups and removals on a missing key
//! return `None` and callers check for it explicitly. The types below cover
//! the two genuinely exceptional conditions, a non-numeric id handed to the
//! hash map and a failed CSV load.

use crate::Bid;
use std::{fmt, io};

/// A bid could not be inserted into [`crate::BidHashMap`] because its id does
/// not parse as an unsigned integer.
///
/// The rejected record is carried inside so the caller keeps ownership of it.
#[derive(Debug)]
pub struct NonNumericKey {
    rejected: Bid,
}

impl NonNumericKey {
    pub(crate) fn new(rejected: Bid) -> Self {
        Self { rejected }
    }

    /// Returns the rejected record.
    #[inline]
    pub fn bid(&self) -> &Bid {
        &self.rejected
    }

    /// Converts self into the rejected record.
    pub fn into_bid(self) -> Bid {
        self.rejected
    }
}

impl fmt::Display for NonNumericKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "bid id {:?} is not numeric and cannot be hashed",
            self.rejected.bid_id
        )
    }
}

impl std::error::Error for NonNumericKey {}

/// An error produced while loading bids from a CSV source.
///
/// Malformed *rows* are not errors -- the loader skips them and counts them in
/// [`crate::LoadStats`]. This type covers failures of the source itself.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    Io(io::Error),
    /// The CSV stream was structurally unreadable.
    Csv(csv::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Io(error) => write!(f, "I/O error reading bids: {error}"),
            LoadError::Csv(error) => write!(f, "CSV error reading bids: {error}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(error) => Some(error),
            LoadError::Csv(error) => Some(error),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(error: io::Error) -> Self {
        LoadError::Io(error)
    }
}

impl From<csv::Error> for LoadError {
    fn from(error: csv::Error) -> Self {
        LoadError::Csv(error)
    }
}
