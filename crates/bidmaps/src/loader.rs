// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loads bid records from a delimited sales-export file.
//!
//! The export has a fixed column layout: title in column 0, bid id in column
//! 1, a currency-formatted amount ("$1,234.56") in column 4, and the fund in
//! column 8. The loader hands each well-formed record to a caller-supplied
//! sink, typically a closure inserting into one of the containers:
//!
//! ```no_run
//! use bidmaps::{load_bids_from_path, BidOrdMap};
//!
//! let mut map = BidOrdMap::new();
//! let stats = load_bids_from_path("eBid_Monthly_Sales.csv", |bid| {
//!     map.insert(bid);
//! })?;
//! println!("{} bids loaded, {} rows skipped", stats.loaded, stats.skipped);
//! # Ok::<(), bidmaps::errors::LoadError>(())
//! ```
//!
//! Rows that are too short or carry an unparsable amount are skipped and
//! counted, not fatal; only failures of the source itself abort the load.

use crate::{errors::LoadError, Bid};
use std::{fs::File, io, path::Path};

const COL_TITLE: usize = 0;
const COL_ID: usize = 1;
const COL_AMOUNT: usize = 4;
const COL_FUND: usize = 8;

/// Counters reported by a completed load.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LoadStats {
    /// Rows parsed into a [`Bid`] and handed to the sink.
    pub loaded: usize,
    /// Malformed rows that were skipped.
    pub skipped: usize,
}

/// Reads bids from a CSV stream, calling `sink` once per well-formed record.
///
/// The first row is treated as a header and skipped.
pub fn load_bids<R: io::Read>(
    rdr: R,
    mut sink: impl FnMut(Bid),
) -> Result<LoadStats, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        // Row width varies in real exports; short rows are handled per-field
        // below rather than failing the whole load.
        .flexible(true)
        .from_reader(rdr);

    let mut stats = LoadStats::default();
    for record in reader.records() {
        let record = record?;
        match parse_row(&record) {
            Some(bid) => {
                sink(bid);
                stats.loaded += 1;
            }
            None => stats.skipped += 1,
        }
    }
    Ok(stats)
}

/// Reads bids from a CSV file on disk. See [`load_bids`].
pub fn load_bids_from_path(
    path: impl AsRef<Path>,
    sink: impl FnMut(Bid),
) -> Result<LoadStats, LoadError> {
    let file = File::open(path)?;
    load_bids(file, sink)
}

fn parse_row(record: &csv::StringRecord) -> Option<Bid> {
    let title = record.get(COL_TITLE)?;
    let bid_id = record.get(COL_ID)?;
    let amount = parse_amount(record.get(COL_AMOUNT)?)?;
    let fund = record.get(COL_FUND)?;
    Some(Bid::new(bid_id, title, fund, amount))
}

/// Strips currency formatting (`$`, thousands separators) before parsing.
fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String =
        raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    cleaned.trim().parse().ok()
}
