//! This crate loads procurement bids from a delimited text file and sorts them by title with one
//! of three in place algorithms, so that their running times can be compared.
//!
//! A bid file is a CSV or similar file where every row carries a title, a bid id, an amount
//! formatted as currency and a fund at fixed positions. The default layout follows the monthly
//! sales export of an auction site, see [column::Columns].
//!
//! # Examples
//! ```
//! use std::path::PathBuf;
//! use std::time::Instant;
//! use bid_sort::load::Loader;
//! use bid_sort::sort::{is_sorted, Algorithm};
//!
//! fn compare(input: PathBuf) -> Result<(), anyhow::Error> {
//!     let bids = Loader::new(input).load()?;
//!     for algorithm in Algorithm::all() {
//!         let mut copy = bids.clone();
//!         let start = Instant::now();
//!         algorithm.sort(&mut copy);
//!         println!("{}: {:?}", algorithm, start.elapsed());
//!         assert!(is_sorted(&copy));
//!     }
//!     Ok(())
//! }
//! ```

pub(crate) mod config;

pub mod bid;
pub mod column;
pub mod currency;
pub mod error;
pub mod load;
pub mod shell;
pub mod sort;
