//! Scrape matches, results, streams, match pages and forum activity from
//! [HLTV.org](https://www.hltv.org) into typed records.

pub use client::HltvClient;
pub use error::{DecodeWarning, HltvError, Result};
pub use model::*;
pub use source::DocumentSource;

mod client;
pub mod decode;
mod error;
mod hltv_scraper;
pub mod model;
mod source;
