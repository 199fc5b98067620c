mod common;
mod match_detail;
mod matchlist;
mod result;
mod stream;
mod thread;

pub use common::Scraped;
pub use match_detail::*;
pub use matchlist::*;
pub use result::*;
pub use stream::*;
pub use thread::*;
