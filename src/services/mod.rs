pub mod booking_link;
pub mod completion;
pub mod enrichment;
pub mod prompt;
pub mod recovery;
pub mod web_search;
