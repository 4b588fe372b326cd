mod aggregator;
mod source;

pub use aggregator::DealsScraper;
pub use source::{CollectionSource, HttpCollection};
