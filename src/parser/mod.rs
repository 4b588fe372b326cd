mod metadata;
mod page;
mod product;

pub use metadata::{parse_collection_metadata, parse_updated_date, CollectionMetadata};
pub use page::{extract_fragments, parse_page, FRAGMENT_SELECTOR};
pub use product::parse_fragment;
