use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::error::DealsError;

#[derive(Debug, Deserialize)]
struct CollectionDocument {
    collection: CollectionMetadata,
}

/// The part of `<collection>.json` we care about.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionMetadata {
    pub updated_at: String,
}

impl CollectionMetadata {
    pub fn updated_date(&self) -> Result<DateTime<FixedOffset>, DealsError> {
        DateTime::parse_from_rfc3339(&self.updated_at).map_err(|e| {
            DealsError::MalformedResponse(format!(
                "collection.updated_at {:?}: {e}",
                self.updated_at
            ))
        })
    }
}

pub fn parse_collection_metadata(body: &str) -> Result<CollectionMetadata, DealsError> {
    serde_json::from_str::<CollectionDocument>(body)
        .map(|doc| doc.collection)
        .map_err(|e| DealsError::MalformedResponse(format!("collection metadata: {e}")))
}

/// Timestamp of the last collection update.
pub fn parse_updated_date(body: &str) -> Result<DateTime<FixedOffset>, DealsError> {
    parse_collection_metadata(body)?.updated_date()
}
