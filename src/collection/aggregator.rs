use tracing::{info, instrument};

use crate::collection::CollectionSource;
use crate::error::DealsError;
use crate::parser::{parse_page, parse_updated_date};
use crate::types::DailyDeals;

/// Walks a collection page by page until it runs out of deals.
#[derive(Debug)]
pub struct DealsScraper<S> {
    source: S,
    max_pages: u32,
}

impl<S: CollectionSource> DealsScraper<S> {
    /// `max_pages` counts every page fetched, including the empty one
    /// that ends the listing.
    pub fn new(source: S, max_pages: u32) -> Self {
        Self { source, max_pages }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    #[instrument(level = "info", name = "Collecting daily deals", skip_all)]
    pub async fn daily_deals(&self) -> Result<DailyDeals, DealsError> {
        let mut deals = Vec::new();

        for page in 1..=self.max_pages {
            let body = self.source.fetch_page(page).await?;
            let page_deals = parse_page(&body)?;
            info!("Page {} has {} deals", page, page_deals.len());

            if page_deals.is_empty() {
                // The collection metadata does not change between pages.
                let metadata = self.source.fetch_metadata().await?;
                let daily_deals = DailyDeals::new(parse_updated_date(&metadata)?, deals);
                info!(
                    "Collected {} deals, valid until {}",
                    daily_deals.len(),
                    daily_deals.expiry_date()
                );
                return Ok(daily_deals);
            }

            deals.extend(page_deals);
        }

        Err(DealsError::PageLimitExceeded(self.max_pages))
    }
}
