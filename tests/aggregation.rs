use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration};
use daily_deals::collection::{CollectionSource, DealsScraper};
use daily_deals::DealsError;

const METADATA: &str = r#"{"collection": {"id": 261, "handle": "daily-deals",
    "title": "Daily Deals", "updated_at": "2024-03-01T00:00:07-05:00"}}"#;

fn card(id: u64, compare_at_price_min: u64) -> String {
    format!(
        r#"<div class="bc-sf-filter-product-item"><script type="application/json" class="bc-sf-filter-product-script">
        {{"id": {id}, "title": "Instructional {id}", "vendor": "BJJ Fanatics",
          "url": "/products/instructional-{id}", "available": true,
          "compare_at_price_min": {compare_at_price_min},
          "variants": [{{"compare_at_price": "19700", "price": "6700"}}]}}
        </script></div>"#
    )
}

fn page(cards: &[String]) -> String {
    format!("<html><body>{}</body></html>", cards.concat())
}

/// In-memory storefront. Pages not listed come back empty.
#[derive(Default)]
struct FakeCollection {
    pages: HashMap<u32, String>,
    metadata: Option<String>,
    fetched: Mutex<Vec<u32>>,
    metadata_calls: Mutex<u32>,
}

impl FakeCollection {
    fn with_page(mut self, number: u32, body: String) -> Self {
        self.pages.insert(number, body);
        self
    }

    fn with_metadata(mut self, body: &str) -> Self {
        self.metadata = Some(body.to_owned());
        self
    }

    fn fetched(&self) -> Vec<u32> {
        self.fetched.lock().unwrap().clone()
    }
}

impl CollectionSource for FakeCollection {
    async fn fetch_page(&self, page: u32) -> Result<String, DealsError> {
        self.fetched.lock().unwrap().push(page);
        Ok(self
            .pages
            .get(&page)
            .cloned()
            .unwrap_or_else(|| String::from("<html><body></body></html>")))
    }

    async fn fetch_metadata(&self) -> Result<String, DealsError> {
        *self.metadata_calls.lock().unwrap() += 1;
        self.metadata
            .clone()
            .ok_or_else(|| DealsError::MalformedResponse(String::from("no metadata")))
    }
}

#[tokio::test]
async fn stops_at_the_first_empty_page() {
    let source = FakeCollection::default()
        .with_page(1, page(&[card(1, 19700), card(2, 19700)]))
        .with_metadata(METADATA);
    let scraper = DealsScraper::new(source, 10);

    let deals = scraper.daily_deals().await.unwrap();

    assert_eq!(deals.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(scraper.source().fetched(), vec![1, 2]);
    assert_eq!(*scraper.source().metadata_calls.lock().unwrap(), 1);
}

#[tokio::test]
async fn keeps_page_then_document_order_without_dedup() {
    let source = FakeCollection::default()
        .with_page(1, page(&[card(5, 19700), card(3, 19700)]))
        .with_page(2, page(&[card(3, 19700), card(9, 0), card(4, 19700)]))
        .with_metadata(METADATA);
    let scraper = DealsScraper::new(source, 10);

    let deals = scraper.daily_deals().await.unwrap();

    assert_eq!(deals.iter().map(|d| d.id).collect::<Vec<_>>(), vec![5, 3, 3, 4]);
    assert_eq!(scraper.source().fetched(), vec![1, 2, 3]);
}

#[tokio::test]
async fn stamps_the_result_with_collection_metadata() {
    let source = FakeCollection::default()
        .with_page(1, page(&[card(1, 19700)]))
        .with_metadata(METADATA);

    let deals = DealsScraper::new(source, 10).daily_deals().await.unwrap();

    let updated = DateTime::parse_from_rfc3339("2024-03-01T00:00:07-05:00").unwrap();
    assert_eq!(deals.updated_date(), updated);
    assert_eq!(deals.expiry_date(), updated + Duration::hours(24));
}

#[tokio::test]
async fn a_page_of_only_non_discounted_products_ends_the_listing() {
    let source = FakeCollection::default()
        .with_page(1, page(&[card(1, 19700)]))
        .with_page(2, page(&[card(2, 0), card(3, 0)]))
        .with_page(3, page(&[card(4, 19700)]))
        .with_metadata(METADATA);
    let scraper = DealsScraper::new(source, 10);

    let deals = scraper.daily_deals().await.unwrap();

    assert_eq!(deals.len(), 1);
    assert_eq!(scraper.source().fetched(), vec![1, 2]);
}

#[tokio::test]
async fn empty_first_page_gives_an_empty_result() {
    let source = FakeCollection::default().with_metadata(METADATA);

    let deals = DealsScraper::new(source, 10).daily_deals().await.unwrap();

    assert!(deals.is_empty());
}

#[tokio::test]
async fn gives_up_when_no_empty_page_shows_up() {
    let mut source = FakeCollection::default().with_metadata(METADATA);
    for number in 1..=5 {
        source = source.with_page(number, page(&[card(u64::from(number), 19700)]));
    }
    let scraper = DealsScraper::new(source, 3);

    let result = scraper.daily_deals().await;

    assert!(matches!(result, Err(DealsError::PageLimitExceeded(3))));
    assert_eq!(scraper.source().fetched(), vec![1, 2, 3]);
    assert_eq!(*scraper.source().metadata_calls.lock().unwrap(), 0);
}

#[tokio::test]
async fn a_broken_fragment_aborts_the_run() {
    let broken = r#"<script class="bc-sf-filter-product-script">{"id": 7, "title": "No vendor"}</script>"#;
    let source = FakeCollection::default()
        .with_page(1, page(&[card(1, 19700)]))
        .with_page(2, broken.to_owned())
        .with_metadata(METADATA);
    let scraper = DealsScraper::new(source, 10);

    let result = scraper.daily_deals().await;

    assert!(matches!(result, Err(DealsError::SchemaMismatch(_))));
    assert_eq!(scraper.source().fetched(), vec![1, 2]);
}

#[tokio::test]
async fn missing_metadata_aborts_the_run() {
    let source = FakeCollection::default().with_page(1, page(&[card(1, 19700)]));

    let result = DealsScraper::new(source, 10).daily_deals().await;

    assert!(matches!(result, Err(DealsError::MalformedResponse(_))));
}
