use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::debug;

use crate::error::DealsError;
use crate::parser::parse_fragment;
use crate::types::Deal;

/// Product cards render their JSON into scripts carrying this class.
pub const FRAGMENT_SELECTOR: &str = "script.bc-sf-filter-product-script";

static FRAGMENTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(FRAGMENT_SELECTOR).expect("fragment selector is valid"));

/// Inner text of every product script on the page, in document order.
pub fn extract_fragments(body: &str) -> Vec<String> {
    let document = Html::parse_document(body);

    document
        .select(&FRAGMENTS)
        .map(|script| script.text().collect::<String>())
        .collect()
}

/// All deals on one listing page. A single bad fragment fails the page.
pub fn parse_page(body: &str) -> Result<Vec<Deal>, DealsError> {
    let fragments = extract_fragments(body);
    debug!("{} product fragments on page", fragments.len());

    let mut deals = Vec::with_capacity(fragments.len());
    for fragment in &fragments {
        if let Some(deal) = parse_fragment(fragment)? {
            deals.push(deal);
        }
    }

    Ok(deals)
}
