use url::Url;

use crate::types::{DailyDeals, Deal};

const ID_WIDTH: usize = 12;
const TITLE_WIDTH: usize = 64;
const SELLER_WIDTH: usize = 24;
const PRICE_WIDTH: usize = 10;

/// Which columns to print for each deal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub id: bool,
    pub title: bool,
    pub seller: bool,
    pub price: bool,
    pub sale_price: bool,
    pub url: bool,
}

fn price(value: Option<f64>) -> String {
    value.map_or_else(|| String::from("-"), |p| format!("{p:.2}"))
}

impl Columns {
    /// One line for `deal`, without a trailing newline. Nothing selected
    /// gives an empty line. The url column is last and unpadded.
    pub fn render(&self, deal: &Deal, base: &Url) -> String {
        let mut fields = Vec::new();

        if self.id {
            fields.push(format!("{:<ID_WIDTH$}", deal.id));
        }
        if self.title {
            fields.push(format!("{:<TITLE_WIDTH$}", deal.title));
        }
        if self.seller {
            fields.push(format!("{:<SELLER_WIDTH$}", deal.seller));
        }
        if self.price {
            fields.push(format!("{:<PRICE_WIDTH$}", price(deal.original_price)));
        }
        if self.sale_price {
            fields.push(format!("{:<PRICE_WIDTH$}", price(deal.current_price)));
        }
        if self.url {
            let link = deal
                .product_url(base)
                .map_or_else(|_| deal.path.clone(), |u| u.to_string());
            fields.push(link);
        }

        fields.join(" ")
    }
}

pub fn summary(daily_deals: &DailyDeals) -> String {
    format!(
        "{} deals, updated {}, expiring {}",
        daily_deals.len(),
        daily_deals.updated_date().to_rfc3339(),
        daily_deals.expiry_date().to_rfc3339()
    )
}
