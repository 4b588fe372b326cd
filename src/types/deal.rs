use url::Url;

/// One product discount snapshot, as scraped from a collection page.
#[derive(Debug, Clone, PartialEq)]
pub struct Deal {
    pub id: u64,
    pub title: String,
    pub original_price: Option<f64>,
    pub current_price: Option<f64>,
    pub seller: String,
    pub path: String,
    pub available: bool,
}

impl Deal {
    fn prices(&self) -> Option<(f64, f64)> {
        match (self.original_price, self.current_price) {
            (Some(original), Some(current)) if original != 0.0 => Some((original, current)),
            _ => None,
        }
    }

    /// `original - current`, or `None` when a price is missing or the
    /// original price is zero.
    pub fn savings_amount(&self) -> Option<f64> {
        self.prices().map(|(original, current)| original - current)
    }

    /// `current / original`, with the same gaps as [`Deal::savings_amount`].
    pub fn savings_percentage(&self) -> Option<f64> {
        self.prices().map(|(original, current)| current / original)
    }

    /// Resolves `path` against the collection URL. Absolute paths are
    /// returned untouched by the join.
    pub fn product_url(&self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(&self.path)
    }
}
