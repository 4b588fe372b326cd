use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::DealsError;
use crate::types::Deal;

// Shape of the product JSON the storefront's filter app embeds per card.
// Anything not listed here is ignored.
#[derive(Debug, Deserialize)]
struct ProductFragment {
    id: u64,
    title: String,
    vendor: String,
    url: String,
    available: Value,
    variants: Vec<VariantFragment>,
}

#[derive(Debug, Deserialize)]
struct VariantFragment {
    compare_at_price: RawPrice,
    price: RawPrice,
}

// Minor units, usually sent as a string. The key itself is required,
// the value may be null.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Text(String),
    Number(f64),
    Null,
}

impl RawPrice {
    fn to_major_units(&self) -> Result<Option<f64>, DealsError> {
        let minor = match self {
            RawPrice::Null => return Ok(None),
            RawPrice::Number(n) => *n,
            RawPrice::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| DealsError::InvalidPrice(s.clone()))?,
        };
        Ok(Some(minor / 100.0))
    }
}

impl Deal {
    /// Builds a deal from one decoded product object. Only the first
    /// variant's prices are looked at.
    pub fn from_json(value: Value) -> Result<Deal, DealsError> {
        if !value.is_object() {
            return Err(DealsError::NotAnObject);
        }

        let product: ProductFragment = serde_json::from_value(value)
            .map_err(|e| DealsError::SchemaMismatch(e.to_string()))?;

        let variant = product
            .variants
            .first()
            .ok_or_else(|| DealsError::SchemaMismatch(String::from("`variants` is empty")))?;

        Ok(Deal {
            id: product.id,
            title: product.title,
            original_price: variant.compare_at_price.to_major_units()?,
            current_price: variant.price.to_major_units()?,
            seller: product.vendor,
            path: decode_entities(&product.url),
            available: is_truthy(&product.available),
        })
    }
}

/// Parses one fragment's text. `Ok(None)` means the product carries no
/// real discount and is left out of the listing.
pub fn parse_fragment(text: &str) -> Result<Option<Deal>, DealsError> {
    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        // Cards the storefront marks as undiscounted are skipped even when
        // their JSON does not parse.
        Err(_) if text.contains(NO_DISCOUNT_MARKER) => {
            debug!("Skipping unparsable product without a compare-at price");
            return Ok(None);
        }
        Err(e) => return Err(DealsError::MalformedResponse(format!("product fragment: {e}"))),
    };

    if has_no_discount(&value) {
        debug!("Skipping product without a compare-at price");
        return Ok(None);
    }

    Deal::from_json(value).map(Some)
}

const NO_DISCOUNT_MARKER: &str = r#""compare_at_price_min": 0,"#;

fn has_no_discount(value: &Value) -> bool {
    value
        .get("compare_at_price_min")
        .and_then(Value::as_f64)
        .is_some_and(|min| min == 0.0)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

// Product urls come with entities still encoded (`&amp;` in query strings).
fn decode_entities(raw: &str) -> String {
    html_escape::decode_html_entities(raw).into_owned()
}
