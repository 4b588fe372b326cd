use chrono::{DateTime, Duration, FixedOffset};

use crate::types::Deal;

/// One aggregated snapshot of the collection for a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyDeals {
    updated_date: DateTime<FixedOffset>,
    expiry_date: DateTime<FixedOffset>,
    deals: Vec<Deal>,
}

impl DailyDeals {
    /// Deals rotate once a day.
    pub fn rotation() -> Duration {
        Duration::hours(24)
    }

    pub fn new(updated_date: DateTime<FixedOffset>, deals: Vec<Deal>) -> Self {
        Self {
            updated_date,
            expiry_date: updated_date + Self::rotation(),
            deals,
        }
    }

    pub fn updated_date(&self) -> DateTime<FixedOffset> {
        self.updated_date
    }

    pub fn expiry_date(&self) -> DateTime<FixedOffset> {
        self.expiry_date
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Deal> {
        self.deals.iter()
    }

    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }
}

impl<'a> IntoIterator for &'a DailyDeals {
    type Item = &'a Deal;
    type IntoIter = std::slice::Iter<'a, Deal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
