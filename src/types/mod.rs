mod daily_deals;
mod deal;

pub use daily_deals::DailyDeals;
pub use deal::Deal;
