use chrono::NaiveDate;

/// Ticker identifier for a traded asset
pub type Ticker = String;

/// Order quantity in whole units
/// Validated as strictly positive when an `OrderIntent` is built
pub type Quantity = u64;

/// Trading day key for daily price history
pub type TradeDate = NaiveDate;
