mod price_history;
mod returns;

pub use price_history::PriceHistory;
pub use returns::ReturnSeries;
