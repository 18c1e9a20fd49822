mod order_action;
mod order_intent;
mod regime;

pub use order_action::OrderAction;
pub use order_intent::OrderIntent;
pub use regime::{Regime, RegimeLabel};
