//! Domain logic for the pricing screen lives here.

pub mod app_state;
pub mod entities;
pub mod pricing;

#[allow(unused_imports)]
pub use app_state::AppState;
#[allow(unused_imports)]
pub use entities::{PricingBreakdown, PricingInputs, RateQuote};
#[allow(unused_imports)]
pub use pricing::{compute_breakdown, parse_decimal_or_zero};
