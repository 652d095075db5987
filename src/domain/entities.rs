//! Value types shared between the rate fetcher, the calculator and the UI.

/// One quote taken from the central bank's daily bulletin.
#[derive(Clone, Debug, PartialEq)]
pub struct RateQuote {
    /// ISO code of the quoted currency ("USD").
    pub currency_code: String,
    /// Rate at which the bank buys one unit of the foreign currency,
    /// in local currency.
    pub forex_buying: f64,
    /// Bulletin date as printed in the feed header, when present.
    pub bulletin_date: Option<String>,
}

/// The five numeric inputs of the pricing formula, already normalized.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PricingInputs {
    pub product_cost_usd: f64,
    pub vat_percent: f64,
    /// Accepted as an input but not referenced by the current formula body.
    pub commission_percent: f64,
    /// Listing price in local currency.
    pub sale_price: f64,
    pub usd_buy_rate: f64,
}

/// Itemized output of the pricing formula.
///
/// `cost_local` and `net_profit` are the headline figures; the remaining
/// lines feed the on-screen fee breakdown.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PricingBreakdown {
    pub cost_local: f64,
    pub shipping_total: f64,
    pub processing_total: f64,
    pub handling_total: f64,
    pub fixed_deduction: f64,
    pub service_fee_gross: f64,
    pub net_sale_base: f64,
    pub total_costs: f64,
    pub net_profit: f64,
}
