//! Screen state owned by the presentation layer.
//!
//! The fetch and the calculator stay pure; every mutation funnels through
//! the methods here so the UI re-renders from one place. The rate slot has
//! exactly one writer (fetch completion) and one reader (the calculator),
//! sequenced by user action.

use super::entities::{PricingBreakdown, PricingInputs, RateQuote};
use super::pricing::{compute_breakdown, parse_decimal_or_zero};

#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Raw entry fields, kept as typed text until a calculation runs.
    pub product_cost_input: String,
    pub vat_percent_input: String,
    pub commission_percent_input: String,
    pub sale_price_input: String,
    /// Most recently fetched quote; unset until a fetch succeeds.
    pub rate: Option<RateQuote>,
    pub breakdown: Option<PricingBreakdown>,
    pub is_fetching_rate: bool,
    /// Last rate-retrieval failure, already rendered as a user message.
    pub fetch_error: Option<String>,
}

impl AppState {
    /// Marks a fetch as started. Returns `false` without touching anything
    /// when one is already outstanding.
    pub fn start_rate_fetch(&mut self) -> bool {
        if self.is_fetching_rate {
            return false;
        }
        self.is_fetching_rate = true;
        self.fetch_error = None;
        true
    }

    /// Records the fetch outcome. The busy flag is cleared on success and
    /// failure alike; a failure leaves any previously fetched quote in place.
    pub fn finish_rate_fetch(&mut self, result: Result<RateQuote, String>) {
        match result {
            Ok(quote) => {
                self.rate = Some(quote);
                self.fetch_error = None;
            }
            Err(message) => self.fetch_error = Some(message),
        }
        self.is_fetching_rate = false;
    }

    pub fn can_calculate(&self) -> bool {
        self.rate.is_some()
    }

    /// Normalized formula inputs from the raw entry fields plus the quote.
    /// `None` until a rate has been fetched.
    pub fn pricing_inputs(&self) -> Option<PricingInputs> {
        let rate = self.rate.as_ref()?;
        Some(PricingInputs {
            product_cost_usd: parse_decimal_or_zero(&self.product_cost_input),
            vat_percent: parse_decimal_or_zero(&self.vat_percent_input),
            commission_percent: parse_decimal_or_zero(&self.commission_percent_input),
            sale_price: parse_decimal_or_zero(&self.sale_price_input),
            usd_buy_rate: rate.forex_buying,
        })
    }

    /// Runs the fee chain against the current inputs. Guaranteed no-op while
    /// no rate has been fetched.
    pub fn calculate(&mut self) {
        if let Some(inputs) = self.pricing_inputs() {
            self.breakdown = Some(compute_breakdown(&inputs));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(rate: f64) -> RateQuote {
        RateQuote {
            currency_code: "USD".to_string(),
            forex_buying: rate,
            bulletin_date: None,
        }
    }

    #[test]
    fn calculate_is_a_noop_without_a_rate() {
        let mut state = AppState {
            product_cost_input: "10".to_string(),
            sale_price_input: "1000".to_string(),
            ..AppState::default()
        };
        assert!(!state.can_calculate());
        state.calculate();
        assert!(state.breakdown.is_none());
    }

    #[test]
    fn second_fetch_start_is_rejected_while_in_flight() {
        let mut state = AppState::default();
        assert!(state.start_rate_fetch());
        assert!(!state.start_rate_fetch());
        assert!(state.is_fetching_rate);
    }

    #[test]
    fn failed_fetch_clears_busy_flag_and_leaves_rate_unset() {
        let mut state = AppState::default();
        assert!(state.start_rate_fetch());
        state.finish_rate_fetch(Err("HTTP 503".to_string()));
        assert!(!state.is_fetching_rate);
        assert!(state.rate.is_none());
        assert_eq!(state.fetch_error.as_deref(), Some("HTTP 503"));
    }

    #[test]
    fn successful_fetch_enables_the_calculator() {
        let mut state = AppState {
            product_cost_input: "10".to_string(),
            vat_percent_input: "20".to_string(),
            sale_price_input: "1000".to_string(),
            ..AppState::default()
        };
        assert!(state.start_rate_fetch());
        state.finish_rate_fetch(Ok(quote(30.0)));
        assert!(!state.is_fetching_rate);
        assert!(state.can_calculate());

        state.calculate();
        let breakdown = state.breakdown.expect("breakdown after calculate");
        assert!((breakdown.cost_local - 300.0).abs() < 1e-9);
    }

    #[test]
    fn calculate_observes_the_latest_completed_fetch() {
        let mut state = AppState {
            product_cost_input: "10".to_string(),
            ..AppState::default()
        };
        state.start_rate_fetch();
        state.finish_rate_fetch(Ok(quote(30.0)));
        state.calculate();
        assert!((state.breakdown.unwrap().cost_local - 300.0).abs() < 1e-9);

        state.start_rate_fetch();
        state.finish_rate_fetch(Ok(quote(35.0)));
        state.calculate();
        assert!((state.breakdown.unwrap().cost_local - 350.0).abs() < 1e-9);
    }

    #[test]
    fn unparseable_entry_fields_are_coerced_to_zero() {
        let mut state = AppState {
            product_cost_input: "abc".to_string(),
            vat_percent_input: String::new(),
            sale_price_input: "1000".to_string(),
            ..AppState::default()
        };
        state.finish_rate_fetch(Ok(quote(30.0)));
        let inputs = state.pricing_inputs().unwrap();
        assert_eq!(inputs.product_cost_usd, 0.0);
        assert_eq!(inputs.vat_percent, 0.0);
        assert_eq!(inputs.sale_price, 1000.0);
    }
}
