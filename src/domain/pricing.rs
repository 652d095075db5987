//! The fixed marketplace fee chain.
//!
//! Pure arithmetic over five normalized inputs. No I/O, no error path:
//! anything unparseable has already been coerced to zero upstream.

use super::entities::{PricingBreakdown, PricingInputs};

// Defaults lifted from the seller's reference spreadsheet. Fixed in this
// scope; a future settings surface could expose them.
pub const SERVICE_FEE_PCT: f64 = 16.0;
pub const PROCESSING_FEE_BASE: f64 = 66.5;
pub const HANDLING_FEE_BASE: f64 = 8.5;
pub const SHIPPING_VAT_PCT: f64 = 10.0;
pub const FIXED_DEDUCTION_PCT: f64 = 1.0;

/// Normalizes free-text numeric input: trims, accepts a comma decimal
/// separator, and falls back to `0.0` for anything unparseable.
pub fn parse_decimal_or_zero(input: &str) -> f64 {
    input.trim().replace(',', ".").parse::<f64>().unwrap_or(0.0)
}

/// Runs the full fee chain and returns every line of it.
///
/// A VAT percent of -100 drives the `1 + vat/100` divisor to zero; the
/// resulting non-finite value propagates unchanged.
pub fn compute_breakdown(inputs: &PricingInputs) -> PricingBreakdown {
    let vat_factor = 1.0 + inputs.vat_percent / 100.0;

    let cost_local = inputs.product_cost_usd * inputs.usd_buy_rate;
    let shipping_vat = cost_local * (SHIPPING_VAT_PCT / 100.0);
    let shipping_total = cost_local + shipping_vat;

    let processing_vat = PROCESSING_FEE_BASE * (inputs.vat_percent / 100.0);
    let processing_total = PROCESSING_FEE_BASE + processing_vat;

    let handling_vat = HANDLING_FEE_BASE * (inputs.vat_percent / 100.0);
    let handling_total = HANDLING_FEE_BASE + handling_vat;

    let fixed_deduction = inputs.sale_price * (FIXED_DEDUCTION_PCT / 100.0);

    let service_fee_gross = inputs.sale_price * (SERVICE_FEE_PCT / 100.0);
    let service_fee_vat = service_fee_gross - service_fee_gross / vat_factor;

    // VAT already contained in the sale price, minus the VAT portions of
    // the fee lines above.
    let sale_vat_amount = inputs.sale_price - inputs.sale_price / vat_factor;
    let total_vat_portion = shipping_vat + processing_vat + handling_vat + service_fee_vat;
    let net_sale_base = sale_vat_amount - total_vat_portion;

    let total_costs = shipping_total
        + processing_total
        + handling_total
        + fixed_deduction
        + service_fee_gross
        + net_sale_base;

    PricingBreakdown {
        cost_local,
        shipping_total,
        processing_total,
        handling_total,
        fixed_deduction,
        service_fee_gross,
        net_sale_base,
        total_costs,
        net_profit: inputs.sale_price - total_costs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(
        product_cost_usd: f64,
        vat_percent: f64,
        sale_price: f64,
        usd_buy_rate: f64,
    ) -> PricingInputs {
        PricingInputs {
            product_cost_usd,
            vat_percent,
            commission_percent: 0.0,
            sale_price,
            usd_buy_rate,
        }
    }

    #[test]
    fn parse_accepts_comma_and_period_separators() {
        assert_eq!(parse_decimal_or_zero("12,5"), 12.5);
        assert_eq!(parse_decimal_or_zero("12.5"), 12.5);
        assert_eq!(parse_decimal_or_zero("  34,25 "), 34.25);
        assert_eq!(parse_decimal_or_zero("1000"), 1000.0);
    }

    #[test]
    fn parse_falls_back_to_zero_instead_of_failing() {
        assert_eq!(parse_decimal_or_zero(""), 0.0);
        assert_eq!(parse_decimal_or_zero("   "), 0.0);
        assert_eq!(parse_decimal_or_zero("abc"), 0.0);
        assert_eq!(parse_decimal_or_zero("12,5,0"), 0.0);
    }

    #[test]
    fn cost_local_is_product_cost_times_rate() {
        let breakdown = compute_breakdown(&inputs(10.0, 20.0, 1000.0, 30.0));
        assert!((breakdown.cost_local - 300.0).abs() < 1e-9);
    }

    #[test]
    fn golden_net_profit() {
        // Regression value for cost=10, vat=20, sale=1000, rate=30,
        // computed once from the full fee chain.
        let breakdown = compute_breakdown(&inputs(10.0, 20.0, 1000.0, 30.0));
        assert!((breakdown.total_costs - 685.0).abs() < 1e-6);
        assert!((breakdown.net_profit - 315.0).abs() < 1e-6);
    }

    #[test]
    fn commission_percent_does_not_change_the_result() {
        let base = inputs(10.0, 20.0, 1000.0, 30.0);
        let mut with_commission = base;
        with_commission.commission_percent = 12.0;
        assert_eq!(compute_breakdown(&with_commission), compute_breakdown(&base));
    }

    #[test]
    fn vat_of_minus_100_propagates_non_finite() {
        let breakdown = compute_breakdown(&inputs(10.0, -100.0, 1000.0, 30.0));
        assert!(!breakdown.net_profit.is_finite());
        // The rate conversion itself is unaffected.
        assert!((breakdown.cost_local - 300.0).abs() < 1e-9);
    }

    #[test]
    fn zeroed_inputs_cost_only_the_fixed_bases() {
        let breakdown = compute_breakdown(&inputs(0.0, 0.0, 0.0, 30.0));
        assert_eq!(breakdown.cost_local, 0.0);
        assert!((breakdown.total_costs - (PROCESSING_FEE_BASE + HANDLING_FEE_BASE)).abs() < 1e-9);
        assert!((breakdown.net_profit + PROCESSING_FEE_BASE + HANDLING_FEE_BASE).abs() < 1e-9);
    }
}
