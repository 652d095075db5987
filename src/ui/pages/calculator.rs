//! The pricing screen: four entry fields, one rate fetch, one calculation.

use dioxus::prelude::*;

use crate::{
    domain::{AppState, PricingBreakdown},
    ui::{
        components::{
            kpi_card::KpiCard,
            profit_badge::ProfitBadge,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::format::format_amount,
};

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let rate_request = use_context::<Signal<Option<String>>>();

    let is_fetching = state.with(|st| st.is_fetching_rate);
    let rate = state.with(|st| st.rate.clone());
    let fetch_error = state.with(|st| st.fetch_error.clone());
    let breakdown = state.with(|st| st.breakdown);
    let can_calculate = rate.is_some();

    let on_fetch_rate = {
        let mut rate_request = rate_request.clone();
        move |_| {
            rate_request.set(Some("USD".to_string()));
        }
    };

    let on_calculate = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            if !state.with(|st| st.can_calculate()) {
                push_toast(toasts.clone(), ToastKind::Warning, "Fetch the USD rate first.");
                return;
            }
            state.with_mut(|st| st.calculate());
        }
    };

    let fetch_label = if is_fetching { "Fetching rate..." } else { "Fetch rate" };
    let fetch_class = if is_fetching {
        format!("{} busy-pulse", theme::BTN_SECONDARY)
    } else {
        theme::BTN_SECONDARY.to_string()
    };

    rsx! {
        div { class: "space-y-8",
            section { class: "{theme::PANEL} p-6",
                h2 { class: "{theme::SECTION_TITLE}", "Listing Inputs" }
                div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                    NumberField {
                        label: "Product cost (USD)",
                        value: state.with(|st| st.product_cost_input.clone()),
                        oninput: {
                            let mut state = state.clone();
                            move |evt: FormEvent| state.with_mut(|st| st.product_cost_input = evt.value())
                        },
                    }
                    NumberField {
                        label: "Purchase VAT rate (%)",
                        value: state.with(|st| st.vat_percent_input.clone()),
                        oninput: {
                            let mut state = state.clone();
                            move |evt: FormEvent| state.with_mut(|st| st.vat_percent_input = evt.value())
                        },
                    }
                    NumberField {
                        label: "Commission rate (%)",
                        value: state.with(|st| st.commission_percent_input.clone()),
                        oninput: {
                            let mut state = state.clone();
                            move |evt: FormEvent| state.with_mut(|st| st.commission_percent_input = evt.value())
                        },
                    }
                    NumberField {
                        label: "Sale price (local)",
                        value: state.with(|st| st.sale_price_input.clone()),
                        oninput: {
                            let mut state = state.clone();
                            move |evt: FormEvent| state.with_mut(|st| st.sale_price_input = evt.value())
                        },
                    }
                }

                div { class: "mt-4 flex items-center gap-3",
                    button {
                        class: "{fetch_class}",
                        disabled: is_fetching,
                        onclick: on_fetch_rate,
                        "{fetch_label}"
                    }
                    button {
                        class: "{theme::BTN_PRIMARY}",
                        disabled: !can_calculate,
                        onclick: on_calculate,
                        "Calculate"
                    }
                }

                if let Some(quote) = rate {
                    p { class: "mt-3 {theme::TEXT_MUTED}",
                        "USD buying rate: "
                        span { class: "font-semibold text-slate-200 tabular-nums",
                            {format!("{:.4}", quote.forex_buying)}
                        }
                        if let Some(date) = quote.bulletin_date {
                            span { class: "text-xs text-slate-500", " (bulletin {date})" }
                        }
                    }
                } else {
                    p { class: "mt-3 text-xs text-slate-500",
                        "Fetch the central bank rate to enable the calculation."
                    }
                }

                if let Some(message) = fetch_error {
                    p { class: "mt-2 text-sm text-rose-300", "Error: {message}" }
                }
            }

            if let Some(breakdown) = breakdown {
                ResultsSection { breakdown }
            }
        }
    }
}

#[component]
fn ResultsSection(breakdown: PricingBreakdown) -> Element {
    let lines = [
        ("Shipping (incl. 10% VAT)", breakdown.shipping_total),
        ("Processing fee (incl. VAT)", breakdown.processing_total),
        ("Handling fee (incl. VAT)", breakdown.handling_total),
        ("Fixed deduction (1%)", breakdown.fixed_deduction),
        ("Service fee (16%)", breakdown.service_fee_gross),
        ("Net sale base", breakdown.net_sale_base),
    ];

    rsx! {
        section { class: "space-y-3",
            h2 { class: "{theme::SECTION_TITLE}", "Results" }
            div { class: "grid gap-4 sm:grid-cols-2",
                KpiCard {
                    title: "Cost in local currency",
                    value: format_amount(breakdown.cost_local),
                    description: Some("Product cost converted at the fetched rate".to_string()),
                }
                ProfitBadge { net_profit: breakdown.net_profit }
            }
            div { class: "rounded-xl border border-slate-800 bg-slate-900/40 overflow-hidden",
                ul { class: "divide-y divide-slate-800 text-sm",
                    for (label, amount) in lines {
                        li { class: "flex items-center justify-between px-4 py-2",
                            span { class: "text-slate-400", "{label}" }
                            span { class: "tabular-nums text-slate-200", "{format_amount(amount)}" }
                        }
                    }
                    li { class: "flex items-center justify-between px-4 py-2 bg-slate-900/60",
                        span { class: "font-semibold text-slate-300", "Total costs" }
                        span { class: "font-semibold tabular-nums text-slate-100",
                            "{format_amount(breakdown.total_costs)}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NumberField(label: &'static str, value: String, oninput: EventHandler<FormEvent>) -> Element {
    rsx! {
        div {
            label { class: "{theme::LABEL}", "{label}" }
            input {
                class: "{theme::INPUT}",
                inputmode: "decimal",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}
