use dioxus::prelude::*;

use crate::util::format::format_amount;

/// Headline card for the net profit figure, tinted by its sign.
#[component]
pub fn ProfitBadge(net_profit: f64) -> Element {
    let (label, tone) = if !net_profit.is_finite() {
        ("Undefined", "border-amber-500/40 bg-amber-500/10 text-amber-100")
    } else if net_profit >= 0.0 {
        (
            "Profit",
            "border-emerald-500/40 bg-emerald-500/10 text-emerald-200 profit-glow",
        )
    } else {
        (
            "Loss",
            "border-rose-500/40 bg-rose-500/10 text-rose-200 loss-glow",
        )
    };

    rsx! {
        div { class: "rounded-xl border px-4 py-3 {tone}",
            div { class: "flex items-center justify-between",
                span { class: "text-xs font-semibold uppercase tracking-wide", "Net profit" }
                span { class: "text-xs font-semibold uppercase", "{label}" }
            }
            p { class: "mt-2 text-2xl font-semibold tabular-nums", "{format_amount(net_profit)}" }
        }
    }
}
