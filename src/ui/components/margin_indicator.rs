use dioxus::prelude::*;

use crate::domain::{MarginIndicator as IndicatorState, MarginStatus};
use crate::ui::format::format_percentage;

#[component]
pub fn MarginIndicator(indicator: IndicatorState, net_margin: f64) -> Element {
    let (label, theme) = match indicator.status {
        MarginStatus::Green => (
            "On target",
            "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
        ),
        MarginStatus::Yellow => (
            "Below target",
            "border-amber-500/40 bg-amber-500/10 text-amber-200",
        ),
        MarginStatus::Red => ("Loss", "border-rose-500/40 bg-rose-500/10 text-rose-200"),
    };
    let margin_display = format_percentage(net_margin);

    rsx! {
        div {
            class: "rounded-xl border px-4 py-3 {theme}",
            div {
                class: "flex items-center justify-between",
                span { class: "text-xs font-semibold uppercase tracking-wide", "Margin Health" }
                span { class: "text-xs font-semibold uppercase", "{label}" }
            }
            p { class: "mt-2 text-2xl font-semibold", "{margin_display}" }
            p { class: "mt-1 text-xs opacity-80", "{indicator.rationale}" }
        }
    }
}
