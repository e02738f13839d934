use dioxus::prelude::*;

use crate::{
    domain::{compute_pricing, margin_indicator, Field, PricingForm},
    ui::{
        components::{
            kpi_card::KpiCard,
            margin_indicator::MarginIndicator,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        format::{format_currency, format_percentage},
    },
};

const COST_FIELDS: [Field; 4] = [
    Field::ProductCost,
    Field::ShippingCost,
    Field::MarketingCost,
    Field::OtherCosts,
];

const RATE_FIELDS: [Field; 6] = [
    Field::PlatformFeeRate,
    Field::PaymentFeeRate,
    Field::OtherFeeRate,
    Field::TaxRate,
    Field::ProfitMargin,
    Field::DiscountRate,
];

#[component]
pub fn CalculatorPage() -> Element {
    let form = use_context::<Signal<PricingForm>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    // Recomputed on every render, i.e. on every edit of any field.
    let inputs = form.with(|f| f.to_inputs());
    let result = compute_pricing(&inputs);
    let indicator = margin_indicator(&inputs, &result);

    let on_reset = {
        let mut form = form.clone();
        let toasts = toasts.clone();
        move |_| {
            form.with_mut(|f| f.clear());
            push_toast(toasts.clone(), ToastKind::Info, "Inputs cleared.");
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                KpiCard {
                    title: "Suggested Price".to_string(),
                    value: format_currency(result.suggested_price),
                    description: Some("Covers costs, fees, and target margin".to_string()),
                }
                KpiCard {
                    title: "Discounted Price".to_string(),
                    value: format_currency(result.discounted_price),
                    description: Some("What the buyer pays".to_string()),
                }
                KpiCard {
                    title: "Net Profit".to_string(),
                    value: format_currency(result.net_profit),
                    description: Some("After costs, fees, and tax".to_string()),
                }
                MarginIndicator { indicator, net_margin: result.net_margin }
            }

            section {
                class: "grid gap-6 lg:grid-cols-2",
                FieldGroup {
                    title: "Costs",
                    hint: "Absolute amounts per unit sold",
                    fields: COST_FIELDS.to_vec(),
                }
                FieldGroup {
                    title: "Rates",
                    hint: "Percentages of the sale price",
                    fields: RATE_FIELDS.to_vec(),
                }
            }

            section {
                class: "flex justify-end",
                button {
                    class: "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800",
                    onclick: on_reset,
                    "Reset"
                }
            }
        }
    }
}

#[component]
fn FieldGroup(title: &'static str, hint: &'static str, fields: Vec<Field>) -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
            div { class: "flex items-baseline justify-between",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "{title}" }
                span { class: "text-xs text-slate-600", "{hint}" }
            }
            div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                for field in fields {
                    FieldInput { field }
                }
            }
        }
    }
}

#[component]
fn FieldInput(field: Field) -> Element {
    let mut form = use_context::<Signal<PricingForm>>();
    let value = form.with(|f| f.get(field).to_string());
    let label = field.label();
    let placeholder = if field.is_rate() { "0" } else { "0.00" };

    rsx! {
        div {
            label { class: "block text-xs font-semibold uppercase text-slate-500", "{label}" }
            input {
                class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
                inputmode: "decimal",
                value: value,
                placeholder: placeholder,
                // set() sanitizes, so junk vanishes from the input as typed.
                oninput: move |evt| form.with_mut(|f| f.set(field, &evt.value())),
            }
        }
    }
}
