use dioxus::prelude::*;

use crate::{
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    util::version::{self, APP_NAME, APP_REPO_URL},
};

#[component]
pub fn SettingsPage() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut checking = use_signal(|| false);

    let version_label = version::version_label();

    let on_check_update = {
        let toasts = toasts.clone();
        move |_| {
            if checking() {
                return;
            }
            checking.set(true);
            let toasts = toasts.clone();
            spawn(async move {
                match version::check_for_update().await {
                    Ok(info) => {
                        let kind = if info.update_available() {
                            ToastKind::Warning
                        } else {
                            ToastKind::Success
                        };
                        push_toast(toasts.clone(), kind, info.to_string());
                    }
                    Err(err) => {
                        push_toast(
                            toasts.clone(),
                            ToastKind::Error,
                            format!("Update check failed: {err}"),
                        );
                    }
                }
                checking.set(false);
            });
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "About" }
                p { class: "mt-3 text-sm text-slate-300", "{APP_NAME} {version_label}" }
                p { class: "mt-1 text-sm text-slate-400",
                    "Suggests a sale price from your costs, marketplace fees, tax, and target margin, and shows what a discount does to the bottom line."
                }
                a {
                    href: APP_REPO_URL,
                    target: "_blank",
                    rel: "noreferrer",
                    class: "mt-3 inline-block text-xs font-semibold uppercase tracking-wide text-indigo-300 hover:text-indigo-100",
                    "Source on GitHub"
                }
            }

            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Updates" }
                p { class: "mt-2 text-sm text-slate-400", "Compares your version against the latest tagged release." }
                button {
                    class: "mt-3 rounded-lg border border-indigo-500/40 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-indigo-200 hover:bg-indigo-500/10 disabled:opacity-50",
                    disabled: checking(),
                    onclick: on_check_update,
                    if checking() { "Checking..." } else { "Check for Updates" }
                }
            }

            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6 text-sm text-slate-400",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Notes" }
                ul { class: "mt-3 list-disc space-y-1 pl-5",
                    li { "Fields accept digits and one decimal point; everything else is dropped as you type." }
                    li { "Empty or unparseable fields count as zero." }
                    li { "Fees and tax are charged on the discounted price, so discounts cut deeper than their face value." }
                    li { "Entered values are not saved between sessions." }
                }
            }
        }
    }
}
