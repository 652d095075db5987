use dioxus::prelude::*;

use crate::{
    ui::theme,
    util::version::{check_for_update, version_label, APP_NAME, APP_REPO_URL},
};

#[component]
pub fn AboutPage() -> Element {
    let update = use_resource(|| async move { check_for_update().await });

    let update_line = match &*update.read() {
        None => "Checking for updates...".to_string(),
        Some(Ok(info)) => info.to_string(),
        Some(Err(err)) => format!("Update check failed: {err}"),
    };

    rsx! {
        div { class: "space-y-8",
            section { class: "{theme::PANEL} p-6",
                h2 { class: "{theme::SECTION_TITLE}", "About" }
                p { class: "mt-3 {theme::TEXT_MUTED}",
                    "{APP_NAME} converts a product's USD cost at the central bank's "
                    "daily buying rate and walks the marketplace fee chain to a net "
                    "profit figure. Rates are fetched on demand; nothing is stored."
                }
                p { class: "mt-3 text-xs text-slate-500", "Version {version_label()}" }
                p { class: "mt-1 text-xs text-slate-500", "{update_line}" }
                a {
                    href: APP_REPO_URL,
                    target: "_blank",
                    rel: "noreferrer",
                    class: "mt-3 block text-xs font-semibold uppercase tracking-wide text-indigo-300 hover:text-indigo-100",
                    "Source repository"
                }
            }

            section { class: "{theme::PANEL} p-6 text-center",
                h2 { class: "{theme::SECTION_TITLE}", "Data Attribution" }
                p { class: "mt-3 {theme::TEXT_MUTED}",
                    "Exchange rates are read from the daily bulletin published by the "
                    "Central Bank of the Republic of Türkiye (TCMB)."
                }
                a {
                    href: "https://www.tcmb.gov.tr/kurlar/today.xml",
                    target: "_blank",
                    rel: "noreferrer",
                    class: "mt-2 block text-xs text-slate-500 hover:text-slate-200",
                    "tcmb.gov.tr/kurlar/today.xml"
                }
            }
        }
    }
}
