use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;

/// Fallback view for unmatched paths.
#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "mx-auto max-w-xl py-10 text-center space-y-3",
            p { class: "text-5xl font-semibold text-slate-200", "404" }
            h1 { class: "text-xl font-semibold text-slate-300", "Page introuvable" }
            p { class: "text-sm {theme::TEXT_MUTED}", "Aucune page ne correspond à {path}." }
            div { class: "mt-6",
                Link {
                    class: "{theme::BTN_PRIMARY}",
                    to: Route::CuttingDays {},
                    "Retour aux journées de découpe"
                }
            }
        }
    }
}
