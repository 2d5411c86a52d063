use dioxus::prelude::*;

use crate::domain::{status_color, translate_status};

/// Status pill: French label on the status palette. Unknown codes show as-is
/// on the gray palette, so stale persisted data still renders.
#[component]
pub fn StatusBadge(status: String) -> Element {
    let label = translate_status(&status);
    let palette = status_color(&status);

    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {palette}",
            "{label}"
        }
    }
}
