use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{self, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let update_check = use_resource(|| async { version::check_for_update().await.ok() });
    let update_notice = update_check
        .read()
        .as_ref()
        .and_then(|result| result.as_ref().map(|info| info.to_string()));

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
                div { class: "mx-auto grid max-w-6xl grid-cols-[1fr_auto_1fr] items-center gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "🔪" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight text-slate-200", "{APP_NAME}" }
                            p { class: "text-xs text-slate-500 italic", "Journées de découpe et commandes" }
                        }
                    }
                    div {}
                    nav { class: "flex gap-2 text-sm justify-end",
                        NavButton {
                            active: matches!(current_route, Route::CuttingDays {}),
                            onclick: move |_| { nav.push(Route::CuttingDays {}); },
                            label: "📅 Journées",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Orders {}),
                            onclick: move |_| { nav.push(Route::Orders {}); },
                            label: "🧾 Commandes",
                        }
                    }
                }
            }
            main {
                class: "mx-auto max-w-6xl px-6 py-6",
                {children}
            }
            footer {
                class: "border-t border-slate-900/60 px-6 py-4",
                div { class: "mx-auto flex max-w-6xl items-center justify-between text-xs {theme::TEXT_MUTED}",
                    span { {version::version_label()} }
                    if let Some(notice) = update_notice {
                        span { "{notice}" }
                    }
                }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<MouseEvent>, label: String) -> Element {
    let class = if active {
        theme::NAV_ACTIVE
    } else {
        theme::NAV_INACTIVE
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
