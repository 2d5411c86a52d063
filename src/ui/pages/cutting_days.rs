use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{format_date, format_weight, parse_iso_date, remaining_capacity, summarize_day, CuttingDay},
    ui::{
        components::{
            kpi_card::KpiCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        hooks::use_cutting_days,
        theme,
    },
    util::generate_id,
};

#[component]
pub fn CuttingDaysPage() -> Element {
    let state = use_cutting_days();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut date_input = use_signal(String::new);
    let mut label_input = use_signal(String::new);
    let mut capacity_input = use_signal(String::new);

    let days = state.with(|st| {
        st.cutting_days_sorted()
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });
    let day_count = days.len();
    let unassigned = state.with(|st| st.unassigned_orders().len());

    let on_add = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let Some(date) = parse_iso_date(&date_input()) else {
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    "Choisissez une date valide pour la journée de découpe.",
                );
                return;
            };

            let capacity = match parse_capacity(&capacity_input()) {
                Ok(capacity) => capacity,
                Err(message) => {
                    push_toast(toasts.clone(), ToastKind::Error, message);
                    return;
                }
            };

            let label = {
                let trimmed = label_input().trim().to_string();
                if trimmed.is_empty() {
                    "Journée de découpe".to_string()
                } else {
                    trimmed
                }
            };

            let day = CuttingDay {
                id: generate_id("day"),
                date,
                label,
                capacity_grams: capacity,
                notes: None,
            };
            state.with_mut(|st| st.upsert_cutting_day(day));
            persist_user_state(&state, toasts.clone());

            date_input.set(String::new());
            label_input.set(String::new());
            capacity_input.set(String::new());
            push_toast(toasts.clone(), ToastKind::Success, "Journée de découpe créée.");
        }
    };

    rsx! {
        div { class: "space-y-8",
            div { class: "grid gap-4 sm:grid-cols-2",
                KpiCard {
                    title: "Journées planifiées",
                    value: day_count.to_string(),
                    description: None,
                }
                KpiCard {
                    title: "Commandes non assignées",
                    value: unassigned.to_string(),
                    description: Some("À répartir sur une journée".to_string()),
                }
            }

            section {
                class: "{theme::PANEL}",
                h2 { class: "{theme::PANEL_TITLE}", "Nouvelle journée" }
                div { class: "mt-4 grid gap-4 sm:grid-cols-3",
                    div {
                        label { class: "{theme::LABEL}", "Date" }
                        input {
                            class: "mt-1 w-full {theme::INPUT}",
                            r#type: "date",
                            value: date_input(),
                            oninput: move |evt| date_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::LABEL}", "Libellé" }
                        input {
                            class: "mt-1 w-full {theme::INPUT}",
                            placeholder: "Découpe bovine, matin...",
                            value: label_input(),
                            oninput: move |evt| label_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::LABEL}", "Capacité (g, optionnel)" }
                        input {
                            class: "mt-1 w-full {theme::INPUT}",
                            placeholder: "ex. 80000",
                            value: capacity_input(),
                            oninput: move |evt| capacity_input.set(evt.value()),
                        }
                    }
                }
                div { class: "mt-4",
                    button { class: "{theme::BTN_PRIMARY}", onclick: on_add, "Créer la journée" }
                }
            }

            section {
                class: "space-y-3",
                h2 { class: "{theme::PANEL_TITLE}", "Journées à venir" }
                if days.is_empty() {
                    p { class: "text-sm {theme::TEXT_MUTED}", "Aucune journée planifiée. Créez-en une ci-dessus." }
                }
                for day in days {
                    DayCard { day }
                }
            }
        }
    }
}

fn parse_capacity(input: &str) -> Result<Option<u32>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| "La capacité doit être un nombre de grammes.".to_string())
}

#[component]
fn DayCard(day: CuttingDay) -> Element {
    let state = use_cutting_days();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let summary = state.with(|st| summarize_day(st.orders_for_day(&day.id)));
    let capacity_note = remaining_capacity(&day, &summary).map(|left| {
        if left >= 0 {
            format!("Reste {}", format_weight(left as f64))
        } else {
            format!("Dépassement de {}", format_weight(-left as f64))
        }
    });

    let date_text = format_date(day.date);
    let weight_text = format_weight(summary.total_grams as f64);
    let day_id = day.id.clone();

    let on_remove = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let removed = state.with_mut(|st| st.remove_cutting_day(&day_id));
            if removed.is_some() {
                persist_user_state(&state, toasts.clone());
                push_toast(
                    toasts.clone(),
                    ToastKind::Info,
                    "Journée supprimée. Les commandes liées restent à assigner.",
                );
            }
        }
    };

    rsx! {
        div {
            class: "rounded-xl border border-slate-800 bg-slate-900/40 p-4 flex items-center justify-between gap-4 flex-wrap",
            div {
                p { class: "text-lg font-semibold text-slate-200", "{date_text}" }
                p { class: "text-sm text-slate-400", "{day.label}" }
            }
            div { class: "text-right",
                p { class: "text-sm text-slate-300",
                    "{summary.order_count} commande(s) · {weight_text}"
                }
                p { class: "text-xs {theme::TEXT_MUTED}",
                    if let Some(note) = capacity_note {
                        "{summary.open_count} en cours · {note}"
                    } else {
                        "{summary.open_count} en cours"
                    }
                }
            }
            button { class: "{theme::BTN_DANGER}", onclick: on_remove, "Supprimer" }
        }
    }
}
