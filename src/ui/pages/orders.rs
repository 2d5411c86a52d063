use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{
        format_date, format_weight, order_totals, parse_iso_date, Order, OrderStatus,
    },
    ui::{
        components::{
            kpi_card::KpiCard,
            order_table::{OrderRow, OrderTable},
            toast::{push_toast, ToastKind, ToastMessage},
        },
        hooks::use_orders,
        theme,
    },
    util::generate_id,
};

const FILTER_ALL: &str = "all";

#[component]
pub fn OrdersPage() -> Element {
    let state = use_orders();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut customer_input = use_signal(String::new);
    let mut product_input = use_signal(String::new);
    let mut weight_input = use_signal(String::new);
    let mut date_input = use_signal(String::new);
    let mut day_select = use_signal(String::new);
    let mut status_filter = use_signal(|| FILTER_ALL.to_string());

    let day_options = state.with(|st| {
        st.cutting_days_sorted()
            .into_iter()
            .map(|day| (day.id.clone(), format!("{} · {}", format_date(day.date), day.label)))
            .collect::<Vec<_>>()
    });

    let totals = state.with(|st| order_totals(st.orders.values()));

    let filter = status_filter();
    let rows = state.with(|st| {
        st.orders_sorted()
            .into_iter()
            .filter(|order| filter == FILTER_ALL || order.status.code() == filter)
            .map(|order| {
                let day_label = order
                    .cutting_day_id
                    .as_deref()
                    .and_then(|id| st.cutting_days.get(id))
                    .map(|day| format!("{} · {}", format_date(day.date), day.label));
                OrderRow::from_order(order, day_label)
            })
            .collect::<Vec<_>>()
    });

    let on_add = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let customer = customer_input().trim().to_string();
            if customer.is_empty() {
                push_toast(toasts.clone(), ToastKind::Error, "Indiquez le nom du client.");
                return;
            }

            let weight_grams = match weight_input().trim().parse::<u32>() {
                Ok(weight) if weight > 0 => weight,
                _ => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        "Le poids doit être un nombre de grammes positif.",
                    );
                    return;
                }
            };

            let Some(ordered_on) = parse_iso_date(&date_input()) else {
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    "Choisissez une date de commande valide.",
                );
                return;
            };

            let product = {
                let trimmed = product_input().trim().to_string();
                if trimmed.is_empty() {
                    "Colis".to_string()
                } else {
                    trimmed
                }
            };

            let selected_day = day_select();
            let cutting_day_id = (!selected_day.is_empty()).then_some(selected_day);

            let order = Order {
                id: generate_id("order"),
                customer,
                product,
                weight_grams,
                status: OrderStatus::Pending,
                cutting_day_id,
                ordered_on,
                notes: None,
            };
            state.with_mut(|st| st.upsert_order(order));
            persist_user_state(&state, toasts.clone());

            customer_input.set(String::new());
            product_input.set(String::new());
            weight_input.set(String::new());
            push_toast(toasts.clone(), ToastKind::Success, "Commande enregistrée.");
        }
    };

    let on_status_change = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |(id, code): (String, String)| {
            let Some(status) = OrderStatus::parse(&code) else {
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    format!("Statut inconnu : {code}"),
                );
                return;
            };
            if state.with_mut(|st| st.set_order_status(&id, status)) {
                persist_user_state(&state, toasts.clone());
            }
        }
    };

    let on_remove = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |id: String| {
            if state.with_mut(|st| st.remove_order(&id)).is_some() {
                persist_user_state(&state, toasts.clone());
                push_toast(toasts.clone(), ToastKind::Info, "Commande supprimée.");
            }
        }
    };

    rsx! {
        div { class: "space-y-8",
            div { class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "Commandes",
                    value: totals.total.to_string(),
                    description: Some(format!("{} terminée(s)", totals.completed)),
                }
                KpiCard {
                    title: "En cours",
                    value: totals.open.to_string(),
                    description: None,
                }
                KpiCard {
                    title: "Poids total",
                    value: format_weight(totals.total_grams as f64),
                    description: None,
                }
            }

            section {
                class: "{theme::PANEL}",
                h2 { class: "{theme::PANEL_TITLE}", "Nouvelle commande" }
                div { class: "mt-4 grid gap-4 sm:grid-cols-3",
                    div {
                        label { class: "{theme::LABEL}", "Client" }
                        input {
                            class: "mt-1 w-full {theme::INPUT}",
                            placeholder: "Nom du client",
                            value: customer_input(),
                            oninput: move |evt| customer_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::LABEL}", "Produit" }
                        input {
                            class: "mt-1 w-full {theme::INPUT}",
                            placeholder: "Colis 10 kg, merguez...",
                            value: product_input(),
                            oninput: move |evt| product_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::LABEL}", "Poids (g)" }
                        input {
                            class: "mt-1 w-full {theme::INPUT}",
                            placeholder: "ex. 1500",
                            value: weight_input(),
                            oninput: move |evt| weight_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::LABEL}", "Commandée le" }
                        input {
                            class: "mt-1 w-full {theme::INPUT}",
                            r#type: "date",
                            value: date_input(),
                            oninput: move |evt| date_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::LABEL}", "Jour de découpe" }
                        select {
                            class: "mt-1 w-full {theme::SELECT}",
                            value: day_select(),
                            onchange: move |evt| day_select.set(evt.value()),
                            option { value: "", "Non assignée" }
                            for (id, label) in day_options.clone() {
                                option { value: "{id}", "{label}" }
                            }
                        }
                    }
                }
                div { class: "mt-4",
                    button { class: "{theme::BTN_PRIMARY}", onclick: on_add, "Ajouter la commande" }
                }
            }

            section {
                class: "space-y-3",
                div { class: "flex items-center justify-between",
                    h2 { class: "{theme::PANEL_TITLE}", "Commandes" }
                    select {
                        class: "{theme::SELECT}",
                        value: status_filter(),
                        onchange: move |evt| status_filter.set(evt.value()),
                        option { value: FILTER_ALL, "Tous les statuts" }
                        for status in OrderStatus::ALL {
                            option {
                                value: status.code(),
                                {crate::domain::translate_status(status.code())}
                            }
                        }
                    }
                }
                OrderTable {
                    rows,
                    on_status_change,
                    on_remove,
                }
            }
        }
    }
}
