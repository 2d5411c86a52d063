use dioxus::prelude::*;

use super::status_badge::StatusBadge;
use crate::domain::{format_date, format_weight, Order, OrderStatus};
use crate::ui::theme;

#[derive(Clone, PartialEq)]
pub struct OrderRow {
    pub id: String,
    pub customer: String,
    pub product: String,
    pub weight_grams: u32,
    pub ordered_on: String,
    pub status_code: String,
    pub day_label: Option<String>,
}

impl OrderRow {
    pub fn from_order(order: &Order, day_label: Option<String>) -> Self {
        Self {
            id: order.id.clone(),
            customer: order.customer.clone(),
            product: order.product.clone(),
            weight_grams: order.weight_grams,
            ordered_on: format_date(order.ordered_on),
            status_code: order.status.code().to_string(),
            day_label,
        }
    }
}

#[component]
pub fn OrderTable(
    rows: Vec<OrderRow>,
    on_status_change: EventHandler<(String, String)>,
    on_remove: EventHandler<String>,
) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div {
            class: "{theme::TABLE_CONTAINER}",
            table {
                class: "min-w-full {theme::TABLE_DIVIDER} text-sm",
                thead {
                    class: "{theme::TABLE_HEADER} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Client" }
                        th { class: "px-4 py-3 font-medium", "Produit" }
                        th { class: "px-4 py-3 font-medium", "Poids" }
                        th { class: "px-4 py-3 font-medium", "Commandée le" }
                        th { class: "px-4 py-3 font-medium", "Jour de découpe" }
                        th { class: "px-4 py-3 font-medium", "Statut" }
                        th { class: "px-4 py-3" }
                    }
                }
                tbody {
                    class: "{theme::TABLE_DIVIDER}",
                    for row in rows {
                        OrderRowView {
                            row,
                            on_status_change: on_status_change.clone(),
                            on_remove: on_remove.clone(),
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm {theme::TEXT_MUTED}",
                                colspan: "7",
                                "Aucune commande pour le moment."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OrderRowView(
    row: OrderRow,
    on_status_change: EventHandler<(String, String)>,
    on_remove: EventHandler<String>,
) -> Element {
    let day_label = row
        .day_label
        .clone()
        .unwrap_or_else(|| "Non assignée".to_string());
    let weight = format_weight(row.weight_grams as f64);
    let select_id = row.id.clone();
    let remove_id = row.id.clone();

    rsx! {
        tr {
            td { class: "px-4 py-3 font-medium text-slate-200", "{row.customer}" }
            td { class: "px-4 py-3 text-slate-300", "{row.product}" }
            td { class: "px-4 py-3 text-slate-300", "{weight}" }
            td { class: "px-4 py-3 text-slate-400", "{row.ordered_on}" }
            td { class: "px-4 py-3 text-slate-400", "{day_label}" }
            td {
                class: "px-4 py-3",
                div {
                    class: "flex items-center gap-2",
                    StatusBadge { status: row.status_code.clone() }
                    select {
                        class: "rounded border border-slate-700 bg-slate-950 px-2 py-1 text-xs text-slate-300 cursor-pointer",
                        value: "{row.status_code}",
                        onchange: move |evt| on_status_change.call((select_id.clone(), evt.value())),
                        for status in OrderStatus::ALL {
                            option {
                                value: status.code(),
                                selected: status.code() == row.status_code,
                                {crate::domain::translate_status(status.code())}
                            }
                        }
                    }
                }
            }
            td {
                class: "px-4 py-3 text-right",
                button {
                    class: "{theme::BTN_DANGER}",
                    onclick: move |_| on_remove.call(remove_id.clone()),
                    "Supprimer"
                }
            }
        }
    }
}
