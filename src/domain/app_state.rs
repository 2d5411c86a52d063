use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::entities::{CuttingDay, CuttingDayId, Order, OrderId, OrderStatus};

/// Shared application state: the two record collections, keyed by id.
/// Provided to the UI as a single Dioxus context signal.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub cutting_days: HashMap<CuttingDayId, CuttingDay>,
    pub orders: HashMap<OrderId, Order>,
}

impl AppState {
    /// Inserts or replaces a cutting day.
    pub fn upsert_cutting_day(&mut self, day: CuttingDay) {
        self.cutting_days.insert(day.id.clone(), day);
    }

    /// Removes a cutting day. Orders assigned to it are detached, never
    /// deleted. Returns the removed record if it existed.
    pub fn remove_cutting_day(&mut self, id: &str) -> Option<CuttingDay> {
        let removed = self.cutting_days.remove(id)?;
        for order in self.orders.values_mut() {
            if order.cutting_day_id.as_deref() == Some(id) {
                order.cutting_day_id = None;
            }
        }
        Some(removed)
    }

    /// Inserts or replaces an order.
    pub fn upsert_order(&mut self, order: Order) {
        self.orders.insert(order.id.clone(), order);
    }

    /// Removes an order. Returns the removed record if it existed.
    pub fn remove_order(&mut self, id: &str) -> Option<Order> {
        self.orders.remove(id)
    }

    /// Updates the status of one order. Returns false for unknown ids.
    pub fn set_order_status(&mut self, id: &str, status: OrderStatus) -> bool {
        match self.orders.get_mut(id) {
            Some(order) => {
                order.status = status;
                true
            }
            None => false,
        }
    }

    /// Cutting days sorted by calendar date, then label for stable display.
    pub fn cutting_days_sorted(&self) -> Vec<&CuttingDay> {
        let mut days: Vec<_> = self.cutting_days.values().collect();
        days.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.label.cmp(&b.label)));
        days
    }

    /// Orders sorted by order date, then customer name.
    pub fn orders_sorted(&self) -> Vec<&Order> {
        let mut orders: Vec<_> = self.orders.values().collect();
        orders.sort_by(|a, b| {
            a.ordered_on
                .cmp(&b.ordered_on)
                .then_with(|| a.customer.cmp(&b.customer))
        });
        orders
    }

    pub fn orders_for_day(&self, day_id: &str) -> Vec<&Order> {
        let mut orders: Vec<_> = self
            .orders
            .values()
            .filter(|order| order.cutting_day_id.as_deref() == Some(day_id))
            .collect();
        orders.sort_by(|a, b| a.customer.cmp(&b.customer));
        orders
    }

    pub fn unassigned_orders(&self) -> Vec<&Order> {
        let mut orders: Vec<_> = self
            .orders
            .values()
            .filter(|order| order.cutting_day_id.is_none())
            .collect();
        orders.sort_by(|a, b| a.customer.cmp(&b.customer));
        orders
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.cutting_days = persisted
            .cutting_days
            .into_iter()
            .map(|day| (day.id.clone(), day))
            .collect();
        self.orders = persisted
            .orders
            .into_iter()
            .map(|order| (order.id.clone(), order))
            .collect();
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            cutting_days: self.cutting_days_sorted().into_iter().cloned().collect(),
            orders: self.orders_sorted().into_iter().cloned().collect(),
        }
    }
}

/// On-disk snapshot. Stored as sorted vectors so the JSON file diffs cleanly.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub cutting_days: Vec<CuttingDay>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn day(id: &str, date: time::Date) -> CuttingDay {
        CuttingDay {
            id: id.to_string(),
            date,
            label: format!("Découpe {id}"),
            capacity_grams: None,
            notes: None,
        }
    }

    fn order(id: &str, customer: &str, day_id: Option<&str>) -> Order {
        Order {
            id: id.to_string(),
            customer: customer.to_string(),
            product: "Colis mixte".to_string(),
            weight_grams: 5000,
            status: OrderStatus::Pending,
            cutting_day_id: day_id.map(str::to_string),
            ordered_on: date!(2024 - 03 - 01),
            notes: None,
        }
    }

    #[test]
    fn removing_a_day_detaches_its_orders() {
        let mut state = AppState::default();
        state.upsert_cutting_day(day("d1", date!(2024 - 03 - 14)));
        state.upsert_order(order("o1", "Dupont", Some("d1")));
        state.upsert_order(order("o2", "Martin", None));

        assert!(state.remove_cutting_day("d1").is_some());
        assert!(state.cutting_days.is_empty());
        assert_eq!(state.orders.len(), 2);
        assert_eq!(state.orders["o1"].cutting_day_id, None);
    }

    #[test]
    fn removing_unknown_day_is_a_noop() {
        let mut state = AppState::default();
        state.upsert_order(order("o1", "Dupont", Some("d1")));
        assert!(state.remove_cutting_day("d1").is_none());
        assert_eq!(state.orders["o1"].cutting_day_id.as_deref(), Some("d1"));
    }

    #[test]
    fn set_order_status_reports_unknown_ids() {
        let mut state = AppState::default();
        state.upsert_order(order("o1", "Dupont", None));
        assert!(state.set_order_status("o1", OrderStatus::Confirmed));
        assert!(!state.set_order_status("missing", OrderStatus::Confirmed));
        assert_eq!(state.orders["o1"].status, OrderStatus::Confirmed);
    }

    #[test]
    fn sorted_views_order_by_date() {
        let mut state = AppState::default();
        state.upsert_cutting_day(day("late", date!(2024 - 06 - 01)));
        state.upsert_cutting_day(day("early", date!(2024 - 03 - 14)));

        let ids: Vec<_> = state
            .cutting_days_sorted()
            .into_iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(ids, ["early", "late"]);
    }

    #[test]
    fn orders_for_day_filters_by_assignment() {
        let mut state = AppState::default();
        state.upsert_order(order("o1", "Bernard", Some("d1")));
        state.upsert_order(order("o2", "Alice", Some("d1")));
        state.upsert_order(order("o3", "Chloé", None));

        let assigned: Vec<_> = state
            .orders_for_day("d1")
            .into_iter()
            .map(|o| o.customer.as_str())
            .collect();
        assert_eq!(assigned, ["Alice", "Bernard"]);
        assert_eq!(state.unassigned_orders().len(), 1);
    }

    #[test]
    fn persisted_snapshot_round_trips() {
        let mut state = AppState::default();
        state.upsert_cutting_day(day("d1", date!(2024 - 03 - 14)));
        state.upsert_order(order("o1", "Dupont", Some("d1")));

        let snapshot = state.to_persisted();
        let json = serde_json::to_string(&snapshot).unwrap();
        let reloaded: PersistedState = serde_json::from_str(&json).unwrap();

        let mut fresh = AppState::default();
        fresh.apply_persisted(reloaded);
        assert_eq!(fresh.cutting_days, state.cutting_days);
        assert_eq!(fresh.orders, state.orders);
    }
}
