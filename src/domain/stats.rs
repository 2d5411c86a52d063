//! Aggregates over the order collection, feeding the KPI cards and the
//! per-day summaries on the cutting-days page.

use super::entities::{CuttingDay, Order, OrderStatus};

/// Summary of the orders assigned to one cutting day.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DaySummary {
    pub order_count: usize,
    pub open_count: usize,
    pub total_grams: u64,
}

pub fn summarize_day<'a>(orders: impl IntoIterator<Item = &'a Order>) -> DaySummary {
    let mut summary = DaySummary::default();
    for order in orders {
        summary.order_count += 1;
        if order.status.is_open() {
            summary.open_count += 1;
        }
        summary.total_grams += u64::from(order.weight_grams);
    }
    summary
}

/// Remaining capacity in grams, if the day declares one. Negative when the
/// day is overbooked.
pub fn remaining_capacity(day: &CuttingDay, summary: &DaySummary) -> Option<i64> {
    day.capacity_grams
        .map(|capacity| i64::from(capacity) - summary.total_grams as i64)
}

/// Global totals across every order, for the orders page header.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderTotals {
    pub total: usize,
    pub open: usize,
    pub completed: usize,
    pub total_grams: u64,
}

pub fn order_totals<'a>(orders: impl IntoIterator<Item = &'a Order>) -> OrderTotals {
    let mut totals = OrderTotals::default();
    for order in orders {
        totals.total += 1;
        if order.status.is_open() {
            totals.open += 1;
        } else if order.status == OrderStatus::Completed {
            totals.completed += 1;
        }
        totals.total_grams += u64::from(order.weight_grams);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CuttingDay, Order, OrderStatus};
    use time::macros::date;

    fn order(weight: u32, status: OrderStatus) -> Order {
        Order {
            id: format!("o-{weight}"),
            customer: "Client".to_string(),
            product: "Saucisses".to_string(),
            weight_grams: weight,
            status,
            cutting_day_id: None,
            ordered_on: date!(2024 - 03 - 01),
            notes: None,
        }
    }

    #[test]
    fn day_summary_counts_and_weighs() {
        let orders = [
            order(1500, OrderStatus::Pending),
            order(500, OrderStatus::Completed),
            order(2000, OrderStatus::Cancelled),
        ];
        let summary = summarize_day(orders.iter());
        assert_eq!(summary.order_count, 3);
        assert_eq!(summary.open_count, 1);
        assert_eq!(summary.total_grams, 4000);
    }

    #[test]
    fn remaining_capacity_goes_negative_when_overbooked() {
        let day = CuttingDay {
            id: "d1".to_string(),
            date: date!(2024 - 03 - 14),
            label: "Matin".to_string(),
            capacity_grams: Some(3000),
            notes: None,
        };
        let summary = summarize_day([order(5000, OrderStatus::Pending)].iter());
        assert_eq!(remaining_capacity(&day, &summary), Some(-2000));

        let open_day = CuttingDay {
            capacity_grams: None,
            ..day
        };
        assert_eq!(remaining_capacity(&open_day, &summary), None);
    }

    #[test]
    fn order_totals_split_open_and_completed() {
        let orders = [
            order(100, OrderStatus::Pending),
            order(200, OrderStatus::Processing),
            order(300, OrderStatus::Completed),
            order(400, OrderStatus::Cancelled),
        ];
        let totals = order_totals(orders.iter());
        assert_eq!(totals.total, 4);
        assert_eq!(totals.open, 2);
        assert_eq!(totals.completed, 1);
        assert_eq!(totals.total_grams, 1000);
    }
}
