//! Domain records and the pure logic around them.

pub mod app_state;
pub mod entities;
pub mod formatters;
pub mod stats;

pub use app_state::{AppState, PersistedState};
pub use entities::{CuttingDay, CuttingDayId, Order, OrderId, OrderStatus};
pub use formatters::{
    format_date, format_date_str, format_weight, parse_iso_date, status_color, translate_status,
};
pub use stats::{order_totals, remaining_capacity, summarize_day, DaySummary, OrderTotals};
