pub mod kpi_card;
pub mod order_table;
pub mod status_badge;
pub mod toast;
