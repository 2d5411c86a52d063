#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use time::Date;

/// Lifecycle stage of an order. Serialized as the lowercase code string so
/// persisted state stays readable and stable across releases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Wire/storage code for this status.
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(OrderStatus::Pending),
            "confirmed" => Some(OrderStatus::Confirmed),
            "processing" => Some(OrderStatus::Processing),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// An order still on the production floor (not finished, not dropped).
    pub fn is_open(&self) -> bool {
        !matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

pub type CuttingDayId = String;
pub type OrderId = String;

/// A scheduled production day in the cutting room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CuttingDay {
    pub id: CuttingDayId,
    pub date: Date,
    pub label: String,
    /// Maximum throughput for the day, in grams.
    #[serde(default)]
    pub capacity_grams: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A customer order, optionally assigned to a cutting day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    pub product: String,
    /// Ordered quantity in grams.
    pub weight_grams: u32,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub cutting_day_id: Option<CuttingDayId>,
    pub ordered_on: Date,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::OrderStatus;

    #[test]
    fn status_codes_round_trip() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::parse("shipped"), None);
    }

    #[test]
    fn status_serializes_as_lowercase_code() {
        let json = serde_json::to_string(&OrderStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
        let back: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(back, OrderStatus::Cancelled);
    }

    #[test]
    fn open_statuses() {
        assert!(OrderStatus::Pending.is_open());
        assert!(OrderStatus::Processing.is_open());
        assert!(!OrderStatus::Completed.is_open());
        assert!(!OrderStatus::Cancelled.is_open());
    }
}
