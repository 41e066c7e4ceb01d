//! Display view models derived from API records

use plaready_core::format::{format_currency, format_date};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Badge color for an order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum BadgeColor {
    Yellow,
    Blue,
    Indigo,
    Purple,
    Teal,
    Orange,
    Green,
    Red,
    Gray,
}

impl BadgeColor {
    /// CSS-friendly color name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Purple => "purple",
            Self::Teal => "teal",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for BadgeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color and label shown for an order status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBadge {
    /// Badge color
    pub color: BadgeColor,
    /// Human-readable label
    pub text: String,
}

const STATUS_BADGES: [(&str, BadgeColor, &str); 9] = [
    ("pending", BadgeColor::Yellow, "Pending"),
    ("assigned", BadgeColor::Blue, "Assigned"),
    ("pickup_scheduled", BadgeColor::Indigo, "Pickup Scheduled"),
    ("picked_up", BadgeColor::Indigo, "Picked Up"),
    ("in_repair", BadgeColor::Purple, "In Repair"),
    ("ready_for_delivery", BadgeColor::Teal, "Ready for Delivery"),
    ("out_for_delivery", BadgeColor::Orange, "Out for Delivery"),
    ("delivered", BadgeColor::Green, "Delivered"),
    ("cancelled", BadgeColor::Red, "Cancelled"),
];

/// Look up the badge for an order status
///
/// Unknown statuses get a gray badge labelled with the status itself.
#[must_use]
pub fn status_badge(status: &str) -> StatusBadge {
    STATUS_BADGES
        .iter()
        .find(|(key, _, _)| *key == status)
        .map_or_else(
            || StatusBadge {
                color: BadgeColor::Gray,
                text: status.to_string(),
            },
            |(_, color, text)| StatusBadge {
                color: *color,
                text: (*text).to_string(),
            },
        )
}

/// Order-shaped record that can be turned into an [`OrderView`]
pub trait OrderRecord {
    /// Raw status string
    fn status(&self) -> &str;
    /// Creation timestamp as returned by the API
    fn created_at(&self) -> &str;
    /// Order total in rupees
    fn total_price(&self) -> f64;
}

impl OrderRecord for Value {
    fn status(&self) -> &str {
        self.get("status").and_then(Value::as_str).unwrap_or_default()
    }

    fn created_at(&self) -> &str {
        self.get("created_at").and_then(Value::as_str).unwrap_or_default()
    }

    fn total_price(&self) -> f64 {
        self.get("total_price").and_then(Value::as_f64).unwrap_or_default()
    }
}

/// An order record plus its derived display fields
///
/// Serializes as the original record with `status_badge`, `formatted_date`
/// and `formatted_price` added alongside its own fields.
#[derive(Debug, Clone, Serialize)]
pub struct OrderView<O> {
    /// The record as returned by the API
    #[serde(flatten)]
    pub order: O,
    /// Badge for the order status
    pub status_badge: StatusBadge,
    /// Creation date, e.g. `5 Jan 2024`
    pub formatted_date: String,
    /// Total, e.g. `₹299.00`
    pub formatted_price: String,
}

/// Build the display view of an order without touching the record
#[must_use]
pub fn format_order<O: OrderRecord + Clone>(order: &O) -> OrderView<O> {
    OrderView {
        status_badge: status_badge(order.status()),
        formatted_date: format_date(order.created_at()),
        formatted_price: format_currency(order.total_price()),
        order: order.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeSet;

    #[test]
    fn test_known_status_badges() {
        assert_eq!(
            status_badge("delivered"),
            StatusBadge {
                color: BadgeColor::Green,
                text: "Delivered".to_string()
            }
        );
        assert_eq!(status_badge("cancelled").color, BadgeColor::Red);
        assert_eq!(status_badge("ready_for_delivery").text, "Ready for Delivery");
    }

    #[test]
    fn test_every_status_has_a_distinct_label() {
        let labels: BTreeSet<_> = STATUS_BADGES.iter().map(|(s, _, _)| status_badge(s).text).collect();
        assert_eq!(labels.len(), 9);
        assert!(STATUS_BADGES
            .iter()
            .all(|(s, _, _)| status_badge(s).color != BadgeColor::Gray));
    }

    #[test]
    fn test_unknown_status_falls_back_to_gray() {
        assert_eq!(
            status_badge("unknown_status"),
            StatusBadge {
                color: BadgeColor::Gray,
                text: "unknown_status".to_string()
            }
        );
        assert_eq!(status_badge("Delivered").color, BadgeColor::Gray);
    }

    #[test]
    fn test_badge_serializes_lowercase_color() {
        let json = serde_json::to_value(status_badge("pending")).unwrap();
        assert_eq!(json, json!({"color": "yellow", "text": "Pending"}));
    }

    #[test]
    fn test_format_order_adds_display_fields() {
        let order = json!({
            "id": 12,
            "order_number": "PLR20240105A1B2C3",
            "status": "in_repair",
            "total_price": 449.0,
            "created_at": "2024-01-05T10:15:00.000000"
        });

        let view = format_order(&order);
        assert_eq!(view.order, order);
        assert_eq!(view.formatted_price, "₹449.00");
        assert_eq!(view.formatted_date, "5 Jan 2024");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["order_number"], "PLR20240105A1B2C3");
        assert_eq!(json["status_badge"]["text"], "In Repair");
        assert_eq!(json["formatted_price"], "₹449.00");
    }

    #[test]
    fn test_format_order_with_missing_fields() {
        let view = format_order(&json!({"id": 1}));
        assert_eq!(view.status_badge.color, BadgeColor::Gray);
        assert_eq!(view.status_badge.text, "");
        assert_eq!(view.formatted_price, "₹0.00");
        assert_eq!(view.formatted_date, plaready_core::format::INVALID_DATE);
    }
}
