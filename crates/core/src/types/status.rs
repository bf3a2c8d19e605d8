//! Order fulfillment status and its progress projection.

use serde::{Deserialize, Serialize};

/// Order fulfillment status.
///
/// `Processing`, `Shipped`, and `Delivered` form the normal delivery
/// lifecycle; `Cancelled` is a terminal state outside that sequence.
/// Wire values are the capitalized names the order documents already use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// The fixed sequence of statuses shown in the order progress indicator.
pub const PROGRESS_STEPS: [OrderStatus; 3] = [
    OrderStatus::Processing,
    OrderStatus::Shipped,
    OrderStatus::Delivered,
];

impl OrderStatus {
    /// Zero-based position of this status in [`PROGRESS_STEPS`].
    ///
    /// `Cancelled` is not part of the delivery sequence and returns `None`;
    /// callers render a distinct cancelled state instead of a progress bar.
    #[must_use]
    pub const fn progress_index(self) -> Option<usize> {
        match self {
            Self::Processing => Some(0),
            Self::Shipped => Some(1),
            Self::Delivered => Some(2),
            Self::Cancelled => None,
        }
    }

    /// Whether the order can no longer change status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processing => write!(f, "Processing"),
            Self::Shipped => write!(f, "Shipped"),
            Self::Delivered => write!(f, "Delivered"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Processing" => Ok(Self::Processing),
            "Shipped" => Ok(Self::Shipped),
            "Delivered" => Ok(Self::Delivered),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_index_follows_delivery_sequence() {
        assert_eq!(OrderStatus::Processing.progress_index(), Some(0));
        assert_eq!(OrderStatus::Shipped.progress_index(), Some(1));
        assert_eq!(OrderStatus::Delivered.progress_index(), Some(2));
    }

    #[test]
    fn test_cancelled_has_no_progress_position() {
        assert_eq!(OrderStatus::Cancelled.progress_index(), None);
    }

    #[test]
    fn test_progress_steps_indices_agree() {
        for (index, status) in PROGRESS_STEPS.iter().enumerate() {
            assert_eq!(status.progress_index(), Some(index));
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Processing.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
    }

    #[test]
    fn test_wire_format_is_capitalized() {
        let json = serde_json::to_string(&OrderStatus::Shipped).expect("serialize");
        assert_eq!(json, "\"Shipped\"");

        let back: OrderStatus = serde_json::from_str("\"Cancelled\"").expect("deserialize");
        assert_eq!(back, OrderStatus::Cancelled);
    }

    #[test]
    fn test_from_str_round_trip() {
        for status in [
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            let parsed: OrderStatus = status.to_string().parse().expect("parse");
            assert_eq!(parsed, status);
        }
        assert!("Lost".parse::<OrderStatus>().is_err());
    }
}
