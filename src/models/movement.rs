//! Stock movement model
//!
//! A movement records a single change to a product's quantity: stock added
//! (inflow) or stock removed (outflow). Movements are created exclusively by
//! the inventory manager and are immutable once recorded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::product::ProductId;

/// The report timestamp format shared with the CSV consumers
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Direction of a stock movement
///
/// The wire token (`entrada`/`saida`) is kept for compatibility with the
/// report files existing consumers already parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementKind {
    /// Stock added
    #[serde(rename = "entrada")]
    Inflow,
    /// Stock removed
    #[serde(rename = "saida")]
    Outflow,
}

impl MovementKind {
    /// The literal token used in reports and accepted on the CLI
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Inflow => "entrada",
            Self::Outflow => "saida",
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for MovementKind {
    type Err = ParseMovementKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entrada" => Ok(Self::Inflow),
            "saida" => Ok(Self::Outflow),
            other => Err(ParseMovementKindError(other.to_string())),
        }
    }
}

/// Error returned when a movement kind token is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMovementKindError(String);

impl fmt::Display for ParseMovementKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown movement kind '{}' (expected 'entrada' or 'saida')",
            self.0
        )
    }
}

impl std::error::Error for ParseMovementKindError {}

/// A recorded change to a product's quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// The product this movement applies to
    pub product_id: ProductId,

    /// Inflow or outflow
    pub kind: MovementKind,

    /// Number of units moved
    pub quantity: u64,

    /// When the movement was recorded
    pub timestamp: DateTime<Utc>,
}

impl Movement {
    /// Create a new movement
    pub fn new(
        product_id: ProductId,
        kind: MovementKind,
        quantity: u64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            product_id,
            kind,
            quantity,
            timestamp,
        }
    }

    /// The timestamp rendered in the report format (`YYYY-MM-DD HH:MM:SS`)
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
