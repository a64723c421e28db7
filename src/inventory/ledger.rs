//! Movement ledger
//!
//! An append-only ordered store of stock movements. The ledger performs no
//! validation; that is the manager's responsibility.

use crate::models::Movement;

/// The append-only chronological record of all movements
#[derive(Debug, Clone, Default)]
pub struct MovementLedger {
    movements: Vec<Movement>,
}

impl MovementLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from a snapshot
    pub fn from_movements(movements: Vec<Movement>) -> Self {
        Self { movements }
    }

    /// Append a movement at the end
    pub fn append(&mut self, movement: Movement) {
        self.movements.push(movement);
    }

    /// All movements, in append order
    pub fn all(&self) -> &[Movement] {
        &self.movements
    }

    /// Number of recorded movements
    pub fn len(&self) -> usize {
        self.movements.len()
    }

    /// Whether the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }
}
