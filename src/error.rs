//! Errors raised by the simulation.
//!
//! None of these are transient: each one means the simulation was driven
//! incorrectly or its state is corrupt, so callers should abort the run.

use thiserror::Error;

use crate::game::DeckKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// A get out of jail free card was used without being held.
    #[error("no get out of jail free card from the {deck} deck is held")]
    InvalidOperation { deck: DeckKind },

    #[error("position {position} is off the board")]
    PositionOffBoard { position: u8 },

    /// A deck doesn't hold exactly the cards it was built with.
    #[error("{deck} deck is corrupt ({cards} cards accounted for)")]
    DeckCorrupted { deck: DeckKind, cards: usize },

    #[error("{deck} deck has no cards left to draw")]
    DeckExhausted { deck: DeckKind },

    #[error("die face {face} is outside 1..=6")]
    InvalidDieFace { face: u8 },

    #[error("invalid plan: {reason}")]
    InvalidPlan { reason: String },
}

impl SimulationError {
    /// Whether this error means the simulation's internal state is corrupt.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            SimulationError::PositionOffBoard { .. }
                | SimulationError::DeckCorrupted { .. }
                | SimulationError::DeckExhausted { .. }
                | SimulationError::InvalidDieFace { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
