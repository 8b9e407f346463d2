use super::globals::*;
use crate::error::{Result, SimulationError};

#[derive(Clone, Debug, PartialEq, Eq)]
/// The number of turns that ended on each tile.
pub struct Histogram {
    counts: [u64; BOARD_SIZE as usize],
}

impl Histogram {
    /// Return a histogram with no turns recorded.
    pub fn new() -> Histogram {
        Histogram {
            counts: [0; BOARD_SIZE as usize],
        }
    }

    /// Record a turn that ended on `position`.
    pub fn record(&mut self, position: u8) -> Result<()> {
        match self.counts.get_mut(position as usize) {
            Some(count) => {
                *count += 1;
                Ok(())
            }
            None => Err(SimulationError::PositionOffBoard { position }),
        }
    }

    /// The number of turns that ended on `position`.
    pub fn count(&self, position: u8) -> u64 {
        self.counts.get(position as usize).copied().unwrap_or(0)
    }

    /// The visit count of every tile, indexed by position.
    pub fn counts(&self) -> &[u64; BOARD_SIZE as usize] {
        &self.counts
    }

    /// The number of turns recorded.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// The share of turns that ended on `position`, between 0 and 1.
    pub fn frequency(&self, position: u8) -> f64 {
        match self.total() {
            0 => 0.,
            total => self.count(position) as f64 / total as f64,
        }
    }

    /// Iterate over `(position, count)` pairs, starting from 'Go'.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().enumerate().map(|(pos, &count)| (pos as u8, count))
    }

    /// The position landed on most often, preferring the earliest tile on ties.
    pub fn most_visited(&self) -> u8 {
        self.iter()
            .fold((GO_POSITION, 0), |best, (pos, count)| {
                if count > best.1 {
                    (pos, count)
                } else {
                    best
                }
            })
            .0
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Histogram::new()
    }
}
